//! Manifest validation for p2d.
//!
//! Validates atlas manifests before export: structural errors abort the
//! run, warnings surface conditions the exporter handles on its own.

mod checks;
mod warning;

pub use checks::{
    check_duplicate_keys, check_images, check_sprite_geometry, check_sprite_pages,
    validate_manifest,
};
pub use warning::{Diagnostic, Severity, ValidationResult};
