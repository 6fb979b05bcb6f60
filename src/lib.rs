//! p2d - Paper2D sprite sheet exporter
//!
//! A library for converting packed sprite atlas geometry into sprite
//! sheets consumable by Unreal Engine's Paper2D system: one RGBA8888 PNG
//! per atlas page plus a `.paper2dsprites` JSON sidecar describing each
//! sprite's frame rectangle.

pub mod cli;
pub mod error;
pub mod export;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;
pub mod validation;

pub use error::{P2dError, Result};
pub use export::{
    build_documents, frame_key, image_file_name, sanitize_atlas_name, sanitize_sprite_name,
    sheet_file_name, to_json, write_sheet_json, CounterSuffix, Disambiguator, RandomSuffix,
    SheetMeta, SpriteFrame, SpriteSheetDocument,
};
pub use manifest::{AtlasManifest, ImageEntry, SpriteEntry};
pub use render::convert_page;
pub use types::{AtlasImage, PackingRotation, PixelRect, PixelSize, Rect, SpriteInstance};
pub use validation::{validate_manifest, Diagnostic, Severity, ValidationResult};
