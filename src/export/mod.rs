//! Sheet export core for p2d.
//!
//! This module turns packed sprite geometry into Paper2D sheet documents:
//! name sanitization, frame computation (including the bottom-left to
//! top-left Y flip), key collision policies, and JSON serialization.

mod disambiguate;
mod name;
mod sheet;

pub use disambiguate::{CounterSuffix, Disambiguator, RandomSuffix};
pub use name::{
    frame_key, image_file_name, sanitize_atlas_name, sanitize_sprite_name, sheet_file_name,
};
pub use sheet::{
    build_documents, to_json, write_sheet_json, SheetMeta, SpriteFrame, SpriteSheetDocument,
    META_APP, META_FORMAT, META_TARGET, META_VERSION,
};
