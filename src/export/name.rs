//! Name sanitization and output file naming.
//!
//! Sprite names coming out of a packed atlas are display names: they can
//! carry spaces and, for sprites sourced from prefab instances, a trailing
//! "(Clone)" marker. Frame keys and file names strip both.

const CLONE_MARKER: &str = "(Clone)";

/// Sanitize an atlas display name for use in file names and metadata:
/// every space becomes an underscore.
pub fn sanitize_atlas_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// Sanitize a sprite display name: strip every literal "(Clone)" marker
/// (and the whitespace it leaves dangling at the end), then replace spaces
/// with underscores. Idempotent.
pub fn sanitize_sprite_name(name: &str) -> String {
    name.replace(CLONE_MARKER, "").trim_end().replace(' ', "_")
}

/// Derive the frame key for a sprite: sanitized name plus a `.png`
/// extension, which is how the Paper2D importer matches frames to the
/// original source images.
pub fn frame_key(name: &str) -> String {
    format!("{}.png", sanitize_sprite_name(name))
}

/// Deterministic PNG file name for atlas page `index`.
pub fn image_file_name(atlas_name: &str, index: usize) -> String {
    format!("{}_{}.png", sanitize_atlas_name(atlas_name), index)
}

/// Deterministic sidecar file name for atlas page `index`.
pub fn sheet_file_name(atlas_name: &str, index: usize) -> String {
    format!("{}_{}.paper2dsprites", sanitize_atlas_name(atlas_name), index)
}
