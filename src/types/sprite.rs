//! Sprite and atlas page input model.

use serde::{Deserialize, Serialize};

use super::Rect;
use crate::export::image_file_name;

/// Rotation applied to a sprite when it was packed into its atlas page.
///
/// The exporter collapses this to a boolean in the output: the target
/// format only records whether a sprite was rotated, not the angle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackingRotation {
    #[default]
    None,
    FlipHorizontal,
    FlipVertical,
    Rotate180,
    Any,
}

impl PackingRotation {
    /// True for any non-identity packing rotation.
    pub fn is_rotated(&self) -> bool {
        !matches!(self, PackingRotation::None)
    }
}

/// One packed sprite, bound to a single atlas page.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteInstance {
    /// Display name; may carry a trailing "(Clone)" marker and spaces.
    pub name: String,
    /// Index of the owning atlas page.
    pub image_index: usize,
    /// Position/size within the page, bottom-left origin.
    pub packed_rect: Rect,
    /// The sprite's untrimmed bounds in its own local space.
    pub source_rect: Rect,
    pub rotation: PackingRotation,
}

/// One atlas page: pixel dimensions plus its deterministic output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasImage {
    /// Stable ordinal among the atlas's pages.
    pub index: usize,
    pub width: u32,
    pub height: u32,
    /// `<sanitizedAtlasName>_<index>.png`
    pub file_name: String,
}

impl AtlasImage {
    pub fn new(atlas_name: &str, index: usize, width: u32, height: u32) -> Self {
        Self {
            index,
            width,
            height,
            file_name: image_file_name(atlas_name, index),
        }
    }
}
