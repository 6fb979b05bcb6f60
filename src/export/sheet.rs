//! Paper2D sprite sheet documents.
//!
//! Builds one sheet document per atlas page in the TexturePacker JSON Hash
//! format that Unreal's Paper2D importer consumes: a `frames` mapping from
//! frame key to geometry, plus a `meta` block describing the page image.
//!
//! Packed rects arrive in bottom-left-origin atlas space; the output format
//! is top-left-origin, so frame rectangles are Y-flipped against the page
//! height. Source rects are already top-left oriented and pass through
//! untouched. Everything is rounded to whole pixels.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{P2dError, Result};
use crate::types::{AtlasImage, PixelRect, PixelSize, SpriteInstance};

use super::{frame_key, Disambiguator};

/// Provenance URL expected by the Paper2D importer.
pub const META_APP: &str = "https://www.codeandweb.com/texturepacker";
pub const META_VERSION: &str = "1.0";
pub const META_TARGET: &str = "paper2D";
pub const META_FORMAT: &str = "RGBA8888";

/// One exported frame. Field order matches the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrame {
    /// Position/size within the page, top-left origin.
    pub frame: PixelRect,
    pub rotated: bool,
    /// Always false: the packing model here exposes no trim data.
    pub trimmed: bool,
    /// The sprite's untrimmed rect in its own local space.
    #[serde(rename = "spriteSourceSize")]
    pub sprite_source_size: PixelRect,
    #[serde(rename = "sourceSize")]
    pub source_size: PixelSize,
}

impl SpriteFrame {
    /// Compute the output frame for `sprite` on a page of `image_height`
    /// pixels, flipping the packed rect from bottom-left to top-left origin.
    pub fn new(sprite: &SpriteInstance, image_height: u32) -> Self {
        let packed = &sprite.packed_rect;
        let flipped_y = (image_height as f32 - (packed.y + packed.height)).round() as i32;

        Self {
            frame: PixelRect {
                x: packed.x.round() as i32,
                y: flipped_y,
                w: packed.width.round() as i32,
                h: packed.height.round() as i32,
            },
            rotated: sprite.rotation.is_rotated(),
            trimmed: false,
            sprite_source_size: sprite.source_rect.rounded(),
            source_size: sprite.source_rect.rounded_size(),
        }
    }
}

/// Descriptive metadata for one sheet document. Field order matches the
/// wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetMeta {
    pub app: String,
    pub version: String,
    pub target: String,
    /// PNG file name of the paired atlas page.
    pub image: String,
    pub format: String,
    pub size: PixelSize,
    pub scale: String,
}

/// One sheet document: the serializable pairing of frames and metadata
/// written to a `.paper2dsprites` sidecar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheetDocument {
    /// Insertion-ordered frame mapping; keys are unique.
    pub frames: IndexMap<String, SpriteFrame>,
    pub meta: SheetMeta,
}

impl SpriteSheetDocument {
    /// Create an empty document for one atlas page with fully-populated
    /// metadata.
    pub fn new(image: &AtlasImage) -> Self {
        Self {
            frames: IndexMap::new(),
            meta: SheetMeta {
                app: META_APP.to_string(),
                version: META_VERSION.to_string(),
                target: META_TARGET.to_string(),
                image: image.file_name.clone(),
                format: META_FORMAT.to_string(),
                size: PixelSize {
                    w: image.width as i32,
                    h: image.height as i32,
                },
                scale: "1".to_string(),
            },
        }
    }

    /// Page height in pixels, as recorded in the metadata.
    pub fn page_height(&self) -> u32 {
        self.meta.size.h.max(0) as u32
    }

    /// Compute and insert the frame for `sprite`.
    pub fn add_sprite(&mut self, sprite: &SpriteInstance, policy: &mut dyn Disambiguator) {
        let frame = SpriteFrame::new(sprite, self.page_height());
        self.add_frame(frame_key(&sprite.name), frame, policy);
    }

    /// Insert a frame, renaming on collision. No frame is ever dropped or
    /// overwritten: if `key` is taken, the policy supplies replacements
    /// until one is free.
    pub fn add_frame(&mut self, key: String, frame: SpriteFrame, policy: &mut dyn Disambiguator) {
        let mut key = key;
        while self.frames.contains_key(&key) {
            key = policy.disambiguate(&key);
        }
        self.frames.insert(key, frame);
    }
}

/// Build one document per atlas page, partitioning sprites by their owning
/// page index. Manifest order is preserved within each page.
///
/// A sprite referencing a page that does not exist is a precondition
/// violation and fails the whole export.
pub fn build_documents(
    images: &[AtlasImage],
    sprites: &[SpriteInstance],
    policy: &mut dyn Disambiguator,
) -> Result<Vec<SpriteSheetDocument>> {
    let mut documents: Vec<SpriteSheetDocument> =
        images.iter().map(SpriteSheetDocument::new).collect();

    for sprite in sprites {
        let document = documents
            .get_mut(sprite.image_index)
            .ok_or_else(|| P2dError::Export {
                message: format!(
                    "Sprite '{}' references atlas page {} but the atlas has {} page(s)",
                    sprite.name,
                    sprite.image_index,
                    images.len()
                ),
                help: Some("Page indices are zero-based positions in the images list".to_string()),
            })?;
        document.add_sprite(sprite, policy);
    }

    Ok(documents)
}

/// Serialize a document to its JSON wire form.
///
/// Compact by default, matching the upstream tooling; `pretty` is for
/// humans diffing output.
pub fn to_json(document: &SpriteSheetDocument, pretty: bool) -> Result<String> {
    let result = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };

    result.map_err(|e| P2dError::Export {
        message: format!("Failed to serialize sheet document: {}", e),
        help: None,
    })
}

/// Write a document to a `.paper2dsprites` sidecar file.
pub fn write_sheet_json(document: &SpriteSheetDocument, path: &Path, pretty: bool) -> Result<()> {
    let json = to_json(document, pretty)?;
    fs::write(path, json).map_err(|e| P2dError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write sheet document: {}", e),
    })?;
    Ok(())
}
