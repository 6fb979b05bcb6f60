//! Atlas manifest parsing.
//!
//! The manifest is the exporter's input: it names the atlas, lists its
//! packed pages, and records each sprite's geometry. It stands in for
//! whatever tool packed the atlas - anything that can dump its packing
//! result as YAML or JSON can feed p2d.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{P2dError, Result};
use crate::types::{AtlasImage, PackingRotation, Rect, SpriteInstance};

/// Atlas manifest loaded from a YAML or JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasManifest {
    /// Atlas display name; spaces are sanitized away in output file names.
    pub name: String,

    /// Packed pages in index order.
    #[serde(default)]
    pub images: Vec<ImageEntry>,

    /// Packed sprites across all pages.
    #[serde(default)]
    pub sprites: Vec<SpriteEntry>,
}

/// One atlas page in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Path to the page's pixel data, relative to the manifest. Optional:
    /// without it the page's PNG conversion is skipped.
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Page width in pixels.
    pub width: u32,

    /// Page height in pixels.
    pub height: u32,
}

/// One packed sprite in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteEntry {
    pub name: String,

    /// Index of the owning page in `images`.
    #[serde(default)]
    pub image: usize,

    /// Packed rect within the page, bottom-left origin.
    pub rect: Rect,

    /// Untrimmed source rect; defaults to `{0, 0, rect.width, rect.height}`.
    #[serde(default)]
    pub source_rect: Option<Rect>,

    #[serde(default)]
    pub rotation: PackingRotation,
}

impl AtlasManifest {
    /// Load a manifest, dispatching on file extension: `.json` is parsed
    /// as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| P2dError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::parse_json(&content),
            _ => Self::parse_yaml(&content),
        }
    }

    /// Parse a manifest from a YAML string.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| P2dError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check the atlas manifest syntax".to_string()),
        })
    }

    /// Parse a manifest from a JSON string.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| P2dError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check the atlas manifest syntax".to_string()),
        })
    }

    /// Typed atlas pages with deterministic output file names.
    pub fn atlas_images(&self) -> Vec<AtlasImage> {
        self.images
            .iter()
            .enumerate()
            .map(|(index, entry)| AtlasImage::new(&self.name, index, entry.width, entry.height))
            .collect()
    }

    /// Typed sprite instances in manifest order.
    pub fn sprite_instances(&self) -> Vec<SpriteInstance> {
        self.sprites
            .iter()
            .map(|entry| SpriteInstance {
                name: entry.name.clone(),
                image_index: entry.image,
                packed_rect: entry.rect,
                source_rect: entry
                    .source_rect
                    .unwrap_or_else(|| Rect::new(0.0, 0.0, entry.rect.width, entry.rect.height)),
                rotation: entry.rotation,
            })
            .collect()
    }
}
