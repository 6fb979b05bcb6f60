//! Inspect command implementation.
//!
//! Parses an exported `.paper2dsprites` sidecar and lists its metadata and
//! frames. Useful for eyeballing what an engine import is going to see.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{P2dError, Result};
use crate::export::SpriteSheetDocument;
use crate::output::{plural, Printer};

/// List the contents of an exported sprite sheet
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Sprite sheet sidecar file (.paper2dsprites)
    pub sheet: PathBuf,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let printer = Printer::new();

    let content = fs::read_to_string(&args.sheet).map_err(|e| P2dError::Io {
        path: args.sheet.clone(),
        message: format!("Failed to read sheet: {}", e),
    })?;

    let document: SpriteSheetDocument =
        serde_json::from_str(&content).map_err(|e| P2dError::Parse {
            message: format!("Not a valid sprite sheet document: {}", e),
            help: Some("Expected a .paper2dsprites file produced by p2d export".to_string()),
        })?;

    println!(
        "{} {} ({}x{}, {})",
        printer.bold(&document.meta.image),
        printer.dim(&document.meta.format),
        document.meta.size.w,
        document.meta.size.h,
        plural(document.frames.len(), "frame", "frames"),
    );

    for (key, frame) in &document.frames {
        let flags = if frame.rotated { " rotated" } else { "" };
        println!(
            "  {} {:>5} {:>5} {:>5} {:>5}{}",
            printer.cyan(&format!("{:<32}", key)),
            frame.frame.x,
            frame.frame.y,
            frame.frame.w,
            frame.frame.h,
            flags,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{build_documents, write_sheet_json, CounterSuffix};
    use crate::types::{AtlasImage, PackingRotation, Rect, SpriteInstance};
    use tempfile::tempdir;

    #[test]
    fn test_inspect_exported_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atlas_0.paper2dsprites");

        let image = AtlasImage::new("atlas", 0, 64, 64);
        let sprite = SpriteInstance {
            name: "Hero".to_string(),
            image_index: 0,
            packed_rect: Rect::new(0.0, 0.0, 8.0, 8.0),
            source_rect: Rect::new(0.0, 0.0, 8.0, 8.0),
            rotation: PackingRotation::None,
        };
        let mut policy = CounterSuffix::new();
        let docs = build_documents(&[image], &[sprite], &mut policy).unwrap();
        write_sheet_json(&docs[0], &path, true).unwrap();

        run(InspectArgs { sheet: path }).unwrap();
    }

    #[test]
    fn test_inspect_rejects_non_sheet_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bogus.paper2dsprites");
        fs::write(&path, r#"{ "not": "a sheet" }"#).unwrap();

        let err = run(InspectArgs { sheet: path }).unwrap_err();
        assert!(matches!(err, P2dError::Parse { .. }));
    }

    #[test]
    fn test_inspect_missing_file() {
        let err = run(InspectArgs {
            sheet: PathBuf::from("/nonexistent.paper2dsprites"),
        })
        .unwrap_err();
        assert!(matches!(err, P2dError::Io { .. }));
    }
}
