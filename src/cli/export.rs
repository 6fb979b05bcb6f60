//! Export command implementation.
//!
//! Runs the full pipeline: load the atlas manifest, validate it, build one
//! sheet document per page, re-encode page images as RGBA8888 PNG, and
//! write the `.paper2dsprites` sidecars.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{P2dError, Result};
use crate::export::{
    build_documents, sanitize_atlas_name, sheet_file_name, write_sheet_json, CounterSuffix,
    Disambiguator, RandomSuffix,
};
use crate::manifest::{AtlasManifest, ImageEntry};
use crate::output::{display_path, plural, Printer};
use crate::render::convert_page;
use crate::types::AtlasImage;
use crate::validation::{validate_manifest, Severity};

/// Export an atlas manifest to Paper2D sprite sheets
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Atlas manifest file (YAML or JSON)
    pub manifest: PathBuf,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Pretty-print the JSON sidecars
    #[arg(long)]
    pub pretty: bool,

    /// Rename duplicate frames with an occurrence counter instead of a
    /// random suffix, for reproducible output
    #[arg(long)]
    pub deterministic: bool,

    /// Write sidecars only, skipping page image conversion
    #[arg(long)]
    pub skip_images: bool,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let printer = Printer::new();

    let manifest = AtlasManifest::load(&args.manifest)?;
    check_manifest(&manifest, &args.manifest, &printer)?;

    let images = manifest.atlas_images();
    let sprites = manifest.sprite_instances();

    printer.status(
        "Exporting",
        &format!(
            "{} ({}, {})",
            sanitize_atlas_name(&manifest.name),
            plural(images.len(), "page", "pages"),
            plural(sprites.len(), "sprite", "sprites"),
        ),
    );

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| P2dError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut policy: Box<dyn Disambiguator> = if args.deterministic {
        Box::new(CounterSuffix::new())
    } else {
        Box::new(RandomSuffix)
    };

    let documents = build_documents(&images, &sprites, policy.as_mut())?;

    // Source paths in the manifest are relative to the manifest itself
    let manifest_dir = args.manifest.parent().unwrap_or(Path::new("."));

    for (image, document) in images.iter().zip(&documents) {
        if !args.skip_images {
            write_page_image(&args, manifest_dir, &manifest.images[image.index], image, &printer)?;
        }

        let sheet_path = args.output.join(sheet_file_name(&manifest.name, image.index));
        write_sheet_json(document, &sheet_path, args.pretty)?;
        printer.status("Writing", &display_path(&sheet_path));
    }

    let total_frames: usize = documents.iter().map(|d| d.frames.len()).sum();
    printer.success(
        "Finished",
        &format!(
            "{} across {} in {}",
            plural(total_frames, "frame", "frames"),
            plural(documents.len(), "sheet", "sheets"),
            display_path(&args.output),
        ),
    );

    Ok(())
}

/// Validate the manifest, printing diagnostics. Errors abort the export.
fn check_manifest(manifest: &AtlasManifest, path: &Path, printer: &Printer) -> Result<()> {
    let result = validate_manifest(manifest);

    for diagnostic in result.iter() {
        let line = format!("{} [{}]", diagnostic.message, diagnostic.code);
        match diagnostic.severity {
            Severity::Warning => printer.warning("warning:", &line),
            Severity::Error => printer.error("error:", &line),
        }
    }

    if result.has_errors() {
        return Err(P2dError::Validation {
            message: format!("{} in {}", result.summary(), display_path(path)),
            help: Some("Run 'p2d validate' for details".to_string()),
        });
    }

    Ok(())
}

/// Convert one page's source image to RGBA8 PNG, or warn when the manifest
/// carries no pixel data for it.
fn write_page_image(
    args: &ExportArgs,
    manifest_dir: &Path,
    entry: &ImageEntry,
    image: &AtlasImage,
    printer: &Printer,
) -> Result<()> {
    let Some(source) = &entry.source else {
        printer.warning(
            "Skipping",
            &format!("page {} has no source image; sidecar only", image.index),
        );
        return Ok(());
    };

    let source = manifest_dir.join(source);
    let dest = args.output.join(&image.file_name);

    let (width, height) = convert_page(&source, &dest)?;
    if (width, height) != (entry.width, entry.height) {
        printer.warning(
            "Mismatch",
            &format!(
                "page {} is {}x{} on disk but {}x{} in the manifest",
                image.index, width, height, entry.width, entry.height
            ),
        );
    }

    printer.status("Writing", &display_path(&dest));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_test_page(path: &Path, width: u32, height: u32) {
        let mut img = RgbaImage::new(width, height);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 255]));
        img.save(path).unwrap();
    }

    fn default_args(manifest: PathBuf, output: PathBuf) -> ExportArgs {
        ExportArgs {
            manifest,
            output,
            pretty: false,
            deterministic: true,
            skip_images: false,
        }
    }

    #[test]
    fn test_export_end_to_end() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");
        write_test_page(&dir.path().join("page0.png"), 64, 32);

        let manifest_path = dir.path().join("atlas.yaml");
        fs::write(
            &manifest_path,
            r#"
name: Test Atlas
images:
  - source: page0.png
    width: 64
    height: 32
sprites:
  - name: Hero (Clone)
    rect: { x: 4, y: 8, width: 16, height: 16 }
"#,
        )
        .unwrap();

        run(default_args(manifest_path, output.clone())).unwrap();

        assert!(output.join("Test_Atlas_0.png").exists());
        let sheet = output.join("Test_Atlas_0.paper2dsprites");
        assert!(sheet.exists());

        let content = fs::read_to_string(&sheet).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["meta"]["image"], "Test_Atlas_0.png");
        assert_eq!(parsed["meta"]["size"]["w"], 64);
        // y = 32 - (8 + 16) = 8
        assert_eq!(parsed["frames"]["Hero.png"]["frame"]["y"], 8);
    }

    #[test]
    fn test_export_skip_images() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");

        let manifest_path = dir.path().join("atlas.yaml");
        fs::write(
            &manifest_path,
            r#"
name: atlas
images:
  - width: 16
    height: 16
sprites: []
"#,
        )
        .unwrap();

        let mut args = default_args(manifest_path, output.clone());
        args.skip_images = true;
        run(args).unwrap();

        assert!(!output.join("atlas_0.png").exists());
        assert!(output.join("atlas_0.paper2dsprites").exists());
    }

    #[test]
    fn test_export_page_without_source_still_writes_sidecar() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");

        let manifest_path = dir.path().join("atlas.yaml");
        fs::write(
            &manifest_path,
            r#"
name: atlas
images:
  - width: 16
    height: 16
"#,
        )
        .unwrap();

        run(default_args(manifest_path, output.clone())).unwrap();
        assert!(output.join("atlas_0.paper2dsprites").exists());
    }

    #[test]
    fn test_export_fails_on_validation_error() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");

        let manifest_path = dir.path().join("atlas.yaml");
        fs::write(
            &manifest_path,
            r#"
name: atlas
images:
  - width: 16
    height: 16
sprites:
  - name: stray
    image: 9
    rect: { x: 0, y: 0, width: 4, height: 4 }
"#,
        )
        .unwrap();

        let err = run(default_args(manifest_path, output.clone())).unwrap_err();
        assert!(matches!(err, P2dError::Validation { .. }));
        assert!(!output.join("atlas_0.paper2dsprites").exists());
    }

    #[test]
    fn test_export_duplicate_names_deterministic() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");

        let manifest_path = dir.path().join("atlas.yaml");
        fs::write(
            &manifest_path,
            r#"
name: atlas
images:
  - width: 32
    height: 32
sprites:
  - name: Coin
    rect: { x: 0, y: 0, width: 8, height: 8 }
  - name: Coin
    rect: { x: 8, y: 0, width: 8, height: 8 }
"#,
        )
        .unwrap();

        let mut args = default_args(manifest_path, output.clone());
        args.skip_images = true;
        run(args).unwrap();

        let content = fs::read_to_string(output.join("atlas_0.paper2dsprites")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(parsed["frames"]["Coin.png"].is_object());
        assert!(parsed["frames"]["Coin.png_2"].is_object());
    }
}
