//! Validation checks for atlas manifests.
//!
//! Each check takes an `&AtlasManifest` and returns a `ValidationResult`.
//! Geometry that would make the export meaningless (bad page indices,
//! non-positive sizes) is an error; recoverable oddities (out-of-bounds
//! rects, duplicate names) are warnings.

use std::collections::HashSet;

use crate::export::frame_key;
use crate::manifest::AtlasManifest;

use super::warning::{Diagnostic, ValidationResult};

/// Run every manifest check.
pub fn validate_manifest(manifest: &AtlasManifest) -> ValidationResult {
    let mut result = check_images(manifest);
    result.merge_from(check_sprite_pages(manifest));
    result.merge_from(check_sprite_geometry(manifest));
    result.merge_from(check_duplicate_keys(manifest));
    result
}

/// Check page dimensions and warn on an atlas with no pages at all.
pub fn check_images(manifest: &AtlasManifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    if manifest.images.is_empty() {
        result.push(
            Diagnostic::warning(
                "p2d::validate::no-images",
                format!("Atlas '{}' has no pages; nothing will be exported", manifest.name),
            )
            .with_help("Add at least one entry to the images list"),
        );
    }

    for (index, image) in manifest.images.iter().enumerate() {
        if image.width == 0 || image.height == 0 {
            result.push(
                Diagnostic::error(
                    "p2d::validate::image-size",
                    format!(
                        "Page {} has zero size ({}x{})",
                        index, image.width, image.height
                    ),
                )
                .with_help("Page dimensions must be positive pixel counts"),
            );
        }
    }

    result
}

/// Check that every sprite references an existing page.
pub fn check_sprite_pages(manifest: &AtlasManifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    for sprite in &manifest.sprites {
        if sprite.image >= manifest.images.len() {
            result.push(
                Diagnostic::error(
                    "p2d::validate::sprite-image",
                    format!(
                        "Sprite '{}' references page {} but the atlas has {} page(s)",
                        sprite.name,
                        sprite.image,
                        manifest.images.len()
                    ),
                )
                .with_help("Page indices are zero-based positions in the images list"),
            );
        }
    }

    result
}

/// Check sprite names and rect geometry.
pub fn check_sprite_geometry(manifest: &AtlasManifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (index, sprite) in manifest.sprites.iter().enumerate() {
        if sprite.name.trim().is_empty() {
            result.push(
                Diagnostic::error(
                    "p2d::validate::sprite-name",
                    format!("Sprite at position {} has an empty name", index),
                )
                .with_help("Frame keys are derived from sprite names"),
            );
        }

        if sprite.rect.width <= 0.0 || sprite.rect.height <= 0.0 {
            result.push(Diagnostic::error(
                "p2d::validate::sprite-rect",
                format!(
                    "Sprite '{}' has a non-positive packed size ({}x{})",
                    sprite.name, sprite.rect.width, sprite.rect.height
                ),
            ));
        }

        if let Some(source) = &sprite.source_rect {
            if source.width < 0.0 || source.height < 0.0 {
                result.push(Diagnostic::error(
                    "p2d::validate::sprite-rect",
                    format!(
                        "Sprite '{}' has a negative source size ({}x{})",
                        sprite.name, source.width, source.height
                    ),
                ));
            }
        }

        // Bounds check only when the page reference itself is valid
        if let Some(image) = manifest.images.get(sprite.image) {
            let rect = &sprite.rect;
            if rect.x < 0.0
                || rect.y < 0.0
                || rect.x + rect.width > image.width as f32
                || rect.y + rect.height > image.height as f32
            {
                result.push(
                    Diagnostic::warning(
                        "p2d::validate::rect-bounds",
                        format!(
                            "Sprite '{}' extends outside page {} ({}x{})",
                            sprite.name, sprite.image, image.width, image.height
                        ),
                    )
                    .with_help("The exported frame rect will not match the page pixels"),
                );
            }
        }
    }

    result
}

/// Warn when two sprites on the same page sanitize to the same frame key.
/// Duplicates are renamed during export, never dropped.
pub fn check_duplicate_keys(manifest: &AtlasManifest) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashSet<(usize, String)> = HashSet::new();

    for sprite in &manifest.sprites {
        let key = frame_key(&sprite.name);
        if !seen.insert((sprite.image, key.clone())) {
            result.push(
                Diagnostic::warning(
                    "p2d::validate::duplicate-name",
                    format!(
                        "Frame key '{}' appears more than once on page {}",
                        key, sprite.image
                    ),
                )
                .with_help("Later duplicates are renamed with a generated suffix"),
            );
        }
    }

    result
}
