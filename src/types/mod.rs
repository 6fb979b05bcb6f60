//! Core domain types for p2d.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Rect` - floating-point rectangles in atlas pixel space
//! - `PixelRect` / `PixelSize` - rounded integer geometry for output
//! - `AtlasImage` / `SpriteInstance` - the exporter's input model

mod rect;
mod sprite;

pub use rect::{PixelRect, PixelSize, Rect};
pub use sprite::{AtlasImage, PackingRotation, SpriteInstance};
