//! Rectangle and size primitives.
//!
//! Input geometry arrives as floats (packers position sprites with
//! sub-pixel precision); output geometry is rounded to whole pixels.
//! Serde field order on the pixel types matters: the Paper2D importer
//! reads `x,y,w,h` and `w,h` in exactly that order.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in floating-point pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Round each component to the nearest integer pixel.
    pub fn rounded(&self) -> PixelRect {
        PixelRect {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
            w: self.width.round() as i32,
            h: self.height.round() as i32,
        }
    }

    /// Round width/height to the nearest integer pixel.
    pub fn rounded_size(&self) -> PixelSize {
        PixelSize {
            w: self.width.round() as i32,
            h: self.height.round() as i32,
        }
    }
}

/// Integer rectangle in output (top-left origin) pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Integer width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSize {
    pub w: i32,
    pub h: i32,
}

impl PixelSize {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_exact() {
        let rect = Rect::new(10.0, 20.0, 64.0, 48.0);
        assert_eq!(rect.rounded(), PixelRect::new(10, 20, 64, 48));
    }

    #[test]
    fn test_rounded_fractional() {
        let rect = Rect::new(10.4, 20.6, 63.5, 47.2);
        let px = rect.rounded();
        assert_eq!(px.x, 10);
        assert_eq!(px.y, 21);
        assert_eq!(px.w, 64);
        assert_eq!(px.h, 47);
    }

    #[test]
    fn test_rounded_size() {
        let rect = Rect::new(3.0, 4.0, 16.5, 31.9);
        assert_eq!(rect.rounded_size(), PixelSize::new(17, 32));
    }

    #[test]
    fn test_pixel_rect_serde_field_order() {
        let json = serde_json::to_string(&PixelRect::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"w":3,"h":4}"#);
    }

    #[test]
    fn test_pixel_size_serde_field_order() {
        let json = serde_json::to_string(&PixelSize::new(5, 6)).unwrap();
        assert_eq!(json, r#"{"w":5,"h":6}"#);
    }
}
