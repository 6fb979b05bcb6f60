//! Page image output for p2d.
//!
//! Re-encodes atlas page images into the RGBA8888 PNG form declared in
//! the sheet metadata.

mod png;

pub use png::convert_page;
