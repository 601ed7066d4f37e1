//! Test helper utilities

#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use pxl::{Color, EditorState};

pub const RED: Color = Rgba([255, 0, 0, 255]);
pub const GREEN: Color = Rgba([0, 255, 0, 255]);
pub const BLUE: Color = Rgba([0, 0, 255, 255]);

/// Solid `width` x `height` image.
pub fn solid(width: u32, height: u32, color: Color) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

/// Editor over a solid image with the default palette size.
pub fn editor(width: u32, height: u32, color: Color) -> EditorState {
    EditorState::new("test.png", solid(width, height, color), 11).unwrap()
}
