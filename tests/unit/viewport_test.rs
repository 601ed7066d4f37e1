//! Unit tests for viewport layout and panning

use pxl::config::LayoutConfig;
use pxl::viewport::{clamp_pan, CELLS_PER_PIXEL};
use pxl::{Point, Viewport};
use ratatui::layout::Size;

/// 100x100 image in a terminal that shows a 20x20 window of it.
fn twenty_by_twenty() -> Viewport {
    Viewport::new(LayoutConfig::default(), 11, (100, 100), Size::new(43, 31))
}

#[test]
fn window_size_follows_terminal() {
    let viewport = twenty_by_twenty();
    assert_eq!(viewport.visible_cols(), 20);
    assert_eq!(viewport.visible_rows(), 20);
    assert_eq!(
        viewport.image_box().canvas().width,
        20 * CELLS_PER_PIXEL
    );
}

#[test]
fn pan_past_far_end_wraps_to_zero() {
    let mut viewport = twenty_by_twenty();
    assert!(viewport.pan(80, 0));
    assert_eq!(viewport.pan_offset(), (80, 0));
    assert!(viewport.pan(1, 0));
    assert_eq!(viewport.pan_offset(), (0, 0));
}

#[test]
fn pan_before_zero_wraps_to_far_end() {
    let mut viewport = twenty_by_twenty();
    assert!(viewport.pan(0, -1));
    assert_eq!(viewport.pan_offset(), (0, 80));
}

#[test]
fn clamp_pan_wraps_both_ways() {
    assert_eq!(clamp_pan(100, 20, 81), 0);
    assert_eq!(clamp_pan(100, 20, -1), 80);
    assert_eq!(clamp_pan(100, 20, 42), 42);
    assert_eq!(clamp_pan(10, 20, 3), 0);
}

#[test]
fn small_image_never_pans() {
    let mut viewport = Viewport::new(LayoutConfig::default(), 11, (4, 4), Size::new(80, 24));
    assert!(!viewport.pan(1, 1));
    assert!(!viewport.pan(-1, -1));
    assert_eq!(viewport.pan_offset(), (0, 0));
}

#[test]
fn ensure_visible_moves_window_minimally() {
    let mut viewport = twenty_by_twenty();
    assert!(!viewport.ensure_visible(Point::new(19, 19)));
    assert!(viewport.ensure_visible(Point::new(20, 5)));
    assert_eq!(viewport.pan_offset(), (1, 0));
    assert!(viewport.is_visible(Point::new(20, 5)));
    assert!(!viewport.is_visible(Point::new(0, 5)));
}

#[test]
fn visible_points_cover_the_window() {
    let mut viewport = twenty_by_twenty();
    viewport.pan(3, 7);
    let points: Vec<_> = viewport.visible_points().collect();
    assert_eq!(points.len(), 400);
    assert_eq!(points[0].0, Point::new(3, 7));
    assert_eq!(Some(points[0].1), viewport.to_screen(Point::new(3, 7)));
    assert_eq!(viewport.to_screen(Point::new(0, 0)), None);
}

#[test]
fn resize_keeps_pan_in_range() {
    let mut viewport = twenty_by_twenty();
    viewport.pan(80, 80);
    viewport.resize(83, 51);
    assert_eq!(viewport.visible_cols(), 40);
    assert_eq!(viewport.pan_offset(), (60, 60));
}
