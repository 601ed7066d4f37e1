//! Unit tests for HSV palettes and the pen colour

use pxl::color::{nearest_index, Axis, Direction, Hsv, Palette, BLACK, WHITE};
use pxl::{EditorError, PenColor};

use crate::helpers::{BLUE, GREEN, RED};

#[test]
fn nearest_index_lands_within_half_a_step() {
    let palette = Palette::generate(Axis::Hue, Hsv::new(0.0, 1.0, 1.0), 11);
    let samples = palette.samples();
    let half = palette.step() / 2.0;

    let mut value = 0.0;
    while value < 345.0 {
        let index = nearest_index(value, &samples);
        assert!(
            (samples[index] - value).abs() <= half + 1e-9,
            "value {} picked sample {}",
            value,
            samples[index]
        );
        assert_eq!(index, nearest_index(value, &samples));
        value += 7.3;
    }
}

#[test]
fn nearest_index_clamps_outside_range() {
    let samples = [0.0, 0.25, 0.5, 0.75];
    assert_eq!(nearest_index(-1.0, &samples), 0);
    assert_eq!(nearest_index(0.99, &samples), 3);
}

#[test]
fn primary_hues_select_expected_indices() {
    assert_eq!(PenColor::new(RED, 11).unwrap().palette(Axis::Hue).selected(), 0);
    assert_eq!(PenColor::new(GREEN, 11).unwrap().palette(Axis::Hue).selected(), 3);
    assert_eq!(PenColor::new(BLUE, 11).unwrap().palette(Axis::Hue).selected(), 7);
}

#[test]
fn hue_up_then_down_round_trips() {
    let mut pen = PenColor::new(GREEN, 11).unwrap();
    let start = pen.palette(Axis::Hue).selected();
    assert!(pen.change_hue(Direction::Increase));
    assert!(pen.change_hue(Direction::Decrease));
    assert_eq!(pen.palette(Axis::Hue).selected(), start);
}

#[test]
fn value_stops_at_the_top() {
    let mut pen = PenColor::new(WHITE, 11).unwrap();
    let top = pen.palette(Axis::Value).len() - 1;
    assert_eq!(pen.palette(Axis::Value).selected(), top);
    pen.change_value(Direction::Increase);
    assert_eq!(pen.palette(Axis::Value).selected(), top);
}

#[test]
fn value_stops_at_the_bottom() {
    let mut pen = PenColor::new(BLACK, 11).unwrap();
    assert_eq!(pen.palette(Axis::Value).selected(), 0);
    assert!(!pen.change_value(Direction::Decrease));
    assert_eq!(pen.color(), BLACK);
}

#[test]
fn hue_change_regenerates_dependent_palettes() {
    let mut pen = PenColor::new(RED, 5).unwrap();
    let saturation_before = pen.palette(Axis::Saturation).clone();
    pen.change_hue(Direction::Increase);
    assert_ne!(pen.palette(Axis::Saturation), &saturation_before);
    assert_eq!(pen.palette(Axis::Saturation).len(), 5);
    assert_eq!(pen.palette(Axis::Value).len(), 5);
}

#[test]
fn every_palette_has_requested_size() {
    let pen = PenColor::new(GREEN, 7).unwrap();
    for axis in [Axis::Hue, Axis::Saturation, Axis::Value] {
        assert_eq!(pen.palette(axis).len(), 7);
        assert!(pen.palette(axis).selected() < 7);
    }
}

#[test]
fn zero_size_is_rejected() {
    assert!(matches!(
        PenColor::new(RED, 0),
        Err(EditorError::DegeneratePalette { size: 0 })
    ));
}
