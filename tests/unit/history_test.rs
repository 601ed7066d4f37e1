//! Unit tests for the layered image and its history

use pxl::{Color, History, LayeredImage, Point};

use crate::helpers::{solid, BLUE, GREEN, RED};

#[test]
fn untouched_points_read_from_base() {
    let mut image = LayeredImage::new(solid(3, 3, RED));
    let mut history = History::new();
    history.append(&mut image, Point::new(1, 1), BLUE);

    for y in 0..3 {
        for x in 0..3 {
            let p = Point::new(x, y);
            if p != Point::new(1, 1) {
                assert_eq!(image.get(p), *image.base().get_pixel(x, y));
            }
        }
    }
}

#[test]
fn later_write_wins_until_undone() {
    let mut image = LayeredImage::new(solid(2, 2, RED));
    let mut history = History::new();
    let p = Point::new(0, 1);
    history.append(&mut image, p, BLUE);
    history.append(&mut image, p, GREEN);
    assert_eq!(image.get(p), GREEN);

    assert_eq!(history.undo(&mut image), vec![p]);
    assert_eq!(image.get(p), BLUE);
    history.undo(&mut image);
    assert_eq!(image.get(p), RED);
    assert!(history.is_empty());
}

#[test]
fn overlay_matches_replay_of_history() {
    let mut image = LayeredImage::new(solid(4, 4, RED));
    let mut history = History::new();
    history.append(&mut image, Point::new(0, 0), BLUE);
    history.append_stroke(
        &mut image,
        [(Point::new(1, 0), GREEN), (Point::new(0, 0), GREEN)],
    );
    history.append(&mut image, Point::new(3, 3), BLUE);
    history.undo(&mut image);

    let mut replayed = LayeredImage::new(solid(4, 4, RED));
    history.rebuild(&mut replayed);
    assert_eq!(replayed.layer(), image.layer());
    assert_eq!(image.get(Point::new(0, 0)), GREEN);
}

#[test]
fn stroke_is_removed_as_a_whole() {
    let mut image = LayeredImage::new(solid(3, 1, RED));
    let mut history = History::new();
    history.append(&mut image, Point::new(0, 0), BLUE);
    let added = history.append_stroke(
        &mut image,
        (1..3).map(|x| (Point::new(x, 0), GREEN)),
    );
    assert_eq!(added, 2);

    let removed = history.undo(&mut image);
    assert_eq!(removed.len(), 2);
    assert_eq!(history.len(), 1);
    assert_eq!(image.get(Point::new(0, 0)), BLUE);
    assert_eq!(image.get(Point::new(2, 0)), RED);
}

#[test]
fn empty_stroke_records_nothing() {
    let mut image = LayeredImage::new(solid(2, 2, RED));
    let mut history = History::new();
    assert_eq!(history.append_stroke(&mut image, std::iter::empty::<(Point, Color)>()), 0);
    assert!(!history.has_pending_changes());
    assert!(history.undo(&mut image).is_empty());
}

#[test]
fn flood_fill_stays_in_bounds_and_sets_each_cell_once() {
    let mut image = LayeredImage::new(solid(6, 4, RED));
    let filled = image.flood_fill(Point::new(5, 3), BLUE);

    assert_eq!(filled.len(), 24);
    let mut unique = filled.clone();
    unique.sort_by_key(|p| (p.y, p.x));
    unique.dedup();
    assert_eq!(unique.len(), filled.len());
    assert!(filled.iter().all(|p| image.contains(*p)));
}

#[test]
fn flood_fill_twice_is_a_noop() {
    let mut image = LayeredImage::new(solid(3, 3, RED));
    image.flood_fill(Point::new(0, 0), GREEN);
    let layer = image.layer().clone();
    assert!(image.flood_fill(Point::new(2, 2), GREEN).is_empty());
    assert_eq!(image.layer(), &layer);
}

#[test]
fn compose_flattens_overlay_onto_base() {
    let mut image = LayeredImage::new(solid(2, 2, RED));
    image.set(Point::new(1, 0), BLUE);
    let flat = image.compose();
    assert_eq!(*flat.get_pixel(1, 0), BLUE);
    assert_eq!(*flat.get_pixel(0, 0), RED);
    assert_eq!(image.base(), &solid(2, 2, RED));
}
