//! Unit tests for the editor state machine

use image::RgbaImage;
use pxl::color::{Axis, Direction, BLACK, WHITE};
use pxl::editor::{Command, EditorOptions, Flow, Redraw};
use pxl::{EditorError, EditorState, LayeredImage, Mode, Point};
use ratatui::layout::Size;

use crate::helpers::{editor, solid, GREEN, RED};

fn no_save(_: &str, _: &RgbaImage) -> Result<(), std::io::Error> {
    panic!("sink must not be called");
}

#[test]
fn paint_then_undo_restores_base() {
    let mut state = editor(5, 5, RED);
    state.move_cursor(2, 2);
    state.paint();

    for y in 0..5 {
        for x in 0..5 {
            let expected = if (x, y) == (2, 2) { BLACK } else { RED };
            assert_eq!(state.pixel(Point::new(x, y)), expected);
        }
    }

    state.undo();
    assert_eq!(state.pixel(Point::new(2, 2)), RED);
    assert!(state.image().layer().is_empty());
}

#[test]
fn undo_everything_leaves_empty_overlay() {
    let mut state = editor(4, 4, RED);
    for _ in 0..6 {
        state.paint();
        state.move_cursor(1, 1);
    }
    state.paint();
    state.move_cursor(-2, 0);
    state.paint();

    while state.has_pending_changes() {
        state.undo();
    }
    assert!(state.image().layer().is_empty());
    assert_eq!(state.composed(), solid(4, 4, RED));
}

#[test]
fn undo_on_fresh_editor_is_noop() {
    let mut state = editor(3, 3, RED);
    let outcome = state.undo();
    assert_eq!(outcome.redraw, Redraw::Nothing);
    assert_eq!(outcome.flow, Flow::Continue);
}

#[test]
fn flood_fill_uniform_image_fills_every_cell() {
    let options = EditorOptions {
        pen_color: WHITE,
        ..EditorOptions::default()
    };
    let mut state = EditorState::with_options("fill.png", solid(5, 5, RED), &options).unwrap();

    let outcome = state.flood_fill_at_cursor();
    match outcome.redraw {
        Redraw::Points(points) => assert_eq!(points.len(), 25),
        other => panic!("expected points redraw, got {:?}", other),
    }
    assert_eq!(state.composed(), solid(5, 5, WHITE));
    assert_eq!(state.history().len(), 25);
}

#[test]
fn flood_fill_is_undone_as_one_stroke() {
    let options = EditorOptions {
        pen_color: GREEN,
        ..EditorOptions::default()
    };
    let mut state = EditorState::with_options("wall.png", solid(5, 5, RED), &options).unwrap();

    // A green wall down column 2 bounds the fill.
    state.move_cursor(2, 0);
    for _ in 0..5 {
        state.paint();
        state.move_cursor(0, 1);
    }
    let painted = state.history().len();
    state.move_cursor(-2, 0);
    state.change_value(Direction::Decrease);
    state.flood_fill_at_cursor();

    assert_eq!(state.history().len(), painted + 10);
    assert_eq!(state.pixel(Point::new(4, 0)), RED);
    assert_ne!(state.pixel(Point::new(0, 0)), RED);

    state.undo();
    assert_eq!(state.history().len(), painted);
    assert_eq!(state.pixel(Point::new(0, 0)), RED);
    assert_eq!(state.pixel(Point::new(2, 3)), GREEN);
}

#[test]
fn flood_fill_history_replays_to_overlay() {
    let mut state = editor(6, 4, RED);
    state.move_cursor(3, 0);
    state.paint();
    state.move_cursor(0, 1);
    state.flood_fill_at_cursor();

    let mut replayed = LayeredImage::new(solid(6, 4, RED));
    state.history().rebuild(&mut replayed);
    assert_eq!(replayed.layer(), state.image().layer());
    assert_eq!(state.history().len(), 24);
}

#[test]
fn flood_fill_with_matching_colour_changes_nothing() {
    let mut state = editor(3, 3, BLACK);
    let outcome = state.flood_fill_at_cursor();
    assert_eq!(outcome.redraw, Redraw::Nothing);
    assert!(state.history().is_empty());
    assert!(state.image().layer().is_empty());
}

#[test]
fn cursor_wraps_at_image_edges() {
    let mut state = editor(4, 3, RED);
    state.move_cursor(-1, -1);
    assert_eq!(state.cursor(), Point::new(3, 2));
    state.move_cursor(1, 1);
    assert_eq!(state.cursor(), Point::new(0, 0));
}

#[test]
fn pan_carries_cursor_into_view() {
    let options = EditorOptions {
        terminal: Size::new(80, 40),
        ..EditorOptions::default()
    };
    let mut state = EditorState::with_options("big.png", solid(200, 200, RED), &options).unwrap();
    for _ in 0..5 {
        state.pan(1, 0);
    }
    assert_eq!(state.viewport().pan_offset(), (5, 0));
    assert_eq!(state.cursor(), Point::new(5, 0));
    assert!(state.viewport().is_visible(state.cursor()));

    state.paint();
    assert_eq!(state.pixel(Point::new(5, 0)), BLACK);
    assert_eq!(state.pixel(Point::new(0, 0)), RED);

    state.move_cursor(1, 0);
    assert_eq!(state.cursor(), Point::new(6, 0));
    assert_eq!(state.viewport().pan_offset(), (5, 0));
}

#[test]
fn exit_without_changes_quits_immediately() {
    let mut state = editor(2, 2, RED);
    let mut sink = no_save;
    let outcome = state.apply(Command::RequestExit, &mut sink).unwrap();
    assert_eq!(outcome.flow, Flow::Quit);
    assert_eq!(state.mode(), Mode::Drawing);
}

#[test]
fn exit_with_changes_asks_for_confirmation() {
    let mut state = editor(2, 2, RED);
    state.paint();

    let outcome = state.request_exit();
    assert_eq!(outcome.flow, Flow::Continue);
    assert_eq!(state.mode(), Mode::ConfirmExit);
}

#[test]
fn cancel_exit_keeps_edits() {
    let mut state = editor(2, 2, RED);
    state.paint();
    let layer = state.image().layer().clone();
    state.request_exit();

    let outcome = state.cancel_exit();
    assert_eq!(outcome.flow, Flow::Continue);
    assert_eq!(state.mode(), Mode::Drawing);
    assert_eq!(state.image().layer(), &layer);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn confirm_exit_saves_once_and_quits() {
    let mut state = editor(2, 2, RED);
    state.paint();
    state.request_exit();

    let mut saved = Vec::new();
    let mut sink = |id: &str, image: &RgbaImage| -> Result<(), std::io::Error> {
        saved.push((id.to_string(), image.clone()));
        Ok(())
    };
    let outcome = state.confirm_exit(&mut sink).unwrap();

    assert_eq!(outcome.flow, Flow::Quit);
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, "test.png");
    assert_eq!(*saved[0].1.get_pixel(0, 0), BLACK);
    assert_eq!(*saved[0].1.get_pixel(1, 1), RED);
}

#[test]
fn failed_save_stays_in_confirm_exit() {
    let mut state = editor(2, 2, RED);
    state.paint();
    state.request_exit();

    let mut sink = |_: &str, _: &RgbaImage| -> Result<(), std::io::Error> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"))
    };
    let err = state.confirm_exit(&mut sink).unwrap_err();

    assert!(matches!(err, EditorError::SaveFailure { .. }));
    assert_eq!(state.mode(), Mode::ConfirmExit);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn confirm_mode_ignores_drawing_commands() {
    let mut state = editor(3, 3, RED);
    state.paint();
    state.request_exit();

    let mut sink = no_save;
    for command in [
        Command::Paint,
        Command::Undo,
        Command::FloodFill,
        Command::MoveCursor { dx: 1, dy: 0 },
        Command::ChangeColor(Axis::Hue, Direction::Increase),
        Command::Pan { dx: 1, dy: 0 },
    ] {
        let outcome = state.apply(command, &mut sink).unwrap();
        assert_eq!(outcome.redraw, Redraw::Nothing, "{:?}", command);
    }
    assert_eq!(state.cursor(), Point::new(0, 0));
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.mode(), Mode::ConfirmExit);
}

#[test]
fn resize_applies_in_confirm_mode() {
    let mut state = editor(3, 3, RED);
    state.paint();
    state.request_exit();

    let outcome = state.on_resize(120, 40);
    assert_eq!(outcome.redraw, Redraw::Full);
    assert_eq!(state.viewport().terminal().width, 120);
}

#[test]
fn green_pen_selects_hue_index_three() {
    let options = EditorOptions {
        pen_color: GREEN,
        ..EditorOptions::default()
    };
    let state = EditorState::with_options("g.png", solid(2, 2, RED), &options).unwrap();
    assert_eq!(state.palette(Axis::Hue).selected(), 3);
}

#[test]
fn colour_change_redraws_palette() {
    let options = EditorOptions {
        pen_color: GREEN,
        ..EditorOptions::default()
    };
    let mut state = EditorState::with_options("g.png", solid(2, 2, RED), &options).unwrap();

    let outcome = state.change_hue(Direction::Increase);
    assert_eq!(outcome.redraw, Redraw::Palette);
    assert_eq!(state.palette(Axis::Hue).selected(), 4);

    state.change_hue(Direction::Decrease);
    assert_eq!(state.palette(Axis::Hue).selected(), 3);
}

#[test]
fn zero_palette_is_rejected() {
    let result = EditorState::new("x.png", solid(2, 2, RED), 0);
    assert!(matches!(
        result,
        Err(EditorError::DegeneratePalette { size: 0 })
    ));
}

#[test]
fn empty_image_is_rejected() {
    let result = EditorState::new("x.png", RgbaImage::new(0, 4), 11);
    assert!(matches!(
        result,
        Err(EditorError::EmptyImage {
            width: 0,
            height: 4
        })
    ));
}
