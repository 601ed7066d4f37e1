//! Editor screen rendering
//!
//! Draws the title, palette box, image box and footer at the positions the
//! [`Viewport`](crate::viewport::Viewport) computed. Everything is clipped to
//! the frame, so a terminal smaller than the layout never panics.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::color::{to_hex, Axis};
use crate::editor::{EditorState, Mode};
use crate::geometry::DrawBox;

/// Marker drawn on the selected swatch of each palette.
pub const SELECTED_MARKER: &str = "●";

const AXES: [(Axis, &str); 3] = [
    (Axis::Hue, "u hue j"),
    (Axis::Saturation, "i sat k"),
    (Axis::Value, "o val l"),
];

/// Draw the whole editor screen.
pub fn render(frame: &mut Frame, state: &EditorState, theme: &Theme) {
    let area = frame.area();
    render_title(frame, state, theme, area);
    render_palette(frame, state, theme, area);
    render_image(frame, state, theme, area);
    render_footer(frame, state, theme, area);
}

fn render_title(frame: &mut Frame, state: &EditorState, theme: &Theme, area: Rect) {
    let pos = state.viewport().title_position();
    let (width, height) = (state.image().width(), state.image().height());
    let cursor = state.cursor();
    let mut spans = vec![
        Span::styled("pxl", theme.accent_bold_style()),
        Span::styled(format!("  {}", state.identifier()), theme.text_style()),
        Span::styled(
            format!("  {}x{}  ({}, {})", width, height, cursor.x, cursor.y),
            theme.text_secondary_style(),
        ),
    ];
    if state.has_pending_changes() {
        spans.push(Span::styled("  modified", theme.accent_style()));
    }
    render_line(frame, Line::from(spans), pos.x, pos.y, area);
}

fn render_palette(frame: &mut Frame, state: &EditorState, theme: &Theme, area: Rect) {
    let draw_box = state.viewport().palette_box();
    render_box(frame, draw_box, " colour ", theme, area);

    let canvas = draw_box.canvas();
    let section = state.viewport().section_width();
    let label_width = usize::from(section.saturating_sub(1));
    let buf = frame.buffer_mut();

    for (i, (axis, label)) in AXES.iter().enumerate() {
        let x = canvas.x.saturating_add(section.saturating_mul(i as u16));
        put_str(buf, x, canvas.y, label, label_width, theme.text_secondary_style());

        let palette = state.palette(*axis);
        for (j, swatch) in palette.swatches().iter().enumerate() {
            let symbol = if j == palette.selected() {
                SELECTED_MARKER
            } else {
                " "
            };
            let pos = Position::new(x.saturating_add(j as u16), canvas.y.saturating_add(1));
            put_cell(buf, pos, symbol, theme.pixel_style(swatch.color));
        }
    }

    let pen = state.pen_color();
    let x = canvas.x.saturating_add(section.saturating_mul(3));
    put_str(buf, x, canvas.y, &to_hex(pen), label_width, theme.text_style());
    for dx in 0..section.saturating_sub(1) {
        let pos = Position::new(x.saturating_add(dx), canvas.y.saturating_add(1));
        put_cell(buf, pos, " ", theme.pixel_style(pen));
    }
}

fn render_image(frame: &mut Frame, state: &EditorState, theme: &Theme, area: Rect) {
    let viewport = state.viewport();
    render_box(frame, viewport.image_box(), "", theme, area);

    let cursor = state.cursor();
    let buf = frame.buffer_mut();
    for (point, pos) in viewport.visible_points() {
        let style = theme.pixel_style(state.pixel(point));
        let (left, right) = if point == cursor { ("[", "]") } else { (" ", " ") };
        put_cell(buf, pos, left, style);
        put_cell(buf, Position::new(pos.x.saturating_add(1), pos.y), right, style);
    }
}

fn render_footer(frame: &mut Frame, state: &EditorState, theme: &Theme, area: Rect) {
    let viewport = state.viewport();
    let (first, second) = viewport.footer_rows();
    let x = viewport.padding_x();

    let top = match state.mode() {
        Mode::Drawing => hints(
            theme,
            &[
                ("wasd", "move"),
                ("e", "paint"),
                ("f", "fill"),
                ("z", "undo"),
                ("arrows", "pan"),
                ("x", "exit"),
            ],
        ),
        Mode::ConfirmExit => {
            let mut line = hints(theme, &[("y", "save and quit"), ("n", "keep editing")]);
            line.spans
                .insert(0, Span::styled("Unsaved changes.  ", theme.error_bold_style()));
            line
        }
    };
    render_line(frame, top, x, first, area);

    let bottom = hints(theme, &[("u/j", "hue"), ("i/k", "saturation"), ("o/l", "value")]);
    render_line(frame, bottom, x, second, area);
}

fn hints(theme: &Theme, pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, action) in pairs {
        spans.push(Span::styled(key.to_string(), theme.accent_bold_style()));
        spans.push(Span::styled(
            format!(" {}  ", action),
            theme.text_secondary_style(),
        ));
    }
    Line::from(spans)
}

fn render_box(frame: &mut Frame, draw_box: DrawBox, title: &str, theme: &Theme, area: Rect) {
    if draw_box.border() == 0 {
        return;
    }
    let outer = draw_box.area();
    // A clipped border would be drawn in the wrong place.
    if outer.intersection(area) != outer || outer.width < 2 || outer.height < 2 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.accent_style())
        .title(Span::styled(title.to_string(), theme.text_style()));
    frame.render_widget(block, outer);
}

fn render_line(frame: &mut Frame, line: Line<'static>, x: u16, y: u16, area: Rect) {
    let rect = Rect::new(x, y, area.width.saturating_sub(x), 1).intersection(area);
    if rect.is_empty() {
        return;
    }
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(line), rect);
}

fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str, max_width: usize, style: Style) {
    if buf.area.contains(Position::new(x, y)) {
        buf.set_stringn(x, y, text, max_width, style);
    }
}

fn put_cell(buf: &mut Buffer, pos: Position, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut(pos) {
        cell.set_symbol(symbol).set_style(style);
    }
}
