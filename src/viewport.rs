//! Screen layout and panning.
//!
//! Computes where the title, palette box, image box and footer sit for a
//! given terminal size, and which window of the image is visible in the
//! image box. Each image pixel takes two terminal cells horizontally and one
//! vertically so pixels look roughly square.
//!
//! ```text
//!  title                          <- padding_y
//!  ╭───────────────────────────╮  <- palette box
//!  │ hints                     │
//!  │ hue  sat  val  current    │
//!  ╰───────────────────────────╯
//!  ╭───────────────────────────╮  <- image box
//!  │ pixels ...                │
//!  ╰───────────────────────────╯
//!  footer hints (2 rows)
//! ```

use ratatui::layout::{Position, Size};

use crate::config::LayoutConfig;
use crate::geometry::{DrawBox, Point};

/// Terminal cells per image pixel, horizontally.
pub const CELLS_PER_PIXEL: u16 = 2;

/// Rows reserved at the bottom: two hint lines and a blank margin.
pub const FOOTER_ROWS: u16 = 3;

/// Height of the palette box including its border.
pub const PALETTE_BOX_HEIGHT: u16 = 4;

/// Narrowest palette section; fits the hint text at the default palette size.
const MIN_SECTION_WIDTH: u16 = 12;

/// Bordered box for an image of `image` pixels placed at `origin`.
///
/// Width is `image.width * 2 + border` capped to what is left of the
/// terminal right of `origin`; height is `image.height + border` capped to
/// the terminal height minus `chrome_rows`.
pub fn compute_image_box(
    terminal: Size,
    origin: Position,
    image: (u32, u32),
    chrome_rows: u16,
    border: u16,
) -> DrawBox {
    let frame = u32::from(border) * 2;
    let wanted_w = image.0.saturating_mul(u32::from(CELLS_PER_PIXEL)) + frame;
    let wanted_h = image.1 + frame;
    let avail_w = terminal.width.saturating_sub(origin.x);
    let avail_h = terminal.height.saturating_sub(chrome_rows);
    let width = wanted_w.min(u32::from(avail_w)) as u16;
    let height = wanted_h.min(u32::from(avail_h)) as u16;
    DrawBox::new(origin.x, origin.y, width, height, border)
}

/// Keep a pan offset inside `[0, image_extent - canvas_extent]`, wrapping.
///
/// Stepping past the far end wraps to 0 and stepping before 0 wraps to the
/// far end.
pub fn clamp_pan(image_extent: u32, canvas_extent: u32, requested: i64) -> u32 {
    let max = image_extent.saturating_sub(canvas_extent);
    if requested < 0 {
        max
    } else if requested > i64::from(max) {
        0
    } else {
        requested as u32
    }
}

/// Layout of every screen region plus the pan offset into the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    settings: LayoutConfig,
    palette_size: usize,
    image: (u32, u32),
    terminal: Size,
    padding_x: u16,
    pan_x: u32,
    pan_y: u32,
    palette_box: DrawBox,
    image_box: DrawBox,
}

impl Viewport {
    pub fn new(
        settings: LayoutConfig,
        palette_size: usize,
        image: (u32, u32),
        terminal: Size,
    ) -> Self {
        let mut viewport = Self {
            settings,
            palette_size,
            image,
            terminal,
            padding_x: 0,
            pan_x: 0,
            pan_y: 0,
            palette_box: DrawBox::new(0, 0, 0, 0, 0),
            image_box: DrawBox::new(0, 0, 0, 0, 0),
        };
        viewport.relayout();
        viewport
    }

    /// Recompute every region for a new terminal size.
    ///
    /// Pan offsets saturate into the new valid range rather than wrapping.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal = Size::new(width, height);
        self.relayout();
        self.pan_x = self.pan_x.min(self.max_pan_x());
        self.pan_y = self.pan_y.min(self.max_pan_y());
    }

    fn relayout(&mut self) {
        let content_w = u32::from(self.settings.min_width)
            .max(self.image.0.saturating_mul(u32::from(CELLS_PER_PIXEL)));
        let spare = u32::from(self.terminal.width).saturating_sub(content_w) / 2;
        self.padding_x = spare.clamp(1, u32::from(u16::MAX)) as u16;

        let section = self.section_width();
        let border = self.settings.border_size;
        self.palette_box = DrawBox::new(
            self.padding_x,
            self.settings.padding_y + 1,
            section.saturating_mul(4).saturating_add(1),
            PALETTE_BOX_HEIGHT,
            border,
        );

        let top = self.settings.padding_y + 1 + PALETTE_BOX_HEIGHT;
        self.image_box = compute_image_box(
            self.terminal,
            Position::new(self.padding_x, top),
            self.image,
            top.saturating_add(FOOTER_ROWS),
            border,
        );
    }

    /// Width of one palette section (hue, saturation, value, current).
    pub fn section_width(&self) -> u16 {
        let wanted = u16::try_from(self.palette_size + 1).unwrap_or(u16::MAX);
        wanted.max(MIN_SECTION_WIDTH)
    }

    pub fn terminal(&self) -> Size {
        self.terminal
    }

    pub fn padding_x(&self) -> u16 {
        self.padding_x
    }

    pub fn palette_box(&self) -> DrawBox {
        self.palette_box
    }

    pub fn image_box(&self) -> DrawBox {
        self.image_box
    }

    /// Where the title line starts.
    pub fn title_position(&self) -> Position {
        Position::new(self.padding_x, self.settings.padding_y)
    }

    /// Rows of the two footer hint lines.
    pub fn footer_rows(&self) -> (u16, u16) {
        let h = self.terminal.height;
        (h.saturating_sub(FOOTER_ROWS), h.saturating_sub(FOOTER_ROWS - 1))
    }

    /// Current pan offset (first visible column, first visible row).
    pub fn pan_offset(&self) -> (u32, u32) {
        (self.pan_x, self.pan_y)
    }

    /// Number of image columns that fit in the image box.
    pub fn visible_cols(&self) -> u32 {
        u32::from(self.image_box.canvas().width / CELLS_PER_PIXEL).min(self.image.0)
    }

    /// Number of image rows that fit in the image box.
    pub fn visible_rows(&self) -> u32 {
        u32::from(self.image_box.canvas().height).min(self.image.1)
    }

    fn max_pan_x(&self) -> u32 {
        self.image.0.saturating_sub(self.visible_cols())
    }

    fn max_pan_y(&self) -> u32 {
        self.image.1.saturating_sub(self.visible_rows())
    }

    /// Move the visible window by `(dx, dy)` pixels with wraparound.
    ///
    /// Returns true if the offset changed.
    pub fn pan(&mut self, dx: i64, dy: i64) -> bool {
        let before = (self.pan_x, self.pan_y);
        if dx != 0 {
            self.pan_x = clamp_pan(self.image.0, self.visible_cols(), i64::from(self.pan_x) + dx);
        }
        if dy != 0 {
            self.pan_y = clamp_pan(self.image.1, self.visible_rows(), i64::from(self.pan_y) + dy);
        }
        before != (self.pan_x, self.pan_y)
    }

    /// Shift the window the minimum amount needed to show `p`.
    ///
    /// Returns true if the offset changed.
    pub fn ensure_visible(&mut self, p: Point) -> bool {
        let before = (self.pan_x, self.pan_y);
        self.pan_x = follow(self.pan_x, self.visible_cols(), p.x);
        self.pan_y = follow(self.pan_y, self.visible_rows(), p.y);
        before != (self.pan_x, self.pan_y)
    }

    /// The point inside the visible window nearest to `p`.
    ///
    /// With nothing visible, `p` is returned unchanged.
    pub fn clamp_into_view(&self, p: Point) -> Point {
        let (cols, rows) = (self.visible_cols(), self.visible_rows());
        if cols == 0 || rows == 0 {
            return p;
        }
        Point::new(
            p.x.clamp(self.pan_x, self.pan_x + cols - 1),
            p.y.clamp(self.pan_y, self.pan_y + rows - 1),
        )
    }

    pub fn is_visible(&self, p: Point) -> bool {
        p.x >= self.pan_x
            && p.y >= self.pan_y
            && p.x - self.pan_x < self.visible_cols()
            && p.y - self.pan_y < self.visible_rows()
    }

    /// Screen position of the left cell of pixel `p`, if it is visible.
    pub fn to_screen(&self, p: Point) -> Option<Position> {
        if !self.is_visible(p) {
            return None;
        }
        let col = (p.x - self.pan_x) as u16 * CELLS_PER_PIXEL;
        let row = (p.y - self.pan_y) as u16;
        Some(self.image_box.point(col, row))
    }

    /// Every visible pixel with its screen position, row by row.
    pub fn visible_points(&self) -> impl Iterator<Item = (Point, Position)> + '_ {
        let (cols, rows) = (self.visible_cols(), self.visible_rows());
        (0..rows).flat_map(move |row| {
            (0..cols).map(move |col| {
                let p = Point::new(self.pan_x + col, self.pan_y + row);
                let pos = self
                    .image_box
                    .point(col as u16 * CELLS_PER_PIXEL, row as u16);
                (p, pos)
            })
        })
    }
}

/// New offset along one axis so that `target` falls inside `[offset, offset + span)`.
fn follow(offset: u32, span: u32, target: u32) -> u32 {
    if span == 0 {
        offset
    } else if target < offset {
        target
    } else if target >= offset + span {
        target + 1 - span
    } else {
        offset
    }
}
