//! Image points and bordered screen boxes.
//!
//! Two coordinate spaces meet here: [`Point`] addresses pixels of the image
//! being edited, while [`DrawBox`] lives in terminal cells and converts its
//! content-local coordinates to absolute screen positions. Every piece of
//! layout (image cells, palette swatches, text) goes through
//! [`DrawBox::point`] so border handling stays in one place.

use std::fmt;

use ratatui::layout::{Margin, Position, Rect};

/// A pixel coordinate inside the edited image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Offset by a signed delta, returning `None` when a coordinate would go negative.
    pub fn checked_offset(self, dx: i64, dy: i64) -> Option<Point> {
        let x = u32::try_from(i64::from(self.x) + dx).ok()?;
        let y = u32::try_from(i64::from(self.y) + dy).ok()?;
        Some(Point::new(x, y))
    }

    /// The four edge-adjacent neighbours that do not underflow.
    ///
    /// Upper bounds are the caller's business; only the image knows them.
    pub fn neighbors(self) -> impl Iterator<Item = Point> {
        [(0, -1), (0, 1), (-1, 0), (1, 0)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.checked_offset(dx, dy))
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned screen rectangle with a fixed border thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawBox {
    area: Rect,
    border: u16,
}

impl DrawBox {
    /// Box whose top-left corner is `(x, y)` spanning `width` x `height` cells.
    pub fn new(x: u16, y: u16, width: u16, height: u16, border: u16) -> Self {
        Self {
            area: Rect::new(x, y, width, height),
            border,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn border(&self) -> u16 {
        self.border
    }

    /// The drawable content area: the box inset by the border on every side.
    pub fn canvas(&self) -> Rect {
        self.area.inner(Margin::new(self.border, self.border))
    }

    /// Convert content-local coordinates to an absolute screen position.
    pub fn point(&self, x: u16, y: u16) -> Position {
        Position::new(
            self.area.x.saturating_add(self.border).saturating_add(x),
            self.area.y.saturating_add(self.border).saturating_add(y),
        )
    }
}
