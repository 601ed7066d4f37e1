use image::RgbaImage;
use ratatui::layout::Size;
use tracing::{debug, info, warn};

use super::command::{step, Command, Outcome, Redraw, Step};
use super::{ImageSink, Mode};
use crate::color::{parse_hex, Axis, Color, Direction, Palette, ParseColorError, PenColor, BLACK};
use crate::config::{Config, LayoutConfig};
use crate::error::EditorError;
use crate::geometry::Point;
use crate::history::History;
use crate::layered_image::LayeredImage;
use crate::viewport::Viewport;

/// Construction parameters for [`EditorState`].
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    pub palette_size: usize,
    pub pen_color: Color,
    pub layout: LayoutConfig,
    pub terminal: Size,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            palette_size: 11,
            pen_color: BLACK,
            layout: LayoutConfig::default(),
            terminal: Size::new(80, 24),
        }
    }
}

impl EditorOptions {
    /// Options from the `[editor]` and `[layout]` config sections.
    pub fn from_config(config: &Config, terminal: Size) -> Result<Self, ParseColorError> {
        Ok(Self {
            palette_size: config.editor.palette_size,
            pen_color: parse_hex(&config.editor.pen_color)?,
            layout: config.layout.clone(),
            terminal,
        })
    }
}

/// Everything the editor knows: image, edits, pen, layout and mode.
#[derive(Debug, Clone)]
pub struct EditorState {
    identifier: String,
    mode: Mode,
    cursor: Point,
    image: LayeredImage,
    history: History,
    pen: PenColor,
    viewport: Viewport,
}

impl EditorState {
    /// Editor over `base` with a black pen and the default layout.
    pub fn new(
        identifier: impl Into<String>,
        base: RgbaImage,
        palette_size: usize,
    ) -> Result<Self, EditorError> {
        let options = EditorOptions {
            palette_size,
            ..EditorOptions::default()
        };
        Self::with_options(identifier, base, &options)
    }

    pub fn with_options(
        identifier: impl Into<String>,
        base: RgbaImage,
        options: &EditorOptions,
    ) -> Result<Self, EditorError> {
        let (width, height) = base.dimensions();
        if width == 0 || height == 0 {
            return Err(EditorError::EmptyImage { width, height });
        }
        let pen = PenColor::new(options.pen_color, options.palette_size)?;
        let viewport = Viewport::new(
            options.layout.clone(),
            options.palette_size,
            (width, height),
            options.terminal,
        );
        let identifier = identifier.into();
        debug!(%identifier, width, height, "editor ready");
        Ok(Self {
            identifier,
            mode: Mode::Drawing,
            cursor: Point::default(),
            image: LayeredImage::new(base),
            history: History::new(),
            pen,
            viewport,
        })
    }

    // Queries

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn image(&self) -> &LayeredImage {
        &self.image
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn pen(&self) -> &PenColor {
        &self.pen
    }

    pub fn pen_color(&self) -> Color {
        self.pen.color()
    }

    pub fn palette(&self, axis: Axis) -> &Palette {
        self.pen.palette(axis)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Displayed colour at `p`, overlay first.
    pub fn pixel(&self, p: Point) -> Color {
        self.image.get(p)
    }

    pub fn has_pending_changes(&self) -> bool {
        self.history.has_pending_changes()
    }

    /// The image as it would be saved.
    pub fn composed(&self) -> RgbaImage {
        self.image.compose()
    }

    // Commands

    /// Run one command to completion.
    ///
    /// `sink` is only used by a confirmed exit. A failing save leaves the
    /// editor in `ConfirmExit` with every edit intact.
    pub fn apply<S>(&mut self, command: Command, sink: &mut S) -> Result<Outcome, EditorError>
    where
        S: ImageSink + ?Sized,
    {
        if step(self.mode, &command, self.has_pending_changes()) == Step::SaveAndQuit {
            self.save(sink)?;
            return Ok(Outcome::quit());
        }
        Ok(self.dispatch(command))
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) -> Outcome {
        self.dispatch(Command::MoveCursor { dx, dy })
    }

    pub fn paint(&mut self) -> Outcome {
        self.dispatch(Command::Paint)
    }

    pub fn undo(&mut self) -> Outcome {
        self.dispatch(Command::Undo)
    }

    pub fn flood_fill_at_cursor(&mut self) -> Outcome {
        self.dispatch(Command::FloodFill)
    }

    pub fn change_hue(&mut self, direction: Direction) -> Outcome {
        self.dispatch(Command::ChangeColor(Axis::Hue, direction))
    }

    pub fn change_saturation(&mut self, direction: Direction) -> Outcome {
        self.dispatch(Command::ChangeColor(Axis::Saturation, direction))
    }

    pub fn change_value(&mut self, direction: Direction) -> Outcome {
        self.dispatch(Command::ChangeColor(Axis::Value, direction))
    }

    pub fn pan(&mut self, dx: i32, dy: i32) -> Outcome {
        self.dispatch(Command::Pan { dx, dy })
    }

    pub fn request_exit(&mut self) -> Outcome {
        self.dispatch(Command::RequestExit)
    }

    pub fn confirm_exit<S>(&mut self, sink: &mut S) -> Result<Outcome, EditorError>
    where
        S: ImageSink + ?Sized,
    {
        self.apply(Command::ConfirmExit, sink)
    }

    pub fn cancel_exit(&mut self) -> Outcome {
        self.dispatch(Command::CancelExit)
    }

    pub fn on_resize(&mut self, width: u16, height: u16) -> Outcome {
        self.dispatch(Command::Resize { width, height })
    }

    /// Hand the composed image to `sink` under this editor's identifier.
    pub fn save<S>(&mut self, sink: &mut S) -> Result<(), EditorError>
    where
        S: ImageSink + ?Sized,
    {
        let image = self.image.compose();
        if let Err(e) = sink.save(&self.identifier, &image) {
            let source: Box<dyn std::error::Error + Send + Sync> = e.into();
            warn!(identifier = %self.identifier, error = %source, "save failed");
            return Err(EditorError::SaveFailure {
                identifier: self.identifier.clone(),
                source,
            });
        }
        info!(identifier = %self.identifier, edits = self.history.len(), "saved image");
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Outcome {
        match step(self.mode, &command, self.has_pending_changes()) {
            Step::Apply => self.execute(command),
            Step::Ignore => Outcome::unchanged(),
            Step::Enter(mode) => {
                debug!(from = ?self.mode, to = ?mode, "mode change");
                self.mode = mode;
                Outcome::redraw(Redraw::Full)
            }
            Step::Quit => Outcome::quit(),
            Step::SaveAndQuit => {
                warn!("exit confirmation needs a save sink; ignored");
                Outcome::unchanged()
            }
        }
    }

    fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::MoveCursor { dx, dy } => self.execute_move(dx, dy),
            Command::Paint => {
                let color = self.pen.color();
                self.history.append(&mut self.image, self.cursor, color);
                Outcome::points(vec![self.cursor])
            }
            Command::Undo => Outcome::points(self.history.undo(&mut self.image)),
            Command::FloodFill => {
                let color = self.pen.color();
                let filled = self.image.flood_fill(self.cursor, color);
                // The fill wrote every cell; only log them.
                self.history
                    .record_stroke(filled.iter().map(|p| (*p, color)));
                Outcome::points(filled)
            }
            Command::ChangeColor(axis, direction) => {
                if self.pen.change(axis, direction) {
                    Outcome::redraw(Redraw::Palette)
                } else {
                    Outcome::unchanged()
                }
            }
            Command::Pan { dx, dy } => {
                if self.viewport.pan(i64::from(dx), i64::from(dy)) {
                    // The cursor rides along at the window edge.
                    self.cursor = self.viewport.clamp_into_view(self.cursor);
                    Outcome::redraw(Redraw::Full)
                } else {
                    Outcome::unchanged()
                }
            }
            Command::Resize { width, height } => {
                self.viewport.resize(width, height);
                self.viewport.ensure_visible(self.cursor);
                Outcome::redraw(Redraw::Full)
            }
            Command::RequestExit | Command::ConfirmExit | Command::CancelExit => {
                Outcome::unchanged()
            }
        }
    }

    fn execute_move(&mut self, dx: i32, dy: i32) -> Outcome {
        let old = self.cursor;
        let x = wrap(old.x, dx, self.image.width());
        let y = wrap(old.y, dy, self.image.height());
        self.cursor = Point::new(x, y);
        if self.viewport.ensure_visible(self.cursor) {
            Outcome::redraw(Redraw::Full)
        } else if old == self.cursor {
            Outcome::unchanged()
        } else {
            Outcome::points(vec![old, self.cursor])
        }
    }
}

fn wrap(value: u32, delta: i32, extent: u32) -> u32 {
    (i64::from(value) + i64::from(delta)).rem_euclid(i64::from(extent)) as u32
}
