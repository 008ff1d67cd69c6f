use crate::paint::buffer::PixelBuffer;
use crate::paint::fill::flood_fill;
use crate::paint::history::PaintHistory;
use crate::paint::model::{
    BrushStyle, Color, Point, StrokeParams, Tool, MAX_FONT_SIZE, MAX_THICKNESS,
};
use crate::paint::render::{
    brush_round_segment, calligraphy_segment, calligraphy_tail, draw_circle, draw_line, draw_rect,
    draw_text, draw_triangle, spray, stroke_path_segment,
};
use crate::paint::save::{encode_png, save_png};
use crate::paint::settings::PaintSettings;
use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

/// Requests the session hands back to the UI collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Text tool click: prompt for text, then call [`PaintSession::commit_text`].
    RequestText { at: Point },
}

/// Anything that can show the live canvas.
pub trait DisplaySurface {
    fn present(&mut self, width: u32, height: u32, rgba: &[u8]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    Shape {
        tool: Tool,
        start: Point,
    },
    Freehand {
        tool: Tool,
        last: Point,
        before: Option<Point>,
    },
}

/// The whole editing context: live buffer, history, current tool parameters
/// and the gesture in progress. The UI owns one session and forwards events.
#[derive(Debug)]
pub struct PaintSession {
    buffer: PixelBuffer,
    history: PaintHistory,
    params: StrokeParams,
    settings: PaintSettings,
    gesture: Option<Gesture>,
    rng: StdRng,
}

impl PaintSession {
    pub fn new(settings: PaintSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Session whose spray brush is reproducible.
    pub fn with_seed(settings: PaintSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut settings: PaintSettings, rng: StdRng) -> Self {
        settings.sanitize();
        let buffer = PixelBuffer::new(
            settings.canvas_width,
            settings.canvas_height,
            settings.background_color,
        );
        let history = PaintHistory::starting_from(&buffer, settings.history_capacity);
        Self {
            params: settings.initial_params(),
            buffer,
            history,
            settings,
            gesture: None,
            rng,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &PaintHistory {
        &self.history
    }

    pub fn params(&self) -> &StrokeParams {
        &self.params
    }

    pub fn settings(&self) -> &PaintSettings {
        &self.settings
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.finish_gesture();
        self.params.tool = tool;
    }

    pub fn set_brush_style(&mut self, style: BrushStyle) {
        self.params.brush_style = style;
    }

    pub fn set_color(&mut self, color: Color) {
        self.params.color = color.opaque();
    }

    /// Parses `#rrggbb`; a malformed value leaves the current color in place.
    pub fn set_color_hex(&mut self, value: &str) -> Result<()> {
        match Color::from_hex(value) {
            Ok(color) => {
                self.params.color = color;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(value, "rejected color input");
                Err(err)
            }
        }
    }

    pub fn set_thickness(&mut self, thickness: u32) -> Result<()> {
        if !(1..=MAX_THICKNESS).contains(&thickness) {
            bail!("thickness must be between 1 and {MAX_THICKNESS} pixels, got {thickness}");
        }
        self.params.thickness = thickness;
        Ok(())
    }

    pub fn set_font_size(&mut self, font_size: u32) -> Result<()> {
        if !(1..=MAX_FONT_SIZE).contains(&font_size) {
            bail!("font size must be between 1 and {MAX_FONT_SIZE} pixels, got {font_size}");
        }
        self.params.font_size = font_size;
        Ok(())
    }

    pub fn pointer_down(&mut self, point: Point) -> Option<SessionCommand> {
        self.finish_gesture();

        match self.params.tool {
            Tool::Fill => {
                if !self.buffer.contains_point(point) {
                    tracing::debug!(?point, "ignoring fill outside the canvas");
                    return None;
                }
                if flood_fill(&mut self.buffer, point, self.params.color) {
                    self.record("fill");
                }
                None
            }
            Tool::Text => Some(SessionCommand::RequestText { at: point }),
            tool if tool.is_freehand() => {
                self.gesture = Some(Gesture::Freehand {
                    tool,
                    last: point,
                    before: None,
                });
                None
            }
            tool => {
                self.gesture = Some(Gesture::Shape { tool, start: point });
                None
            }
        }
    }

    pub fn pointer_move(&mut self, point: Point) {
        let Some(gesture) = self.gesture else {
            return;
        };
        let StrokeParams {
            color,
            thickness,
            brush_style,
            ..
        } = self.params;

        match gesture {
            Gesture::Shape { tool, start } => {
                if let Some(base) = self.history.current() {
                    self.buffer.restore(base);
                }
                self.draw_shape(tool, start, point);
            }
            Gesture::Freehand { tool, last, before } => {
                match (tool, brush_style) {
                    (Tool::Eraser, _) => stroke_path_segment(
                        &mut self.buffer,
                        last,
                        point,
                        self.settings.background_color,
                        thickness,
                    ),
                    (_, BrushStyle::Round) => {
                        brush_round_segment(&mut self.buffer, last, point, color, thickness)
                    }
                    (_, BrushStyle::Spray) => {
                        spray(
                            &mut self.buffer,
                            point,
                            color,
                            thickness,
                            self.settings.spray_dots,
                            self.settings.spray_radius_factor,
                            &mut self.rng,
                        );
                    }
                    (_, BrushStyle::Calligraphy) => {
                        calligraphy_segment(
                            &mut self.buffer,
                            before,
                            last,
                            point,
                            color,
                            thickness,
                        );
                    }
                }
                self.gesture = Some(Gesture::Freehand {
                    tool,
                    last: point,
                    before: Some(last),
                });
            }
        }
    }

    /// Ends the current gesture and records it. Returns whether a gesture was
    /// active.
    pub fn pointer_up(&mut self) -> bool {
        self.finish_gesture()
    }

    /// Leaving the canvas ends a gesture exactly like releasing the button.
    pub fn pointer_leave(&mut self) -> bool {
        self.finish_gesture()
    }

    /// Places text with its baseline starting at `at`. Empty text (a
    /// cancelled prompt) changes nothing and records nothing.
    pub fn commit_text(&mut self, at: Point, text: &str) -> bool {
        if text.is_empty() {
            tracing::debug!(?at, "text prompt cancelled");
            return false;
        }
        draw_text(
            &mut self.buffer,
            at,
            text,
            self.params.color,
            self.params.font_size,
        );
        self.record("text");
        true
    }

    /// Paints the background over everything and starts a fresh history.
    pub fn clear(&mut self) {
        self.gesture = None;
        self.buffer.clear(self.settings.background_color);
        self.history.reset(&self.buffer);
        tracing::debug!("canvas cleared");
    }

    pub fn undo(&mut self) -> bool {
        self.finish_gesture();
        self.history.undo(&mut self.buffer)
    }

    pub fn redo(&mut self) -> bool {
        self.finish_gesture();
        self.history.redo(&mut self.buffer)
    }

    /// Resizes the canvas, keeping the top-left overlap. History is restarted
    /// because older snapshots no longer fit the buffer.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            bail!("canvas size must be non-zero, got {width}x{height}");
        }
        self.gesture = None;
        self.buffer = self
            .buffer
            .resized(width, height, self.settings.background_color);
        self.history.reset(&self.buffer);
        tracing::debug!(width, height, "canvas resized; history restarted");
        Ok(())
    }

    pub fn export_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.buffer)
    }

    pub fn export_to_dir(&self, output_dir: &Path) -> Result<PathBuf> {
        save_png(&self.buffer, output_dir, &self.settings.export_file_name)
            .context("export canvas")
    }

    pub fn present<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        surface.present(
            self.buffer.width(),
            self.buffer.height(),
            self.buffer.pixels(),
        );
    }

    fn draw_shape(&mut self, tool: Tool, start: Point, end: Point) {
        let StrokeParams {
            color, thickness, ..
        } = self.params;
        match tool {
            Tool::Line => {
                draw_line(&mut self.buffer, start, end, color, thickness);
            }
            Tool::Rectangle => draw_rect(
                &mut self.buffer,
                start,
                end.x.saturating_sub(start.x),
                end.y.saturating_sub(start.y),
                color,
                thickness,
            ),
            Tool::Circle => {
                let radius = start.to_f64().distance(end.to_f64());
                draw_circle(&mut self.buffer, start, radius, color, thickness);
            }
            Tool::Triangle => {
                draw_triangle(&mut self.buffer, start, end, color, thickness);
            }
            Tool::Brush | Tool::Eraser | Tool::Fill | Tool::Text => {}
        }
    }

    fn finish_gesture(&mut self) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        let label = match gesture {
            Gesture::Shape { .. } => "shape",
            Gesture::Freehand {
                tool: Tool::Brush,
                last,
                before: Some(before),
            } if self.params.brush_style == BrushStyle::Calligraphy => {
                calligraphy_tail(
                    &mut self.buffer,
                    before,
                    last,
                    self.params.color,
                    self.params.thickness,
                );
                "stroke"
            }
            Gesture::Freehand { .. } => "stroke",
        };
        self.record(label);
        true
    }

    fn record(&mut self, action: &str) {
        self.history.record(&self.buffer);
        tracing::debug!(
            action,
            depth = self.history.len(),
            index = self.history.index(),
            "recorded history snapshot"
        );
    }
}
