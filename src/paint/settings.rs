use serde::{Deserialize, Serialize};

use crate::paint::history::DEFAULT_HISTORY_CAPACITY;
use crate::paint::model::{BrushStyle, Color, StrokeParams, Tool, MAX_FONT_SIZE, MAX_THICKNESS};
use crate::paint::save::EXPORT_FILE_NAME;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaintSettings {
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    #[serde(default = "default_spray_dots")]
    pub spray_dots: u32,
    #[serde(default = "default_spray_radius_factor")]
    pub spray_radius_factor: f64,
    #[serde(default = "default_initial_tool")]
    pub initial_tool: Tool,
    #[serde(default = "default_initial_color")]
    pub initial_color: Color,
    #[serde(default = "default_initial_thickness")]
    pub initial_thickness: u32,
    #[serde(default = "default_initial_font_size")]
    pub initial_font_size: u32,
    #[serde(default)]
    pub initial_brush_style: BrushStyle,
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background_color() -> Color {
    Color::WHITE
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_spray_dots() -> u32 {
    20
}

fn default_spray_radius_factor() -> f64 {
    1.5
}

fn default_initial_tool() -> Tool {
    Tool::Line
}

fn default_initial_color() -> Color {
    Color::BLACK
}

fn default_initial_thickness() -> u32 {
    5
}

fn default_initial_font_size() -> u32 {
    16
}

fn default_export_file_name() -> String {
    EXPORT_FILE_NAME.to_owned()
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            background_color: default_background_color(),
            history_capacity: default_history_capacity(),
            spray_dots: default_spray_dots(),
            spray_radius_factor: default_spray_radius_factor(),
            initial_tool: default_initial_tool(),
            initial_color: default_initial_color(),
            initial_thickness: default_initial_thickness(),
            initial_font_size: default_initial_font_size(),
            initial_brush_style: BrushStyle::default(),
            export_file_name: default_export_file_name(),
            debug_logging: false,
        }
    }
}

impl PaintSettings {
    pub fn initial_params(&self) -> StrokeParams {
        StrokeParams {
            tool: self.initial_tool,
            color: self.initial_color.opaque(),
            thickness: self.initial_thickness,
            brush_style: self.initial_brush_style,
            font_size: self.initial_font_size,
        }
    }

    /// Replaces values the session cannot work with by their defaults.
    /// Returns whether anything changed.
    pub fn sanitize(&mut self) -> bool {
        let mut changed = false;

        if self.canvas_width == 0 {
            self.canvas_width = default_canvas_width();
            changed = true;
        }
        if self.canvas_height == 0 {
            self.canvas_height = default_canvas_height();
            changed = true;
        }
        if self.history_capacity == 0 {
            self.history_capacity = default_history_capacity();
            changed = true;
        }
        if self.initial_thickness == 0 {
            self.initial_thickness = default_initial_thickness();
            changed = true;
        } else if self.initial_thickness > MAX_THICKNESS {
            self.initial_thickness = MAX_THICKNESS;
            changed = true;
        }
        if self.initial_font_size == 0 {
            self.initial_font_size = default_initial_font_size();
            changed = true;
        } else if self.initial_font_size > MAX_FONT_SIZE {
            self.initial_font_size = MAX_FONT_SIZE;
            changed = true;
        }
        if !(self.spray_radius_factor.is_finite() && self.spray_radius_factor > 0.0) {
            self.spray_radius_factor = default_spray_radius_factor();
            changed = true;
        }
        if self.export_file_name.trim().is_empty() {
            self.export_file_name = default_export_file_name();
            changed = true;
        }

        let opaque = self.background_color.opaque();
        changed |= opaque != self.background_color;
        self.background_color = opaque;

        changed
    }
}
