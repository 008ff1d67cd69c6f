use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$").expect("valid hex color pattern")
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Line,
    Rectangle,
    Circle,
    Triangle,
    Brush,
    Eraser,
    Fill,
    Text,
}

impl Tool {
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BrushStyle {
    #[default]
    Round,
    Spray,
    Calligraphy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color; every draw operation writes alpha 255.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Parses `#rrggbb` (the `#` may be omitted, digits are case-insensitive).
    pub fn from_hex(value: &str) -> Result<Self> {
        let caps = HEX_COLOR
            .captures(value.trim())
            .ok_or_else(|| anyhow!("invalid color {value:?}: expected #rrggbb"))?;
        let channel = |idx: usize| -> Result<u8> {
            u8::from_str_radix(&caps[idx], 16)
                .map_err(|err| anyhow!("invalid color channel in {value:?}: {err}"))
        };
        Ok(Self::rgb(channel(1)?, channel(2)?, channel(3)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_f64(self) -> PointF {
        PointF::new(self.x as f64, self.y as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn round(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }

    pub fn midpoint(self, other: PointF) -> PointF {
        PointF::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    pub fn distance(self, other: PointF) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Largest accepted stroke thickness in pixels.
pub const MAX_THICKNESS: u32 = 1024;
/// Largest accepted font size in pixels.
pub const MAX_FONT_SIZE: u32 = 1024;

/// Everything the UI collaborator configures for the next draw action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrokeParams {
    pub tool: Tool,
    pub color: Color,
    pub thickness: u32,
    pub brush_style: BrushStyle,
    pub font_size: u32,
}

impl Default for StrokeParams {
    fn default() -> Self {
        Self {
            tool: Tool::Line,
            color: Color::BLACK,
            thickness: 5,
            brush_style: BrushStyle::Round,
            font_size: 16,
        }
    }
}
