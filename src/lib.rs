pub mod logging;
pub mod paint;

pub use paint::{
    BrushStyle, Color, DisplaySurface, PaintSession, PaintSettings, PixelBuffer, Point,
    SessionCommand, Tool,
};
