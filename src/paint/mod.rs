pub mod buffer;
pub mod clip;
pub mod fill;
pub mod glyphs;
pub mod history;
pub mod model;
pub mod render;
pub mod save;
pub mod session;
pub mod settings;
pub mod settings_store;

pub use buffer::{PixelBuffer, Snapshot};
pub use history::PaintHistory;
pub use model::{BrushStyle, Color, Point, PointF, StrokeParams, Tool};
pub use session::{DisplaySurface, PaintSession, SessionCommand};
pub use settings::PaintSettings;
