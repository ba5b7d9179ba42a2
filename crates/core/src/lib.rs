//! Geometry and layout engine for an analog clock face.
//!
//! The host supplies a viewport size and a time of day; the core answers
//! with an ordered list of [`clockface_protocol::RenderCommand`]s. Nothing
//! here touches a window, a timer or a font rasterizer directly.

pub mod config;
pub mod error;
pub mod face;
pub mod geometry;
pub mod layout;
pub mod source;
pub mod state;
pub mod svg;
pub mod text;
pub mod time;

pub use config::{FaceConfig, FaceStyle, HandSpec, SecondMotion, ShapeStyle, TickSpec};
pub use error::{ConfigError, GeometryError, RenderError, TimeComponentError};
pub use face::{FaceRenderer, HOUR_MARKS, TickMark, render_face};
pub use layout::{ViewportMetrics, compute_metrics};
pub use source::{FixedClock, LocalClock, TICK_INTERVAL, Ticker, TimeSource};
pub use state::ClockState;
pub use text::{MonospaceMetrics, TextMeasure};
pub use time::DialTime;
