pub mod axis;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod geometry;
pub mod hit;
pub mod host;
pub mod layout;
pub mod render;
pub mod types;

pub use axis::{Axis, AxisScroller, UnknownAxis};
pub use config::{ScrollbarPalette, ScrollerConfig};
pub use controller::ScrollController;
pub use error::ConfigError;
pub use event::PointerEvent;
pub use host::{GridHost, GridViewport, ViewportMetrics};
pub use layout::{Point, Rect};
pub use render::{Canvas, DrawCommand, DrawList, Painter};
pub use types::*;
