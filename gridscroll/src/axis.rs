use std::fmt;
use std::str::FromStr;

/// Scroll direction a scrollbar controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Bottom-edge scrollbar, moves content along x.
    Horizontal,
    /// Right-edge scrollbar, moves content along y.
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Horizontal => "HORIZONTAL",
            Axis::Vertical => "VERTICAL",
        }
    }

    /// Pick the pointer coordinate that runs along this axis.
    pub fn along(&self, x: f32, y: f32) -> f32 {
        match self {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither axis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown axis: {0:?}")]
pub struct UnknownAxis(pub String);

impl FromStr for Axis {
    type Err = UnknownAxis;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HORIZONTAL" => Ok(Axis::Horizontal),
            "VERTICAL" => Ok(Axis::Vertical),
            other => Err(UnknownAxis(other.to_string())),
        }
    }
}

/// Per-axis scrollbar state.
///
/// Geometry fields (`thumb_length`, `scale_ratio`, `enabled`) are fixed
/// between resets; `thumb_offset`, `dragging` and `hovered` change with
/// pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisScroller {
    pub(crate) thumb_offset: f32,
    pub(crate) dragging: bool,
    pub(crate) hovered: bool,
    pub(crate) thumb_length: f32,
    pub(crate) scale_ratio: f32,
    pub(crate) enabled: bool,
}

impl AxisScroller {
    /// State for an axis that has no scrollbar.
    pub const fn disabled() -> Self {
        Self {
            thumb_offset: 0.0,
            dragging: false,
            hovered: false,
            thumb_length: 0.0,
            scale_ratio: 0.0,
            enabled: false,
        }
    }

    /// Pixel offset of the thumb along its track.
    pub fn thumb_offset(&self) -> f32 {
        self.thumb_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn thumb_length(&self) -> f32 {
        self.thumb_length
    }

    /// Thumb pixels per unit of content offset; `0` when disabled.
    pub fn scale_ratio(&self) -> f32 {
        self.scale_ratio
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the thumb should be drawn in its focus colour.
    pub fn is_emphasized(&self) -> bool {
        self.dragging || self.hovered
    }
}
