//! Scrollbar layout and colour configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Color, Stroke};

/// Colours used when drawing tracks and thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarPalette {
    /// Track background.
    pub fill: Color,
    /// Track border and boundary line.
    pub border: Color,
    /// Overlay for the part of the vertical track beside the header.
    pub header_background: Color,
    /// Thumb at rest.
    pub thumb: Color,
    /// Thumb while hovered or dragged.
    pub thumb_focus: Color,
}

impl Default for ScrollbarPalette {
    fn default() -> Self {
        Self {
            fill: Color::rgb(0xff, 0xff, 0xff),
            border: Color::rgb(0xe1, 0xe6, 0xeb),
            header_background: Color::rgb(0xf8, 0xf8, 0xf9),
            thumb: Color::rgb(0xd8, 0xd8, 0xd8),
            thumb_focus: Color::rgb(0xa0, 0xa0, 0xa0),
        }
    }
}

/// Fixed layout constants for a [`ScrollController`](crate::ScrollController).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    /// Thickness of the track strip along the bottom and right edges.
    pub track_thickness: f32,

    /// Stroke width of the thumb capsule.
    pub thumb_thickness: f32,

    /// Thumbs are never shorter than this, however large the content.
    pub min_thumb_length: f32,

    /// Draw borders around tracks and the boundary line between them.
    pub border: bool,

    /// Width of track borders.
    pub border_width: f32,

    pub palette: ScrollbarPalette,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            track_thickness: 15.0,
            thumb_thickness: 10.0,
            min_thumb_length: 30.0,
            border: true,
            border_width: 1.0,
            palette: ScrollbarPalette::default(),
        }
    }
}

impl ScrollerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the track thickness.
    pub fn track_thickness(mut self, thickness: f32) -> Self {
        self.track_thickness = thickness;
        self
    }

    /// Set the thumb thickness.
    pub fn thumb_thickness(mut self, thickness: f32) -> Self {
        self.thumb_thickness = thickness;
        self
    }

    /// Set the minimum thumb length.
    pub fn min_thumb_length(mut self, length: f32) -> Self {
        self.min_thumb_length = length;
        self
    }

    /// Turn track borders on or off.
    pub fn border(mut self, enabled: bool) -> Self {
        self.border = enabled;
        self
    }

    /// Set the track border width.
    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    /// Replace the colour palette.
    pub fn palette(mut self, palette: ScrollbarPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Check that every length is positive and the thumb fits in its track.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("track_thickness", self.track_thickness)?;
        positive("thumb_thickness", self.thumb_thickness)?;
        positive("min_thumb_length", self.min_thumb_length)?;
        if self.border {
            positive("border_width", self.border_width)?;
        }
        if self.thumb_thickness > self.track_thickness {
            return Err(ConfigError::ThumbWiderThanTrack {
                thumb: self.thumb_thickness,
                track: self.track_thickness,
            });
        }
        Ok(())
    }

    /// Border stroke for track rectangles, if borders are on.
    pub(crate) fn track_border(&self) -> Option<Stroke> {
        self.border
            .then(|| Stroke::new(self.palette.border, self.border_width))
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThickness { name, value })
    }
}
