//! The grid side of the controller: size facts in, scroll offsets out.

use crate::axis::Axis;

/// Size facts the controller reads from its grid on every reset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Canvas width in pixels, including the vertical track.
    pub width: f32,
    /// Canvas height in pixels, including header and horizontal track.
    pub height: f32,
    /// Full scrollable content width.
    pub content_width: f32,
    /// Full scrollable content height.
    pub content_height: f32,
    /// Height of the header band above the vertical scroll region.
    pub header_height: f32,
}

impl ViewportMetrics {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            content_width: 0.0,
            content_height: 0.0,
            header_height: 0.0,
        }
    }

    pub fn content(mut self, width: f32, height: f32) -> Self {
        self.content_width = width;
        self.content_height = height;
        self
    }

    pub fn header(mut self, height: f32) -> Self {
        self.header_height = height;
        self
    }

    /// Viewport extent along `axis`.
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Content extent along `axis`.
    pub fn content_extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.content_width,
            Axis::Vertical => self.content_height,
        }
    }

    /// Space taken at the start of the track by fixed bands; only the
    /// vertical track sits below the header.
    pub fn leading_inset(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => 0.0,
            Axis::Vertical => self.header_height,
        }
    }
}

/// The grid a [`ScrollController`](crate::ScrollController) is bound to.
///
/// Scroll offsets are non-positive: they are the translation applied to
/// content when rendering, so scrolling right/down makes them more negative.
pub trait GridHost {
    /// Current viewport and content sizes.
    fn viewport_metrics(&self) -> ViewportMetrics;

    /// Current content offset along `axis`.
    fn scroll_offset(&self, axis: Axis) -> f32;

    /// Write a new content offset along `axis`.
    fn set_scroll_offset(&mut self, axis: Axis, value: f32);
}

/// In-memory grid holding its metrics and offsets directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridViewport {
    pub metrics: ViewportMetrics,
    pub scroll_x: f32,
    pub scroll_y: f32,
}

impl GridViewport {
    pub fn new(metrics: ViewportMetrics) -> Self {
        Self {
            metrics,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }
}

impl GridHost for GridViewport {
    fn viewport_metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    fn scroll_offset(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.scroll_x,
            Axis::Vertical => self.scroll_y,
        }
    }

    fn set_scroll_offset(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.scroll_x = value,
            Axis::Vertical => self.scroll_y = value,
        }
    }
}

impl<H: GridHost + ?Sized> GridHost for &mut H {
    fn viewport_metrics(&self) -> ViewportMetrics {
        (**self).viewport_metrics()
    }

    fn scroll_offset(&self, axis: Axis) -> f32 {
        (**self).scroll_offset(axis)
    }

    fn set_scroll_offset(&mut self, axis: Axis, value: f32) {
        (**self).set_scroll_offset(axis, value)
    }
}
