//! Pointer hit tests against scrollbar tracks and thumbs.
//!
//! Track regions drive hover highlighting; thumb regions start drags. The
//! horizontal and vertical shapes are intentionally not mirror images: the
//! horizontal track stops short of the bottom edge while its thumb reaches
//! it, and the vertical track stops short of the right edge.

use crate::axis::{Axis, AxisScroller};
use crate::config::ScrollerConfig;
use crate::host::ViewportMetrics;

/// Is the pointer over the horizontal track strip?
pub fn in_horizontal_track(
    metrics: &ViewportMetrics,
    config: &ScrollerConfig,
    x: f32,
    y: f32,
) -> bool {
    let track = config.track_thickness;
    let inset = (track - config.thumb_thickness) / 2.0;
    x >= 0.0
        && x <= metrics.width - track
        && y > metrics.height - track
        && y < metrics.height - inset
}

/// Is the pointer over the horizontal thumb?
pub fn in_horizontal_thumb(
    metrics: &ViewportMetrics,
    config: &ScrollerConfig,
    scroller: &AxisScroller,
    x: f32,
    y: f32,
) -> bool {
    let start = scroller.thumb_offset;
    scroller.enabled
        && x >= start
        && x <= start + scroller.thumb_length + config.thumb_thickness
        && y > metrics.height - config.track_thickness
        && y < metrics.height
}

/// Is the pointer over the vertical track strip, below the header?
pub fn in_vertical_track(
    metrics: &ViewportMetrics,
    config: &ScrollerConfig,
    x: f32,
    y: f32,
) -> bool {
    let track = config.track_thickness;
    let inset = (track - config.thumb_thickness) / 2.0;
    x > metrics.width - track
        && x < metrics.width - inset
        && y > metrics.header_height
        && y < metrics.height - track
}

/// Is the pointer over the vertical thumb?
pub fn in_vertical_thumb(
    metrics: &ViewportMetrics,
    config: &ScrollerConfig,
    scroller: &AxisScroller,
    x: f32,
    y: f32,
) -> bool {
    let start = metrics.header_height + scroller.thumb_offset;
    scroller.enabled
        && x > metrics.width - config.track_thickness
        && x < metrics.width
        && y > start
        && y < start + scroller.thumb_length + config.thumb_thickness
}

/// Track hit test for `axis`.
pub fn in_track(
    axis: Axis,
    metrics: &ViewportMetrics,
    config: &ScrollerConfig,
    x: f32,
    y: f32,
) -> bool {
    match axis {
        Axis::Horizontal => in_horizontal_track(metrics, config, x, y),
        Axis::Vertical => in_vertical_track(metrics, config, x, y),
    }
}

/// Thumb hit test for `axis`.
pub fn in_thumb(
    axis: Axis,
    metrics: &ViewportMetrics,
    config: &ScrollerConfig,
    scroller: &AxisScroller,
    x: f32,
    y: f32,
) -> bool {
    match axis {
        Axis::Horizontal => in_horizontal_thumb(metrics, config, scroller, x, y),
        Axis::Vertical => in_vertical_thumb(metrics, config, scroller, x, y),
    }
}
