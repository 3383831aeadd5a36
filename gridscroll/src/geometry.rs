//! Scrollbar geometry derived from viewport and content sizes.

use crate::axis::{Axis, AxisScroller};
use crate::config::ScrollerConfig;
use crate::host::ViewportMetrics;

/// Compute fresh scroller state for `axis`, with the thumb at rest.
///
/// Thumb sizing and enablement use two different thresholds: the thumb is
/// sized from the visible window (which excludes the header on the vertical
/// axis) while enablement compares content against the viewport minus one
/// track. With a header, the vertical axis can get a thumb length and still
/// be disabled.
pub fn compute_scroller(
    metrics: &ViewportMetrics,
    axis: Axis,
    config: &ScrollerConfig,
) -> AxisScroller {
    let extent = metrics.extent(axis);
    let content = metrics.content_extent(axis);
    let track = config.track_thickness;

    if !(extent.is_finite() && content.is_finite()) || extent <= 0.0 || content <= 0.0 {
        log::debug!(
            "[scroll] {} disabled: degenerate extents viewport={} content={}",
            axis,
            extent,
            content
        );
        return AxisScroller::disabled();
    }

    let visible = extent - track - metrics.leading_inset(axis);
    let size_ratio = visible / content;
    let thumb_length = if size_ratio >= 1.0 {
        0.0
    } else {
        (size_ratio * visible).floor().max(config.min_thumb_length)
    };

    let enabled = content > extent - track;
    if !enabled {
        return AxisScroller {
            thumb_length,
            ..AxisScroller::disabled()
        };
    }

    let travel = track_travel(metrics, axis, thumb_length, config);
    let overscroll = content + track - extent;
    let scale_ratio = travel / overscroll;
    if !scale_ratio.is_finite() || scale_ratio <= 0.0 {
        log::debug!(
            "[scroll] {} disabled: no thumb travel (travel={}, overscroll={})",
            axis,
            travel,
            overscroll
        );
        return AxisScroller {
            thumb_length,
            ..AxisScroller::disabled()
        };
    }

    AxisScroller {
        thumb_offset: 0.0,
        dragging: false,
        hovered: false,
        thumb_length,
        scale_ratio,
        enabled: true,
    }
}

/// Distance the thumb can move along its track.
pub fn track_travel(
    metrics: &ViewportMetrics,
    axis: Axis,
    thumb_length: f32,
    config: &ScrollerConfig,
) -> f32 {
    metrics.extent(axis)
        - metrics.leading_inset(axis)
        - thumb_length
        - config.track_thickness
        - config.thumb_thickness
}

/// Content offset that lines the content's trailing edge up with the
/// viewport's trailing edge.
pub fn far_extreme(metrics: &ViewportMetrics, axis: Axis, config: &ScrollerConfig) -> f32 {
    metrics.extent(axis) - metrics.content_extent(axis) - config.track_thickness
}

/// Map a content offset to a thumb offset, kept on the track.
pub fn thumb_offset_for(scroll_offset: f32, scroller: &AxisScroller, travel: f32) -> f32 {
    if !scroller.enabled {
        return 0.0;
    }
    let offset = -(scroll_offset * scroller.scale_ratio).trunc();
    offset.clamp(0.0, travel.max(0.0))
}
