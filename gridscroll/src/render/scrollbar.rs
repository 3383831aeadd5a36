use super::Painter;
use crate::axis::AxisScroller;
use crate::config::ScrollerConfig;
use crate::host::ViewportMetrics;
use crate::layout::{Point, Rect};
use crate::types::{LineStyle, RectStyle};

/// Emit tracks and thumbs for both axes.
///
/// The vertical track is painted after the horizontal one and the header
/// overlay after the full vertical track, so later commands sit on top.
pub fn draw_scrollbars(
    painter: &mut impl Painter,
    metrics: &ViewportMetrics,
    config: &ScrollerConfig,
    horizontal: &AxisScroller,
    vertical: &AxisScroller,
) {
    let track = config.track_thickness;
    let track_x = metrics.width - track;
    let track_y = metrics.height - track;
    let track_center = track / 2.0;
    let cap_inset = config.thumb_thickness / 2.0;
    let border = config.track_border();

    let track_style = RectStyle::filled(config.palette.fill).border_opt(border);

    // Horizontal track, running under the vertical one into the corner
    painter.draw_rect(Rect::new(0.0, track_y, track_x + track, track), &track_style);

    if let Some(stroke) = border {
        painter.draw_line(
            &[
                Point::new(track_x, track_y),
                Point::new(track_x, track_y + track),
            ],
            &LineStyle::new(stroke.color, stroke.width),
        );
    }

    if horizontal.enabled {
        let start = horizontal.thumb_offset + cap_inset;
        let y = track_y + track_center;
        painter.draw_line(
            &[
                Point::new(start, y),
                Point::new(start + horizontal.thumb_length, y),
            ],
            &thumb_style(config, horizontal),
        );
    }

    // Vertical track
    painter.draw_rect(Rect::new(track_x, 0.0, track, track_y), &track_style);

    // Header band beside the vertical track
    painter.draw_rect(
        Rect::new(track_x, 0.0, track, metrics.header_height),
        &RectStyle::filled(config.palette.header_background).border_opt(border),
    );

    if vertical.enabled {
        let start = vertical.thumb_offset + cap_inset + metrics.header_height;
        let x = track_x + track_center;
        painter.draw_line(
            &[
                Point::new(x, start),
                Point::new(x, start + vertical.thumb_length),
            ],
            &thumb_style(config, vertical),
        );
    }
}

fn thumb_style(config: &ScrollerConfig, scroller: &AxisScroller) -> LineStyle {
    let color = if scroller.is_emphasized() {
        config.palette.thumb_focus
    } else {
        config.palette.thumb
    };
    LineStyle::new(color, config.thumb_thickness).round()
}
