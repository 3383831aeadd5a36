use crate::axis::{Axis, AxisScroller};
use crate::config::ScrollerConfig;
use crate::event::PointerEvent;
use crate::geometry;
use crate::hit;
use crate::host::{GridHost, ViewportMetrics};
use crate::render::{draw_scrollbars, Painter};

/// Two-axis scrollbar controller bound to one grid.
///
/// Owns thumb geometry and drag state; the grid owns the content offsets,
/// which this controller reads and writes through [`GridHost`].
///
/// # Example
///
/// ```
/// use gridscroll::{Axis, DrawList, GridViewport, ScrollController, ScrollerConfig, ViewportMetrics};
///
/// let metrics = ViewportMetrics::new(800.0, 600.0).content(2000.0, 1200.0).header(30.0);
/// let mut scroller = ScrollController::new(GridViewport::new(metrics), ScrollerConfig::default());
/// scroller.reset();
///
/// scroller.update(-100.0, Axis::Vertical);
/// assert_eq!(scroller.host().scroll_y, -100.0);
///
/// let mut list = DrawList::new();
/// scroller.draw(&mut list);
/// assert!(!list.is_empty());
/// ```
#[derive(Debug)]
pub struct ScrollController<H: GridHost> {
    host: H,
    config: ScrollerConfig,
    /// Metrics captured at the last reset.
    metrics: ViewportMetrics,
    horizontal: AxisScroller,
    vertical: AxisScroller,
    /// Pointer coordinate along the dragged axis at the previous event.
    anchor: f32,
}

impl<H: GridHost> ScrollController<H> {
    /// Bind a controller to `host`. Call [`reset`](Self::reset) before use.
    pub fn new(host: H, config: ScrollerConfig) -> Self {
        let metrics = host.viewport_metrics();
        Self {
            host,
            config,
            metrics,
            horizontal: AxisScroller::disabled(),
            vertical: AxisScroller::disabled(),
            anchor: 0.0,
        }
    }

    /// Recompute all geometry from the host's current sizes.
    ///
    /// Thumbs and content offsets snap back to zero and any drag in
    /// progress ends.
    pub fn reset(&mut self) {
        self.metrics = self.host.viewport_metrics();
        self.horizontal = geometry::compute_scroller(&self.metrics, Axis::Horizontal, &self.config);
        self.vertical = geometry::compute_scroller(&self.metrics, Axis::Vertical, &self.config);
        self.anchor = 0.0;

        for axis in Axis::ALL {
            self.host.set_scroll_offset(axis, 0.0);
        }

        log::debug!(
            "[scroll] reset {}x{} content {}x{}: horizontal(enabled={}, thumb={}, ratio={}) vertical(enabled={}, thumb={}, ratio={})",
            self.metrics.width,
            self.metrics.height,
            self.metrics.content_width,
            self.metrics.content_height,
            self.horizontal.enabled,
            self.horizontal.thumb_length,
            self.horizontal.scale_ratio,
            self.vertical.enabled,
            self.vertical.thumb_length,
            self.vertical.scale_ratio,
        );
    }

    /// Scroll content on `axis` by `diff` and move the thumbs to match.
    ///
    /// The offset stays between the far extreme and zero. A disabled axis
    /// keeps its offset at zero.
    pub fn update(&mut self, diff: f32, axis: Axis) {
        if self.scroller(axis).enabled {
            let far = geometry::far_extreme(&self.metrics, axis, &self.config).min(0.0);
            let offset = (self.host.scroll_offset(axis) + diff).clamp(far, 0.0);
            self.host.set_scroll_offset(axis, offset);
        } else {
            log::trace!("[scroll] ignoring update of {} on disabled {} axis", diff, axis);
            self.host.set_scroll_offset(axis, 0.0);
        }
        self.set_position();
    }

    /// Move both thumbs to match the host's current content offsets.
    ///
    /// Call after changing the offsets from outside the controller.
    pub fn set_position(&mut self) {
        for axis in Axis::ALL {
            let offset = self.host.scroll_offset(axis);
            let travel = self.track_travel_length(axis);
            let thumb = geometry::thumb_offset_for(offset, self.scroller(axis), travel);
            self.scroller_mut(axis).thumb_offset = thumb;
        }
    }

    /// Start dragging the thumb under the pointer, if any.
    ///
    /// A drag still active from an unreleased press ends first. The
    /// horizontal thumb wins when both would match.
    pub fn mouse_down(&mut self, x: f32, y: f32) {
        if self.is_dragging() {
            log::debug!("[scroll] press during drag, dropping stale drag");
            self.horizontal.dragging = false;
            self.vertical.dragging = false;
        }

        let axis = Axis::ALL.into_iter().find(|&axis| {
            hit::in_thumb(axis, &self.metrics, &self.config, self.scroller(axis), x, y)
        });

        if let Some(axis) = axis {
            self.anchor = axis.along(x, y);
            self.scroller_mut(axis).dragging = true;
            log::debug!("[scroll] drag start on {} at {}", axis, self.anchor);
        }
    }

    /// Update hover state and advance any active drag.
    pub fn mouse_move(&mut self, x: f32, y: f32) {
        self.horizontal.hovered = hit::in_horizontal_track(&self.metrics, &self.config, x, y);
        self.vertical.hovered = hit::in_vertical_track(&self.metrics, &self.config, x, y);

        if let Some(axis) = self.dragging_axis() {
            let pointer = axis.along(x, y);
            if !pointer.is_finite() {
                log::trace!("[scroll] ignoring non-finite pointer {} on {}", pointer, axis);
                return;
            }
            self.drag_to(axis, pointer);
            self.anchor = pointer;
        }
    }

    /// End any drag. Safe to call when nothing is being dragged.
    pub fn mouse_up(&mut self) {
        if self.is_dragging() {
            log::debug!("[scroll] drag end");
        }
        self.horizontal.dragging = false;
        self.vertical.dragging = false;
    }

    /// Forward a pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.mouse_down(x, y),
            PointerEvent::Move { x, y } => self.mouse_move(x, y),
            PointerEvent::Up => self.mouse_up(),
        }
    }

    /// Paint tracks and thumbs for the current state.
    pub fn draw(&self, painter: &mut impl Painter) {
        draw_scrollbars(
            painter,
            &self.metrics,
            &self.config,
            &self.horizontal,
            &self.vertical,
        );
    }

    fn drag_to(&mut self, axis: Axis, pointer: f32) {
        if self.scroller(axis).scale_ratio == 0.0 {
            log::debug!("[scroll] drag on {} without scale ratio ignored", axis);
            return;
        }

        let delta = pointer - self.anchor;
        let travel = self.track_travel_length(axis);
        let far = geometry::far_extreme(&self.metrics, axis, &self.config);
        let scroller = self.scroller_mut(axis);
        let candidate = scroller.thumb_offset + delta;

        let offset = if candidate > 0.0 && candidate < travel {
            scroller.thumb_offset = candidate;
            -candidate / scroller.scale_ratio
        } else if candidate <= 0.0 {
            scroller.thumb_offset = 0.0;
            0.0
        } else {
            scroller.thumb_offset = travel;
            far
        };

        log::trace!(
            "[scroll] drag {} delta={} thumb={} offset={}",
            axis,
            delta,
            candidate,
            offset
        );
        self.host.set_scroll_offset(axis, offset);
    }

    fn dragging_axis(&self) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|&axis| self.scroller(axis).dragging)
    }

    fn scroller_mut(&mut self, axis: Axis) -> &mut AxisScroller {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// State of the scrollbar for `axis`.
    pub fn scroller(&self, axis: Axis) -> &AxisScroller {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn horizontal(&self) -> &AxisScroller {
        &self.horizontal
    }

    pub fn vertical(&self) -> &AxisScroller {
        &self.vertical
    }

    /// Distance the thumb on `axis` can travel.
    pub fn track_travel_length(&self, axis: Axis) -> f32 {
        geometry::track_travel(
            &self.metrics,
            axis,
            self.scroller(axis).thumb_length,
            &self.config,
        )
    }

    pub fn is_dragging(&self) -> bool {
        self.horizontal.dragging || self.vertical.dragging
    }

    /// Metrics captured at the last reset.
    pub fn metrics(&self) -> &ViewportMetrics {
        &self.metrics
    }

    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the grid. Call [`reset`](Self::reset) after size
    /// changes and [`set_position`](Self::set_position) after offset changes.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
