//! Drawing surface abstraction and scrollbar draw emission.

mod canvas;
mod scrollbar;

pub use canvas::Canvas;
pub use scrollbar::draw_scrollbars;

use crate::layout::{Point, Rect};
use crate::types::{LineStyle, RectStyle};

/// A surface that accepts primitive drawing commands.
pub trait Painter {
    fn draw_rect(&mut self, rect: Rect, style: &RectStyle);

    fn draw_line(&mut self, points: &[Point], style: &LineStyle);
}

impl<P: Painter + ?Sized> Painter for &mut P {
    fn draw_rect(&mut self, rect: Rect, style: &RectStyle) {
        (**self).draw_rect(rect, style)
    }

    fn draw_line(&mut self, points: &[Point], style: &LineStyle) {
        (**self).draw_line(points, style)
    }
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, style: RectStyle },
    Line { points: Vec<Point>, style: LineStyle },
}

impl DrawCommand {
    pub fn is_rect(&self) -> bool {
        matches!(self, DrawCommand::Rect { .. })
    }
}

/// A painter that records commands in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay every recorded command onto another painter.
    pub fn replay(&self, painter: &mut impl Painter) {
        for command in &self.commands {
            match command {
                DrawCommand::Rect { rect, style } => painter.draw_rect(*rect, style),
                DrawCommand::Line { points, style } => painter.draw_line(points, style),
            }
        }
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl Painter for DrawList {
    fn draw_rect(&mut self, rect: Rect, style: &RectStyle) {
        self.commands.push(DrawCommand::Rect { rect, style: *style });
    }

    fn draw_line(&mut self, points: &[Point], style: &LineStyle) {
        self.commands.push(DrawCommand::Line {
            points: points.to_vec(),
            style: *style,
        });
    }
}
