use super::Color;

/// How the ends of a stroked line are finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    /// Half-disc past each end point, turning a segment into a capsule.
    Round,
}

/// Border drawn around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    pub fill: Color,
    pub border: Option<Stroke>,
}

impl RectStyle {
    pub const fn filled(fill: Color) -> Self {
        Self { fill, border: None }
    }

    pub fn border(mut self, stroke: Stroke) -> Self {
        self.border = Some(stroke);
        self
    }

    pub fn border_opt(mut self, stroke: Option<Stroke>) -> Self {
        self.border = stroke;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
    pub cap: LineCap,
}

impl LineStyle {
    pub const fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
        }
    }

    pub fn cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn round(self) -> Self {
        self.cap(LineCap::Round)
    }
}
