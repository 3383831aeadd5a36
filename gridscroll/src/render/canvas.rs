use super::Painter;
use crate::layout::{Point, Rect};
use crate::types::{LineCap, LineStyle, RectStyle, Rgb};

/// Software rasterizer over an RGB pixel grid.
///
/// A pixel is painted when its center falls inside the shape. Strokes are
/// centered on their path, as on an HTML canvas.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = vec![Rgb::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.pixels[idx] = color;
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Paint every pixel in `bounds` whose center satisfies `inside`.
    fn fill_where(&mut self, bounds: Rect, color: Rgb, inside: impl Fn(f32, f32) -> bool) {
        let x0 = bounds.left().floor().max(0.0) as u32;
        let y0 = bounds.top().floor().max(0.0) as u32;
        let x1 = (bounds.right().ceil().max(0.0) as u32).min(self.width);
        let y1 = (bounds.bottom().ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                if inside(x as f32 + 0.5, y as f32 + 0.5) {
                    self.set(x, y, color);
                }
            }
        }
    }

    fn stroke_segment(&mut self, from: Point, to: Point, style: &LineStyle) {
        let half = style.width / 2.0;
        let bounds = Rect::new(
            from.x.min(to.x) - half,
            from.y.min(to.y) - half,
            (from.x - to.x).abs() + style.width,
            (from.y - to.y).abs() + style.width,
        );
        let cap = style.cap;
        self.fill_where(bounds, style.color.to_rgb(), |px, py| {
            let (t, distance) = project(from, to, Point::new(px, py));
            match cap {
                LineCap::Round => distance <= half,
                LineCap::Butt => (0.0..=1.0).contains(&t) && distance <= half,
            }
        });
    }
}

/// Position of `p` along segment `a`→`b` (unclamped, 0..1 on the segment)
/// and its distance to the nearest point of the segment.
fn project(a: Point, b: Point, p: Point) -> (f32, f32) {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        ((p.x - a.x) * dx + (p.y - a.y) * dy) / length_sq
    };
    let clamped = t.clamp(0.0, 1.0);
    let (nx, ny) = (a.x + clamped * dx, a.y + clamped * dy);
    (t, ((p.x - nx).powi(2) + (p.y - ny).powi(2)).sqrt())
}

impl Painter for Canvas {
    fn draw_rect(&mut self, rect: Rect, style: &RectStyle) {
        self.fill_where(rect, style.fill.to_rgb(), |x, y| rect.contains(x, y));

        if let Some(stroke) = style.border {
            let half = stroke.width / 2.0;
            let outer = Rect::new(
                rect.x - half,
                rect.y - half,
                rect.width + stroke.width,
                rect.height + stroke.width,
            );
            let inner = rect.shrink(half);
            self.fill_where(outer, stroke.color.to_rgb(), |x, y| {
                outer.contains(x, y) && !inner.contains(x, y)
            });
        }
    }

    fn draw_line(&mut self, points: &[Point], style: &LineStyle) {
        for pair in points.windows(2) {
            self.stroke_segment(pair[0], pair[1], style);
        }
    }
}
