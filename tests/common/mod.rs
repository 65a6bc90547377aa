// Recording `Surface` shared by the host-side tests.
// Test crates that use it must also include the `color` and `surface` modules.

use crate::color::Rgba;
use crate::surface::{Surface, Viewport};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        width: f32,
    },
    Glow {
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
    Gradient {
        origin: Vec2,
        size: Vec2,
        from_x: f32,
        to_x: f32,
        stops: Vec<(f32, Rgba)>,
    },
    Text {
        text: String,
        at: Vec2,
        size_px: f32,
        color: Rgba,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_circles(&self) -> Vec<(Vec2, f32, Rgba)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillCircle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    /// Lines drawn in the given RGB colour.
    pub fn lines_in(&self, rgb: [u8; 3]) -> Vec<(Vec2, Vec2, Rgba)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line { from, to, color, .. } if [color.r, color.g, color.b] == rgb => {
                    Some((*from, *to, *color))
                }
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _viewport: Viewport) {
        self.ops.push(Op::Clear);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ops.push(Op::FillRect {
            origin,
            size,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ops.push(Op::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(Op::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32) {
        self.ops.push(Op::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        self.ops.push(Op::Glow {
            center,
            radius,
            inner,
            outer,
        });
    }

    fn fill_linear_gradient(
        &mut self,
        origin: Vec2,
        size: Vec2,
        from_x: f32,
        to_x: f32,
        stops: &[(f32, Rgba)],
    ) {
        self.ops.push(Op::Gradient {
            origin,
            size,
            from_x,
            to_x,
            stops: stops.to_vec(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, size_px: f32, color: Rgba) {
        self.ops.push(Op::Text {
            text: text.to_string(),
            at,
            size_px,
            color,
        });
    }
}
