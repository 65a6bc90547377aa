use crate::constants::CAPTION_FONT_FAMILY;
use crate::core::{Rgba, Surface, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Surface` backed by a canvas 2D context.
///
/// Context calls that can throw (arc with a negative radius, gradients on a
/// lost context) are dropped silently; a missed shape is not worth a log line
/// every frame.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.circle_path(center, radius);
        self.ctx.stroke();
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius.max(0.0) as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        _ = gradient.add_color_stop(0.0, &inner.css());
        _ = gradient.add_color_stop(1.0, &outer.css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn fill_linear_gradient(
        &mut self,
        origin: Vec2,
        size: Vec2,
        from_x: f32,
        to_x: f32,
        stops: &[(f32, Rgba)],
    ) {
        let gradient = self
            .ctx
            .create_linear_gradient(from_x as f64, 0.0, to_x as f64, 0.0);
        for (offset, color) in stops {
            _ = gradient.add_color_stop(offset.clamp(0.0, 1.0), &color.css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_text(&mut self, text: &str, at: Vec2, size_px: f32, color: Rgba) {
        self.ctx
            .set_font(&format!("bold {}px {}", size_px, CAPTION_FONT_FAMILY));
        self.ctx.set_fill_style_str(&color.css());
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
