use super::color::Rgba;
use glam::Vec2;

/// Pixel dimensions of the drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scale a fractional position in [0,1]² to pixels.
    #[inline]
    pub fn to_px(&self, frac: Vec2) -> Vec2 {
        Vec2::new(frac.x * self.width, frac.y * self.height)
    }

    #[inline]
    pub fn at_fraction(&self, fx: f32, fy: f32) -> Vec2 {
        self.to_px(Vec2::new(fx, fy))
    }
}

/// Immediate-mode 2D drawing target.
///
/// The browser implementation wraps `CanvasRenderingContext2d`; tests use a
/// recorder. Every call is fire-and-forget: backends swallow their own errors.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32);
    /// Radial gradient disc fading from `inner` at the centre to `outer` at `radius`.
    fn fill_glow(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);
    /// Fill the rectangle with a left-to-right gradient spanning `from_x` to
    /// `to_x`; `stops` are `(offset in [0, 1], colour)` pairs.
    fn fill_linear_gradient(
        &mut self,
        origin: Vec2,
        size: Vec2,
        from_x: f32,
        to_x: f32,
        stops: &[(f32, Rgba)],
    );
    fn fill_text(&mut self, text: &str, at: Vec2, size_px: f32, color: Rgba);
}
