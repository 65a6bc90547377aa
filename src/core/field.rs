use super::color::Rgba;
use super::config::FieldConfig;
use super::constants::*;
use super::surface::{Surface, Viewport};
use glam::Vec2;
use rand::Rng;

/// A decorative point of the field.
///
/// Position is fractional in [0,1]² and scaled to the viewport every frame,
/// so resizes never touch stored points. All attributes are fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    id: usize,
    pos: Vec2,
    size: f32,
    opacity: f32,
    duration_sec: f32,
}

impl Point {
    pub fn new(pos: Vec2, size: f32, opacity: f32, duration_sec: f32) -> Self {
        Self {
            id: 0,
            pos,
            size,
            opacity,
            duration_sec,
        }
    }

    /// Ordinal index within the owning field.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
    #[inline]
    pub fn duration_sec(&self) -> f32 {
        self.duration_sec
    }
}

/// Per-frame drawing attributes of one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadedPoint {
    pub id: usize,
    pub center: Vec2,
    pub brightness: f32,
    pub radius: f32,
    pub alpha: f32,
}

/// A line to draw between two nearby points (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// Fixed-size set of points. The count never changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    points: Vec<Point>,
}

impl ParticleField {
    /// Generate `config.point_count` points with uniform positions and
    /// attributes drawn from the configured spans.
    pub fn generate<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Self {
        let points = (0..config.point_count)
            .map(|id| Point {
                id,
                pos: Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()),
                size: config.size.sample(rng),
                opacity: config.opacity.sample(rng),
                duration_sec: config.duration.sample(rng),
            })
            .collect();
        Self { points }
    }

    /// Build a field from fixed points; ids are reassigned by position in the list.
    pub fn from_points(points: Vec<Point>) -> Self {
        let points = points
            .into_iter()
            .enumerate()
            .map(|(id, p)| Point { id, ..p })
            .collect();
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn pixel_positions(&self, viewport: Viewport) -> Vec<Vec2> {
        self.points.iter().map(|p| viewport.to_px(p.pos)).collect()
    }

    /// Pointer-reactive size and opacity for every point.
    pub fn shade(&self, viewport: Viewport, pointer: Vec2, config: &FieldConfig) -> Vec<ShadedPoint> {
        self.points
            .iter()
            .map(|p| {
                let center = viewport.to_px(p.pos);
                let b = brightness(center.distance(pointer), config.brightness_falloff_px);
                ShadedPoint {
                    id: p.id,
                    center,
                    brightness: b,
                    radius: p.size + b * BRIGHTNESS_RADIUS_GAIN,
                    alpha: p.opacity + b * BRIGHTNESS_ALPHA_GAIN,
                }
            })
            .collect()
    }

    /// Lines between every pair closer than the connection distance.
    pub fn connections(&self, viewport: Viewport, config: &FieldConfig) -> Vec<Connection> {
        let px = self.pixel_positions(viewport);
        pairs(px.len())
            .filter_map(|(a, b)| {
                let distance = px[a].distance(px[b]);
                let alpha =
                    connection_alpha(distance, config.connection_distance_px, CONNECTION_ALPHA_MAX);
                (alpha > 0.0).then_some(Connection {
                    a,
                    b,
                    distance,
                    alpha,
                })
            })
            .collect()
    }
}

/// Linear falloff: 1 at the pointer, 0 at `falloff` px and beyond.
#[inline]
pub fn brightness(distance: f32, falloff: f32) -> f32 {
    (1.0 - distance / falloff).max(0.0)
}

#[inline]
pub fn connection_alpha(distance: f32, threshold: f32, max_alpha: f32) -> f32 {
    if distance < threshold {
        max_alpha * (1.0 - distance / threshold)
    } else {
        0.0
    }
}

/// Every unordered index pair `(i, j)` with `i < j`, each exactly once.
pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

#[inline]
pub fn grid_offset(time: u64, line_pos: f32) -> f32 {
    let phase = time as f64 * GRID_WAVE_TIME_FREQ as f64 + (line_pos * GRID_WAVE_SPACE_FREQ) as f64;
    phase.sin() as f32 * GRID_WAVE_AMPLITUDE_PX
}

#[inline]
pub fn ring_radius(time: u64) -> f32 {
    RING_RADIUS_BASE + RING_RADIUS_SWING * (time as f64 * RING_RADIUS_FREQ as f64).sin() as f32
}

#[inline]
pub fn ring_alpha(time: u64) -> f32 {
    RING_ALPHA_BASE + RING_ALPHA_SWING * (time as f64 * RING_ALPHA_FREQ as f64).sin() as f32
}

/// Draw one frame of the field: trail, grid, points with connections, ring.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    field: &ParticleField,
    pointer: Vec2,
    viewport: Viewport,
    time: u64,
    config: &FieldConfig,
) {
    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(viewport.width, viewport.height),
        Rgba::new(TRAIL_RGB, TRAIL_ALPHA),
    );

    draw_grid(surface, viewport, time, config.grid_pitch_px);

    let point_color = Rgba::new(POINT_RGB, 1.0);
    let shaded = field.shade(viewport, pointer, config);
    for s in &shaded {
        surface.fill_circle(s.center, s.radius, point_color.with_alpha(s.alpha));
        for other in &shaded[s.id + 1..] {
            let d = s.center.distance(other.center);
            let alpha = connection_alpha(d, config.connection_distance_px, CONNECTION_ALPHA_MAX);
            if alpha > 0.0 {
                surface.stroke_line(
                    s.center,
                    other.center,
                    point_color.with_alpha(alpha),
                    CONNECTION_LINE_WIDTH,
                );
            }
        }
    }

    surface.stroke_circle(
        pointer,
        ring_radius(time),
        Rgba::new(RING_RGB, ring_alpha(time)),
        RING_LINE_WIDTH,
    );
}

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, viewport: Viewport, time: u64, pitch: f32) {
    // Finer pitches would emit thousands of lines per frame, or never
    // advance `x` at all.
    if pitch.is_nan() || pitch < GRID_PITCH_MIN_PX {
        return;
    }
    let color = Rgba::new(GRID_RGB, GRID_ALPHA);

    let mut x = 0.0;
    while x < viewport.width {
        let off = grid_offset(time, x);
        surface.stroke_line(
            Vec2::new(x + off, 0.0),
            Vec2::new(x + off, viewport.height),
            color,
            GRID_LINE_WIDTH,
        );
        x += pitch;
    }

    let mut y = 0.0;
    while y < viewport.height {
        let off = grid_offset(time, y);
        surface.stroke_line(
            Vec2::new(0.0, y + off),
            Vec2::new(viewport.width, y + off),
            color,
            GRID_LINE_WIDTH,
        );
        y += pitch;
    }
}
