// Tuning constants for the particle field and the effects layer.
// Time-based rates are expressed per frame unless the name says otherwise.

// Point set
pub const POINT_COUNT: usize = 50;
pub const POINT_SIZE_MIN: f32 = 0.5;
pub const POINT_SIZE_MAX: f32 = 2.5;
pub const POINT_OPACITY_MIN: f32 = 0.3;
pub const POINT_OPACITY_MAX: f32 = 0.8;
pub const POINT_DURATION_MIN_SEC: f32 = 4.0;
pub const POINT_DURATION_MAX_SEC: f32 = 12.0;
pub const POINT_RGB: [u8; 3] = [96, 165, 250];
pub const POINT_COUNT_MAX: usize = 400; // pair checks grow as n²

// Trail (partial clear each frame)
pub const TRAIL_RGB: [u8; 3] = [10, 14, 39];
pub const TRAIL_ALPHA: f32 = 0.05;

// Wavy grid
pub const GRID_PITCH_PX: f32 = 100.0;
pub const GRID_RGB: [u8; 3] = [59, 130, 246];
pub const GRID_ALPHA: f32 = 0.1;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const GRID_WAVE_TIME_FREQ: f32 = 0.001;
pub const GRID_WAVE_SPACE_FREQ: f32 = 0.01;
pub const GRID_WAVE_AMPLITUDE_PX: f32 = 10.0;
pub const GRID_PITCH_MIN_PX: f32 = 4.0;

// Accepted range for configured lengths (pitch, falloff, connection distance)
pub const CONFIG_LENGTH_MIN_PX: f32 = 1.0;
pub const CONFIG_LENGTH_MAX_PX: f32 = 4096.0;

// Pointer proximity
pub const BRIGHTNESS_FALLOFF_PX: f32 = 300.0;
pub const BRIGHTNESS_RADIUS_GAIN: f32 = 2.0;
pub const BRIGHTNESS_ALPHA_GAIN: f32 = 0.5;

// Connections between nearby points
pub const CONNECTION_DISTANCE_PX: f32 = 150.0;
pub const CONNECTION_ALPHA_MAX: f32 = 0.2;
pub const CONNECTION_LINE_WIDTH: f32 = 1.0;

// Pulsing ring around the pointer
pub const RING_RGB: [u8; 3] = [59, 130, 246];
pub const RING_RADIUS_BASE: f32 = 50.0;
pub const RING_RADIUS_SWING: f32 = 20.0;
pub const RING_RADIUS_FREQ: f32 = 0.003;
pub const RING_ALPHA_BASE: f32 = 0.3;
pub const RING_ALPHA_SWING: f32 = 0.2;
pub const RING_ALPHA_FREQ: f32 = 0.005; // out of phase with the radius
pub const RING_LINE_WIDTH: f32 = 2.0;

// Cursor follower ring
pub const FOLLOW_STIFFNESS: f32 = 500.0;
pub const FOLLOW_DAMPING: f32 = 28.0;
pub const FOLLOW_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const FOLLOW_MAX_DT_SEC: f32 = 0.1; // longer gaps (hidden tab) are truncated
pub const FOLLOW_RADIUS_PX: f32 = 16.0;
pub const FOLLOW_RGB: [u8; 3] = [96, 165, 250];
pub const FOLLOW_ALPHA: f32 = 0.5;
pub const FOLLOW_LINE_WIDTH: f32 = 2.0;

// Aurora sweep: a horizontal gradient twice the viewport wide, panned
// right-to-left and back
pub const AURORA_PERIOD_SEC: f32 = 15.0;
pub const AURORA_EDGE_RGB: [[u8; 3]; 2] = [[37, 99, 235], [8, 145, 178]];
pub const AURORA_PEAK_RGB: [u8; 3] = [147, 51, 234];
pub const AURORA_PEAK_ALPHA: f32 = 0.05 * 0.3;

// Pulsing tech rings
pub const PULSE_RING_COUNT: usize = 3;
pub const PULSE_RING_BOX_PX: f32 = 128.0;
pub const PULSE_RING_PERIOD_SEC: f32 = 4.0;
pub const PULSE_RING_STAGGER_SEC: f32 = 0.5;
pub const PULSE_RING_SCALE: [f32; 3] = [1.0, 1.2, 1.0];
pub const PULSE_RING_OPACITY: [f32; 3] = [0.3, 0.6, 0.3];
pub const PULSE_RING_RGB: [u8; 3] = [96, 165, 250];
pub const PULSE_RING_BORDER_ALPHA: f32 = 0.3;
pub const PULSE_RING_GLOW_RGB: [u8; 3] = [59, 130, 246];
pub const PULSE_RING_LINE_WIDTH: f32 = 1.0;

// Click bursts
pub const BURST_SPARKS: usize = 12;
pub const BURST_SPEED_PX: f32 = 6.0;
pub const BURST_GRAVITY_PX: f32 = 0.2;
pub const BURST_LIFE_DECAY: f32 = 0.03;
pub const BURST_STEP_SEC: f32 = 0.016;
pub const BURST_MAX_STEPS_PER_ADVANCE: u32 = 8;
pub const BURST_SPARK_RADIUS_PX: f32 = 3.0;
pub const BURST_CAPTION_CHANCE: f64 = 0.3;
pub const BURST_CAPTION_LIFETIME_SEC: f32 = 1.0;
pub const BURST_CAPTION_RISE_PX: f32 = 50.0;
pub const BURST_CAPTION_FONT_PX: f32 = 20.0;

pub const BURST_PALETTE: [[u8; 3]; 6] = [
    [96, 165, 250],  // blue-400
    [6, 182, 212],   // cyan-500
    [168, 85, 247],  // purple-500
    [236, 72, 153],  // pink-500
    [245, 158, 11],  // amber-500
    [16, 185, 129],  // emerald-500
];

pub const BURST_CAPTIONS: [&str; 6] = ["Great!", "Nice!", "Cool!", "✨", "🎉", "Awesome!"];
