// Simulation tuning shared by both hero engines and the confetti burst.
//
// Distances are canvas pixels and speeds are pixels (or radians) per frame:
// the hero physics advance once per display refresh, not per second.

// ---------------- Canvas2D hero ----------------
pub const CPU_PARTICLES_WIDE: usize = 1000;
pub const CPU_PARTICLES_NARROW: usize = 500; // phones and small tablets
pub const NARROW_LAYOUT_WIDTH: f32 = 768.0;

pub const ENLARGE_RADIUS: f32 = 200.0; // pointer proximity radius
pub const ENLARGE_GAIN: f32 = 2.0; // extra scale at zero distance
pub const MAX_ENLARGE_SCALE: f32 = 1.0 + ENLARGE_GAIN;
pub const WRAP_MARGIN: f32 = 50.0;

pub const CPU_DRIFT_MAX: f32 = 0.25; // per axis
pub const CPU_SIZE_MIN: f32 = 30.0;
pub const CPU_SIZE_MAX: f32 = 80.0;
pub const CPU_SPIN_MAX: f32 = 0.005;
pub const CPU_OPACITY_MIN: f32 = 0.3;
pub const CPU_OPACITY_MAX: f32 = 0.8;
pub const HUE_MIN: f32 = 250.0;
pub const HUE_MAX: f32 = 310.0;

// Reduced activity (while the page scrolls)
pub const REDUCED_SPIN_FACTOR: f32 = 0.5;
pub const REDUCED_ALPHA_FACTOR: f32 = 0.7;
pub const SCROLL_SETTLE_MS: f64 = 150.0;

// ---------------- Instanced GPU hero ----------------
pub const GPU_PARTICLE_COUNT: usize = 10_000;

pub const REPEL_RADIUS: f32 = 150.0;
pub const REPEL_STRENGTH: f32 = 0.5;
pub const HOMING_RATE: f32 = 0.03; // fraction of the remaining offset per frame
pub const GRID_JITTER: f32 = 0.8; // of a cell, centered

pub const GPU_DRIFT_MAX: f32 = 0.15; // per axis
pub const GPU_SIZE_MIN: f32 = 20.0;
pub const GPU_SIZE_MAX: f32 = 60.0;
pub const GPU_SPIN_MAX: f32 = 0.004;
pub const GPU_OPACITY_MIN: f32 = 0.2;
pub const GPU_OPACITY_MAX: f32 = 0.5;

// ---------------- Assets ----------------
pub const READY_THRESHOLD: usize = 10;
pub const ASSET_TIMEOUT_MS: i32 = 2000;
pub const PROGRESS_LOG_EVERY: usize = 10;

pub const FALLBACK_BITMAP_SIZE: u32 = 128;
pub const FALLBACK_TEXTURE_SIZE: u32 = 64;

/// Three-stop diagonal gradients used for the synthetic image pool.
pub const FALLBACK_PALETTES: [[[u8; 3]; 3]; 4] = [
    [[0x8b, 0x5c, 0xf6], [0xec, 0x48, 0x99], [0xd9, 0x46, 0xef]], // violet → pink → fuchsia
    [[0xec, 0x48, 0x99], [0xf4, 0x3f, 0x5e], [0xfb, 0x92, 0x3c]], // pink → rose → orange
    [[0x63, 0x66, 0xf1], [0x8b, 0x5c, 0xf6], [0xa8, 0x55, 0xf7]], // indigo → violet → purple
    [[0x14, 0xb8, 0xa6], [0x06, 0xb6, 0xd4], [0x3b, 0x82, 0xf6]], // teal → cyan → blue
];

/// Two-stop gradient for the GPU hero's single-texture fallback.
pub const FALLBACK_TEXTURE_GRADIENT: [[u8; 3]; 2] = [[0x8b, 0x5c, 0xf6], [0xec, 0x48, 0x99]];

// ---------------- Animation loop ----------------
pub const MAX_CONSECUTIVE_FAILURES: u32 = 60;
pub const FRAME_LOG_INTERVAL: u64 = 600;

// ---------------- Confetti ----------------
pub const CONFETTI_BATCH: usize = 150;
pub const CONFETTI_STAGGER_MS: f64 = 10.0;
pub const CONFETTI_START_Y: f32 = -10.0;
pub const CONFETTI_SIZE_MIN: f32 = 5.0;
pub const CONFETTI_SIZE_MAX: f32 = 15.0;
pub const CONFETTI_SPEED_MIN: f32 = 2.0;
pub const CONFETTI_SPEED_MAX: f32 = 5.0;
pub const CONFETTI_SPIN_MAX_DEG: f32 = 5.0;
pub const CONFETTI_PALETTE: [&str; 5] = ["#8b5cf6", "#ec4899", "#d2e823", "#5865f2", "#f59e0b"];
