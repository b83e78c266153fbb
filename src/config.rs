use serde::{Deserialize, Serialize};

// Simulation-wide constants (scenario values live in `scenario`).

/// Gravity in world units per second squared.
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Frame time ceiling applied by the driver, in milliseconds.
pub const MAX_FRAME_DT_MS: f64 = 16.0;

/// `hue += dt_ms / HUE_DIVISOR` on every tick.
pub const HUE_DIVISOR: f64 = 200.0;

/// Hue offset between consecutive bodies when drawing.
pub const HUE_STEP_PER_BODY: f64 = 16.0;

/// Side of the square region the renderer frames by default.
pub const DEFAULT_WORLD_EXTENT: f64 = 100.0;

/// Share of the shorter viewport side the world is scaled to.
pub const VIEWPORT_FILL: f64 = 0.85;

/// Physical constants shared by every body in a world.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    pub gravity: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
        }
    }
}
