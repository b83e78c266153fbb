use crate::{
    body::{self, Body, Size},
    config::{self, PhysicalConstants},
};

use tracing::debug;
use ultraviolet::DVec2;

/// Owns the bodies and the constants they are simulated under.
#[derive(Clone, Debug)]
pub struct World {
    /// Bodies in insertion order.
    bodies: Vec<Body>,
    /// Constants shared by every body.
    pub constants: PhysicalConstants,
    /// Color cycle counter for the renderer; no effect on physics.
    pub hue: f64,
    /// Top-left corner of the region the renderer frames.
    pub origin: DVec2,
    /// Size of the region the renderer frames.
    pub extent: Size,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self::with_constants(PhysicalConstants::default())
    }

    pub fn with_constants(constants: PhysicalConstants) -> Self {
        Self {
            bodies: Vec::new(),
            constants,
            hue: 0.0,
            origin: DVec2::zero(),
            extent: Size::new(config::DEFAULT_WORLD_EXTENT, config::DEFAULT_WORLD_EXTENT),
        }
    }

    /// Appends a body and returns its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        let index = self.bodies.len() - 1;
        debug!(index, flags = body.flags.bits(), "body added");
        index
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// Advances the world by `dt_ms` milliseconds.
    ///
    /// Bodies step one after another in insertion order, each scanning the live
    /// collection: earlier bodies are already moved, later ones are not yet.
    pub fn tick(&mut self, dt_ms: f64) {
        self.hue += dt_ms / config::HUE_DIVISOR;

        let constants = self.constants;
        for index in 0..self.bodies.len() {
            body::step(&mut self.bodies, index, dt_ms, &constants);
        }
    }
}
