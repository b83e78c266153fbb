//! Maps world units to pixel rectangles for an external painter.

use crate::{body::Size, config, world::World};

/// Pixel dimensions of the surface the world is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// One filled rectangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, not wrapped to 360.
    pub hue: f64,
}

/// Everything needed to paint one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Whole pixels the canvas should be resized to.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Body rectangles in insertion order.
    pub rects: Vec<DrawRect>,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixels per world unit for a world of the given extent.
    pub fn unit(&self, extent: Size) -> f64 {
        let max_length = self.width.min(self.height) * config::VIEWPORT_FILL;
        let base = config::DEFAULT_WORLD_EXTENT
            .max(extent.height)
            .max(extent.width);
        max_length / base
    }
}

/// Lays out every body of `world` for `viewport`.
pub fn frame(world: &World, viewport: Viewport) -> Frame {
    let unit = viewport.unit(world.extent);
    let offset_x = unit * world.origin.x;
    let offset_y = unit * world.origin.y;

    let rects = world
        .bodies()
        .iter()
        .enumerate()
        .map(|(index, body)| DrawRect {
            x: unit * body.position.x - offset_x,
            y: unit * body.position.y - offset_y,
            width: unit * body.size.width,
            height: unit * body.size.height,
            hue: world.hue + index as f64 * config::HUE_STEP_PER_BODY,
        })
        .collect();

    Frame {
        canvas_width: (unit * world.extent.width).floor() as u32,
        canvas_height: (unit * world.extent.height).floor() as u32,
        rects,
    }
}
