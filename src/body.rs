use crate::{angle::angle_of, config::PhysicalConstants, velocity::Velocity};

use std::f64::consts::PI;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};
use tracing::trace;
use ultraviolet::DVec2;

/// Width and height of a body's box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Capability toggles of a body, tested by membership.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Can be struck by reacting bodies.
    pub const HAS_COLLIDER: Flags = Flags(1);
    /// Scans for colliders each step and resolves its own overlaps.
    pub const REACTS_COLLIDER: Flags = Flags(1 << 1);
    /// Accelerated by the world's gravity.
    pub const GRAVITY: Flags = Flags(1 << 2);

    const ALL: u8 = 0b111;

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL)
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.insert(rhs);
    }
}

/// Face of a struck body that a resolving body hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Top,
    Right,
    Bottom,
    Left,
}

impl Face {
    /// Picks the face for a collision angle, given the angle at which a ray from the
    /// struck body's center leaves through its corner.
    ///
    /// The sectors are `(2π-d, 2π] ∪ [0, d]`, `(d, π-d]`, `(π-d, π+d]` and
    /// `(π+d, 2π-d]`. Returns `None` only when the angles are not comparable (NaN).
    pub fn classify(collision_angle: f64, div_angle: f64) -> Option<Face> {
        let c = collision_angle;
        let d = div_angle;
        if 2.0 * PI - d < c || c <= d {
            Some(Face::Top)
        } else if d < c && c <= PI - d {
            Some(Face::Right)
        } else if PI - d < c && c <= PI + d {
            Some(Face::Bottom)
        } else if PI + d < c && c <= 2.0 * PI - d {
            Some(Face::Left)
        } else {
            None
        }
    }
}

/// A non-rotating rectangle. `position` is the top-left corner, y grows downwards.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub size: Size,
    pub position: DVec2,
    pub velocity: Velocity,
    /// Rebound factor applied to the reflected axis, 1 keeps the full speed.
    pub elasticity: f64,
    pub flags: Flags,
}

impl Default for Body {
    fn default() -> Self {
        Self::new(
            DVec2::zero(),
            Self::DEFAULT_SIZE,
            Velocity::default(),
            1.0,
            Flags::NONE,
        )
    }
}

impl Body {
    pub const DEFAULT_SIZE: Size = Size::new(5.0, 5.0);

    pub fn new(
        position: DVec2,
        size: Size,
        velocity: Velocity,
        elasticity: f64,
        flags: Flags,
    ) -> Self {
        Self {
            size,
            position,
            velocity,
            elasticity,
            flags,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }

    /// Applies gravity (if flagged) and then moves by the new velocity.
    pub fn integrate(&mut self, dt_s: f64, constants: &PhysicalConstants) {
        if self.flags.contains(Flags::GRAVITY) {
            self.velocity.set_y(self.velocity.y() + dt_s * constants.gravity);
        }

        self.position.x += self.velocity.x() * dt_s;
        self.position.y += self.velocity.y() * dt_s;
    }

    /// Strict AABB intersection; boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.position.x < other.position.x + other.size.width
            && self.position.x + self.size.width > other.position.x
            && self.position.y < other.position.y + other.size.height
            && self.size.height + self.position.y > other.position.y
    }

    /// Reflects this body off the face of `struck` it hit and moves it flush against
    /// that face. `struck` is left untouched.
    pub fn bounce_off(&mut self, struck: &Body) -> Option<Face> {
        let center = self.center();
        let struck_center = struck.center();
        let collision_angle = angle_of(
            center.x - struck_center.x,
            -(center.y - struck_center.y),
        );
        let div_angle = angle_of(struck.size.width, struck.size.height);

        let face = Face::classify(collision_angle, div_angle)?;
        match face {
            Face::Top => {
                self.velocity.set_y(self.velocity.y() * -self.elasticity);
                self.position.y = struck_center.y - struck.size.height / 2.0 - self.size.height;
            }
            Face::Bottom => {
                self.velocity.set_y(self.velocity.y() * -self.elasticity);
                self.position.y = struck_center.y + struck.size.height / 2.0;
            }
            Face::Left => {
                self.velocity.set_x(self.velocity.x() * -self.elasticity);
                self.position.x = struck_center.x - struck.size.width / 2.0 - self.size.width;
            }
            Face::Right => {
                self.velocity.set_x(self.velocity.x() * -self.elasticity);
                self.position.x = struck_center.x + struck.size.width / 2.0;
            }
        }
        Some(face)
    }
}

/// Advances `bodies[index]` by `dt_ms` and lets it resolve its overlaps against the
/// live collection. Bodies later in the slice are seen at their pre-step positions.
pub fn step(bodies: &mut [Body], index: usize, dt_ms: f64, constants: &PhysicalConstants) {
    let dt_s = dt_ms / 1000.0;
    bodies[index].integrate(dt_s, constants);

    if !bodies[index].flags.contains(Flags::REACTS_COLLIDER) {
        return;
    }

    for other in 0..bodies.len() {
        if other == index || !bodies[other].flags.contains(Flags::HAS_COLLIDER) {
            continue;
        }
        if !bodies[index].overlaps(&bodies[other]) {
            continue;
        }
        resolve_collision(bodies, index, other, true);
    }
}

/// Resolves a confirmed overlap between `bodies[resolver]` and `bodies[struck]`.
///
/// When `bidirectional` is set and the struck body also reacts, it first corrects
/// itself against the resolver (one level only), then the resolver bounces off the
/// struck body's corrected box.
pub fn resolve_collision(
    bodies: &mut [Body],
    resolver: usize,
    struck: usize,
    bidirectional: bool,
) -> Option<Face> {
    if bidirectional && bodies[struck].flags.contains(Flags::REACTS_COLLIDER) {
        resolve_collision(bodies, struck, resolver, false);
    }

    let struck_body = bodies[struck];
    let face = bodies[resolver].bounce_off(&struck_body);
    trace!(resolver, struck, ?face, bidirectional, "collision resolved");
    face
}
