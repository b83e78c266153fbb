use crate::angle::angle_of;

/// A 2D velocity stored in polar form.
///
/// Cartesian components are derived on read. Writing one component rebuilds the
/// polar form from the new value and the current value of the other component,
/// so `magnitude == sqrt(x² + y²)` holds after every write.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    /// Speed, never negative once set through a Cartesian write.
    pub magnitude: f64,
    /// Direction in `[0, 2π)`, see [`angle_of`].
    pub angle: f64,
}

impl Velocity {
    pub fn new(magnitude: f64, angle: f64) -> Self {
        Self { magnitude, angle }
    }

    /// Builds the polar form of `(x, y)`.
    pub fn from_components(x: f64, y: f64) -> Self {
        Self {
            magnitude: (x * x + y * y).sqrt(),
            angle: angle_of(x, y),
        }
    }

    pub fn x(&self) -> f64 {
        self.magnitude * self.angle.sin()
    }

    pub fn y(&self) -> f64 {
        self.magnitude * self.angle.cos()
    }

    pub fn set_x(&mut self, x: f64) {
        *self = Self::from_components(x, self.y());
    }

    pub fn set_y(&mut self, y: f64) {
        *self = Self::from_components(self.x(), y);
    }
}
