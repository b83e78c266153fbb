use std::f64::consts::PI;

/// Converts a Cartesian direction into an angle in `[0, 2π)`.
///
/// The angle is measured from the `+y` axis towards `+x`, so `(0, 1)` maps to `0`
/// and `(1, 0)` maps to `π/2`. The `6.5π` offset keeps the dividend positive before
/// the remainder and fixes where the branch cut of `atan2` lands.
pub fn angle_of(x: f64, y: f64) -> f64 {
    ((-y).atan2(x) + PI * 6.5) % (PI * 2.0)
}
