#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A rigid limb of the pendulum.
///
/// The angle is in radians, measured counter-clockwise from the positive
/// x-axis at the supporting point.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Limb {
    /// Length (non-negative)
    pub len: f64,
    /// Angle in radians
    pub angle: f64,
}

impl Limb {
    /// Create with a length and an angle in radians.
    pub const fn new(len: f64, angle: f64) -> Self {
        Self { len, angle }
    }

    /// Create with a length and an angle in degrees.
    ///
    /// ```
    /// use double_pendulum::Limb;
    /// let limb = Limb::from_degrees(2., 180.);
    /// assert!((limb.angle - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    pub fn from_degrees(len: f64, angle: f64) -> Self {
        Self::new(len, angle.to_radians())
    }

    /// Return true if the limb can be drawn.
    ///
    /// A zero length is valid, the limb collapses to a point.
    pub fn is_valid(&self) -> bool {
        self.len >= 0. && self.len.is_finite() && self.angle.is_finite()
    }

    /// The counter-clockwise sweep from angle zero to the limb angle, in
    /// the range of `[0, 2pi]`.
    ///
    /// Angles are taken modulo a full turn. A zero angle sweeps nothing,
    /// while a non-zero whole turn sweeps the full circle.
    ///
    /// ```
    /// use double_pendulum::Limb;
    /// use std::f64::consts::{PI, TAU};
    /// assert_eq!(Limb::new(1., -PI).sweep(), PI);
    /// assert_eq!(Limb::new(1., 0.).sweep(), 0.);
    /// assert_eq!(Limb::new(1., -TAU).sweep(), TAU);
    /// ```
    pub fn sweep(&self) -> f64 {
        match self.angle.rem_euclid(TAU) {
            a if a == 0. && self.angle != 0. => TAU,
            a => a,
        }
    }
}
