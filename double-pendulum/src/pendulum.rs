use crate::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three points of a double pendulum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Joints {
    /// Fixed pivot, always the origin
    pub origin: [f64; 2],
    /// Joint between the two limbs
    pub joint: [f64; 2],
    /// Free end of the second limb
    pub tip: [f64; 2],
}

impl Joints {
    /// Points in the order of `[origin, joint, tip]`.
    pub const fn to_array(&self) -> [[f64; 2]; 3] {
        [self.origin, self.joint, self.tip]
    }
}

/// Compute the pivot, the joint and the free end from two limbs.
///
/// The first limb is supported by the origin, the second one by the end of
/// the first limb.
pub fn compute_points(l1: &Limb, l2: &Limb) -> Joints {
    let origin = [0.; 2];
    let joint = origin.pla(l1.len, l1.angle);
    let tip = joint.pla(l2.len, l2.angle);
    Joints { origin, joint, tip }
}

/// Double pendulum geometry.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DoublePendulum {
    /// First limb, from the pivot
    pub l1: Limb,
    /// Second limb, from the joint
    pub l2: Limb,
}

impl DoublePendulum {
    /// Create a pendulum from two limbs.
    pub const fn new(l1: Limb, l2: Limb) -> Self {
        Self { l1, l2 }
    }

    /// Create from lengths and angles in degrees.
    pub fn from_degrees(len1: f64, angle1: f64, len2: f64, angle2: f64) -> Self {
        Self::new(Limb::from_degrees(len1, angle1), Limb::from_degrees(len2, angle2))
    }

    /// An example pendulum, two limbs of length 2 at 315 and 270 degrees.
    pub fn example() -> Self {
        Self::from_degrees(2., 315., 2., 270.)
    }

    /// Return true if both limbs are valid and the canvas range is finite.
    pub fn is_valid(&self) -> bool {
        self.l1.is_valid() && self.l2.is_valid() && self.total_len().is_finite()
    }

    /// Sum of the limb lengths.
    pub fn total_len(&self) -> f64 {
        self.l1.len + self.l2.len
    }

    /// Symmetric canvas range `[-total_len, total_len]` for both axes.
    ///
    /// The figure is always visible whatever the angles are.
    pub fn bound(&self) -> [f64; 2] {
        let r = self.total_len();
        [-r, r]
    }

    /// Get the joint positions.
    pub fn joints(&self) -> Joints {
        compute_points(&self.l1, &self.l2)
    }
}
