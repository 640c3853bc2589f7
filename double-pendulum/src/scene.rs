//! Backend-independent description of the pendulum drawing.
//!
//! A [`Scene`] holds everything the renderers draw, in data coordinates.
//! It can be drawn by plotters (see the `plot` module) or by any other 2D
//! canvas with line, marker and text primitives.
//!
//! ```
//! use double_pendulum::{DoublePendulum, Scene};
//!
//! let scene = Scene::new(&DoublePendulum::example());
//! assert_eq!(scene.bound, [-4., 4.]);
//! assert_eq!(scene.labels.len(), 4);
//! ```
use crate::*;
use fmtastic::Subscript;
use std::f64::consts::TAU;

/// RGB color.
pub type Rgb = [u8; 3];

/// Colors of the drawing.
pub mod color {
    use super::Rgb;
    /// First limb
    pub const GREEN: Rgb = [0, 128, 0];
    /// Second limb
    pub const BLUE: Rgb = [0, 0, 255];
    /// Fixed pivot
    pub const CYAN: Rgb = [0, 191, 191];
    /// Joint between the limbs
    pub const MAGENTA: Rgb = [191, 0, 191];
    /// Free end
    pub const YELLOW: Rgb = [191, 191, 0];
    /// Angle markers
    pub const GREY: Rgb = [128, 128, 128];
}

/// Radius of the angle marker arcs.
pub const ARC_RADIUS: f64 = 0.5;
/// Arc samples of a full turn.
pub const ARC_RES: usize = 180;
/// Half length of the reference axis at the joint.
pub const AXIS_HALF: f64 = 0.6;
/// Relative weight of the reference axis.
pub const AXIS_WEIGHT: f64 = 0.4 / 1.5;
/// Label padding of the first limb, from the joint.
pub const LIMB1_PAD: [f64; 2] = [-0.8, 1.];
/// Label padding of the second limb, from the free end.
pub const LIMB2_PAD: [f64; 2] = [0.4, 1.];
/// Label padding of the angles, from the supporting point.
pub const ANGLE_PAD: [f64; 2] = [0.4, 0.4];

/// The role of a marker, each drawn in a different style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    /// Fixed pivot
    Pivot,
    /// Joint between the two limbs
    Joint,
    /// Free end of the second limb
    Tip,
}

impl MarkerKind {
    /// Get the marker names.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pivot => "Pivot",
            Self::Joint => "Joint",
            Self::Tip => "Tip",
        }
    }

    /// Marker color.
    pub const fn color(&self) -> Rgb {
        match self {
            Self::Pivot => color::CYAN,
            Self::Joint => color::MAGENTA,
            Self::Tip => color::YELLOW,
        }
    }
}

/// A polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Name, empty for unnamed lines
    pub name: &'static str,
    /// Vertices
    pub pts: Vec<[f64; 2]>,
    /// Line color
    pub color: Rgb,
    /// Stroke weight relative to the figure stroke
    pub weight: f64,
}

impl Segment {
    fn new(name: &'static str, pts: Vec<[f64; 2]>, color: Rgb) -> Self {
        Self { name, pts, color, weight: 1. }
    }
}

/// A filled point marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Marker role
    pub kind: MarkerKind,
    /// Position
    pub pos: [f64; 2],
}

/// A text label anchored at its lower-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Anchor position
    pub pos: [f64; 2],
    /// Text
    pub text: String,
}

/// The drawing of a double pendulum.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Joint positions
    pub joints: Joints,
    /// Limb lines, "Limb 1" and "Limb 2"
    pub limbs: [Segment; 2],
    /// Pivot, joint and free end
    pub markers: [Marker; 3],
    /// Angle markers at the pivot and the joint
    pub arcs: [Segment; 2],
    /// Horizontal and vertical reference axis at the joint
    pub axes: [Segment; 2],
    /// Limb names and angle symbols
    pub labels: [Label; 4],
    /// Canvas range of both axes
    pub bound: [f64; 2],
}

impl Scene {
    /// Build the scene of a pendulum.
    pub fn new(p: &DoublePendulum) -> Self {
        let joints @ Joints { origin, joint, tip } = p.joints();
        let limbs = [
            Segment::new("Limb 1", vec![origin, joint], color::GREEN),
            Segment::new("Limb 2", vec![joint, tip], color::BLUE),
        ];
        let markers = [
            Marker { kind: MarkerKind::Pivot, pos: origin },
            Marker { kind: MarkerKind::Joint, pos: joint },
            Marker { kind: MarkerKind::Tip, pos: tip },
        ];
        let arcs = [
            Segment::new("", arc(origin, ARC_RADIUS, p.l1.sweep()), color::GREY),
            Segment::new("", arc(joint, ARC_RADIUS, p.l2.sweep()), color::GREY),
        ];
        let [x, y] = joint;
        let axes = [
            vec![[x - AXIS_HALF, y], [x + AXIS_HALF, y]],
            vec![[x, y - AXIS_HALF], [x, y + AXIS_HALF]],
        ]
        .map(|pts| Segment { weight: AXIS_WEIGHT, ..Segment::new("", pts, color::GREY) });
        let label = |pos: [f64; 2], [dx, dy]: [f64; 2], text: String| Label {
            pos: pos.offset(dx, dy),
            text,
        };
        let labels = [
            label(joint, LIMB1_PAD, limbs[0].name.to_string()),
            label(tip, LIMB2_PAD, limbs[1].name.to_string()),
            label(origin, ANGLE_PAD, theta(1)),
            label(joint, ANGLE_PAD, theta(2)),
        ];
        Self { joints, limbs, markers, arcs, axes, labels, bound: p.bound() }
    }
}

/// Sample a counter-clockwise arc from angle zero with a sweep angle.
///
/// The resolution follows the sweep, a zero sweep is a single point.
pub fn arc(center: [f64; 2], r: f64, sweep: f64) -> Vec<[f64; 2]> {
    let n = (sweep / TAU * ARC_RES as f64).ceil() as usize;
    if n == 0 {
        return vec![center.pla(r, 0.)];
    }
    let step = sweep / n as f64;
    (0..=n).map(|i| center.pla(r, i as f64 * step)).collect()
}

/// Angle symbol with a subscript number, e.g. "θ₁".
pub fn theta(n: usize) -> String {
    format!("θ{}", Subscript(n))
}
