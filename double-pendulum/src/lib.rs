//! Double pendulum is a drawing tool for the geometry of a two-limb
//! pendulum: the limbs, their joints and the angle markers.
//!
//! ```
//! use double_pendulum::*;
//!
//! let p = DoublePendulum::from_degrees(1., 0., 1., 0.);
//! let Joints { origin, joint, tip } = p.joints();
//! assert_eq!(origin, [0., 0.]);
//! assert_eq!(joint, [1., 0.]);
//! assert_eq!(tip, [2., 0.]);
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
pub use crate::{limb::*, pendulum::*, point::*, scene::Scene};

mod limb;
mod pendulum;
#[cfg(feature = "plot")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "plot")))]
pub mod plot;
mod point;
pub mod scene;
