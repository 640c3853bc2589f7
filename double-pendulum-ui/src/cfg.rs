use anyhow::Context as _;
use double_pendulum::{plot, DoublePendulum};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest canvas side in pixels.
pub(crate) const MAX_RES: u32 = 8192;

/// Drawing configuration, angles are in degrees.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct Cfg {
    pub(crate) len1: f64,
    pub(crate) len2: f64,
    pub(crate) angle1: f64,
    pub(crate) angle2: f64,
    /// Figure size in inches
    pub(crate) size: f64,
    pub(crate) dpi: u32,
    pub(crate) stroke: u32,
    pub(crate) font: f64,
    pub(crate) grid: bool,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            len1: 2.,
            len2: 2.,
            angle1: 315.,
            angle2: 270.,
            size: 7.,
            dpi: 100,
            stroke: 2,
            font: 20.,
            grid: true,
        }
    }
}

impl Cfg {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading configuration {}", path.display()))?;
        Self::from_ron(&s).with_context(|| format!("parsing configuration {}", path.display()))
    }

    pub(crate) fn from_ron(s: &str) -> anyhow::Result<Self> {
        Ok(ron::from_str(s)?)
    }

    pub(crate) fn pendulum(&self) -> anyhow::Result<DoublePendulum> {
        let p = DoublePendulum::from_degrees(self.len1, self.angle1, self.len2, self.angle2);
        anyhow::ensure!(
            p.is_valid(),
            "invalid pendulum: lengths must be non-negative with a finite sum, angles finite"
        );
        let (px, _) = self.resolution();
        anyhow::ensure!(
            px > 0 && px <= MAX_RES,
            "invalid figure size: {px} px, expect 1 to {MAX_RES} px"
        );
        Ok(p)
    }

    /// Square canvas in pixels.
    pub(crate) fn resolution(&self) -> (u32, u32) {
        let px = (self.size * self.dpi as f64).round().max(0.) as u32;
        (px, px)
    }

    pub(crate) fn opt(&self) -> plot::Opt<'static> {
        plot::Opt {
            stroke: self.stroke,
            font: self.font,
            grid: self.grid,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_figure() {
        let cfg = Cfg::from_ron("()").unwrap();
        assert_eq!(cfg, Cfg::default());
        assert_eq!(cfg.pendulum().unwrap(), DoublePendulum::example());
        assert_eq!(cfg.resolution(), (700, 700));
    }

    #[test]
    fn partial_override() {
        let cfg = Cfg::from_ron("(len1: 1.5, angle2: 90.0, grid: false)").unwrap();
        assert_eq!(cfg.len1, 1.5);
        assert_eq!(cfg.len2, 2.);
        assert_eq!(cfg.angle1, 315.);
        assert_eq!(cfg.angle2, 90.);
        assert!(!cfg.grid);
        assert!(!cfg.opt().grid);
        assert_eq!(cfg.pendulum().unwrap().bound(), [-3.5, 3.5]);
    }

    #[test]
    fn invalid_cfg() {
        let cfg = Cfg { len2: -1., ..Cfg::default() };
        assert!(cfg.pendulum().is_err());
        let cfg = Cfg { angle1: f64::NAN, ..Cfg::default() };
        assert!(cfg.pendulum().is_err());
        let cfg = Cfg { size: 0., ..Cfg::default() };
        assert!(cfg.pendulum().is_err());
        // Overflows the canvas range
        let cfg = Cfg { len1: 1e308, len2: 1e308, ..Cfg::default() };
        assert!(cfg.pendulum().is_err());
        assert!(Cfg::from_ron("(len1: \"long\")").is_err());
    }

    #[test]
    fn resolution_limit() {
        let cfg = Cfg { size: 1e6, ..Cfg::default() };
        assert!(cfg.pendulum().is_err());
        let cfg = Cfg { dpi: u32::MAX, ..Cfg::default() };
        assert_eq!(cfg.resolution(), (u32::MAX, u32::MAX));
        assert!(cfg.pendulum().is_err());
        let cfg = Cfg { size: MAX_RES as f64 / 100., ..Cfg::default() };
        assert_eq!(cfg.resolution(), (MAX_RES, MAX_RES));
        assert!(cfg.pendulum().is_ok());
    }

    #[test]
    fn zero_length_is_valid() {
        let cfg = Cfg { len1: 0., ..Cfg::default() };
        assert!(cfg.pendulum().is_ok());
    }
}
