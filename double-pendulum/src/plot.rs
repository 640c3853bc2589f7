//! Plot the pendulum drawing with plotters.
//!
//! ```no_run
//! use double_pendulum::{plot::*, DoublePendulum};
//!
//! let fig = Figure::from(&DoublePendulum::example()).grid(false);
//! let mut buf = String::new();
//! let svg = SVGBackend::with_string(&mut buf, (700, 700));
//! fig.plot(svg).unwrap();
//! ```
use crate::{scene::Rgb, *};
#[doc(no_inline)]
pub use plotters::{prelude::*, *};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::{borrow::Cow, ffi::OsStr, path::Path};

/// Drawing result of a backend.
pub type PResult<T, B> = Result<T, DrawingAreaErrorKind<<B as DrawingBackend>::ErrorType>>;
/// Drawing area of a backend.
pub type Canvas<B> = DrawingArea<B, coord::Shift>;

macro_rules! inner_opt {
    ($($(#[$meta:meta])+ fn $name:ident($ty:ty))+) => {$(
        $(#[$meta])+
        pub fn $name(mut self, $name: $ty) -> Self {
            self.opt.$name = $name;
            self
        }
    )+};
}

/// Error of saving the figure to a file.
#[derive(Debug)]
pub enum SaveError {
    /// Unsupported file extension
    Format,
    /// Drawing error of the backend
    Draw(Box<dyn std::error::Error + Send + Sync>),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Format => write!(f, "unsupported format, expect \"png\" or \"svg\""),
            Self::Draw(e) => write!(f, "drawing error: {e}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format => None,
            Self::Draw(e) => Some(e.as_ref()),
        }
    }
}

/// Plot option.
#[derive(Clone, PartialEq, Debug)]
pub struct Opt<'a> {
    /// Stroke size
    pub stroke: u32,
    /// Marker size
    pub dot: u32,
    /// Font size
    pub font: f64,
    /// Font family
    pub font_family: Option<Cow<'a, str>>,
    /// Show grid
    pub grid: bool,
    /// Show axis
    pub axis: bool,
}

impl Default for Opt<'_> {
    fn default() -> Self {
        Self {
            stroke: 2,
            dot: 6,
            font: 20.,
            font_family: None,
            grid: true,
            axis: true,
        }
    }
}

/// Drawing of a double pendulum.
///
/// ```
/// use double_pendulum::{plot::Figure, DoublePendulum};
/// let figure = Figure::from(&DoublePendulum::example()).stroke(3).font(24.);
/// assert_eq!(figure.scene().bound, [-4., 4.]);
/// ```
#[derive(Clone)]
pub struct Figure<'a> {
    scene: Scene,
    opt: Opt<'a>,
}

impl From<&DoublePendulum> for Figure<'_> {
    fn from(p: &DoublePendulum) -> Self {
        Self::from_scene(Scene::new(p))
    }
}

impl<'a> Figure<'a> {
    /// Create from a prepared scene.
    pub fn from_scene(scene: Scene) -> Self {
        Self { scene, opt: Opt::default() }
    }

    /// The scene to draw.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Set the font family.
    pub fn font_family(mut self, family: impl Into<Cow<'a, str>>) -> Self {
        self.opt.font_family.replace(family.into());
        self
    }

    inner_opt! {
        /// Set the line stroke of the limbs.
        fn stroke(u32)
        /// Set the marker size.
        fn dot(u32)
        /// Set font size.
        fn font(f64)
        /// Use grid in the plot.
        fn grid(bool)
        /// Show the axis.
        fn axis(bool)
    }

    /// Set the inner options.
    pub fn with_opt(self, opt: Opt<'a>) -> Self {
        Self { opt, ..self }
    }

    #[inline]
    fn get_family(&self) -> &str {
        const DEFAULT_FONT: &str = "sans-serif";
        self.opt
            .font_family
            .as_ref()
            .map(|s| s.as_ref())
            .unwrap_or(DEFAULT_FONT)
    }

    fn get_font(&self) -> TextStyle<'_> {
        (self.get_family(), self.opt.font).into_font().color(&BLACK)
    }

    fn get_axis_font(&self) -> TextStyle<'_> {
        (self.get_family(), self.opt.font * 0.8)
            .into_font()
            .color(&BLACK)
    }

    /// Plot the pendulum on a square drawing area.
    ///
    /// Both axes span the bound of the scene, a zero-length pendulum uses a
    /// unit range instead. A bound that is not finite is a layout error.
    pub fn plot<B, R>(&self, root: R) -> PResult<(), B>
    where
        B: DrawingBackend,
        Canvas<B>: From<R>,
    {
        let Opt { stroke, dot, grid, axis, .. } = self.opt;
        let scene = &self.scene;
        let [min, max] = match scene.bound {
            [min, max] if min < max && (max - min).is_finite() => [min, max],
            [min, max] if min == max && min.is_finite() => [-1., 1.],
            _ => return Err(DrawingAreaErrorKind::LayoutError),
        };
        let root = Canvas::from(root);
        root.fill(&WHITE)?;
        // Equal label areas keep the plotting area square
        let mut chart = ChartBuilder::on(&root)
            .set_label_area_size(LabelAreaPosition::Left, (8).percent())
            .set_label_area_size(LabelAreaPosition::Bottom, (8).percent())
            .margin((4).percent())
            .build_cartesian_2d(min..max, min..max)?;
        let mut mesh = chart.configure_mesh();
        // Draw mesh
        if !grid {
            mesh.disable_mesh();
        }
        if !axis {
            mesh.disable_axes();
        }
        mesh.label_style(self.get_axis_font()).draw()?;
        // Draw angle markers, reference axis and limbs
        for seg in scene.arcs.iter().chain(&scene.axes).chain(&scene.limbs) {
            let width = ((stroke as f64 * seg.weight).round() as u32).max(1);
            let style = rgb(seg.color).stroke_width(width);
            let line = seg.pts.iter().map(|&[x, y]| (x, y));
            chart.draw_series(LineSeries::new(line, style))?;
        }
        // Draw joints
        let markers = scene.markers.iter().map(|mk| {
            let [x, y] = mk.pos;
            Circle::new((x, y), dot, rgb(mk.kind.color()).filled())
        });
        chart.draw_series(markers)?;
        // Draw labels
        let font = self.get_font().pos(Pos::new(HPos::Left, VPos::Bottom));
        let labels = scene.labels.iter().map(|label| {
            let [x, y] = label.pos;
            Text::new(label.text.clone(), (x, y), font.clone())
        });
        chart.draw_series(labels)?;
        Ok(())
    }

    /// Save the figure to a PNG or SVG file, decided by the file extension.
    ///
    /// Bitmap text needs the `ttf` feature.
    pub fn save<P>(&self, path: P, size: (u32, u32)) -> Result<(), SaveError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("svg") => self.save_on(SVGBackend::new(path, size)),
            Some("png") => self.save_on(BitMapBackend::new(path, size)),
            _ => Err(SaveError::Format),
        }
    }

    fn save_on<B>(&self, backend: B) -> Result<(), SaveError>
    where
        B: DrawingBackend,
        B::ErrorType: 'static,
    {
        let root = Canvas::from(backend);
        self.plot(root.clone())
            .and_then(|_| root.present())
            .map_err(|e| SaveError::Draw(Box::new(e)))
    }
}

fn rgb([r, g, b]: Rgb) -> RGBColor {
    RGBColor(r, g, b)
}
