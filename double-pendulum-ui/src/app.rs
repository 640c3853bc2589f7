use crate::cfg::Cfg;
use double_pendulum::scene::{Rgb, Scene};
use eframe::egui::*;
use egui_plot::{Line, MarkerShape, Plot, PlotBounds, PlotPoint, Points, Text};

const DOT_SIZE: f32 = 6.;

/// Main app state.
pub(crate) struct App {
    scene: Scene,
    stroke: f32,
    font: f32,
    grid: bool,
}

impl App {
    pub(crate) fn new(scene: Scene, cfg: &Cfg) -> Self {
        Self {
            scene,
            stroke: cfg.stroke as f32,
            font: cfg.font as f32,
            grid: cfg.grid,
        }
    }

    pub(crate) fn create(self) -> eframe::AppCreator {
        Box::new(|ctx| {
            ctx.egui_ctx.set_visuals(Visuals::light());
            Ok(Box::new(self))
        })
    }

    fn canvas(&self, ui: &mut Ui) {
        let [min, max] = match self.scene.bound {
            [min, max] if min < max && (max - min).is_finite() => [min, max],
            _ => [-1., 1.],
        };
        Plot::new("canvas")
            .data_aspect(1.)
            .show_grid(self.grid)
            .show_x(false)
            .show_y(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |ui| {
                ui.set_plot_bounds(PlotBounds::from_min_max([min; 2], [max; 2]));
                let scene = &self.scene;
                for seg in scene.arcs.iter().chain(&scene.axes).chain(&scene.limbs) {
                    let line = Line::new(seg.pts.clone())
                        .width(self.stroke * seg.weight as f32)
                        .color(rgb(seg.color));
                    ui.line(if seg.name.is_empty() { line } else { line.name(seg.name) });
                }
                for mk in &scene.markers {
                    let pt = Points::new(vec![mk.pos])
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(DOT_SIZE)
                        .color(rgb(mk.kind.color()))
                        .name(mk.kind.name());
                    ui.points(pt);
                }
                for label in &scene.labels {
                    let [x, y] = label.pos;
                    let text = RichText::new(label.text.as_str()).size(self.font);
                    let text = Text::new(PlotPoint::new(x, y), text)
                        .anchor(Align2::LEFT_BOTTOM)
                        .color(Color32::BLACK);
                    ui.text(text);
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| self.canvas(ui));
    }
}

fn rgb([r, g, b]: Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}
