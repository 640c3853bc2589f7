//! Double pendulum drawing in a window, or saved as an image.
use self::{app::App, cfg::Cfg};
use anyhow::Context as _;
use double_pendulum::{plot::Figure, Joints, Scene};
use std::path::{Path, PathBuf};

mod app;
mod cfg;

const APP_NAME: &str = env!("CARGO_BIN_NAME");
const DEFAULT_OUTPUT: &str = "double-pendulum-drawing.png";

#[derive(clap::Parser)]
#[command(name = APP_NAME, version, author, about)]
struct Entry {
    /// Drawing configuration in RON format, default to the example pendulum
    cfg: Option<PathBuf>,
    /// Save the drawing to a PNG or SVG file instead of opening a window
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_OUTPUT
    )]
    save: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();
    let Entry { cfg, save } = <Entry as clap::Parser>::parse_from(wild::args());
    let cfg = match cfg {
        Some(path) => {
            log::info!("configuration: {}", path.display());
            Cfg::load(&path)?
        }
        None => Cfg::default(),
    };
    let pendulum = cfg.pendulum()?;
    let scene = Scene::new(&pendulum);
    let Joints { origin, joint, tip } = scene.joints;
    log::info!("origin={origin:?}, joint={joint:?}, tip={tip:?}");
    match save {
        Some(path) => save_figure(scene, &cfg, &path),
        None => native(scene, &cfg),
    }
}

fn save_figure(scene: Scene, cfg: &Cfg, path: &Path) -> anyhow::Result<()> {
    let size = cfg.resolution();
    Figure::from_scene(scene)
        .with_opt(cfg.opt())
        .save(path, size)
        .with_context(|| format!("saving {}", path.display()))?;
    log::info!("saved to {}", path.display());
    Ok(())
}

fn native(scene: Scene, cfg: &Cfg) -> anyhow::Result<()> {
    let (w, h) = cfg.resolution();
    let opt = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([w as f32, h as f32]),
        ..Default::default()
    };
    log::info!("open window {w}x{h}");
    eframe::run_native(APP_NAME, opt, App::new(scene, cfg).create())
        .map_err(|e| anyhow::anyhow!("startup failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn output_mode() {
        let entry = Entry::try_parse_from([APP_NAME]).unwrap();
        assert!(entry.cfg.is_none());
        assert!(entry.save.is_none());
        let entry = Entry::try_parse_from([APP_NAME, "--save"]).unwrap();
        assert_eq!(entry.save, Some(PathBuf::from(DEFAULT_OUTPUT)));
        let entry = Entry::try_parse_from([APP_NAME, "fig.ron", "--save=fig.svg"]).unwrap();
        assert_eq!(entry.cfg, Some(PathBuf::from("fig.ron")));
        assert_eq!(entry.save, Some(PathBuf::from("fig.svg")));
    }
}
