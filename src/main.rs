use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use svgkit::{export_scene, init_logging, ExportSettings, Scene};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.len() > 2 {
        bail!("usage: svgkit <scene.json> [settings.json]");
    }

    let scene_path = PathBuf::from(&args[0]);
    let scene = Scene::load_from_file(&scene_path)
        .with_context(|| format!("failed to load scene {}", scene_path.display()))?;

    // Settings are re-read on every invocation so edits between exports
    // always take effect.
    let settings = match args.get(1) {
        Some(path) => ExportSettings::load_from_file(Path::new(path))
            .with_context(|| format!("failed to load settings {path}"))?,
        None => ExportSettings::default(),
    };

    let path = export_scene(&scene, &settings, None)?;
    println!("{}", path.display());
    Ok(())
}
