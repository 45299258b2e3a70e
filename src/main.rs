use std::path::Path;

use anyhow::Result;
use tracing::info;

use terrascene::app::{self, SceneMaterials};
use terrascene::assets::import::NullImporter;
use terrascene::assets::texture::TextureCache;
use terrascene::config::settings::{load_or_default, CONFIG_FILE};
use terrascene::rendering::camera::Camera;
use terrascene::rendering::material::MaterialRegistry;
use terrascene::rendering::materials::DebugMaterial;
use terrascene::utils::logging::init_logging;

fn main() -> Result<()> {
    init_logging();
    info!("{} {}", terrascene::APP_NAME, terrascene::VERSION);

    let settings = load_or_default(Path::new(CONFIG_FILE));

    let mut registry = MaterialRegistry::new();
    let materials = SceneMaterials {
        object: registry.add(Box::new(DebugMaterial::new("object"))),
        terrain: registry.add(Box::new(DebugMaterial::new("terrain"))),
    };

    let mut textures = TextureCache::new();
    let mut importer = NullImporter;
    let scene = app::build_scene(&settings, &mut importer, &mut textures, &materials)?;

    let [width, height] = settings.rendering.window_size;
    let camera = Camera::new(width as f32 / height as f32);

    app::run_frames(
        &scene,
        &camera,
        &mut registry,
        settings.rendering.demo_frames,
        settings.rendering.target_fps,
    );

    Ok(())
}
