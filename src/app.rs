use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use glam::{Mat4, UVec2, Vec3};
use tracing::{debug, info};

use crate::assets::import::ModelImporter;
use crate::assets::texture::TextureCache;
use crate::config::settings::Settings;
use crate::rendering::camera::Camera;
use crate::rendering::material::{MaterialId, MaterialRegistry};
use crate::rendering::scene::graph::{describe_scene, render_scene};
use crate::rendering::scene::node::SceneNode;
use crate::world::heightfield::PerlinHeightField;
use crate::world::terrain::{ColorPair, Terrain, TerrainParams};

/// Material handles the assembled scene draws with.
pub struct SceneMaterials {
    pub object: MaterialId,
    pub terrain: MaterialId,
}

impl From<&Settings> for TerrainParams {
    fn from(settings: &Settings) -> Self {
        let terrain = &settings.terrain;
        TerrainParams {
            shininess: terrain.shininess,
            low: ColorPair {
                diffuse: Vec3::from_array(terrain.low_diffuse),
                specular: Vec3::from_array(terrain.low_specular),
            },
            high: ColorPair {
                diffuse: Vec3::from_array(terrain.high_diffuse),
                specular: Vec3::from_array(terrain.high_specular),
            },
            size: Vec3::from_array(terrain.size),
            samples: UVec2::from_array(terrain.samples),
        }
    }
}

/// Assemble the scene tree once at startup: root, an optional imported model,
/// and an optional generated terrain. Any failure here is fatal; a half-built
/// scene is never rendered.
pub fn build_scene(
    settings: &Settings,
    importer: &mut dyn ModelImporter,
    textures: &mut TextureCache,
    materials: &SceneMaterials,
) -> Result<SceneNode> {
    let mut scene = SceneNode::root();

    if settings.scene.load_models {
        info!("Loading model: {}", settings.scene.model_path);
        let imported = importer.load(Path::new(&settings.scene.model_path), textures)?;
        scene.add_child(SceneNode::model(Mat4::IDENTITY, imported, materials.object)?);
        info!("Model loaded ({} textures cached)", textures.len());
    }

    if settings.scene.load_terrain {
        info!("Generating terrain (seed {})", settings.terrain.seed);
        let terrain = Terrain::new(
            PerlinHeightField::new(settings.terrain.seed),
            TerrainParams::from(settings),
        );
        let transform = Mat4::from_translation(Vec3::from_array(settings.terrain.offset));
        scene.add_child(terrain.into_node(transform, materials.terrain)?);
        info!("Terrain generated");
    }

    info!("Scene graph:\n{}", describe_scene(&scene));
    Ok(scene)
}

/// Run a fixed number of paced frames: one render traversal per frame, then
/// sleep out the remainder of the frame budget.
pub fn run_frames(
    scene: &SceneNode,
    camera: &Camera,
    materials: &mut MaterialRegistry,
    frames: u32,
    target_fps: f32,
) {
    let frame_budget = Duration::from_secs_f32(1.0 / target_fps.max(1.0));
    for frame in 0..frames {
        let started = Instant::now();
        render_scene(scene, camera, materials);
        let elapsed = started.elapsed();
        debug!("Frame {} rendered in {:?}", frame, elapsed);
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}
