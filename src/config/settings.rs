use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const CONFIG_FILE: &str = "terrascene.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    pub load_models: bool,
    pub load_terrain: bool,
    pub model_path: String,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            load_models: true,
            load_terrain: true,
            model_path: "assets/models/backpack.obj".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainSettings {
    pub seed: u64,
    pub shininess: f32,
    /// Planar span (x, y) and vertical scale (z), in world units.
    pub size: [f32; 3],
    /// Grid resolution per planar axis.
    pub samples: [u32; 2],
    pub low_diffuse: [f32; 3],
    pub low_specular: [f32; 3],
    pub high_diffuse: [f32; 3],
    pub high_specular: [f32; 3],
    /// Translation of the terrain node in the scene.
    pub offset: [f32; 3],
}

impl Default for TerrainSettings {
    fn default() -> Self {
        let low = [0.96, 0.84, 0.69];
        let high = [0.25, 0.60, 0.04];
        Self {
            seed: 123_123,
            shininess: 32.0,
            size: [5.0, 5.0, 1.0],
            samples: [25, 25],
            low_diffuse: low,
            low_specular: low.map(|c| c / 16.0),
            high_diffuse: high,
            high_specular: high.map(|c| c / 4.0),
            offset: [5.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderingSettings {
    pub window_size: [u32; 2],
    pub target_fps: f32,
    /// Frames rendered by one headless demo run.
    pub demo_frames: u32,
}

impl Default for RenderingSettings {
    fn default() -> Self {
        Self {
            window_size: [800, 600],
            target_fps: 60.0,
            demo_frames: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scene: SceneSettings,
    pub terrain: TerrainSettings,
    pub rendering: RenderingSettings,
}

pub fn load_settings(path: &Path) -> Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading settings file {:?}", path))?;
    toml::from_str(&raw).with_context(|| format!("parsing settings file {:?}", path))
}

pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    let raw = toml::to_string_pretty(settings).context("serializing settings")?;
    fs::write(path, raw).with_context(|| format!("writing settings file {:?}", path))
}

/// Load settings, falling back to defaults when the file is absent or broken.
pub fn load_or_default(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring settings file {:?}: {:#}", path, e);
            Settings::default()
        }
    }
}
