pub mod settings;

pub use settings::{
    load_or_default, load_settings, save_settings, RenderingSettings, SceneSettings, Settings,
    TerrainSettings, CONFIG_FILE,
};
