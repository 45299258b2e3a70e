// TerraScene: scene-graph composition with cascading transforms, plus a
// procedurally generated terrain mesh with analytic normal estimation.

pub mod app;
pub mod assets;
pub mod config;
pub mod rendering;
pub mod utils;
pub mod world;

// Re-export commonly used types for convenience
pub use rendering::scene::{
    describe_scene, render_scene, traverse, Cascade, NodeKind, SceneError, SceneNode,
};
pub use world::{ColorPair, HeightSampler, PerlinHeightField, Terrain, TerrainParams};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
