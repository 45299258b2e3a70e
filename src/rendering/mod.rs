pub mod camera;
pub mod material;
pub mod materials;
pub mod scene;

pub use camera::Camera;
pub use material::{Material, MaterialId, MaterialRegistry, ParamValue};
pub use materials::{DebugMaterial, MaterialEvent, RecordingMaterial};
