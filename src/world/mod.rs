pub mod heightfield;
pub mod terrain;

pub use heightfield::{HeightSampler, PerlinHeightField};
pub use terrain::{ColorPair, Terrain, TerrainParams};
