pub mod import;
pub mod mesh;
pub mod texture;

pub use import::{ImportError, ImportedMesh, ImportedModel, ImportedNode, ModelImporter, NullImporter};
pub use mesh::{ColorVertex, MeshData, TexVertex, VertexBuffer};
pub use texture::{TextureCache, TextureKind, TextureRef};
