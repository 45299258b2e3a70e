use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::mesh::{MeshData, TexVertex, VertexBuffer};
use super::texture::{TextureCache, TextureRef};

/// Shininess used when an imported material does not specify one.
pub const DEFAULT_SHININESS: f32 = 32.0;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to load model at {path:?}: {reason}")]
    Model { path: PathBuf, reason: String },
    #[error("failed to load texture at {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },
    #[error("imported mesh has {positions} positions but {normals} normals")]
    MismatchedAttributes { positions: usize, normals: usize },
}

/// Raw mesh data as an importer hands it over: parallel attribute arrays plus
/// the material inputs resolved against a [`TextureCache`].
#[derive(Debug, Clone)]
pub struct ImportedMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    /// May be shorter than `positions` when the source mesh has no UVs;
    /// missing entries become zeros.
    pub tex_coords: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
    pub textures: Vec<TextureRef>,
    pub shininess: f32,
}

impl Default for ImportedMesh {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            tex_coords: Vec::new(),
            indices: Vec::new(),
            textures: Vec::new(),
            shininess: DEFAULT_SHININESS,
        }
    }
}

impl ImportedMesh {
    /// Interleave the raw attribute arrays into a renderable vertex buffer.
    pub fn into_mesh_data(self) -> Result<MeshData, ImportError> {
        if self.positions.len() != self.normals.len() {
            return Err(ImportError::MismatchedAttributes {
                positions: self.positions.len(),
                normals: self.normals.len(),
            });
        }

        let vertices = self
            .positions
            .iter()
            .enumerate()
            .map(|(i, position)| TexVertex {
                position: *position,
                normal: self.normals[i],
                tex_coords: self.tex_coords.get(i).copied().unwrap_or([0.0; 2]),
            })
            .collect();

        Ok(MeshData {
            vertices: VertexBuffer::Textured(vertices),
            indices: self.indices,
            textures: self.textures,
            shininess: self.shininess,
        })
    }
}

/// One node of the importer's own hierarchy.
#[derive(Debug, Clone, Default)]
pub struct ImportedNode {
    pub meshes: Vec<ImportedMesh>,
    pub children: Vec<ImportedNode>,
}

/// A fully imported model: a tree of raw meshes ready to be wrapped into
/// scene nodes.
#[derive(Debug, Clone, Default)]
pub struct ImportedModel {
    pub root: ImportedNode,
}

/// Asset import collaborator. Implementations own file parsing entirely;
/// texture lookup goes through the cache the caller passes in.
pub trait ModelImporter {
    fn load(
        &mut self,
        path: &Path,
        textures: &mut TextureCache,
    ) -> Result<ImportedModel, ImportError>;
}

/// Importer that produces an empty model. Stands in wherever no real asset
/// pipeline is wired up, such as the demo binary.
pub struct NullImporter;

impl ModelImporter for NullImporter {
    fn load(
        &mut self,
        path: &Path,
        _textures: &mut TextureCache,
    ) -> Result<ImportedModel, ImportError> {
        info!("No importer configured, treating {:?} as an empty model", path);
        Ok(ImportedModel::default())
    }
}
