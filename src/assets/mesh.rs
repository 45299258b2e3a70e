use bytemuck::{Pod, Zeroable};

use super::texture::TextureRef;

/// Vertex carrying texture coordinates, used by imported model meshes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TexVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

/// Vertex carrying a diffuse/specular color pair, used by generated terrain.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

/// The two vertex layouts a mesh can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum VertexBuffer {
    Textured(Vec<TexVertex>),
    Colored(Vec<ColorVertex>),
}

impl VertexBuffer {
    pub fn len(&self) -> usize {
        match self {
            VertexBuffer::Textured(vertices) => vertices.len(),
            VertexBuffer::Colored(vertices) => vertices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw bytes of the interleaved vertex data, as a GPU upload would see them.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            VertexBuffer::Textured(vertices) => bytemuck::cast_slice(vertices),
            VertexBuffer::Colored(vertices) => bytemuck::cast_slice(vertices),
        }
    }
}

/// CPU-side triangle mesh: interleaved vertices, a triangle index list, and
/// the material inputs the shader needs (texture slots, shininess).
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: VertexBuffer,
    pub indices: Vec<u32>,
    pub textures: Vec<TextureRef>,
    pub shininess: f32,
}

impl MeshData {
    pub fn num_indices(&self) -> u32 {
        self.indices.len() as u32
    }
}
