use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::assets::mesh::MeshData;

/// Typed value for a shader parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i32),
    UInt(u32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat3(Mat3),
    Mat4(Mat4),
}

/// Shader/material collaborator. Implementations own shader compilation,
/// uniform marshaling, and draw-call sequencing; the scene graph only binds,
/// sets typed parameters, and asks for a draw.
pub trait Material {
    fn bind(&mut self);
    fn unbind(&mut self);
    fn set_param(&mut self, name: &str, value: ParamValue);
    fn draw(&mut self, mesh: &MeshData);
}

/// Stable handle into a [`MaterialRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialId(usize);

/// Arena of materials addressed by stable index. Mesh nodes store a
/// [`MaterialId`] instead of owning their shader, which keeps the node tree
/// free of shared ownership.
#[derive(Default)]
pub struct MaterialRegistry {
    materials: Vec<Box<dyn Material>>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, material: Box<dyn Material>) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Ids are only handed out by [`MaterialRegistry::add`], so lookups on a
    /// registry the id came from cannot miss.
    pub fn get_mut(&mut self, id: MaterialId) -> &mut dyn Material {
        self.materials[id.0].as_mut()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
