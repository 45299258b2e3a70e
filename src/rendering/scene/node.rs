use glam::{Mat3, Mat4};
use thiserror::Error;

use crate::assets::import::{ImportError, ImportedModel, ImportedNode};
use crate::assets::mesh::MeshData;
use crate::assets::texture::TextureKind;
use crate::rendering::camera::Camera;
use crate::rendering::material::{MaterialId, MaterialRegistry, ParamValue};

use super::graph::{Cascade, SCENE_GRAPH_INDENT};

#[derive(Debug, Error)]
pub enum SceneError {
    /// An object node was given the all-zero matrix as its local transform.
    #[error("degenerate local transform: the all-zero matrix cannot place an object")]
    DegenerateTransform,
    #[error("imported model is malformed: {0}")]
    Import(#[from] ImportError),
}

/// One node of the scene graph.
///
/// Children are owned exclusively and visited in insertion order, so the
/// graph is a tree by construction: no node can appear twice and cycles are
/// unrepresentable. Nodes are built once during scene setup and stay
/// unchanged for the life of the render loop.
#[derive(Debug)]
pub struct SceneNode {
    kind: NodeKind,
    children: Vec<SceneNode>,
}

/// The closed set of node kinds, each carrying only the payload it needs.
/// Dispatch is a single `match`; the traversal never inspects kinds itself.
#[derive(Debug)]
pub enum NodeKind {
    /// Top of the graph; contributes the identity cascade and draws nothing.
    Root,
    /// Pure container placing its children with a local transform.
    Group { transform: Mat4 },
    /// Drawable geometry. Renders by composing its own contribution onto the
    /// inherited cascade and feeding the result to its material.
    Mesh {
        transform: Mat4,
        mesh: MeshData,
        material: MaterialId,
    },
    /// Container for a generated terrain mesh; the mesh is its single child,
    /// added at construction, so the container itself draws nothing.
    Terrain { transform: Mat4 },
    /// Container for the meshes of an imported model; likewise only its mesh
    /// children draw.
    Model { transform: Mat4 },
}

fn checked(transform: Mat4) -> Result<Mat4, SceneError> {
    // can't have an empty (all 0s) matrix
    if transform == Mat4::ZERO {
        return Err(SceneError::DegenerateTransform);
    }
    Ok(transform)
}

impl SceneNode {
    pub fn root() -> Self {
        Self {
            kind: NodeKind::Root,
            children: Vec::new(),
        }
    }

    pub fn group(transform: Mat4) -> Result<Self, SceneError> {
        Ok(Self {
            kind: NodeKind::Group {
                transform: checked(transform)?,
            },
            children: Vec::new(),
        })
    }

    /// Drawable mesh node placed at the identity transform, the common case
    /// for geometry positioned entirely by its ancestors.
    pub fn mesh(mesh: MeshData, material: MaterialId) -> Self {
        Self {
            kind: NodeKind::Mesh {
                transform: Mat4::IDENTITY,
                mesh,
                material,
            },
            children: Vec::new(),
        }
    }

    pub fn mesh_at(
        transform: Mat4,
        mesh: MeshData,
        material: MaterialId,
    ) -> Result<Self, SceneError> {
        Ok(Self {
            kind: NodeKind::Mesh {
                transform: checked(transform)?,
                mesh,
                material,
            },
            children: Vec::new(),
        })
    }

    /// Terrain container node. The generated mesh is attached as its single
    /// child by the terrain builder.
    pub fn terrain(transform: Mat4) -> Result<Self, SceneError> {
        Ok(Self {
            kind: NodeKind::Terrain {
                transform: checked(transform)?,
            },
            children: Vec::new(),
        })
    }

    /// Wrap an imported model into a container node with one mesh child per
    /// raw mesh, walking the importer's hierarchy depth-first.
    pub fn model(
        transform: Mat4,
        imported: ImportedModel,
        material: MaterialId,
    ) -> Result<Self, SceneError> {
        let mut node = Self {
            kind: NodeKind::Model {
                transform: checked(transform)?,
            },
            children: Vec::new(),
        };
        node.wrap_imported(imported.root, material)?;
        Ok(node)
    }

    fn wrap_imported(
        &mut self,
        imported: ImportedNode,
        material: MaterialId,
    ) -> Result<(), SceneError> {
        for mesh in imported.meshes {
            self.add_child(SceneNode::mesh(mesh.into_mesh_data()?, material));
        }
        for child in imported.children {
            self.wrap_imported(child, material)?;
        }
        Ok(())
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Append a child; insertion order is traversal and render order.
    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Detach and return the child at `index`. Structural primitive kept for
    /// dynamic scenes; the steady-state render loop never calls it.
    pub fn remove_child(&mut self, index: usize) -> SceneNode {
        self.children.remove(index)
    }

    /// The incremental cascade this node adds on top of its inherited one:
    /// identity for the root, the local transform for everything else.
    pub fn contribution(&self) -> Cascade {
        match &self.kind {
            NodeKind::Root => Cascade::IDENTITY,
            NodeKind::Group { transform }
            | NodeKind::Mesh { transform, .. }
            | NodeKind::Terrain { transform }
            | NodeKind::Model { transform } => Cascade::new(*transform),
        }
    }

    /// Render this node under the composed cascade of its ancestors.
    /// Containers are no-ops; their drawable children are visited by the same
    /// traversal and draw themselves.
    pub fn render(&self, camera: &Camera, cascade: &Cascade, materials: &mut MaterialRegistry) {
        let NodeKind::Mesh {
            transform,
            mesh,
            material,
        } = &self.kind
        else {
            return;
        };

        let world = cascade.compose(&Cascade::new(*transform)).transform;
        let normal_mat = Mat3::from_mat4(world).inverse().transpose();

        let shader = materials.get_mut(*material);
        shader.bind();
        shader.set_param("model", ParamValue::Mat4(world));
        shader.set_param("normalMat", ParamValue::Mat3(normal_mat));
        shader.set_param("view", ParamValue::Mat4(camera.view_matrix()));
        shader.set_param("projection", ParamValue::Mat4(camera.projection_matrix()));
        shader.set_param("viewPos", ParamValue::Vec3(camera.position()));
        shader.set_param("material.shininess", ParamValue::Float(mesh.shininess));

        // texture slots are numbered per kind: textureDiffuse1, textureSpecular1, ...
        let mut diffuse_n = 1;
        let mut specular_n = 1;
        for (slot, texture) in mesh.textures.iter().enumerate() {
            let number = match texture.kind {
                TextureKind::Diffuse => {
                    diffuse_n += 1;
                    diffuse_n - 1
                }
                TextureKind::Specular => {
                    specular_n += 1;
                    specular_n - 1
                }
            };
            let name = format!("material.{}{}", texture.kind.uniform_name(), number);
            shader.set_param(&name, ParamValue::Int(slot as i32));
        }

        shader.draw(mesh);
        shader.unbind();
    }

    /// Human-readable label for this node, indented by recursion depth.
    pub fn describe(&self, cascade: &Cascade) -> String {
        let label = match &self.kind {
            NodeKind::Root => "Root",
            NodeKind::Group { .. } => "Group",
            NodeKind::Mesh { .. } => "Mesh",
            NodeKind::Terrain { .. } => "Terrain",
            NodeKind::Model { .. } => "Model",
        };
        format!(
            "{}{}:",
            " ".repeat(SCENE_GRAPH_INDENT * cascade.depth as usize),
            label
        )
    }
}
