use glam::{Mat4, UVec2, Vec2, Vec3};
use tracing::info;

use crate::assets::mesh::{ColorVertex, MeshData, VertexBuffer};
use crate::rendering::material::MaterialId;
use crate::rendering::scene::node::{SceneError, SceneNode};

use super::heightfield::HeightSampler;

/// Diffuse/specular color pair for height-based terrain tinting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    pub diffuse: Vec3,
    pub specular: Vec3,
}

/// Parameters for one terrain build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    pub shininess: f32,
    /// Color at the lowest sampled height.
    pub low: ColorPair,
    /// Color at the highest sampled height.
    pub high: ColorPair,
    /// x and y span the ground plane in world units; z scales the sampled
    /// height.
    pub size: Vec3,
    /// Grid resolution per planar axis; both axes must be at least 2.
    pub samples: UVec2,
}

/// Deterministic terrain mesh generator: samples a continuous height function
/// on a regular grid and emits positions, finite-difference normals,
/// height-interpolated colors, and a triangulated index buffer.
pub struct Terrain<S> {
    sampler: S,
    params: TerrainParams,
}

/// Row-major flattening of a grid coordinate.
fn flatten(coord: UVec2, size: UVec2) -> usize {
    (coord.y * size.x + coord.x) as usize
}

impl<S: HeightSampler> Terrain<S> {
    pub fn new(sampler: S, params: TerrainParams) -> Self {
        assert!(
            params.samples.x >= 2 && params.samples.y >= 2,
            "terrain needs at least a 2x2 sample grid, got {}x{}",
            params.samples.x,
            params.samples.y
        );
        Self { sampler, params }
    }

    /// World-space surface point above a planar position, straight from the
    /// continuous sampler.
    fn point_at(&self, pos: Vec2) -> Vec3 {
        Vec3::new(
            pos.x,
            self.sampler.sample(pos.x, pos.y) * self.params.size.z,
            pos.y,
        )
    }

    /// Build the vertex and index buffers. Bit-for-bit reproducible for a
    /// fixed sampler and fixed parameters.
    pub fn build_mesh(&self) -> MeshData {
        let samples = self.params.samples;
        let scale = Vec2::new(
            self.params.size.x / samples.x as f32,
            self.params.size.y / samples.y as f32,
        );
        let vertical = self.params.size.z;
        let cells = (samples.x * samples.y) as usize;

        // neighbor offset for the finite differences, small against one cell
        let eps = scale.x.min(scale.y) / 10.0;

        let mut heights = vec![0f32; cells];
        let mut normals = vec![Vec3::ZERO; cells];

        for y in 0..samples.y {
            for x in 0..samples.x {
                let position = self.point_at(Vec2::new(x as f32 * scale.x, y as f32 * scale.y));
                let cell = flatten(UVec2::new(x, y), samples);
                heights[cell] = position.y;

                // Four neighbors, clockwise in the ground plane. Past the grid
                // edge this still reads the continuous sampler, which leaves
                // the known seam artifacts in border normals.
                let nearby = [
                    self.point_at(Vec2::new(position.x + eps, position.z)),
                    self.point_at(Vec2::new(position.x, position.z - eps)),
                    self.point_at(Vec2::new(position.x - eps, position.z)),
                    self.point_at(Vec2::new(position.x, position.z + eps)),
                ];

                // unit vectors toward each neighbor, then one normal estimate
                // per quadrant from consecutive pairs, wrapping
                let to_each = nearby.map(|point| (position - point).normalize());
                let mut sum = Vec3::ZERO;
                for i in 0..to_each.len() {
                    sum += to_each[i].cross(to_each[(i + 1) % to_each.len()]);
                }
                normals[cell] = sum.normalize();
            }
        }

        let mut vertices = Vec::with_capacity(cells);
        for y in 0..samples.y {
            for x in 0..samples.x {
                let cell = flatten(UVec2::new(x, y), samples);
                let position =
                    Vec3::new(x as f32 * scale.x, heights[cell], y as f32 * scale.y);

                let t = position.y / vertical;
                let diffuse = self.params.low.diffuse.lerp(self.params.high.diffuse, t);
                let specular = self.params.low.specular.lerp(self.params.high.specular, t);

                vertices.push(ColorVertex {
                    position: position.to_array(),
                    normal: normals[cell].to_array(),
                    diffuse: diffuse.to_array(),
                    specular: specular.to_array(),
                });
            }
        }

        // two triangles per 2x2 cell block, fixed winding
        let quads = ((samples.x - 1) * (samples.y - 1)) as usize;
        let mut indices = Vec::with_capacity(6 * quads);
        for y in 0..samples.y - 1 {
            for x in 0..samples.x - 1 {
                // first half of the quad
                indices.push(flatten(UVec2::new(x, y + 1), samples) as u32);
                indices.push(flatten(UVec2::new(x + 1, y), samples) as u32);
                indices.push(flatten(UVec2::new(x, y), samples) as u32);
                // second half
                indices.push(flatten(UVec2::new(x, y + 1), samples) as u32);
                indices.push(flatten(UVec2::new(x + 1, y + 1), samples) as u32);
                indices.push(flatten(UVec2::new(x + 1, y), samples) as u32);
            }
        }

        info!(
            "Generated terrain mesh: {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );

        MeshData {
            vertices: VertexBuffer::Colored(vertices),
            indices,
            textures: Vec::new(),
            shininess: self.params.shininess,
        }
    }

    /// Build the mesh and wrap it as a scene node: a terrain container whose
    /// single child is the generated geometry.
    pub fn into_node(self, transform: Mat4, material: MaterialId) -> Result<SceneNode, SceneError> {
        let mesh = self.build_mesh();
        let mut node = SceneNode::terrain(transform)?;
        node.add_child(SceneNode::mesh(mesh, material));
        Ok(node)
    }
}
