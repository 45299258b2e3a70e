use glam::{Mat4, UVec2, Vec3};

use terrascene::assets::mesh::VertexBuffer;
use terrascene::rendering::material::MaterialRegistry;
use terrascene::rendering::materials::RecordingMaterial;
use terrascene::rendering::scene::NodeKind;
use terrascene::world::heightfield::{HeightSampler, PerlinHeightField};
use terrascene::world::terrain::{ColorPair, Terrain, TerrainParams};

fn params(samples: UVec2) -> TerrainParams {
    TerrainParams {
        shininess: 32.0,
        low: ColorPair {
            diffuse: Vec3::new(0.96, 0.84, 0.69),
            specular: Vec3::new(0.96, 0.84, 0.69) / 16.0,
        },
        high: ColorPair {
            diffuse: Vec3::new(0.25, 0.60, 0.04),
            specular: Vec3::new(0.25, 0.60, 0.04) / 4.0,
        },
        size: Vec3::new(5.0, 5.0, 1.0),
        samples,
    }
}

fn colored_vertices(buffer: &VertexBuffer) -> &[terrascene::assets::mesh::ColorVertex] {
    match buffer {
        VertexBuffer::Colored(vertices) => vertices,
        VertexBuffer::Textured(_) => panic!("terrain should emit colored vertices"),
    }
}

#[test]
fn same_seed_and_parameters_reproduce_identical_buffers() {
    let first = Terrain::new(PerlinHeightField::new(123_123), params(UVec2::splat(25))).build_mesh();
    let second =
        Terrain::new(PerlinHeightField::new(123_123), params(UVec2::splat(25))).build_mesh();

    assert_eq!(first.vertices.as_bytes(), second.vertices.as_bytes());
    assert_eq!(first.indices, second.indices);
}

#[test]
fn grid_size_determines_vertex_and_index_counts() {
    let mesh = Terrain::new(PerlinHeightField::new(7), params(UVec2::new(7, 5))).build_mesh();

    assert_eq!(mesh.vertices.len(), 7 * 5);
    assert_eq!(mesh.indices.len(), 6 * 6 * 4);
    let max = *mesh.indices.iter().max().unwrap();
    assert!((max as usize) < mesh.vertices.len());
}

#[test]
fn every_emitted_normal_has_unit_length() {
    let mesh = Terrain::new(PerlinHeightField::new(99), params(UVec2::splat(16))).build_mesh();

    for vertex in colored_vertices(&mesh.vertices) {
        let length = Vec3::from_array(vertex.normal).length();
        assert!(
            (length - 1.0).abs() < 1e-4,
            "normal {:?} has length {}",
            vertex.normal,
            length
        );
    }
}

#[test]
fn flat_heightfield_yields_straight_up_normals() {
    let flat = |_: f32, _: f32| 0.25;
    let mesh = Terrain::new(flat, params(UVec2::splat(8))).build_mesh();

    for vertex in colored_vertices(&mesh.vertices) {
        let normal = Vec3::from_array(vertex.normal);
        assert!(normal.abs_diff_eq(Vec3::Y, 1e-5), "normal {:?}", normal);
        // height scale is 1, so the surface sits at the sampled value
        assert!((vertex.position[1] - 0.25).abs() < 1e-6);
    }
}

#[test]
fn colors_interpolate_between_extremes_of_the_height_range() {
    // full-range step function: zero near the origin, one everywhere else
    let step = |x: f32, y: f32| if x < 0.1 && y < 0.1 { 0.0 } else { 1.0 };
    let p = params(UVec2::splat(4));
    let mesh = Terrain::new(step, p).build_mesh();
    let vertices = colored_vertices(&mesh.vertices);

    let low = vertices
        .iter()
        .find(|v| v.position[1] == 0.0)
        .expect("a vertex at minimum height");
    assert_eq!(Vec3::from_array(low.diffuse), p.low.diffuse);
    assert_eq!(Vec3::from_array(low.specular), p.low.specular);

    let high = vertices
        .iter()
        .find(|v| v.position[1] == p.size.z)
        .expect("a vertex at maximum height");
    assert!(Vec3::from_array(high.diffuse).abs_diff_eq(p.high.diffuse, 1e-6));
    assert!(Vec3::from_array(high.specular).abs_diff_eq(p.high.specular, 1e-6));
}

#[test]
fn quads_triangulate_with_fixed_winding() {
    let flat = |_: f32, _: f32| 0.5;
    let mesh = Terrain::new(flat, params(UVec2::splat(3))).build_mesh();

    // first 2x2 block, row-major flatten index = y * 3 + x
    assert_eq!(&mesh.indices[..6], &[3, 1, 0, 3, 4, 1]);
}

#[test]
fn vertices_are_emitted_in_row_major_grid_order() {
    let flat = |_: f32, _: f32| 0.0;
    let p = params(UVec2::new(3, 2));
    let mesh = Terrain::new(flat, p).build_mesh();
    let vertices = colored_vertices(&mesh.vertices);

    let scale_x = p.size.x / 3.0;
    let scale_y = p.size.y / 2.0;
    for y in 0..2 {
        for x in 0..3 {
            let vertex = &vertices[y * 3 + x];
            assert!((vertex.position[0] - x as f32 * scale_x).abs() < 1e-6);
            assert!((vertex.position[2] - y as f32 * scale_y).abs() < 1e-6);
        }
    }
}

#[test]
#[should_panic(expected = "at least a 2x2 sample grid")]
fn degenerate_sample_grid_is_rejected() {
    let flat = |_: f32, _: f32| 0.0;
    let _ = Terrain::new(flat, params(UVec2::new(1, 25)));
}

#[test]
fn terrain_node_owns_its_generated_mesh_as_single_child() {
    let mut registry = MaterialRegistry::new();
    let (material, _) = RecordingMaterial::new();
    let id = registry.add(Box::new(material));

    let node = Terrain::new(PerlinHeightField::new(1), params(UVec2::splat(5)))
        .into_node(Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)), id)
        .unwrap();

    assert!(matches!(node.kind(), NodeKind::Terrain { .. }));
    assert_eq!(node.children().len(), 1);
    match node.children()[0].kind() {
        NodeKind::Mesh { mesh, .. } => assert_eq!(mesh.vertices.len(), 25),
        other => panic!("expected a mesh child, got {:?}", other),
    }
}

#[test]
fn perlin_sampler_stays_in_unit_range_and_tracks_its_seed() {
    let a = PerlinHeightField::new(42);
    let b = PerlinHeightField::new(42);
    let c = PerlinHeightField::new(43);

    let mut diverged = false;
    for i in 0..50 {
        for j in 0..50 {
            let (x, y) = (i as f32 * 0.173, j as f32 * 0.261);
            let height = a.sample(x, y);
            assert!((0.0..=1.0).contains(&height));
            assert_eq!(height, b.sample(x, y));
            if height != c.sample(x, y) {
                diverged = true;
            }
        }
    }
    assert!(diverged, "different seeds should produce different terrain");
}
