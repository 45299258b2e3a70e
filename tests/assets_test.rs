use std::path::Path;

use glam::Mat4;

use terrascene::assets::import::{
    ImportError, ImportedMesh, ImportedModel, ImportedNode, ModelImporter, NullImporter,
    DEFAULT_SHININESS,
};
use terrascene::assets::mesh::VertexBuffer;
use terrascene::assets::texture::{TextureCache, TextureKind};
use terrascene::rendering::material::MaterialRegistry;
use terrascene::rendering::materials::RecordingMaterial;
use terrascene::rendering::scene::{NodeKind, SceneNode};

fn triangle() -> ImportedMesh {
    ImportedMesh {
        positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        normals: vec![[0.0, 0.0, 1.0]; 3],
        tex_coords: vec![[0.0, 0.0], [1.0, 0.0]],
        indices: vec![0, 1, 2],
        textures: Vec::new(),
        shininess: DEFAULT_SHININESS,
    }
}

#[test]
fn texture_cache_loads_each_path_once() {
    let mut cache = TextureCache::new();
    let mut loads = 0;

    let first = cache
        .get_or_load(Path::new("wood.png"), TextureKind::Diffuse, |_| {
            loads += 1;
            Ok(7)
        })
        .unwrap();

    let second = cache
        .get_or_load(Path::new("wood.png"), TextureKind::Specular, |_| {
            loads += 1;
            Ok(8)
        })
        .unwrap();

    assert_eq!(loads, 1);
    assert_eq!(first.id, 7);
    assert_eq!(second.id, 7);
    assert_eq!(second.kind, TextureKind::Specular);
    assert_eq!(cache.len(), 1);

    cache
        .get_or_load(Path::new("stone.png"), TextureKind::Diffuse, |_| {
            loads += 1;
            Ok(9)
        })
        .unwrap();
    assert_eq!(loads, 2);
    assert_eq!(cache.len(), 2);
}

#[test]
fn texture_cache_propagates_loader_failures() {
    let mut cache = TextureCache::new();
    let result = cache.get_or_load(Path::new("missing.png"), TextureKind::Diffuse, |path| {
        Err(ImportError::Texture {
            path: path.to_path_buf(),
            reason: "no such file".to_string(),
        })
    });

    assert!(result.is_err());
    assert!(cache.is_empty());
}

#[test]
fn imported_mesh_interleaves_attributes_and_pads_missing_uvs() {
    let mesh = triangle().into_mesh_data().unwrap();

    let VertexBuffer::Textured(vertices) = &mesh.vertices else {
        panic!("imported meshes should carry textured vertices");
    };
    assert_eq!(vertices.len(), 3);
    assert_eq!(vertices[1].tex_coords, [1.0, 0.0]);
    // no UV was supplied for the third vertex
    assert_eq!(vertices[2].tex_coords, [0.0, 0.0]);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_eq!(mesh.shininess, DEFAULT_SHININESS);
}

#[test]
fn imported_mesh_with_mismatched_attributes_is_rejected() {
    let mut broken = triangle();
    broken.normals.pop();

    assert!(matches!(
        broken.into_mesh_data(),
        Err(ImportError::MismatchedAttributes { positions: 3, normals: 2 })
    ));
}

#[test]
fn model_node_flattens_the_importer_hierarchy_into_mesh_children() {
    let imported = ImportedModel {
        root: ImportedNode {
            meshes: vec![triangle()],
            children: vec![ImportedNode {
                meshes: vec![triangle(), triangle()],
                children: Vec::new(),
            }],
        },
    };

    let mut registry = MaterialRegistry::new();
    let (material, _) = RecordingMaterial::new();
    let id = registry.add(Box::new(material));

    let node = SceneNode::model(Mat4::IDENTITY, imported, id).unwrap();
    assert!(matches!(node.kind(), NodeKind::Model { .. }));
    assert_eq!(node.children().len(), 3);
    for child in node.children() {
        assert!(matches!(child.kind(), NodeKind::Mesh { .. }));
        assert!(child.children().is_empty());
    }
}

#[test]
fn null_importer_yields_an_empty_model() {
    let mut cache = TextureCache::new();
    let imported = NullImporter
        .load(Path::new("assets/models/backpack.obj"), &mut cache)
        .unwrap();

    assert!(imported.root.meshes.is_empty());
    assert!(imported.root.children.is_empty());

    let mut registry = MaterialRegistry::new();
    let (material, _) = RecordingMaterial::new();
    let id = registry.add(Box::new(material));
    let node = SceneNode::model(Mat4::IDENTITY, imported, id).unwrap();
    assert!(node.children().is_empty());
}
