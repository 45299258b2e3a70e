pub mod graph;
pub mod node;

pub use graph::{describe_scene, render_scene, traverse, Cascade, SCENE_GRAPH_INDENT};
pub use node::{NodeKind, SceneError, SceneNode};
