use glam::Mat4;

use crate::rendering::camera::Camera;
use crate::rendering::material::MaterialRegistry;

use super::node::SceneNode;

/// Spaces of indentation per depth level in scene descriptions.
pub const SCENE_GRAPH_INDENT: usize = 4;

/// Accumulated coordinate-frame state from the root down to a node: the
/// object-to-world composition so far plus the recursion depth (root = 0).
///
/// Cascades are small copyable values built fresh for each traversal frame
/// and discarded on backtrack; they are never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cascade {
    pub transform: Mat4,
    pub depth: u32,
}

impl Cascade {
    /// Neutral element of composition; also the cascade "above" the root.
    pub const IDENTITY: Cascade = Cascade {
        transform: Mat4::IDENTITY,
        depth: 0,
    };

    pub fn new(transform: Mat4) -> Self {
        Self { transform, depth: 0 }
    }

    /// Compose a child contribution onto this cascade. The child transform is
    /// applied in the frame established by the parent, and depth accumulates
    /// additively. Associative, with [`Cascade::IDENTITY`] as neutral element.
    pub fn compose(&self, child: &Cascade) -> Cascade {
        Cascade {
            transform: child.transform * self.transform,
            depth: self.depth + child.depth,
        }
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Walk the tree depth-first in child insertion order, handing each node the
/// composed cascade of its strict ancestors (identity for the root itself).
///
/// The cascade stack mirrors the active ancestor chain: each level pushes its
/// composed cascade before recursing and pops it afterwards, so sibling
/// subtrees never observe each other's contributions. The walk itself cannot
/// fail; cycle-freedom is guaranteed by the owned tree structure.
pub fn traverse<F>(node: &SceneNode, op: &mut F)
where
    F: FnMut(&SceneNode, &Cascade),
{
    let mut stack: Vec<Cascade> = Vec::new();
    traverse_with_stack(node, &mut stack, op);
}

fn traverse_with_stack<F>(node: &SceneNode, stack: &mut Vec<Cascade>, op: &mut F)
where
    F: FnMut(&SceneNode, &Cascade),
{
    // visit this node under its ancestors' cascade
    let current = stack.last().copied().unwrap_or_default();
    op(node, &current);

    // push this node's contribution for its children
    let mut next = current.compose(&node.contribution());
    next.depth = current.depth + 1;
    stack.push(next);

    for child in node.children() {
        traverse_with_stack(child, stack, op);
    }

    // restore the stack to its pre-call state
    stack.pop();
}

/// Standard render operation: one traversal per frame, delegating to each
/// node's render method with the camera passed through unchanged.
pub fn render_scene(root: &SceneNode, camera: &Camera, materials: &mut MaterialRegistry) {
    traverse(root, &mut |node, cascade| {
        node.render(camera, cascade, materials);
    });
}

/// Standard describe operation: an indented textual dump of the tree, one
/// line per node, indentation proportional to depth.
pub fn describe_scene(root: &SceneNode) -> String {
    let mut out = String::new();
    traverse(root, &mut |node, cascade| {
        out.push_str(&node.describe(cascade));
        out.push('\n');
    });
    out
}
