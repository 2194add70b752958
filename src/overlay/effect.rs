//! The single shared particle-effect node, as an explicit owned handle.

use crate::session::AnchorId;

use super::{NodeId, SceneRenderer};

/// Scale applied to the effect node when it is loaded into the scene.
pub const DEFAULT_EFFECT_SCALE: f32 = 0.0002;

/// Owned handle to the one particle-effect node in the scene.
///
/// Only one effect node exists; attaching it to a new anchor steals it from
/// the previous one. Keeping the handle and its current parent here makes
/// the reuse explicit instead of hiding it in shared scene-graph state.
#[derive(Debug)]
pub struct EffectNode {
    node: NodeId,
    parent: Option<AnchorId>,
}

impl EffectNode {
    pub fn new(node: NodeId) -> Self {
        Self { node, parent: None }
    }

    /// Re-parent the effect under `anchor`, detaching it from any previous
    /// parent first.
    pub fn attach_to<R: SceneRenderer>(&mut self, anchor: AnchorId, renderer: &mut R) {
        if self.parent.take().is_some() {
            renderer.detach(self.node);
        }
        renderer.attach(self.node, anchor);
        self.parent = Some(anchor);
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Anchor the effect is currently attached to, if any.
    pub fn parent(&self) -> Option<AnchorId> {
        self.parent
    }
}
