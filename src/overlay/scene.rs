//! Trait for the opaque scene renderer.

use std::time::Duration;

use crate::session::AnchorId;

/// Identifier of a node in the renderer's scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Scene renderer collaborator: node attachment and overlay alpha mutation.
///
/// All calls happen on the UI-owning thread.
pub trait SceneRenderer {
    /// Load the particle-effect node into the scene at the given scale and
    /// return its handle. Called once during setup.
    fn load_effect(&mut self, scale: f32) -> NodeId;

    /// Parent `node` under the scene node associated with `anchor`.
    fn attach(&mut self, node: NodeId, anchor: AnchorId);

    /// Remove `node` from its current parent.
    fn detach(&mut self, node: NodeId);

    /// Set the alpha of all overlay nodes immediately, no animation.
    fn set_overlay_alpha(&mut self, alpha: f32);

    /// Fade all overlay nodes back to full visibility over `duration`.
    fn fade_in_overlays(&mut self, duration: Duration);
}
