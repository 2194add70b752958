//! The opaque AR session collaborator: world tracking, anchors, hit-testing,
//! and the events it delivers back to the application.

use nalgebra::{Matrix4, Point2};
use thiserror::Error;

use super::TrackingState;

/// Identifier of an anchor registered with the session.
///
/// Anchors are owned by the session; this crate only requests their
/// creation and never mutates or destroys them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(pub u64);

/// What a spatial hit-test is allowed to intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTestTarget {
    FeaturePoint,
    EstimatedHorizontalPlane,
}

/// One candidate intersection returned by a hit-test, nearest first.
#[derive(Debug, Clone, Copy)]
pub struct HitTestResult {
    pub world_transform: Matrix4<f32>,
    pub target: HitTestTarget,
}

/// Options for (re)running the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    pub reset_tracking: bool,
    pub remove_existing_anchors: bool,
}

impl SessionConfig {
    /// Configuration for a full restart: discard tracking and anchors.
    pub fn restart() -> Self {
        Self {
            reset_tracking: true,
            remove_existing_anchors: true,
        }
    }
}

/// World-tracking session service.
///
/// `&self` receivers throughout: the detection worker shares the session
/// behind an `Arc`, and platform session handles are internally
/// synchronized.
pub trait ArSession: Send + Sync {
    /// Start or restart the session with the given configuration.
    fn run(&self, config: SessionConfig);

    /// Pause the session.
    fn pause(&self);

    /// Project a screen point into the tracked environment and return
    /// candidate intersections with the requested targets, nearest first.
    fn hit_test(&self, point: Point2<f32>, targets: &[HitTestTarget]) -> Vec<HitTestResult>;

    /// Register a new anchor at the given world transform.
    fn add_anchor(&self, world_transform: Matrix4<f32>) -> AnchorId;
}

/// Failure reported by the AR session, in its own vocabulary.
#[derive(Debug, Clone, Error)]
#[error("{description}")]
pub struct ArSessionError {
    pub description: String,
    pub failure_reason: Option<String>,
    pub recovery_suggestion: Option<String>,
}

/// A session failure, discriminated by whether it belongs to the expected
/// AR error category. Failures outside that category are ignored.
#[derive(Debug, Clone)]
pub enum SessionFailure {
    Ar(ArSessionError),
    Other(String),
}

/// Callbacks delivered by the session on the UI-owning thread.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    AnchorAdded(AnchorId),
    TrackingStateChanged(TrackingState),
    Interrupted,
    Failed(SessionFailure),
}
