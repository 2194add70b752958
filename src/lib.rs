//! AR candle-detection overlay pipeline.
//!
//! This crate implements the glue between three opaque platform
//! collaborators: an AR session (world tracking, anchors, hit-testing), an
//! inference engine (labeled bounding boxes per camera frame), and a scene
//! renderer (effect-node attachment and overlay fades). Each collaborator is
//! a trait; the crate supplies the orchestration:
//!
//! - frame gating with a single-slot in-flight mailbox (drop while busy,
//!   never queue),
//! - first-above-threshold detection selection and bounding-box to
//!   screen-point geometry,
//! - a status banner with cancel-and-replace message timers,
//! - overlay lifecycle driven by tracking-state, interruption, and failure
//!   callbacks.

pub mod app;
pub mod detect;
pub mod overlay;
pub mod session;

pub use app::{App, DeviceCapabilities, LaunchError};
pub use detect::{
    CONFIDENCE_THRESHOLD, DetectionPipeline, DisplayUpdate, InferenceEngine, NormalizedRect,
    Observation, Viewport, best_observation,
};
pub use overlay::{
    EffectNode, MessageCategory, NodeId, OverlayController, SceneRenderer, SessionAlert,
    StatusPresenter,
};
pub use session::{
    AnchorId, ArSession, ArSessionError, CameraFrame, DeviceOrientation, FrameImage,
    HitTestResult, HitTestTarget, ImageOrientation, LimitedReason, SessionConfig, SessionEvent,
    SessionFailure, TrackingState,
};
