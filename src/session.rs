//! AR-session-facing types: tracking state, orientation mapping, camera
//! frames, and the opaque session trait with its event and failure types.

mod frame;
mod orientation;
mod tracking;
mod world;

pub use frame::{CameraFrame, FrameImage};
pub use orientation::{DeviceOrientation, ImageOrientation};
pub use tracking::{LimitedReason, TrackingState};
pub use world::{
    AnchorId, ArSession, ArSessionError, HitTestResult, HitTestTarget, SessionConfig,
    SessionEvent, SessionFailure,
};
