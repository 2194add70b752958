//! Overlay presentation: the status banner with its message timers, the
//! scene-renderer trait, and the controller reacting to session events.

mod controller;
mod effect;
mod scene;
mod status;

pub use controller::{OverlayController, SessionAlert};
pub use effect::{DEFAULT_EFFECT_SCALE, EffectNode};
pub use scene::{NodeId, SceneRenderer};
pub use status::{DISPLAY_DURATION, MessageCategory, StatusPresenter};
