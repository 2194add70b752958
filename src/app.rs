//! Application bootstrap and wiring.
//!
//! `App` is the UI-owning side of the system: it gates camera frames into
//! the detection pipeline, drains display updates back out, forwards session
//! events to the overlay controller, and drives the status presenter's
//! timers. The hosting shell calls `on_frame`, `handle_event`, and `tick`
//! from its UI loop and presents any returned alert.

use std::sync::Arc;
use std::time::Instant;

use log::trace;
use thiserror::Error;

use crate::detect::{DetectionPipeline, InferenceEngine, Viewport};
use crate::overlay::{OverlayController, SceneRenderer, SessionAlert, StatusPresenter};
use crate::session::{
    ArSession, CameraFrame, ImageOrientation, SessionConfig, SessionEvent, TrackingState,
};

/// What the device reports it can do, probed by the platform shell.
#[derive(Debug, Clone, Copy)]
pub struct DeviceCapabilities {
    pub world_tracking: bool,
}

/// Launch-time failure. The hosting binary is expected to abort on it:
/// there is no degraded mode without world tracking.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("world tracking is not supported by this device")]
    UnsupportedDevice,
}

/// The assembled application: session, detection pipeline, overlay
/// controller, and status banner.
pub struct App<S: ArSession, R: SceneRenderer> {
    session: Arc<S>,
    pipeline: DetectionPipeline,
    overlay: OverlayController<S, R>,
    presenter: StatusPresenter,
}

impl<S: ArSession + 'static, R: SceneRenderer> App<S, R> {
    /// Verify hardware capability, wire the components together, and start
    /// the session with the default configuration.
    pub fn launch<E>(
        capabilities: DeviceCapabilities,
        session: Arc<S>,
        renderer: R,
        engine: E,
        viewport: Viewport,
    ) -> Result<Self, LaunchError>
    where
        E: InferenceEngine + Send + 'static,
    {
        if !capabilities.world_tracking {
            return Err(LaunchError::UnsupportedDevice);
        }

        let pipeline = DetectionPipeline::spawn(engine, Arc::clone(&session), viewport);
        let overlay = OverlayController::new(Arc::clone(&session), renderer);
        session.run(SessionConfig::default());

        Ok(Self {
            session,
            pipeline,
            overlay,
            presenter: StatusPresenter::new(),
        })
    }

    /// Per-frame entry point. A frame is eligible only when no detection is
    /// in flight and tracking is exactly normal; everything else is dropped.
    pub fn on_frame(&mut self, frame: CameraFrame) {
        if frame.tracking_state != TrackingState::Normal {
            trace!("tracking not normal, skipping frame");
            return;
        }

        let orientation = ImageOrientation::from_device(frame.device_orientation);
        self.pipeline.try_submit(frame.image, orientation);
    }

    /// Session callback entry point. Returns an alert for the shell to
    /// present when an AR failure needs the blocking restart dialog.
    pub fn handle_event(&mut self, event: SessionEvent, now: Instant) -> Option<SessionAlert> {
        match event {
            SessionEvent::AnchorAdded(anchor) => {
                self.overlay.anchor_added(anchor);
                None
            }
            SessionEvent::TrackingStateChanged(state) => {
                self.overlay
                    .tracking_state_changed(state, &mut self.presenter, now);
                None
            }
            SessionEvent::Interrupted => {
                self.overlay.session_interrupted();
                None
            }
            SessionEvent::Failed(failure) => self.overlay.session_failed(&failure),
        }
    }

    /// UI-loop tick: fire due message timers and display any finished
    /// detection results.
    pub fn tick(&mut self, now: Instant) {
        self.presenter.tick(now);

        while let Ok(update) = self.pipeline.updates().try_recv() {
            if update.is_detection() {
                let message = format!(
                    "Detected {} with {:.2}% confidence",
                    update.label,
                    update.confidence * 100.0
                );
                self.presenter.show_message(message, true, now);
            }
        }
    }

    /// The shell is going away; stop the session.
    pub fn pause(&self) {
        self.session.pause();
    }

    /// The user confirmed the restart alert.
    pub fn restart_session(&mut self, now: Instant) {
        self.overlay.restart_session(&mut self.presenter, now);
    }

    /// Whether the session should relocalize after an interruption.
    pub fn should_attempt_relocalization(&self) -> bool {
        self.overlay.should_attempt_relocalization()
    }

    /// The underlying session handle.
    pub fn session(&self) -> &Arc<S> {
        &self.session
    }

    /// The status banner, for the shell to render.
    pub fn presenter(&self) -> &StatusPresenter {
        &self.presenter
    }
}
