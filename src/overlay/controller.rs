//! Overlay lifecycle driven by AR session callbacks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;

use crate::session::{AnchorId, ArSession, SessionConfig, SessionFailure, TrackingState};

use super::{DEFAULT_EFFECT_SCALE, EffectNode, MessageCategory, SceneRenderer, StatusPresenter};

/// Grace period before degraded tracking escalates to a persistent warning.
const ESCALATION_DELAY: Duration = Duration::from_secs(3);

/// Fade applied to overlays when tracking returns to normal.
const FADE_IN_DURATION: Duration = Duration::from_millis(500);

/// Blocking dialog describing a session failure, with a single restart
/// action. The shell presents it; confirming runs the restart procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAlert {
    pub title: String,
    pub message: String,
    pub action: String,
}

impl SessionAlert {
    fn session_failed(message: String) -> Self {
        Self {
            title: "The AR session failed.".to_owned(),
            message,
            action: "Restart Session".to_owned(),
        }
    }
}

/// Reacts to anchor, tracking-state, interruption, and failure callbacks:
/// moves the effect node, fades overlays, and drives the status presenter.
pub struct OverlayController<S: ArSession, R: SceneRenderer> {
    session: Arc<S>,
    renderer: R,
    effect: EffectNode,
}

impl<S: ArSession, R: SceneRenderer> OverlayController<S, R> {
    pub fn new(session: Arc<S>, mut renderer: R) -> Self {
        let effect = EffectNode::new(renderer.load_effect(DEFAULT_EFFECT_SCALE));
        Self {
            session,
            renderer,
            effect,
        }
    }

    /// A new anchor was registered: the effect node steals onto it.
    pub fn anchor_added(&mut self, anchor: AnchorId) {
        self.effect.attach_to(anchor, &mut self.renderer);
    }

    /// Tracking quality changed: update the banner, and either arm the
    /// escalation timer or cancel it and bring overlays back.
    pub fn tracking_state_changed(
        &mut self,
        state: TrackingState,
        presenter: &mut StatusPresenter,
        now: Instant,
    ) {
        presenter.show_tracking_quality_info(state, true, now);

        match state {
            TrackingState::NotAvailable | TrackingState::Limited(_) => {
                presenter.escalate_feedback(state, ESCALATION_DELAY, now);
            }
            TrackingState::Normal => {
                presenter.cancel_scheduled_message(MessageCategory::TrackingStateEscalation);
                self.renderer.fade_in_overlays(FADE_IN_DURATION);
            }
        }
    }

    /// The session was interrupted: hide overlays immediately.
    pub fn session_interrupted(&mut self) {
        self.renderer.set_overlay_alpha(0.0);
    }

    /// The session failed. Failures outside the AR error category are
    /// ignored; AR failures become a blocking restart dialog.
    pub fn session_failed(&mut self, failure: &SessionFailure) -> Option<SessionAlert> {
        let error = match failure {
            SessionFailure::Ar(error) => error,
            SessionFailure::Other(description) => {
                debug!("ignoring non-AR session failure: {description}");
                return None;
            }
        };

        let message = [
            Some(error.description.as_str()),
            error.failure_reason.as_deref(),
            error.recovery_suggestion.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n");

        Some(SessionAlert::session_failed(message))
    }

    /// Always attempt automatic relocalization after an interruption.
    pub fn should_attempt_relocalization(&self) -> bool {
        true
    }

    /// Restart procedure: clear all scheduled messages, announce the
    /// restart persistently, and re-run the session discarding tracking
    /// state and prior anchors.
    pub fn restart_session(&mut self, presenter: &mut StatusPresenter, now: Instant) {
        presenter.cancel_all_scheduled_messages();
        presenter.show_message("RESTARTING SESSION", false, now);
        self.session.run(SessionConfig::restart());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{MessageCategory, NodeId};
    use crate::session::{ArSessionError, HitTestResult, HitTestTarget, LimitedReason};
    use nalgebra::{Matrix4, Point2};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSession {
        runs: Mutex<Vec<SessionConfig>>,
    }

    impl ArSession for MockSession {
        fn run(&self, config: SessionConfig) {
            self.runs.lock().unwrap().push(config);
        }

        fn pause(&self) {}

        fn hit_test(
            &self,
            _point: Point2<f32>,
            _targets: &[HitTestTarget],
        ) -> Vec<HitTestResult> {
            Vec::new()
        }

        fn add_anchor(&self, _world_transform: Matrix4<f32>) -> AnchorId {
            AnchorId(0)
        }
    }

    #[derive(Debug, PartialEq)]
    enum SceneCall {
        Attach(NodeId, AnchorId),
        Detach(NodeId),
        SetAlpha(u32),
        FadeIn(Duration),
    }

    #[derive(Default)]
    struct MockRenderer {
        calls: Vec<SceneCall>,
    }

    impl SceneRenderer for MockRenderer {
        fn load_effect(&mut self, _scale: f32) -> NodeId {
            NodeId(7)
        }

        fn attach(&mut self, node: NodeId, anchor: AnchorId) {
            self.calls.push(SceneCall::Attach(node, anchor));
        }

        fn detach(&mut self, node: NodeId) {
            self.calls.push(SceneCall::Detach(node));
        }

        fn set_overlay_alpha(&mut self, alpha: f32) {
            self.calls.push(SceneCall::SetAlpha(alpha.to_bits()));
        }

        fn fade_in_overlays(&mut self, duration: Duration) {
            self.calls.push(SceneCall::FadeIn(duration));
        }
    }

    fn controller() -> OverlayController<MockSession, MockRenderer> {
        OverlayController::new(Arc::new(MockSession::default()), MockRenderer::default())
    }

    #[test]
    fn test_new_anchor_steals_the_effect_node() {
        let mut controller = controller();

        controller.anchor_added(AnchorId(1));
        assert_eq!(
            controller.renderer.calls,
            vec![SceneCall::Attach(NodeId(7), AnchorId(1))]
        );

        controller.anchor_added(AnchorId(2));
        assert_eq!(
            controller.renderer.calls[1..],
            [
                SceneCall::Detach(NodeId(7)),
                SceneCall::Attach(NodeId(7), AnchorId(2)),
            ]
        );
        assert_eq!(controller.effect.parent(), Some(AnchorId(2)));
        // The handle keeps pointing at the one loaded effect node.
        assert_eq!(controller.effect.node(), NodeId(7));
    }

    #[test]
    fn test_degraded_tracking_arms_escalation() {
        let mut controller = controller();
        let mut presenter = StatusPresenter::new();
        let now = Instant::now();

        controller.tracking_state_changed(
            TrackingState::Limited(LimitedReason::InsufficientFeatures),
            &mut presenter,
            now,
        );

        assert_eq!(presenter.message(), "TRACKING LIMITED\nLow detail");
        assert!(presenter.has_scheduled(MessageCategory::TrackingStateEscalation));
    }

    #[test]
    fn test_normal_tracking_cancels_escalation_and_fades_in() {
        let mut controller = controller();
        let mut presenter = StatusPresenter::new();
        let now = Instant::now();

        controller.tracking_state_changed(TrackingState::NotAvailable, &mut presenter, now);
        controller.tracking_state_changed(TrackingState::Normal, &mut presenter, now);

        assert!(!presenter.has_scheduled(MessageCategory::TrackingStateEscalation));
        assert_eq!(
            controller.renderer.calls,
            vec![SceneCall::FadeIn(FADE_IN_DURATION)]
        );
    }

    #[test]
    fn test_interruption_hides_overlays_without_animation() {
        let mut controller = controller();
        controller.session_interrupted();
        assert_eq!(controller.renderer.calls, vec![SceneCall::SetAlpha(0)]);
    }

    #[test]
    fn test_non_ar_failure_is_ignored() {
        let mut controller = controller();
        let alert =
            controller.session_failed(&SessionFailure::Other("camera unplugged".to_owned()));
        assert!(alert.is_none());
    }

    #[test]
    fn test_ar_failure_joins_present_parts_with_newlines() {
        let mut controller = controller();
        let alert = controller
            .session_failed(&SessionFailure::Ar(ArSessionError {
                description: "World tracking failed.".to_owned(),
                failure_reason: None,
                recovery_suggestion: Some("Point the device at a textured area.".to_owned()),
            }))
            .unwrap();

        assert_eq!(alert.title, "The AR session failed.");
        assert_eq!(
            alert.message,
            "World tracking failed.\nPoint the device at a textured area."
        );
        assert_eq!(alert.action, "Restart Session");
    }

    #[test]
    fn test_relocalization_is_always_attempted() {
        assert!(controller().should_attempt_relocalization());
    }

    #[test]
    fn test_restart_clears_timers_and_reruns_with_reset_flags() {
        let session = Arc::new(MockSession::default());
        let mut controller =
            OverlayController::new(Arc::clone(&session), MockRenderer::default());
        let mut presenter = StatusPresenter::new();
        let now = Instant::now();

        presenter.schedule_message(
            "pending",
            Duration::from_secs(1),
            MessageCategory::ContentPlacement,
            now,
        );
        controller.restart_session(&mut presenter, now);

        assert_eq!(presenter.scheduled_count(), 0);
        assert_eq!(presenter.message(), "RESTARTING SESSION");
        // Persistent: survives well past the auto-hide window.
        presenter.tick(now + Duration::from_secs(30));
        assert!(presenter.is_visible());

        let runs = session.runs.lock().unwrap();
        assert_eq!(runs.len(), 1);
        assert!(runs[0].reset_tracking);
        assert!(runs[0].remove_existing_anchors);
    }
}
