//! Status banner with scheduled-message bookkeeping.
//!
//! Timers are deadline-polled: every operation takes an explicit `now` and
//! the owner drives [`StatusPresenter::tick`] from its UI loop. A scheduled
//! message is a cancellable handle in a fixed per-category slot;
//! rescheduling a category is cancel-and-replace, never a queue.

use std::time::{Duration, Instant};

use crate::session::TrackingState;

/// How long an auto-hiding message stays visible.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(6);

/// Category key for scheduled messages. At most one live timer per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    TrackingStateEscalation,
    PlaneEstimation,
    ContentPlacement,
    FocusSquare,
}

impl MessageCategory {
    pub const ALL: [MessageCategory; 4] = [
        MessageCategory::TrackingStateEscalation,
        MessageCategory::PlaneEstimation,
        MessageCategory::ContentPlacement,
        MessageCategory::FocusSquare,
    ];

    fn index(self) -> usize {
        match self {
            Self::TrackingStateEscalation => 0,
            Self::PlaneEstimation => 1,
            Self::ContentPlacement => 2,
            Self::FocusSquare => 3,
        }
    }
}

#[derive(Debug)]
struct ScheduledMessage {
    fire_at: Instant,
    text: String,
    auto_hide: bool,
}

/// Owns the single text banner: immediate messages with an auto-hide window,
/// plus one delayed message slot per category.
#[derive(Debug, Default)]
pub struct StatusPresenter {
    text: String,
    visible: bool,
    hide_deadline: Option<Instant>,
    scheduled: [Option<ScheduledMessage>; 4],
}

impl StatusPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message now. With `auto_hide`, the banner hides after
    /// [`DISPLAY_DURATION`]; re-showing restarts that window.
    pub fn show_message(&mut self, text: impl Into<String>, auto_hide: bool, now: Instant) {
        self.hide_deadline = None;
        self.text = text.into();
        self.visible = true;

        if auto_hide {
            self.hide_deadline = Some(now + DISPLAY_DURATION);
        }
    }

    /// Arm a one-shot message for `category`, cancelling any pending one.
    pub fn schedule_message(
        &mut self,
        text: impl Into<String>,
        delay: Duration,
        category: MessageCategory,
        now: Instant,
    ) {
        self.cancel_scheduled_message(category);
        self.scheduled[category.index()] = Some(ScheduledMessage {
            fire_at: now + delay,
            text: text.into(),
            auto_hide: true,
        });
    }

    /// Cancel the pending message for `category`, if any. Idempotent.
    pub fn cancel_scheduled_message(&mut self, category: MessageCategory) {
        self.scheduled[category.index()] = None;
    }

    /// Cancel every pending message across all categories.
    pub fn cancel_all_scheduled_messages(&mut self) {
        for category in MessageCategory::ALL {
            self.cancel_scheduled_message(category);
        }
    }

    /// Show the tracking-quality description for `state`.
    pub fn show_tracking_quality_info(
        &mut self,
        state: TrackingState,
        auto_hide: bool,
        now: Instant,
    ) {
        self.show_message(state.presentation_string(), auto_hide, now);
    }

    /// Arm the escalation timer: after `delay`, show a persistent message
    /// combining the tracking-state description and its recommendation.
    pub fn escalate_feedback(&mut self, state: TrackingState, delay: Duration, now: Instant) {
        self.cancel_scheduled_message(MessageCategory::TrackingStateEscalation);

        let mut message = state.presentation_string().to_owned();
        if let Some(recommendation) = state.recommendation() {
            message.push_str(": ");
            message.push_str(recommendation);
        }

        self.scheduled[MessageCategory::TrackingStateEscalation.index()] = Some(ScheduledMessage {
            fire_at: now + delay,
            text: message,
            auto_hide: false,
        });
    }

    /// Fire due timers and process a due auto-hide. Call from the UI loop.
    pub fn tick(&mut self, now: Instant) {
        // Due messages fire in deadline order so the latest-firing one ends
        // up on the banner, the way OS timers would surface it. Each timer
        // self-invalidates before its message shows.
        let mut due = Vec::new();
        for slot in self.scheduled.iter_mut() {
            if let Some(msg) = slot.take_if(|msg| msg.fire_at <= now) {
                due.push(msg);
            }
        }
        due.sort_by_key(|msg| msg.fire_at);
        for msg in due {
            self.hide_deadline = None;
            self.text = msg.text;
            self.visible = true;
            if msg.auto_hide {
                self.hide_deadline = Some(now + DISPLAY_DURATION);
            }
        }

        if self.hide_deadline.is_some_and(|deadline| deadline <= now) {
            self.hide_deadline = None;
            self.visible = false;
        }
    }

    /// Current banner text.
    pub fn message(&self) -> &str {
        &self.text
    }

    /// Whether the banner is showing.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a message is pending for `category`.
    pub fn has_scheduled(&self, category: MessageCategory) -> bool {
        self.scheduled[category.index()].is_some()
    }

    /// Number of live timers across all categories.
    pub fn scheduled_count(&self) -> usize {
        self.scheduled.iter().filter(|slot| slot.is_some()).count()
    }
}
