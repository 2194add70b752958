//! Tracking-state classification supplied by the AR session.

/// Reason the session reports only limited tracking quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitedReason {
    ExcessiveMotion,
    InsufficientFeatures,
    Initializing,
    Relocalizing,
}

/// The AR session's confidence classification of its own pose estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    /// Tracking is not available at all.
    NotAvailable,
    /// Tracking is working as expected.
    #[default]
    Normal,
    /// Tracking quality is degraded for the given reason.
    Limited(LimitedReason),
}

impl TrackingState {
    /// Short banner text describing the current tracking quality.
    pub fn presentation_string(&self) -> &'static str {
        match self {
            Self::NotAvailable => "TRACKING UNAVAILABLE",
            Self::Normal => "TRACKING NORMAL",
            Self::Limited(LimitedReason::ExcessiveMotion) => "TRACKING LIMITED\nExcessive motion",
            Self::Limited(LimitedReason::InsufficientFeatures) => "TRACKING LIMITED\nLow detail",
            Self::Limited(LimitedReason::Initializing) => "Initializing",
            Self::Limited(LimitedReason::Relocalizing) => "Recovering from interruption",
        }
    }

    /// What the user can do about degraded tracking, when anything.
    pub fn recommendation(&self) -> Option<&'static str> {
        match self {
            Self::Limited(LimitedReason::ExcessiveMotion) => {
                Some("Try slowing down your movement, or reset the session.")
            }
            Self::Limited(LimitedReason::InsufficientFeatures) => {
                Some("Try pointing at a flat surface, or reset the session.")
            }
            Self::Limited(LimitedReason::Relocalizing) => {
                Some("Return to the location where you left off or try resetting the session.")
            }
            _ => None,
        }
    }
}
