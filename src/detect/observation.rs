//! Detection observations and candidate selection.

use super::NormalizedRect;

/// Fixed cutoff above which a detection is accepted.
pub const CONFIDENCE_THRESHOLD: f32 = 0.7;

/// One labeled, scored bounding box returned by the inference engine.
#[derive(Debug, Clone)]
pub struct Observation {
    pub label: String,
    pub confidence: f32,
    pub bounding_box: NormalizedRect,
}

impl Observation {
    pub fn new(label: impl Into<String>, confidence: f32, bounding_box: NormalizedRect) -> Self {
        Self {
            label: label.into(),
            confidence,
            bounding_box,
        }
    }
}

/// Select the best candidate from a batch of observations.
///
/// Returns the FIRST observation with confidence strictly above
/// [`CONFIDENCE_THRESHOLD`], in engine output order. First-above-threshold,
/// not highest-confidence: the engine's ordering is the tie-break.
pub fn best_observation(observations: &[Observation]) -> Option<&Observation> {
    observations
        .iter()
        .find(|obs| obs.confidence > CONFIDENCE_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(confidence: f32) -> Observation {
        Observation::new("candle", confidence, NormalizedRect::default())
    }

    #[test]
    fn test_first_above_threshold_wins_not_max() {
        let observations = vec![obs(0.9), obs(0.5), obs(0.75)];
        let best = best_observation(&observations).unwrap();
        assert_eq!(best.confidence, 0.9);
    }

    #[test]
    fn test_engine_order_beats_higher_confidence() {
        let observations = vec![obs(0.71), obs(0.99)];
        let best = best_observation(&observations).unwrap();
        assert_eq!(best.confidence, 0.71);
    }

    #[test]
    fn test_none_above_threshold_selects_nothing() {
        let observations = vec![obs(0.5), obs(0.6)];
        assert!(best_observation(&observations).is_none());
    }

    #[test]
    fn test_threshold_is_strict() {
        let observations = vec![obs(CONFIDENCE_THRESHOLD)];
        assert!(best_observation(&observations).is_none());
    }

    #[test]
    fn test_empty_batch_selects_nothing() {
        assert!(best_observation(&[]).is_none());
    }
}
