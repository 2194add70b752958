//! Real-time object-detection pipeline.
//!
//! This module provides the trait for connecting an inference engine to the
//! AR frame feed, the selection and geometry helpers, and the background
//! worker that enforces the single-slot drop-while-busy policy.

mod engine;
mod geometry;
mod observation;
mod pipeline;

pub use engine::InferenceEngine;
pub use geometry::{NormalizedRect, Viewport};
pub use observation::{CONFIDENCE_THRESHOLD, Observation, best_observation};
pub use pipeline::{DetectionPipeline, DisplayUpdate};
