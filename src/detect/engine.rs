//! Trait for object-detection inference engines.

use crate::session::{FrameImage, ImageOrientation};

use super::Observation;

/// Trait for object-detection inference engines.
///
/// Implement this trait to connect any detection model to the pipeline.
/// The engine is called on the pipeline's dedicated worker thread, one
/// request at a time.
///
/// # Example
///
/// ```ignore
/// use candlefire_rs::{InferenceEngine, Observation};
///
/// struct MyModel {
///     // Your model here
/// }
///
/// impl InferenceEngine for MyModel {
///     type Error = std::io::Error;
///
///     fn detect(
///         &mut self,
///         image: &FrameImage,
///         orientation: ImageOrientation,
///     ) -> Result<Vec<Observation>, Self::Error> {
///         // Run inference and return labeled, scored bounding boxes
///         Ok(vec![])
///     }
/// }
/// ```
pub trait InferenceEngine {
    /// Error type for inference failures.
    type Error: std::error::Error;

    /// Run inference on a camera frame and return observations in model
    /// output order.
    ///
    /// # Arguments
    /// * `image` - Frame pixel data
    /// * `orientation` - Rotation the frame must be interpreted with
    fn detect(
        &mut self,
        image: &FrameImage,
        orientation: ImageOrientation,
    ) -> Result<Vec<Observation>, Self::Error>;
}
