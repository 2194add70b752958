//! Camera frames delivered by the AR session.

use ndarray::Array3;

use super::{DeviceOrientation, TrackingState};

/// Pixel data for one camera frame, height x width x channel.
#[derive(Debug, Clone)]
pub struct FrameImage {
    pixels: Array3<u8>,
}

impl FrameImage {
    pub fn new(pixels: Array3<u8>) -> Self {
        Self { pixels }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.shape()[1] as u32
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.shape()[0] as u32
    }

    /// Raw pixel array for the inference engine.
    pub fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }
}

/// One frame from the session's camera feed.
///
/// Frames are consumed immediately: either submitted for detection or
/// dropped. Nothing in the pipeline retains them.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub image: FrameImage,
    pub tracking_state: TrackingState,
    pub device_orientation: DeviceOrientation,
}
