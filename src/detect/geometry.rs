//! Bounding-box geometry: normalized model coordinates to screen points.

use nalgebra::Point2;

/// Screen dimensions the detection output is projected onto.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Normalized bounding box in the model's output convention: coordinates in
/// [0, 1] x [0, 1], origin top-left, y-down.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl NormalizedRect {
    #[inline]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Center of the box in normalized coordinates.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Project the box center into screen space: scale by the viewport, then
    /// flip the y-axis.
    ///
    /// `x = (x + w/2) * width`, `y = height - (y + h/2) * height`.
    pub fn screen_center(&self, viewport: Viewport) -> Point2<f32> {
        let (cx, cy) = self.center();
        Point2::new(cx * viewport.width, viewport.height - cy * viewport.height)
    }
}
