//! Perspective projection with per-frame aspect updates.

use glam::Mat4;

/// Perspective projection parameters.
///
/// The aspect ratio follows the viewport, which is polled once per frame, so
/// a missed resize event is still observed within one frame.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance in AU.
    pub near: f32,
    /// Far clip plane distance in AU.
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: std::f32::consts::FRAC_PI_2,
            aspect_ratio: 16.0 / 9.0,
            near: 0.005,
            far: 200.0,
        }
    }
}

impl Projection {
    /// Update the aspect ratio from a viewport size in pixels. A degenerate
    /// viewport (zero height) leaves the previous aspect in place.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }
}
