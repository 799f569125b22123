//! Spherical-coordinate orbit camera around the origin.

use glam::{Mat4, Vec3, Vec4};

/// Magnitude past which the azimuth is reduced modulo 2pi. Orbiting is
/// continuous, so the angle is left unbounded between rewraps; the rewrap
/// only bounds floating-point error growth and never changes the eye
/// position visibly.
const AZIMUTH_REWRAP_LIMIT: f32 = 64.0 * std::f32::consts::PI;

/// Clamp ranges for the camera state.
#[derive(Clone, Copy, Debug)]
pub struct CameraLimits {
    /// Elevation is clamped to +-this, keeping the camera off the poles
    /// where the look-at basis degenerates.
    pub max_elevation_rad: f32,
    pub min_distance_au: f32,
    pub max_distance_au: f32,
}

impl Default for CameraLimits {
    fn default() -> Self {
        Self {
            max_elevation_rad: 80.0_f32.to_radians(),
            min_distance_au: 0.05,
            max_distance_au: 90.0,
        }
    }
}

/// Orbit camera looking at the origin with the ecliptic +Z as up.
///
/// Not cached across frames: the view matrix is re-derived from this state
/// every frame, which is cheap and avoids stale-state bugs while the camera
/// is idle.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    /// Unbounded orbit angle in radians, periodically rewrapped into
    /// [-pi, pi] for numeric stability.
    pub azimuth_rad: f32,
    /// Elevation above the ecliptic in radians, always within the limits.
    pub elevation_rad: f32,
    /// Distance from the origin in AU, always within the limits.
    pub distance_au: f32,
    pub limits: CameraLimits,
    /// Radians of rotation per unit of pointer-drag delta.
    pub drag_sensitivity: f32,
    /// AU of travel per unit of wheel/pinch delta.
    pub zoom_sensitivity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth_rad: 0.0,
            elevation_rad: 25.0_f32.to_radians(),
            distance_au: 6.0,
            limits: CameraLimits::default(),
            drag_sensitivity: 0.005,
            zoom_sensitivity: 0.25,
        }
    }
}

fn wrap_pi(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    if wrapped > std::f32::consts::PI {
        wrapped - std::f32::consts::TAU
    } else {
        wrapped
    }
}

impl OrbitCamera {
    /// Apply a pointer-drag delta: horizontal orbits, vertical elevates.
    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.azimuth_rad += delta_x * self.drag_sensitivity;
        if self.azimuth_rad.abs() > AZIMUTH_REWRAP_LIMIT {
            self.azimuth_rad = wrap_pi(self.azimuth_rad);
        }
        self.elevation_rad = (self.elevation_rad + delta_y * self.drag_sensitivity).clamp(
            -self.limits.max_elevation_rad,
            self.limits.max_elevation_rad,
        );
    }

    /// Apply a wheel/pinch delta. Positive zooms in; distance is clamped on
    /// every input.
    pub fn zoom(&mut self, delta: f32) {
        self.distance_au = (self.distance_au - delta * self.zoom_sensitivity)
            .clamp(self.limits.min_distance_au, self.limits.max_distance_au);
    }

    /// Eye position in Cartesian space, Z up from the ecliptic.
    pub fn eye(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth_rad.sin_cos();
        let (sin_el, cos_el) = self.elevation_rad.sin_cos();
        self.distance_au * Vec3::new(cos_el * sin_az, cos_el * cos_az, sin_el)
    }

    /// Look-at matrix toward the origin, derived purely from the state.
    ///
    /// When the forward vector is parallel to the up vector the cross
    /// product has near-zero length; a fixed right vector keeps the basis
    /// from collapsing to NaN.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye();
        let forward = (-eye).normalize();
        let up = Vec3::Z;

        let mut right = forward.cross(up);
        if right.length_squared() < 1e-10 {
            right = Vec3::X;
        }
        let right = right.normalize();
        let true_up = right.cross(forward);

        Mat4::from_cols(
            Vec4::new(right.x, true_up.x, -forward.x, 0.0),
            Vec4::new(right.y, true_up.y, -forward.y, 0.0),
            Vec4::new(right.z, true_up.z, -forward.z, 0.0),
            Vec4::new(-right.dot(eye), -true_up.dot(eye), forward.dot(eye), 1.0),
        )
    }
}
