//! Orbit camera shared by the web and native frontends.

use crate::constants::{
    CAMERA_DISTANCE, CAMERA_FOV_Y_RAD, CAMERA_Z_FAR, CAMERA_Z_NEAR, MAX_CAMERA_DISTANCE,
    MIN_CAMERA_DISTANCE, ORBIT_SENSITIVITY, ZOOM_WHEEL_RATE,
};
use glam::{Mat4, Vec3, Vec4};

// Keep the eye off the exact poles so look_at keeps a valid up vector.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.017;

/// Camera orbiting the globe at the origin.
///
/// `yaw` sweeps around `+Y`, `pitch` tilts toward the poles and `distance`
/// is clamped to the zoom range. The default pose looks down `-Z` from
/// `(0, 0, CAMERA_DISTANCE)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            distance: CAMERA_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Apply a pointer drag in pixels.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32) {
        self.yaw -= dx_px * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch - dy_px * ORBIT_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a wheel delta; positive deltas zoom out.
    pub fn zoom(&mut self, wheel_delta: f32) {
        let factor = (wheel_delta * ZOOM_WHEEL_RATE).exp();
        self.distance = (self.distance * factor).clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.yaw.cos() * self.pitch.cos(),
            self.distance * self.pitch.sin(),
            self.distance * self.yaw.sin() * self.pitch.cos(),
        )
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(
            CAMERA_FOV_Y_RAD,
            aspect.max(1e-3),
            CAMERA_Z_NEAR,
            CAMERA_Z_FAR,
        );
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        proj * view
    }

    /// Compute a world-space ray through a pixel of the viewport.
    ///
    /// `sx`, `sy` are pixel coordinates in the surface's backing store
    /// space. Returns `(ray_origin, ray_direction)`.
    pub fn screen_ray(&self, width: f32, height: f32, sx: f32, sy: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let aspect = width / height.max(1.0);
        let inv = self.view_proj(aspect).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p_far: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye();
        let rd = (p_far - ro).normalize();
        (ro, rd)
    }
}
