use glam::{Mat4, Quat, Vec3};

use crate::types::CameraUniform;

pub const FOV_Y_DEGREES: f32 = 60.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 2000.0;

/// Point the camera orbits around and looks at
pub const DEFAULT_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Elevation limit so the view never flips over the poles
const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;
const MIN_DISTANCE: f32 = 1.0;
const MAX_DISTANCE: f32 = 1000.0;

/// Perspective camera orbiting and looking at a fixed target
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -10.0),
            target: DEFAULT_TARGET,
            fov_y: FOV_Y_DEGREES.to_radians(),
            aspect,
        }
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::NEG_Z)
    }

    /// World-space orientation, with -Z pointing along `forward`
    pub fn rotation(&self) -> Quat {
        Quat::from_mat4(&self.view_matrix().inverse())
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, NEAR, FAR)
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Rotate around the target by `yaw` (about world up) and `pitch` (elevation), in radians.
    /// The distance to the target is preserved.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }

        let elevation = (offset.y / radius).clamp(-1.0, 1.0).asin();
        let elevation = (elevation + pitch).clamp(-MAX_PITCH, MAX_PITCH);
        let azimuth = offset.x.atan2(offset.z) + yaw;

        self.position = self.target
            + radius
                * Vec3::new(
                    elevation.cos() * azimuth.sin(),
                    elevation.sin(),
                    elevation.cos() * azimuth.cos(),
                );
    }

    /// Scale the distance to the target; factors below one move closer
    pub fn zoom(&mut self, factor: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON || factor <= 0.0 {
            return;
        }

        let distance = (radius * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.position = self.target + offset * (distance / radius);
    }

    pub fn to_uniform(&self, time: f32) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
            position: self.position.to_array(),
            time,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}
