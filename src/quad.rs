use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use crate::camera::Camera;
use crate::material::SdfMaterial;
use crate::types::QuadUniform;

/// Distance in front of the camera at which the quad is held
pub const QUAD_DISTANCE: f32 = 1.0;

/// Extra size beyond the exact frustum cross-section so edges never show
const OVERSCAN: f32 = 1.05;

/// The full-screen plane whose fragment shader raymarches the scene
#[derive(Debug, Clone)]
pub struct DisplayQuad {
    pub material: SdfMaterial,
    pub position: Vec3,
    pub orientation: Quat,
    pub size: Vec2,
}

impl DisplayQuad {
    pub fn new(material: SdfMaterial) -> Self {
        Self {
            material,
            position: Vec3::new(0.0, 0.0, -QUAD_DISTANCE),
            orientation: Quat::IDENTITY,
            size: Vec2::splat(2.0),
        }
    }

    /// Keep the quad in front of the camera, facing it and filling its view
    pub fn follow(&mut self, camera: &Camera) {
        self.position = camera.position + camera.rotation() * Vec3::new(0.0, 0.0, -QUAD_DISTANCE);
        self.look_at(camera.position);
        self.size = Self::covering_size(camera);
    }

    /// Frustum cross-section at the quad's distance
    fn covering_size(camera: &Camera) -> Vec2 {
        let height = 2.0 * QUAD_DISTANCE * (camera.fov_y * 0.5).tan() * OVERSCAN;
        Vec2::new(height * camera.aspect, height)
    }

    /// Rotate so the quad's +Z normal points at `eye`, keeping world up
    pub fn look_at(&mut self, eye: Vec3) {
        let Some(normal) = (eye - self.position).try_normalize() else {
            return;
        };

        let right = Vec3::Y.cross(normal);
        self.orientation = match right.try_normalize() {
            Some(right) => {
                let up = normal.cross(right);
                Quat::from_mat3(&Mat3::from_cols(right, up, normal))
            }
            // Looking straight up or down
            None => Quat::from_rotation_arc(Vec3::Z, normal),
        };
    }

    pub fn normal(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            (self.size * 0.5).extend(1.0),
            self.orientation,
            self.position,
        )
    }

    pub fn to_uniform(&self) -> QuadUniform {
        QuadUniform::from_matrix(self.model_matrix())
    }
}
