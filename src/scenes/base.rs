use glam::Vec3;

use super::{Scenario, SceneContent};
use crate::error::Result;
use crate::types::{SdfBox, Sphere, Torus};

/// Ground plane with a bobbing sphere and a spinning torus
#[derive(Debug, Default)]
pub struct BaseScenario {
    scene: SceneContent,
}

impl BaseScenario {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scenario for BaseScenario {
    fn name(&self) -> &'static str {
        "base"
    }

    fn create(&mut self) -> Result<()> {
        let ground = SdfBox {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::new(10000.0, 0.1, 10000.0),
            color: Vec3::splat(0.5),
        };

        let sphere = Sphere {
            position: Vec3::new(2.0, 0.0, 0.0),
            color: Vec3::new(1.0, 0.0, 0.0),
            radius: 1.0,
        };

        let torus = Torus {
            position: Vec3::new(-2.0, 0.0, 0.0),
            rotation: Vec3::new(90.0, 0.0, 0.0),
            color: Vec3::new(0.0, 1.0, 0.0),
            inner_radius: 0.5,
            outer_radius: 1.0,
        };

        self.scene = SceneContent {
            spheres: vec![sphere],
            toruses: vec![torus],
            boxes: vec![ground],
            background_color: Vec3::new(0.0, 0.5, 1.0),
            initial_camera_position: Vec3::new(0.0, 0.0, -10.0),
        };

        Ok(())
    }

    fn update(&mut self, total_time: f32, _delta_time: f32) {
        if let Some(sphere) = self.scene.spheres.first_mut() {
            sphere.position.y = total_time.sin() + 1.0;
        }

        if let Some(torus) = self.scene.toruses.first_mut() {
            torus.position.y = total_time.cos() + 1.0;
            // Degrees per second, kept as authored
            torus.rotation.x = 50.0 * total_time;
            torus.rotation.z = 30.0 * total_time;
        }
    }

    fn scene(&self) -> &SceneContent {
        &self.scene
    }
}
