use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Scenario, SceneContent};
use crate::error::Result;
use crate::types::{SdfBox, Sphere};

pub const DROP_COUNT: usize = 10;

/// Height of the ceiling plane; drops respawn here
const CEILING_Y: f32 = 20.0;
/// Height of the floor plane; drops below it respawn
const FLOOR_Y: f32 = -20.0;
const SPAWN_SPREAD: f32 = 15.0;
const RESPAWN_SPREAD: f32 = 10.0;
/// Fall speed is `FALL_BASE - radius`, so larger drops fall slower
const FALL_BASE: f32 = 5.0;

/// Spheres falling between a ceiling and a floor, respawning at the top
pub struct DropsScenario {
    scene: SceneContent,
    rng: StdRng,
}

impl DropsScenario {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic drop placement
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            scene: SceneContent::default(),
            rng,
        }
    }

    fn spawn_drop(&mut self) -> Sphere {
        let radius = self.rng.random_range(1.0f32..=3.0);
        let x = self.rng.random_range(-SPAWN_SPREAD..=SPAWN_SPREAD);
        let y = self.rng.random_range(FLOOR_Y..=CEILING_Y);
        let z = self.rng.random_range(-SPAWN_SPREAD..=SPAWN_SPREAD);

        Sphere {
            position: Vec3::new(x, y, z),
            color: Vec3::ZERO,
            radius,
        }
    }
}

impl Default for DropsScenario {
    fn default() -> Self {
        Self::new()
    }
}

fn plane(y: f32) -> SdfBox {
    SdfBox {
        position: Vec3::new(0.0, y, 0.0),
        rotation: Vec3::ZERO,
        scale: Vec3::new(1000.0, 2.0, 1000.0),
        color: Vec3::ONE,
    }
}

impl Scenario for DropsScenario {
    fn name(&self) -> &'static str {
        "drops"
    }

    fn create(&mut self) -> Result<()> {
        let spheres = (0..DROP_COUNT).map(|_| self.spawn_drop()).collect();

        self.scene = SceneContent {
            spheres,
            toruses: Vec::new(),
            boxes: vec![plane(CEILING_Y), plane(FLOOR_Y)],
            background_color: Vec3::ONE,
            initial_camera_position: Vec3::new(0.0, 1.0, -40.0),
        };

        log::debug!("drops scenario spawned {} spheres", DROP_COUNT);
        Ok(())
    }

    fn update(&mut self, _total_time: f32, delta_time: f32) {
        let rng = &mut self.rng;

        for drop in &mut self.scene.spheres {
            if drop.position.y < FLOOR_Y {
                drop.position.y = CEILING_Y;
                drop.position.x = rng.random_range(-RESPAWN_SPREAD..=RESPAWN_SPREAD);
                drop.position.z = rng.random_range(-RESPAWN_SPREAD..=RESPAWN_SPREAD);
            } else {
                drop.position.y -= (FALL_BASE - drop.radius) * delta_time;
            }
        }
    }

    fn scene(&self) -> &SceneContent {
        &self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created(seed: u64) -> DropsScenario {
        let mut scenario = DropsScenario::with_seed(seed);
        scenario.create().unwrap();
        scenario
    }

    #[test]
    fn create_spawns_ten_drops_within_bounds() {
        let scenario = created(7);
        let scene = scenario.scene();

        assert_eq!(scene.spheres.len(), DROP_COUNT);
        assert!(scene.toruses.is_empty());
        assert_eq!(scene.boxes.len(), 2);

        for drop in &scene.spheres {
            assert!((1.0..=3.0).contains(&drop.radius));
            assert!((-15.0..=15.0).contains(&drop.position.x));
            assert!((-15.0..=15.0).contains(&drop.position.z));
            assert!((-20.0..=20.0).contains(&drop.position.y));
        }
    }

    #[test]
    fn planes_sit_at_ceiling_and_floor() {
        let scenario = created(1);
        let ys: Vec<f32> = scenario.scene().boxes.iter().map(|b| b.position.y).collect();
        assert_eq!(ys, vec![20.0, -20.0]);
    }

    #[test]
    fn drops_are_independent() {
        let mut scenario = created(3);
        let second = scenario.scene.spheres[1];

        scenario.scene.spheres[0].position.y = 123.0;
        scenario.scene.spheres[0].radius = 9.0;

        assert_eq!(scenario.scene.spheres[1], second);
    }

    #[test]
    fn drop_below_floor_respawns_at_ceiling() {
        let mut scenario = created(11);
        scenario.scene.spheres[0].position.y = -25.0;
        let radius = scenario.scene.spheres[0].radius;

        scenario.update(1.0, 0.016);
        let drop = scenario.scene.spheres[0];

        assert_eq!(drop.position.y, 20.0);
        assert_eq!(drop.radius, radius);
        assert!((-10.0..=10.0).contains(&drop.position.x));
        assert!((-10.0..=10.0).contains(&drop.position.z));
    }

    #[test]
    fn larger_drops_fall_slower() {
        let mut scenario = created(5);
        scenario.scene.spheres.truncate(2);
        scenario.scene.spheres[0] = Sphere {
            position: Vec3::new(1.0, 0.0, 2.0),
            color: Vec3::ZERO,
            radius: 1.0,
        };
        scenario.scene.spheres[1] = Sphere {
            position: Vec3::new(3.0, 0.0, 4.0),
            color: Vec3::ZERO,
            radius: 3.0,
        };

        scenario.update(0.5, 0.5);
        let small = scenario.scene.spheres[0];
        let large = scenario.scene.spheres[1];

        assert_eq!(small.position.y, -2.0);
        assert_eq!(large.position.y, -1.0);
        assert_eq!(small.position.x, 1.0);
        assert_eq!(small.position.z, 2.0);
    }

    #[test]
    fn drop_exactly_at_floor_keeps_falling() {
        let mut scenario = created(9);
        scenario.scene.spheres[0].position.y = -20.0;
        scenario.scene.spheres[0].radius = 2.0;

        scenario.update(0.0, 1.0);
        assert_eq!(scenario.scene.spheres[0].position.y, -23.0);
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(created(42).scene(), created(42).scene());
    }
}
