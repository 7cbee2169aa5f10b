use super::{Scenario, ScenarioKind};
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::material::SdfMaterial;
use crate::quad::DisplayQuad;
use crate::renderer::RenderBridge;

/// The scenario currently driving the display quad
pub struct ActiveScenario {
    scenario: Box<dyn Scenario>,
    quad: DisplayQuad,
}

impl ActiveScenario {
    pub fn scenario(&self) -> &dyn Scenario {
        self.scenario.as_ref()
    }

    pub fn quad(&self) -> &DisplayQuad {
        &self.quad
    }

    /// Animate one frame, re-pack the material and face the quad toward the camera
    pub fn advance(&mut self, camera: &Camera, total_time: f32, delta_time: f32) {
        self.scenario.update(total_time, delta_time);
        self.quad.material.refresh(self.scenario.scene());
        self.quad.follow(camera);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Unloaded,
    Active(&'static str),
}

/// Holds the single active scenario and performs scenario switches.
///
/// Switch requests go through a one-slot queue that the animation loop drains at the start
/// of a frame, so a load always completes before the frame reads its output.
#[derive(Default)]
pub struct ScenarioController {
    active: Option<ActiveScenario>,
    pending: Option<ScenarioKind>,
    seed: Option<u64>,
}

impl ScenarioController {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            active: None,
            pending: None,
            seed,
        }
    }

    pub fn state(&self) -> ControllerState {
        match &self.active {
            Some(active) => ControllerState::Active(active.scenario.name()),
            None => ControllerState::Unloaded,
        }
    }

    pub fn active(&self) -> Option<&ActiveScenario> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveScenario> {
        self.active.as_mut()
    }

    pub fn pending(&self) -> Option<ScenarioKind> {
        self.pending
    }

    /// Queue a switch. Rejected while another request is still queued.
    pub fn request(&mut self, kind: ScenarioKind) -> Result<()> {
        if let Some(pending) = self.pending {
            return Err(Error::LoadInProgress {
                requested: kind,
                pending,
            });
        }

        log::debug!("queued scenario `{kind}`");
        self.pending = Some(kind);
        Ok(())
    }

    /// Run the queued switch, if any. Returns whether a load was attempted.
    /// The slot is freed even when the load fails.
    pub fn load_pending(&mut self, camera: &mut Camera, bridge: &mut dyn RenderBridge) -> Result<bool> {
        let Some(kind) = self.pending.take() else {
            return Ok(false);
        };

        let seed = self.seed;
        self.load(move || kind.instantiate(seed), camera, bridge)?;
        Ok(true)
    }

    /// Build a scenario, bind it to a new display quad and make it active.
    ///
    /// The scenario is created off to the side; on failure the previous scenario, its quad
    /// and the camera are left as they were.
    pub fn load<F>(&mut self, factory: F, camera: &mut Camera, bridge: &mut dyn RenderBridge) -> Result<()>
    where
        F: FnOnce() -> Box<dyn Scenario>,
    {
        let mut scenario = factory();
        let name = scenario.name();

        if let Err(e) = scenario.create() {
            log::error!("scenario `{name}` failed to create: {e}");
            return Err(match e {
                err @ Error::ScenarioLoad { .. } => err,
                other => Error::ScenarioLoad {
                    scenario: name,
                    reason: other.to_string(),
                },
            });
        }

        let scene = scenario.scene();
        let mut quad = DisplayQuad::new(SdfMaterial::from_scene(scene));

        if self.active.is_some() {
            bridge.detach();
        }

        let previous_camera = camera.position;
        camera.position = scene.initial_camera_position;
        quad.follow(camera);

        if let Err(e) = bridge.attach(&quad) {
            camera.position = previous_camera;
            if let Some(previous) = &self.active {
                if let Err(restore) = bridge.attach(&previous.quad) {
                    log::error!("failed to restore previous quad: {restore}");
                }
            }
            return Err(e);
        }

        let (spheres, toruses, boxes) = quad.material.active_counts();
        log::info!("Loaded scenario `{name}`: {spheres} spheres, {toruses} toruses, {boxes} boxes");

        // The previous scenario and its quad are dropped here
        self.active = Some(ActiveScenario { scenario, quad });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::SceneContent;
    use glam::Vec3;

    #[derive(Default)]
    struct RecordingBridge {
        attached: usize,
        detached: usize,
    }

    impl RenderBridge for RecordingBridge {
        fn attach(&mut self, _quad: &DisplayQuad) -> Result<()> {
            self.attached += 1;
            Ok(())
        }

        fn detach(&mut self) {
            self.detached += 1;
        }

        fn draw(&mut self, _camera: &Camera, _quad: &DisplayQuad, _time: f32) -> Result<()> {
            Ok(())
        }
    }

    /// Fails the attach with the given index (0-based); records what each success bound
    struct FailingAttachBridge {
        fail_on: usize,
        calls: usize,
        bound_sphere_counts: Vec<usize>,
        detached: usize,
    }

    impl FailingAttachBridge {
        fn new(fail_on: usize) -> Self {
            Self {
                fail_on,
                calls: 0,
                bound_sphere_counts: Vec::new(),
                detached: 0,
            }
        }
    }

    impl RenderBridge for FailingAttachBridge {
        fn attach(&mut self, quad: &DisplayQuad) -> Result<()> {
            let call = self.calls;
            self.calls += 1;
            if call == self.fail_on {
                return Err(Error::Gpu("surface gone".into()));
            }
            self.bound_sphere_counts.push(quad.material.active_counts().0);
            Ok(())
        }

        fn detach(&mut self) {
            self.detached += 1;
        }

        fn draw(&mut self, _camera: &Camera, _quad: &DisplayQuad, _time: f32) -> Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Scenario for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn create(&mut self) -> Result<()> {
            Err(Error::Gpu("no device".into()))
        }

        fn update(&mut self, _total_time: f32, _delta_time: f32) {}

        fn scene(&self) -> &SceneContent {
            unreachable!("never created")
        }
    }

    #[test]
    fn starts_unloaded() {
        let controller = ScenarioController::new(None);
        assert_eq!(controller.state(), ControllerState::Unloaded);
        assert!(controller.active().is_none());
    }

    #[test]
    fn first_load_does_not_detach() {
        let mut controller = ScenarioController::new(Some(1));
        let mut camera = Camera::default();
        let mut bridge = RecordingBridge::default();

        controller
            .load(|| ScenarioKind::Base.instantiate(None), &mut camera, &mut bridge)
            .unwrap();

        assert_eq!(controller.state(), ControllerState::Active("base"));
        assert_eq!(bridge.attached, 1);
        assert_eq!(bridge.detached, 0);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, -10.0));
    }

    #[test]
    fn second_request_is_rejected_until_drained() {
        let mut controller = ScenarioController::new(Some(1));
        let mut camera = Camera::default();
        let mut bridge = RecordingBridge::default();

        controller.request(ScenarioKind::Drops).unwrap();
        let err = controller.request(ScenarioKind::Base).unwrap_err();
        assert!(matches!(
            err,
            Error::LoadInProgress {
                requested: ScenarioKind::Base,
                pending: ScenarioKind::Drops,
            }
        ));

        assert!(controller.load_pending(&mut camera, &mut bridge).unwrap());
        assert_eq!(controller.state(), ControllerState::Active("drops"));
        assert!(!controller.load_pending(&mut camera, &mut bridge).unwrap());

        controller.request(ScenarioKind::Base).unwrap();
        assert_eq!(controller.pending(), Some(ScenarioKind::Base));
    }

    #[test]
    fn failed_create_keeps_previous_scenario() {
        let mut controller = ScenarioController::new(Some(1));
        let mut camera = Camera::default();
        let mut bridge = RecordingBridge::default();

        controller
            .load(|| ScenarioKind::Drops.instantiate(Some(3)), &mut camera, &mut bridge)
            .unwrap();
        let camera_before = camera.position;

        let err = controller
            .load(|| Box::new(Broken), &mut camera, &mut bridge)
            .unwrap_err();

        assert!(matches!(err, Error::ScenarioLoad { scenario: "broken", .. }));
        assert_eq!(controller.state(), ControllerState::Active("drops"));
        assert_eq!(camera.position, camera_before);
        assert_eq!(bridge.detached, 0);
        assert_eq!(bridge.attached, 1);
    }

    #[test]
    fn failed_attach_restores_camera_and_previous_quad() {
        let mut controller = ScenarioController::new(Some(1));
        let mut camera = Camera::default();
        let mut bridge = FailingAttachBridge::new(1);

        controller
            .load(|| ScenarioKind::Base.instantiate(None), &mut camera, &mut bridge)
            .unwrap();
        camera.position = Vec3::new(4.0, 2.0, -9.0);

        let err = controller
            .load(|| ScenarioKind::Drops.instantiate(Some(2)), &mut camera, &mut bridge)
            .unwrap_err();

        assert!(matches!(err, Error::Gpu(_)));
        assert_eq!(controller.state(), ControllerState::Active("base"));
        assert_eq!(camera.position, Vec3::new(4.0, 2.0, -9.0));
        assert_eq!(bridge.detached, 1);
        // Base quad bound at startup, then bound again after the drops attach failed
        assert_eq!(bridge.bound_sphere_counts, vec![1, 1]);
    }

    #[test]
    fn failed_first_attach_leaves_controller_unloaded() {
        let mut controller = ScenarioController::new(Some(1));
        let mut camera = Camera::default();
        let before = camera.position;
        let mut bridge = FailingAttachBridge::new(0);

        assert!(controller
            .load(|| ScenarioKind::Drops.instantiate(Some(2)), &mut camera, &mut bridge)
            .is_err());

        assert_eq!(controller.state(), ControllerState::Unloaded);
        assert_eq!(camera.position, before);
        assert_eq!(bridge.detached, 0);
        assert!(bridge.bound_sphere_counts.is_empty());
    }
}
