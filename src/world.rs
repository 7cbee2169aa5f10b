use crate::camera::Camera;
use crate::core::FrameClock;
use crate::error::Result;
use crate::quad::DisplayQuad;
use crate::renderer::RenderBridge;
use crate::scenes::{Scenario, ScenarioController, ScenarioKind};

/// Render state shared by the animation loop and scenario switching.
/// Owned by the application and passed explicitly; there is no global instance.
pub struct WorldContext {
    pub camera: Camera,
    pub clock: FrameClock,
    pub scenarios: ScenarioController,
}

impl WorldContext {
    pub fn new(camera: Camera, scenarios: ScenarioController) -> Self {
        Self {
            camera,
            clock: FrameClock::new(),
            scenarios,
        }
    }

    pub fn active_scenario(&self) -> Option<&dyn Scenario> {
        self.scenarios.active().map(|active| active.scenario())
    }

    pub fn display_quad(&self) -> Option<&DisplayQuad> {
        self.scenarios.active().map(|active| active.quad())
    }

    /// Queue a switch and run it now, as done for the startup scenario
    pub fn load_scenario(&mut self, kind: ScenarioKind, bridge: &mut dyn RenderBridge) -> Result<()> {
        self.scenarios.request(kind)?;
        self.scenarios.load_pending(&mut self.camera, bridge)?;
        Ok(())
    }

    /// Queue a switch for the next frame
    pub fn request_scenario(&mut self, kind: ScenarioKind) -> Result<()> {
        self.scenarios.request(kind)
    }
}
