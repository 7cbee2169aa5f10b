mod base;
mod controller;
mod drops;

use std::fmt;

use glam::Vec3;

use crate::error::Result;
use crate::types::{SdfBox, Sphere, Torus};

pub use base::BaseScenario;
pub use controller::{ActiveScenario, ControllerState, ScenarioController};
pub use drops::DropsScenario;

/// Everything a scenario contributes to the shader binding and the camera
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneContent {
    pub spheres: Vec<Sphere>,
    pub toruses: Vec<Torus>,
    pub boxes: Vec<SdfBox>,
    pub background_color: Vec3,
    pub initial_camera_position: Vec3,
}

/// A self-contained scene definition with its own time-driven animation
pub trait Scenario {
    fn name(&self) -> &'static str;

    /// Populate the primitive lists, background and camera start.
    /// Runs on a fresh value that is not yet visible to the renderer.
    fn create(&mut self) -> Result<()>;

    /// Mutate primitives in place for the current frame
    fn update(&mut self, total_time: f32, delta_time: f32);

    fn scene(&self) -> &SceneContent;
}

/// Built-in scenarios selectable from the command line and the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ScenarioKind {
    Base,
    Drops,
}

impl ScenarioKind {
    /// Construct an uncreated scenario of this kind
    pub fn instantiate(self, seed: Option<u64>) -> Box<dyn Scenario> {
        match self {
            ScenarioKind::Base => Box::new(BaseScenario::new()),
            ScenarioKind::Drops => Box::new(match seed {
                Some(seed) => DropsScenario::with_seed(seed),
                None => DropsScenario::new(),
            }),
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioKind::Base => f.write_str("base"),
            ScenarioKind::Drops => f.write_str("drops"),
        }
    }
}
