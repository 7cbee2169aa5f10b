pub mod animation;
pub mod assets;
pub mod camera;
pub mod cli;
pub mod core;
pub mod error;
pub mod material;
pub mod packer;
pub mod quad;
pub mod renderer;
pub mod scenes;
pub mod types;
pub mod world;

pub use animation::{run_frame, FrameInfo};
pub use error::{Error, Result};
pub use packer::{pack, MAX_SDF};
pub use scenes::{BaseScenario, DropsScenario, Scenario, ScenarioController, ScenarioKind};
pub use world::WorldContext;
