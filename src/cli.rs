// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::scenes::ScenarioKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "sdf-scenes")]
#[command(about = "Animated SDF scenes raymarched on a single quad", long_about = None)]
pub struct Cli {
    /// Scenario loaded at startup (1 and 2 switch at runtime)
    #[arg(long, env = "SCENE", value_enum, default_value_t = ScenarioKind::Base)]
    pub scenario: ScenarioKind,

    /// Directory containing sdf_vs.wgsl and sdf_fs.wgsl
    #[arg(long = "shader-dir", default_value = "shaders")]
    pub shader_dir: PathBuf,

    /// Seed for randomized scenarios
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial window width
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Log frames per second once a second
    #[arg(long = "fps-log", default_value = "false")]
    pub fps_log: bool,
}
