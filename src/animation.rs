use crate::error::Result;
use crate::renderer::RenderBridge;
use crate::world::WorldContext;

/// Timing of one processed frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub delta_time: f64,
    pub total_time: f64,
    /// False while no scenario is active
    pub drew: bool,
}

/// One display-refresh step: finish any queued scenario switch, advance time, animate the
/// active scenario, billboard the quad and draw.
///
/// A failed scenario switch is logged and the previous scenario keeps running; bridge
/// errors are returned. The caller schedules the next frame.
pub fn run_frame(
    world: &mut WorldContext,
    timestamp_ms: f64,
    bridge: &mut dyn RenderBridge,
) -> Result<FrameInfo> {
    if let Err(e) = world.scenarios.load_pending(&mut world.camera, bridge) {
        log::error!("scenario switch failed: {e}");
    }

    let delta_time = world.clock.tick(timestamp_ms);
    let total_time = world.clock.total_time();

    let drew = match world.scenarios.active_mut() {
        Some(active) => {
            // Scenarios and the shader work in f32; the clock keeps the f64 total
            active.advance(&world.camera, total_time as f32, delta_time as f32);
            bridge.draw(&world.camera, active.quad(), total_time as f32)?;
            true
        }
        None => false,
    };

    Ok(FrameInfo {
        delta_time,
        total_time,
        drew,
    })
}
