use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use sdf_scenes::assets::ShaderSources;
use sdf_scenes::camera::Camera;
use sdf_scenes::cli::Cli;
use sdf_scenes::core::{Action, Button, Controller, FpsCounter, WinitController};
use sdf_scenes::renderer::SdfRenderer;
use sdf_scenes::{run_frame, ScenarioController, WorldContext};

const FPS_REPORTS_PER_SECOND: f32 = 1.0;
const ORBIT_RADIANS_PER_PIXEL: f32 = 0.005;
/// Distance factor per wheel line toward the target
const ZOOM_PER_LINE: f32 = 0.9;

// === Application ===

struct App {
    cli: Cli,
    shaders: ShaderSources,
    window: Option<Arc<Window>>,
    renderer: Option<SdfRenderer>,
    world: WorldContext,
    input: WinitController,
    fps: FpsCounter,
    start: Instant,
    /// Startup failure reported once the event loop has exited
    error: Option<anyhow::Error>,
}

impl App {
    fn new(cli: Cli, shaders: ShaderSources) -> Self {
        let camera = Camera::new(cli.width as f32 / cli.height.max(1) as f32);
        let world = WorldContext::new(camera, ScenarioController::new(cli.seed));

        Self {
            cli,
            shaders,
            window: None,
            renderer: None,
            world,
            input: WinitController::new(),
            fps: FpsCounter::new(FPS_REPORTS_PER_SECOND),
            start: Instant::now(),
            error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title("SDF Scenes")
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            )?,
        );

        let mut renderer = pollster::block_on(SdfRenderer::new(window.clone(), &self.shaders))
            .context("initializing renderer")?;

        let size = window.inner_size();
        self.world.camera.set_aspect(size.width, size.height);
        self.world
            .load_scenario(self.cli.scenario, &mut renderer)
            .with_context(|| format!("loading scenario `{}`", self.cli.scenario))?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    /// Exit status once the event loop has returned
    fn finish(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn handle_input(&mut self, event_loop: &ActiveEventLoop) {
        for button in self.input.take_pressed() {
            match button.action() {
                None => {}
                Some(Action::Quit) => event_loop.exit(),
                Some(Action::LoadScenario(kind)) => {
                    if let Err(e) = self.world.request_scenario(kind) {
                        log::warn!("{e}");
                    }
                }
            }
        }
    }

    /// Drag with the left button to orbit the target, scroll to zoom
    fn apply_orbit(&mut self) {
        let (dx, dy) = self.input.mouse_delta();
        if self.input.is_down(Button::MouseLeft) {
            self.world
                .camera
                .orbit(-dx * ORBIT_RADIANS_PER_PIXEL, dy * ORBIT_RADIANS_PER_PIXEL);
        }

        let scroll = self.input.scroll_delta();
        if scroll != 0.0 {
            self.world.camera.zoom(ZOOM_PER_LINE.powf(scroll));
        }

        self.input.reset_deltas();
    }

    fn redraw(&mut self) {
        self.apply_orbit();

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let timestamp_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        match run_frame(&mut self.world, timestamp_ms, renderer) {
            Ok(frame) => {
                if let Some(fps) = self.fps.frame(frame.delta_time as f32) {
                    if self.cli.fps_log {
                        log::info!("FPS: {fps:.1}");
                    }
                }
            }
            Err(e) => log::error!("Render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_graphics(event_loop) {
                self.error = Some(e.context("failed to start"));
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
                self.world.camera.set_aspect(size.width, size.height);
            }
            WindowEvent::KeyboardInput { .. } | WindowEvent::MouseInput { .. } => {
                self.input.process_event(&event);
                self.handle_input(event_loop);
            }
            WindowEvent::CursorMoved { .. } | WindowEvent::MouseWheel { .. } => {
                self.input.process_event(&event);
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let shaders = pollster::block_on(ShaderSources::fetch(&cli.shader_dir))
        .context("fetching shader sources")?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, shaders);

    log::info!("Controls: 1 = base scenario, 2 = drops scenario, drag to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    app.finish()
}
