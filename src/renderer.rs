use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::assets::ShaderSources;
use crate::camera::Camera;
use crate::core::GpuContext;
use crate::error::Result;
use crate::material::SceneUniforms;
use crate::quad::DisplayQuad;
use crate::types::{CameraUniform, QuadUniform};

/// Two triangles covering the quad's local [-1, 1] square
const QUAD_VERTEX_COUNT: u32 = 6;

/// Owns the graphics side: receives the display quad and its material, issues draws
pub trait RenderBridge {
    /// Bind a newly built quad to the camera
    fn attach(&mut self, quad: &DisplayQuad) -> Result<()>;

    /// Drop the current quad binding; draws are skipped until the next attach
    fn detach(&mut self);

    fn draw(&mut self, camera: &Camera, quad: &DisplayQuad, time: f32) -> Result<()>;
}

/// wgpu-backed bridge drawing the raymarching quad to a window surface
pub struct SdfRenderer {
    gpu: GpuContext,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    camera_buffer: wgpu::Buffer,
    quad_buffer: wgpu::Buffer,
    scene_buffer: wgpu::Buffer,
    attached: bool,
}

impl SdfRenderer {
    pub async fn new(window: Arc<Window>, shaders: &ShaderSources) -> Result<Self> {
        let gpu = GpuContext::for_window(window).await?;
        let device = gpu.device();

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::bytes_of(&Camera::default().to_uniform(0.0)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Buffer"),
            contents: bytemuck::bytes_of(&QuadUniform::from_matrix(glam::Mat4::IDENTITY)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let scene_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Uniform Buffer"),
            contents: bytemuck::bytes_of(&<SceneUniforms as bytemuck::Zeroable>::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let (pipeline, bind_group) = Self::create_pipeline(
            device,
            shaders,
            gpu.surface_format(),
            &camera_buffer,
            &quad_buffer,
            &scene_buffer,
        );

        log::info!("SDF renderer initialized");

        Ok(Self {
            gpu,
            pipeline,
            bind_group,
            camera_buffer,
            quad_buffer,
            scene_buffer,
            attached: false,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        shaders: &ShaderSources,
        surface_format: wgpu::TextureFormat,
        camera_buffer: &wgpu::Buffer,
        quad_buffer: &wgpu::Buffer,
        scene_buffer: &wgpu::Buffer,
    ) -> (wgpu::RenderPipeline, wgpu::BindGroup) {
        let vertex_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("SDF Vertex Shader"),
            source: wgpu::ShaderSource::Wgsl(shaders.vertex.as_str().into()),
        });

        let fragment_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("SDF Fragment Shader"),
            source: wgpu::ShaderSource::Wgsl(shaders.fragment.as_str().into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                Self::uniform_entry(0, wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT),
                Self::uniform_entry(1, wgpu::ShaderStages::VERTEX),
                Self::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
            label: Some("sdf_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: quad_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: scene_buffer.as_entire_binding(),
                },
            ],
            label: Some("sdf_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("SDF Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("SDF Quad Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        (pipeline, bind_group)
    }
}

impl RenderBridge for SdfRenderer {
    fn attach(&mut self, quad: &DisplayQuad) -> Result<()> {
        self.gpu
            .queue()
            .write_buffer(&self.scene_buffer, 0, quad.material.as_bytes());
        self.attached = true;
        log::debug!("attached display quad: {:?}", quad.material);
        Ok(())
    }

    fn detach(&mut self) {
        self.attached = false;
    }

    fn draw(&mut self, camera: &Camera, quad: &DisplayQuad, time: f32) -> Result<()> {
        if !self.attached {
            return Ok(());
        }

        let queue = self.gpu.queue();
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera.to_uniform(time)));
        queue.write_buffer(&self.quad_buffer, 0, bytemuck::bytes_of(&quad.to_uniform()));
        queue.write_buffer(&self.scene_buffer, 0, quad.material.as_bytes());

        let output = match self.gpu.surface().get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::debug!("surface timeout, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("SDF Render Encoder"),
            });

        let background = quad.material.background_color();

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("SDF Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: background.x as f64,
                            g: background.y as f64,
                            b: background.z as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.draw(0..QUAD_VERTEX_COUNT, 0..1);
        }

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
