//! GPU state and the two instanced draw passes.
//!
//! A frame's [`FrameBatch`] is uploaded as line and disc instances and drawn
//! in one render pass: lines first, nodes on top.

mod pipeline;
pub(crate) mod shaders;

use crate::error::GpuError;
use crate::render::{DiscInstance, FrameBatch, LineInstance};
use crate::viewport::SurfaceLayout;
use pipeline::InstancedPipeline;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

/// Logical surface size, in CSS-style pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct ViewUniform {
    size: [f32; 2],
    _pad: [f32; 2],
}

impl ViewUniform {
    fn from_layout(layout: &SurfaceLayout) -> Self {
        Self {
            size: layout.viewport.size().to_array(),
            _pad: [0.0; 2],
        }
    }
}

pub(crate) struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    view_buffer: wgpu::Buffer,
    view_bind_group: wgpu::BindGroup,
    lines: InstancedPipeline,
    discs: InstancedPipeline,
}

impl GpuState {
    pub async fn new(window: Arc<Window>, layout: &SurfaceLayout) -> Result<Self, GpuError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Colors are authored as raw sRGB bytes, so write them unconverted.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(GpuError::UnsupportedSurface)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .ok_or(GpuError::UnsupportedSurface)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: layout.backing_width.max(1),
            height: layout.backing_height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::debug!(
            "surface configured: {}x{} {:?}",
            config.width,
            config.height,
            config.format
        );

        let view_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("View Uniform"),
            contents: bytemuck::bytes_of(&ViewUniform::from_layout(layout)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let view_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("View Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let view_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("View Bind Group"),
            layout: &view_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: view_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Pipeline Layout"),
            bind_group_layouts: &[&view_bind_group_layout],
            push_constant_ranges: &[],
        });

        let lines = InstancedPipeline::new(
            &device,
            "Connection Pipeline",
            shaders::LINE_SHADER,
            &pipeline_layout,
            std::mem::size_of::<LineInstance>(),
            &wgpu::vertex_attr_array![
                0 => Float32x2,
                1 => Float32x2,
                2 => Float32x4,
                3 => Float32x4,
                4 => Float32x2,
            ],
            surface_format,
        );

        let discs = InstancedPipeline::new(
            &device,
            "Node Pipeline",
            shaders::DISC_SHADER,
            &pipeline_layout,
            std::mem::size_of::<DiscInstance>(),
            &wgpu::vertex_attr_array![
                0 => Float32x2,
                1 => Float32x2,
                2 => Float32x4,
                3 => Float32x4,
            ],
            surface_format,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_buffer,
            view_bind_group,
            lines,
            discs,
        })
    }

    /// Match the backing store to `layout`. Zero-sized layouts are ignored.
    pub fn resize(&mut self, layout: &SurfaceLayout) {
        if layout.backing_width == 0 || layout.backing_height == 0 {
            return;
        }
        self.config.width = layout.backing_width;
        self.config.height = layout.backing_height;
        self.surface.configure(&self.device, &self.config);
        self.queue.write_buffer(
            &self.view_buffer,
            0,
            bytemuck::bytes_of(&ViewUniform::from_layout(layout)),
        );
    }

    /// Reconfigure with the current size, after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, batch: &FrameBatch) -> Result<(), wgpu::SurfaceError> {
        self.lines.upload(&self.device, &self.queue, batch.lines());
        self.discs.upload(&self.device, &self.queue, batch.discs());

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Mesh Encoder"),
            });

        let clear = batch.clear_color().map_or(wgpu::Color::WHITE, |c| c.to_wgpu());

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Mesh Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_bind_group(0, &self.view_bind_group, &[]);
            self.lines.draw(&mut pass);
            self.discs.draw(&mut pass);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
