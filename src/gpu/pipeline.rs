//! An instanced quad pipeline with a growable instance buffer.

use bytemuck::Pod;

const MIN_CAPACITY: usize = 256;

pub(super) struct InstancedPipeline {
    label: &'static str,
    pipeline: wgpu::RenderPipeline,
    buffer: wgpu::Buffer,
    stride: usize,
    capacity: usize,
    count: u32,
}

impl InstancedPipeline {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        device: &wgpu::Device,
        label: &'static str,
        shader_src: &str,
        layout: &wgpu::PipelineLayout,
        stride: usize,
        attributes: &[wgpu::VertexAttribute],
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: stride as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes,
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
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
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let buffer = create_instance_buffer(device, label, stride, MIN_CAPACITY);

        Self {
            label,
            pipeline,
            buffer,
            stride,
            capacity: MIN_CAPACITY,
            count: 0,
        }
    }

    /// Replace this frame's instances, growing the buffer if needed.
    pub fn upload<T: Pod>(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, instances: &[T]) {
        debug_assert_eq!(std::mem::size_of::<T>(), self.stride);

        if instances.len() > self.capacity {
            let capacity = instances.len().next_power_of_two();
            log::debug!(
                "{}: growing instance buffer {} -> {}",
                self.label,
                self.capacity,
                capacity
            );
            self.buffer = create_instance_buffer(device, self.label, self.stride, capacity);
            self.capacity = capacity;
        }

        if !instances.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(instances));
        }
        self.count = instances.len() as u32;
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        let bytes = (self.count as usize * self.stride) as wgpu::BufferAddress;
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.buffer.slice(..bytes));
        pass.draw(0..6, 0..self.count);
    }
}

fn create_instance_buffer(
    device: &wgpu::Device,
    label: &str,
    stride: usize,
    capacity: usize,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (stride * capacity) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
