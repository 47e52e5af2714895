//! wgpu pipelines and buffers for drawing a [`PointField`].
//!
//! Buffers are sized from the field once. Each frame only rewrites them with
//! `queue.write_buffer`; the instance staging vector is reused.

use super::types::{FieldUniforms, PointInstance, LINE_LAYOUT, QUAD_CORNERS, QUAD_LAYOUT};
use crate::field::PointField;
use crate::state::Camera;
use wgpu::util::DeviceExt;

/// Additive blending: color scaled by its alpha, added onto what is there.
pub const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

pub struct FieldRenderer {
    point_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    line_vb: wgpu::Buffer,
    instances: Vec<PointInstance>,
    point_count: u32,
    line_vertex_count: u32,
}

impl FieldRenderer {
    pub fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat, field: &PointField) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("field_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::FIELD_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("field_uniforms"),
            size: std::mem::size_of::<FieldUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("field_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("field_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("field_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let point_count = field.len();
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("point_instances"),
            size: (std::mem::size_of::<PointInstance>() * point_count.max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let line_vertex_count = field.line_positions().len();
        let line_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("line_vertices"),
            size: (std::mem::size_of::<glam::Vec3>() * line_vertex_count.max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let point_pipeline = make_pipeline(
            device,
            &layout,
            &shader,
            "point_pipeline",
            ("vs_point", "fs_point"),
            &[QUAD_LAYOUT, PointInstance::LAYOUT],
            wgpu::PrimitiveTopology::TriangleList,
            color_format,
        );
        let line_pipeline = make_pipeline(
            device,
            &layout,
            &shader,
            "line_pipeline",
            ("vs_line", "fs_line"),
            &[LINE_LAYOUT],
            wgpu::PrimitiveTopology::LineList,
            color_format,
        );

        Self {
            point_pipeline,
            line_pipeline,
            uniform_buffer,
            bind_group,
            quad_vb,
            instance_vb,
            line_vb,
            instances: Vec::with_capacity(point_count),
            point_count: point_count as u32,
            line_vertex_count: line_vertex_count as u32,
        }
    }

    /// Copy the field's live positions, colors and the camera to the GPU.
    pub fn upload(&mut self, queue: &wgpu::Queue, field: &PointField, camera: &Camera) {
        let uniforms = FieldUniforms::new(camera, field.rotation(), field.params().palette.line);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        self.instances.clear();
        self.instances.extend(
            field
                .positions()
                .iter()
                .zip(field.sizes())
                .zip(field.colors())
                .map(|((p, s), c)| PointInstance::new(*p, *s, *c)),
        );
        queue.write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&self.instances));

        if self.line_vertex_count > 0 {
            queue.write_buffer(&self.line_vb, 0, bytemuck::cast_slice(field.line_positions()));
        }
    }

    /// Record the line pass followed by the point pass into `target`.
    pub fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clear: wgpu::Color,
    ) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("field_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_bind_group(0, &self.bind_group, &[]);
        if self.line_vertex_count > 0 {
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, self.line_vb.slice(..));
            rpass.draw(0..self.line_vertex_count, 0..1);
        }
        rpass.set_pipeline(&self.point_pipeline);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.draw(0..QUAD_CORNERS.len() as u32, 0..self.point_count);
    }

    /// Free every GPU buffer owned by the renderer.
    pub fn destroy(&self) {
        self.uniform_buffer.destroy();
        self.quad_vb.destroy();
        self.instance_vb.destroy();
        self.line_vb.destroy();
    }

    pub fn point_count(&self) -> u32 {
        self.point_count
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.line_vertex_count
    }
}

#[allow(clippy::too_many_arguments)]
fn make_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    label: &str,
    (vs_entry, fs_entry): (&str, &str),
    buffers: &[wgpu::VertexBufferLayout],
    topology: wgpu::PrimitiveTopology,
    color_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(ADDITIVE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
