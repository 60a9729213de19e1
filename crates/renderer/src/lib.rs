//! Renderer: wgpu init + depth + replay of a core `DrawList`.
//! wgpu = 23.x, winit = 0.30.x

pub mod hud;
pub mod meshes;

use std::num::NonZeroU64;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use bytemuck::{Pod, Zeroable};
use corelib::scene::DrawList;
use glam::Mat4;
use wgpu::{
    BindGroup, BindGroupLayout, BindGroupLayoutDescriptor, BindGroupLayoutEntry, BindingType,
    BlendState, Buffer, BufferBinding, BufferBindingType, BufferDescriptor, BufferUsages,
    ColorTargetState, ColorWrites, CommandEncoderDescriptor, DepthBiasState, DepthStencilState,
    Device, DeviceDescriptor, Extent3d, Features, FragmentState, Instance, InstanceDescriptor,
    Limits, LoadOp, Operations, PipelineLayoutDescriptor, PowerPreference, Queue,
    RenderPassColorAttachment, RenderPassDescriptor, RenderPipeline, RenderPipelineDescriptor,
    ShaderModuleDescriptor, ShaderSource, ShaderStages, StoreOp, Surface, SurfaceConfiguration,
    SurfaceError, TextureDescriptor, TextureDimension, TextureFormat, TextureUsages, TextureView,
    TextureViewDescriptor, VertexState,
};
use winit::{dpi::PhysicalSize, window::Window};

use crate::hud::HudPainter;
use crate::meshes::{MeshCache, Vertex};

/// Per-draw uniform (16-byte aligned, bound with a dynamic offset).
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct DrawUniform {
    mvp: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

const DRAW_UNIFORM_SIZE: u64 = std::mem::size_of::<DrawUniform>() as u64;
const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;
const INITIAL_DRAW_CAPACITY: usize = 64;

/// Deep-water clear color.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.15,
    a: 1.0,
};

/// Perspective lens (right-handed, depth in [0,1] as wgpu expects).
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub fov_y_rad: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_rad: 60f32.to_radians(),
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

impl Projection {
    #[inline]
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_rad, aspect.max(1e-6), self.z_near, self.z_far)
    }
}

pub struct GpuState {
    // Surface
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    device: Device,
    queue: Queue,

    // Pipeline & geometry
    pipeline: RenderPipeline,
    meshes: MeshCache,

    // Per-draw uniforms
    draw_bgl: BindGroupLayout,
    draw_bg: BindGroup,
    draw_buf: Buffer,
    draw_capacity: usize,
    draw_stride: u64,
    staging: Vec<u8>,

    hud: HudPainter,
    projection: Projection,

    // Depth
    depth_view: TextureView,

    // Size cache
    width: u32,
    height: u32,
}

impl GpuState {
    /// Create GPU state bound to an `Arc<Window>`.
    pub async fn new(window: Arc<Window>, backends: wgpu::Backends) -> Result<Self> {
        let PhysicalSize { width, height } = window.inner_size();
        let width = width.max(1);
        let height = height.max(1);

        // Instance & surface
        let instance = Instance::new(InstanceDescriptor {
            backends,
            ..Default::default()
        });
        let surface: Surface<'static> = instance
            .create_surface(window.clone())
            .context("create_surface failed")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("No suitable GPU adapter for backends {backends:?}"))?;
        let info = adapter.get_info();
        log::info!("Adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &DeviceDescriptor {
                    label: Some("Oxygen Run Device"),
                    required_features: Features::empty(),
                    required_limits: Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .context("request_device failed")?;

        // Surface format (prefer sRGB)
        let caps = surface.get_capabilities(&adapter);
        let surface_format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow!("Surface reports no supported formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let surface_config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);
        log::info!("Surface configured: {surface_format:?} {width}x{height}");

        let depth_view = create_depth_view(&device, &surface_config);

        // ==== Shaders ====
        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("Scene WGSL"),
            source: ShaderSource::Wgsl(include_str!("shaders/scene.wgsl").into()),
        });

        // ==== Draw uniforms ====
        let draw_bgl = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Draw BGL"),
            entries: &[BindGroupLayoutEntry {
                binding: 0,
                visibility: ShaderStages::VERTEX | ShaderStages::FRAGMENT,
                ty: BindingType::Buffer {
                    ty: BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(DRAW_UNIFORM_SIZE),
                },
                count: None,
            }],
        });
        let align = u64::from(device.limits().min_uniform_buffer_offset_alignment);
        let draw_stride = DRAW_UNIFORM_SIZE.div_ceil(align) * align;
        let (draw_buf, draw_bg) =
            create_draw_buffer(&device, &draw_bgl, draw_stride, INITIAL_DRAW_CAPACITY);

        // ==== Pipeline ====
        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Scene PipelineLayout"),
            bind_group_layouts: &[&draw_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState {
                    format: surface_format,
                    blend: Some(BlendState::REPLACE),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            // Open cylinders must be visible from both sides.
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let meshes = MeshCache::new(&device);
        let hud = HudPainter::new(&device, surface_format);

        Ok(Self {
            surface,
            surface_config,
            device,
            queue,
            pipeline,
            meshes,
            draw_bgl,
            draw_bg,
            draw_buf,
            draw_capacity: INITIAL_DRAW_CAPACITY,
            draw_stride,
            staging: Vec::new(),
            hud,
            projection: Projection::default(),
            depth_view,
            width,
            height,
        })
    }

    /// Resize: reconfigure surface & recreate depth view.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.surface_config.width = self.width;
        self.surface_config.height = self.height;
        self.surface.configure(&self.device, &self.surface_config);
        self.depth_view = create_depth_view(&self.device, &self.surface_config);
    }

    fn ensure_draw_capacity(&mut self, draws: usize) {
        if draws <= self.draw_capacity {
            return;
        }
        let capacity = draws.next_power_of_two();
        log::debug!("Growing draw uniform buffer: {} -> {capacity}", self.draw_capacity);
        let (buf, bg) = create_draw_buffer(&self.device, &self.draw_bgl, self.draw_stride, capacity);
        self.draw_buf = buf;
        self.draw_bg = bg;
        self.draw_capacity = capacity;
    }

    /// Render one frame: write per-draw uniforms, draw primitives, overlay text.
    pub fn render(&mut self, frame: &DrawList, pixels_per_point: f32) -> Result<(), SurfaceError> {
        self.meshes
            .prepare(&self.device, frame.draws.iter().map(|d| &d.primitive));
        self.ensure_draw_capacity(frame.draws.len());

        // --- per-draw uniforms
        let aspect = self.width as f32 / self.height as f32;
        let view_proj = match frame.view {
            Some(view) => self.projection.matrix(aspect) * view.look_transform(),
            None => Mat4::IDENTITY,
        };
        let stride = self.draw_stride as usize;
        self.staging.clear();
        self.staging.resize(frame.draws.len() * stride, 0);
        for (i, draw) in frame.draws.iter().enumerate() {
            let [r, g, b] = draw.color;
            let u = DrawUniform {
                mvp: (view_proj * draw.transform).to_cols_array_2d(),
                model: draw.transform.to_cols_array_2d(),
                color: [r, g, b, 1.0],
            };
            let start = i * stride;
            self.staging[start..start + DRAW_UNIFORM_SIZE as usize]
                .copy_from_slice(bytemuck::bytes_of(&u));
        }
        if !self.staging.is_empty() {
            self.queue.write_buffer(&self.draw_buf, 0, &self.staging);
        }

        let hud_frame = self
            .hud
            .prepare(&frame.texts, [self.width, self.height], pixels_per_point);

        // --- frame & passes
        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex.texture.create_view(&Default::default());

        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("MainEncoder"),
            });
        let hud_cmds = self
            .hud
            .upload(&self.device, &self.queue, &mut encoder, &hud_frame);

        {
            let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("ScenePass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(CLEAR_COLOR),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(Operations {
                        load: LoadOp::Clear(1.0),
                        store: StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            rpass.set_pipeline(&self.pipeline);
            for (i, draw) in frame.draws.iter().enumerate() {
                let Some(mesh) = self.meshes.get(draw.primitive) else {
                    continue;
                };
                let offset = (i as u64 * self.draw_stride) as u32;
                rpass.set_bind_group(0, &self.draw_bg, &[offset]);
                rpass.set_vertex_buffer(0, mesh.vertex_buf.slice(..));
                rpass.set_index_buffer(mesh.index_buf.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        {
            let mut hud_pass = encoder
                .begin_render_pass(&RenderPassDescriptor {
                    label: Some("HudPass"),
                    color_attachments: &[Some(RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: Operations {
                            load: LoadOp::Load,
                            store: StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();
            self.hud.paint(&mut hud_pass, &hud_frame);
        }

        self.queue
            .submit(hud_cmds.into_iter().chain(Some(encoder.finish())));
        surface_tex.present();
        self.hud.finish(hud_frame);
        Ok(())
    }

    pub fn is_surface_lost(err: &SurfaceError) -> bool {
        matches!(err, SurfaceError::Lost | SurfaceError::Outdated)
    }

    pub fn recreate_surface(&mut self) {
        self.resize(self.width, self.height);
    }
}

/// Uniform buffer for `capacity` draws plus its bind group.
fn create_draw_buffer(
    device: &Device,
    layout: &BindGroupLayout,
    stride: u64,
    capacity: usize,
) -> (Buffer, BindGroup) {
    let buf = device.create_buffer(&BufferDescriptor {
        label: Some("Draw UBO"),
        size: stride * capacity as u64,
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Draw BG"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(BufferBinding {
                buffer: &buf,
                offset: 0,
                size: NonZeroU64::new(DRAW_UNIFORM_SIZE),
            }),
        }],
    });
    (buf, bg)
}

/// Create a depth texture view matching the surface config.
fn create_depth_view(device: &Device, sc: &SurfaceConfiguration) -> TextureView {
    let tex = device.create_texture(&TextureDescriptor {
        label: Some("DepthTex"),
        size: Extent3d {
            width: sc.width.max(1),
            height: sc.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&TextureViewDescriptor::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_uniform_is_wgsl_sized() {
        assert_eq!(DRAW_UNIFORM_SIZE, 144);
        assert_eq!(DRAW_UNIFORM_SIZE % 16, 0);
    }

    #[test]
    fn projection_is_finite_for_any_aspect() {
        let p = Projection::default();
        for aspect in [0.0, 4.0 / 3.0, 16.0 / 9.0] {
            assert!(p.matrix(aspect).is_finite());
        }
    }
}
