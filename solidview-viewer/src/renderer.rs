//! Mesh renderer
//!
//! wgpu renderer for the viewer's flat vertex list: one fill pipeline, an
//! optional wireframe pipeline (only when the adapter supports line
//! polygon mode) and a line pipeline for the world axis overlay.

use bytemuck::{Pod, Zeroable};
use nalgebra::{Matrix4, Vector3};
use solidview_core::{Error, Point3f, Result};
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::shaders;

/// Extent of the axis overlay lines in world units.
const AXIS_EXTENT: f32 = 1000.0;

/// Vertex data for flat-shaded mesh rendering
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// Vertex buffer layout descriptor
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Normal
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Vertex data for the axis overlay
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct AxisVertex {
    position: [f32; 3],
    color: [f32; 3],
}

impl AxisVertex {
    fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<AxisVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Camera uniform data
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view_pos: [f32; 3],
    pub _padding: f32,
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub background_color: [f64; 4],
    pub draw_axes: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            draw_axes: true,
        }
    }
}

/// Expand a flat triangle vertex list into flat-shaded render vertices,
/// one face normal per triangle. A degenerate (zero-area) triangle gets a
/// +Y stand-in normal; the point-stream format allows such triangles (the
/// cone's top ring, for example) and they rasterize to nothing anyway.
pub fn mesh_vertices(points: &[Point3f]) -> Vec<MeshVertex> {
    let mut vertices = Vec::with_capacity(points.len());
    for tri in points.chunks_exact(3) {
        let normal = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
        let normal = if normal.norm() > 1e-12 {
            normal.normalize()
        } else {
            Vector3::y()
        };
        for p in tri {
            vertices.push(MeshVertex {
                position: [p.x, p.y, p.z],
                normal: [normal.x, normal.y, normal.z],
            });
        }
    }
    vertices
}

/// Renderer for the loaded scene's triangle list.
pub struct MeshRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    fill_pipeline: wgpu::RenderPipeline,
    wire_pipeline: Option<wgpu::RenderPipeline>,
    axis_pipeline: wgpu::RenderPipeline,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    depth_texture: wgpu::TextureView,
    mesh_buffer: Option<wgpu::Buffer>,
    mesh_vertex_count: u32,
    axis_buffer: wgpu::Buffer,
    config: RenderConfig,
}

impl MeshRenderer {
    /// Create a renderer presenting to `window`.
    pub async fn new(window: Arc<Window>, config: RenderConfig) -> Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let size = window.inner_size();
        let surface = instance
            .create_surface(window)
            .map_err(|e| Error::Gpu(format!("Failed to create surface: {:?}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| Error::Gpu("Failed to find suitable adapter".to_string()))?;

        // Wireframe needs line polygon mode; fall back to fill-only when
        // the adapter cannot do it.
        let wireframe_supported = adapter
            .features()
            .contains(wgpu::Features::POLYGON_MODE_LINE);
        let required_features = if wireframe_supported {
            wgpu::Features::POLYGON_MODE_LINE
        } else {
            wgpu::Features::empty()
        };

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Solidview Device"),
                    required_features,
                    required_limits: wgpu::Limits::default(),
                    ..Default::default()
                },
                None,
            )
            .await
            .map_err(|e| Error::Gpu(format!("Failed to create device: {}", e)))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let camera_uniform = CameraUniform {
            view_proj: Matrix4::identity().into(),
            view_pos: [0.0, 0.0, 0.0],
            _padding: 0.0,
        };

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::bytes_of(&camera_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
                label: Some("camera_bind_group_layout"),
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::MESH_SHADER.into()),
        });
        let axis_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Axis Shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::AXIS_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Render Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let fill_pipeline = Self::mesh_pipeline(
            &device,
            &pipeline_layout,
            &mesh_shader,
            surface_format,
            wgpu::PolygonMode::Fill,
        );
        let wire_pipeline = wireframe_supported.then(|| {
            Self::mesh_pipeline(
                &device,
                &pipeline_layout,
                &mesh_shader,
                surface_format,
                wgpu::PolygonMode::Line,
            )
        });

        let axis_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Axis Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &axis_shader,
                entry_point: "vs_main",
                buffers: &[AxisVertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &axis_shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(Self::depth_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let axis_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Axis Vertex Buffer"),
            contents: bytemuck::cast_slice(&Self::axis_vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let depth_texture = Self::create_depth_texture(&device, &surface_config);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            fill_pipeline,
            wire_pipeline,
            axis_pipeline,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            depth_texture,
            mesh_buffer: None,
            mesh_vertex_count: 0,
            axis_buffer,
            config,
        })
    }

    /// Whether a wireframe pipeline is available on this adapter.
    pub fn supports_wireframe(&self) -> bool {
        self.wire_pipeline.is_some()
    }

    /// Upload the triangle list once; it never changes after loading.
    pub fn upload_mesh(&mut self, vertices: &[MeshVertex]) {
        self.mesh_vertex_count = vertices.len() as u32;
        self.mesh_buffer = (!vertices.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Mesh Vertex Buffer"),
                    contents: bytemuck::cast_slice(vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });
    }

    /// Update camera view and projection matrices
    pub fn update_camera(
        &mut self,
        view_matrix: Matrix4<f32>,
        proj_matrix: Matrix4<f32>,
        camera_pos: Vector3<f32>,
    ) {
        // nalgebra's perspective targets OpenGL's [-1, 1] depth range;
        // wgpu clips depth to [0, 1].
        #[rustfmt::skip]
        let depth_correction = Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.5, 0.5,
            0.0, 0.0, 0.0, 1.0,
        );
        let view_proj = depth_correction * proj_matrix * view_matrix;
        self.camera_uniform.view_proj = view_proj.into();
        self.camera_uniform.view_pos = [camera_pos.x, camera_pos.y, camera_pos.z];

        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&self.camera_uniform),
        );
    }

    /// Resize the presentation surface and depth buffer.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.surface_config.width = new_size.width;
            self.surface_config.height = new_size.height;
            self.surface.configure(&self.device, &self.surface_config);
            self.depth_texture = Self::create_depth_texture(&self.device, &self.surface_config);
        }
    }

    /// Draw one frame, wireframe when requested and supported.
    pub fn render(&mut self, wireframe: bool) -> Result<()> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => return Err(Error::Gpu(format!("Failed to get surface texture: {:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Mesh Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Mesh Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: self.config.background_color[0],
                            g: self.config.background_color[1],
                            b: self.config.background_color[2],
                            a: self.config.background_color[3],
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

            if self.config.draw_axes {
                render_pass.set_pipeline(&self.axis_pipeline);
                render_pass.set_vertex_buffer(0, self.axis_buffer.slice(..));
                render_pass.draw(0..6, 0..1);
            }

            if let Some(mesh_buffer) = &self.mesh_buffer {
                let pipeline = match (&self.wire_pipeline, wireframe) {
                    (Some(wire), true) => wire,
                    _ => &self.fill_pipeline,
                };
                render_pass.set_pipeline(pipeline);
                render_pass.set_vertex_buffer(0, mesh_buffer.slice(..));
                render_pass.draw(0..self.mesh_vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn mesh_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        format: wgpu::TextureFormat,
        polygon_mode: wgpu::PolygonMode,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mesh Render Pipeline"),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: "vs_main",
                buffers: &[MeshVertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                // Quads read left-to-right, top-to-bottom from outside the
                // solid; with the fixed decomposition that makes the front
                // side counter-clockwise in this coordinate handedness.
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: if polygon_mode == wgpu::PolygonMode::Fill {
                    Some(wgpu::Face::Back)
                } else {
                    None
                },
                unclipped_depth: false,
                polygon_mode,
                conservative: false,
            },
            depth_stencil: Some(Self::depth_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        })
    }

    fn depth_state() -> wgpu::DepthStencilState {
        wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn axis_vertices() -> [AxisVertex; 6] {
        let axis = |x: f32, y: f32, z: f32, color: [f32; 3]| AxisVertex {
            position: [x, y, z],
            color,
        };
        let red = [1.0, 0.0, 0.0];
        let green = [0.0, 1.0, 0.0];
        let blue = [0.0, 0.0, 1.0];
        [
            axis(-AXIS_EXTENT, 0.0, 0.0, red),
            axis(AXIS_EXTENT, 0.0, 0.0, red),
            axis(0.0, -AXIS_EXTENT, 0.0, green),
            axis(0.0, AXIS_EXTENT, 0.0, green),
            axis(0.0, 0.0, -AXIS_EXTENT, blue),
            axis(0.0, 0.0, AXIS_EXTENT, blue),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mesh_vertices_face_normals() {
        let points = [
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(0.0, 0.0, 1.0),
        ];

        let vertices = mesh_vertices(&points);
        assert_eq!(vertices.len(), 3);
        for v in &vertices {
            // Right-handed cross of the edges points -Y for this winding.
            assert_relative_eq!(v.normal[1], -1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_mesh_vertices_degenerate_triangle() {
        let p = Point3f::new(1.0, 2.0, 3.0);
        let vertices = mesh_vertices(&[p, p, p]);
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0].normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_mesh_vertices_drops_incomplete_triangle() {
        let points = [
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
            Point3f::new(9.0, 9.0, 9.0),
        ];
        assert_eq!(mesh_vertices(&points).len(), 3);
    }
}
