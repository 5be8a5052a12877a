use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use app_core::camera::OrbitCamera;
use app_core::constants::{
    CLICK_DRAG_THRESHOLD_PX, GLOBE_LAT_SEGMENTS, GLOBE_LON_SEGMENTS, GLOBE_RADIUS,
};
use app_core::content;
use app_core::interaction::{pick_scene, InteractionRouter};
use app_core::mesh::{uv_sphere, SphereVertex};
use app_core::render_data::{self, FlagInstance, FlagUniforms, GlobeUniforms, FLAG_INSTANCE_CAPACITY};
use app_core::routes::{Navigator, Route};
use app_core::scene::GlobeScene;
use glam::Vec2;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

// Unit quad (two triangles), scaled per instance in the shader.
const QUAD_VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

/// Stand-in navigator; the desktop viewer has no pages to switch to.
struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_to(&mut self, route: Route) {
        log::info!("[nav] viewer would open {}", route.path());
    }
}

/// Mouse bookkeeping for the event loop. Presses inside the click dead
/// zone count as clicks, anything past it orbits the camera.
#[derive(Default)]
struct MouseState {
    position: Vec2,
    press_origin: Option<Vec2>,
    dragging: bool,
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    globe_pipeline: wgpu::RenderPipeline,
    globe_vb: wgpu::Buffer,
    globe_ib: wgpu::Buffer,
    globe_index_count: u32,
    globe_uniforms: wgpu::Buffer,
    globe_bind_group: wgpu::BindGroup,
    flag_pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    flag_instance_vb: wgpu::Buffer,
    flag_uniforms: wgpu::Buffer,
    flag_bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    last_frame: Instant,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let mesh = uv_sphere(GLOBE_RADIUS, GLOBE_LAT_SEGMENTS, GLOBE_LON_SEGMENTS);
        let globe_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globe_vb"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let globe_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globe_ib"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let globe_index_count = mesh.indices.len() as u32;

        let globe_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe_shader"),
            source: wgpu::ShaderSource::Wgsl(app_core::GLOBE_WGSL.into()),
        });
        let flag_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("flag_shader"),
            source: wgpu::ShaderSource::Wgsl(app_core::FLAG_WGSL.into()),
        });

        let globe_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globe_uniforms"),
            size: std::mem::size_of::<GlobeUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let flag_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("flag_uniforms"),
            size: std::mem::size_of::<FlagUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let flag_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("flag_instance_vb"),
            size: (std::mem::size_of::<FlagInstance>() * FLAG_INSTANCE_CAPACITY) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
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
        let globe_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globe_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globe_uniforms.as_entire_binding(),
            }],
        });
        let flag_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("flag_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: flag_uniforms.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let globe_vertex_buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SphereVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 24,
                    shader_location: 2,
                },
            ],
        }];
        let globe_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("globe_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &globe_shader,
                entry_point: Some("vs_main"),
                buffers: &globe_vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &globe_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let flag_vertex_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-stripe instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<FlagInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 20,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let flag_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("flag_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &flag_shader,
                entry_point: Some("vs_main"),
                buffers: &flag_vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            // Decal reads depth but never writes it; the globe occludes the
            // far side of the flag while stripes still layer over the glow.
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &flag_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let depth_view = create_depth_view(&device, size.width, size.height);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            globe_pipeline,
            globe_vb,
            globe_ib,
            globe_index_count,
            globe_uniforms,
            globe_bind_group,
            flag_pipeline,
            quad_vb,
            flag_instance_vb,
            flag_uniforms,
            flag_bind_group,
            depth_view,
            width: size.width,
            height: size.height,
            last_frame: Instant::now(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, new_size.width, new_size.height);
    }

    fn render(
        &mut self,
        scene: &mut GlobeScene,
        camera: &OrbitCamera,
    ) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        scene.tick(dt);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let aspect = self.width as f32 / (self.height as f32).max(1.0);
        let view_proj = camera.view_proj(aspect);
        self.queue.write_buffer(
            &self.globe_uniforms,
            0,
            bytemuck::bytes_of(&render_data::globe_uniforms(scene, view_proj, camera.eye())),
        );

        let mut flag_count = 0u32;
        if let Some(marker) = scene.markers().first() {
            self.queue.write_buffer(
                &self.flag_uniforms,
                0,
                bytemuck::bytes_of(&render_data::flag_uniforms(marker, view_proj)),
            );
            let instances = render_data::flag_instances(scene, 0);
            flag_count = instances.len() as u32;
            if flag_count > 0 {
                self.queue
                    .write_buffer(&self.flag_instance_vb, 0, bytemuck::cast_slice(&instances));
            }
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("globe_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.012,
                            g: 0.015,
                            b: 0.035,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.globe_pipeline);
            rpass.set_bind_group(0, &self.globe_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.globe_vb.slice(..));
            rpass.set_index_buffer(self.globe_ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.globe_index_count, 0, 0..1);

            if flag_count > 0 {
                rpass.set_pipeline(&self.flag_pipeline);
                rpass.set_bind_group(0, &self.flag_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.flag_instance_vb.slice(..));
                rpass.draw(0..6, 0..flag_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let depth = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_tex"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    depth.create_view(&wgpu::TextureViewDescriptor::default())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut scene = GlobeScene::new(&content::globe_config()).expect("scene");
    let mut camera = OrbitCamera::default();
    let mut router = InteractionRouter::new();
    let mut nav = LogNavigator;
    let mut mouse = MouseState::default();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("GLOBEVIBE (native)")
        .build(&event_loop)
        .expect("window");

    let mut state = pollster::block_on(GpuState::new(&window)).expect("gpu");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => state.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                let prev = mouse.position;
                mouse.position = pos;
                if let Some(origin) = mouse.press_origin {
                    if !mouse.dragging && (pos - origin).length() > CLICK_DRAG_THRESHOLD_PX {
                        mouse.dragging = true;
                    }
                    if mouse.dragging {
                        let delta = pos - prev;
                        camera.rotate(delta.x, delta.y);
                    }
                } else {
                    let (ro, rd) =
                        camera.screen_ray(state.width as f32, state.height as f32, pos.x, pos.y);
                    let hits = pick_scene(&scene, ro, rd);
                    router.update_hover(&mut scene, hits.first().copied());
                }
            }
            Event::WindowEvent {
                event:
                    WindowEvent::MouseInput {
                        state: button_state,
                        button: MouseButton::Left,
                        ..
                    },
                ..
            } => match button_state {
                ElementState::Pressed => {
                    mouse.press_origin = Some(mouse.position);
                    mouse.dragging = false;
                }
                ElementState::Released => {
                    let was_click = mouse.press_origin.take().is_some() && !mouse.dragging;
                    mouse.dragging = false;
                    if was_click {
                        let (ro, rd) = camera.screen_ray(
                            state.width as f32,
                            state.height as f32,
                            mouse.position.x,
                            mouse.position.y,
                        );
                        let hits = pick_scene(&scene, ro, rd);
                        let _ = router.dispatch_click(&scene, &hits, &mut nav);
                    }
                }
            },
            Event::WindowEvent {
                event: WindowEvent::MouseWheel { delta, .. },
                ..
            } => {
                // positive wheel deltas zoom out, matching the browser's sign
                let wheel = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * 40.0,
                    MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                };
                camera.zoom(wheel);
            }
            Event::AboutToWait => match state.render(&mut scene, &camera) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            },
            _ => {}
        })
        .unwrap();
}
