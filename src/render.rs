use hero_core::constants::GPU_PARTICLE_COUNT;
use hero_core::fallback::Bitmap;
use hero_core::{
    Animation, EngineError, EngineKind, HomingField, ParticleEngine, ParticleInstance,
    ViewportState,
};
use std::time::Duration;
use web_sys as web;
use wgpu::util::DeviceExt;

mod backend;
mod helpers;
mod pipeline;

use backend::GpuBackend;
use pipeline::{create_particle_pipeline, Globals, QUAD_VERTICES};

fn wgpu_backends(backend: GpuBackend) -> wgpu::Backends {
    match backend {
        GpuBackend::WebGpu => wgpu::Backends::BROWSER_WEBGPU,
        GpuBackend::WebGl2 => wgpu::Backends::GL,
    }
}

async fn request_adapter(
    instance: &wgpu::Instance,
    surface: Option<&wgpu::Surface<'static>>,
) -> Option<wgpu::Adapter> {
    instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: surface,
            force_fallback_adapter: false,
        })
        .await
}

/// One backend attempt. Adapter-first backends only claim the canvas once
/// an adapter exists, so a missing WebGPU adapter leaves it free for WebGL2.
async fn try_backend(
    backend: GpuBackend,
    canvas: &web::HtmlCanvasElement,
) -> Option<(wgpu::Surface<'static>, wgpu::Adapter)> {
    let name = backend.name();
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu_backends(backend),
        ..Default::default()
    });
    let create_surface = || {
        let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
        match instance.create_surface(target) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[gpu] {} surface unavailable: {}", name, e);
                None
            }
        }
    };

    if backend.surface_before_adapter() {
        let surface = create_surface()?;
        let Some(adapter) = request_adapter(&instance, Some(&surface)).await else {
            log::warn!("[gpu] no {} adapter", name);
            return None;
        };
        return Some((surface, adapter));
    }

    let Some(adapter) = request_adapter(&instance, None).await else {
        log::warn!("[gpu] no {} adapter, canvas left untouched", name);
        return None;
    };
    let surface = create_surface()?;
    if !adapter.is_surface_supported(&surface) {
        log::warn!("[gpu] {} adapter cannot present to the canvas", name);
        return None;
    }
    Some((surface, adapter))
}

/// Try WebGPU, then WebGL2, and return the first surface/adapter pair.
async fn acquire_adapter(
    canvas: &web::HtmlCanvasElement,
) -> Result<(wgpu::Surface<'static>, wgpu::Adapter), EngineError> {
    let webgpu_exposed = wgpu::util::is_browser_webgpu_supported().await;
    for backend in GpuBackend::ORDER {
        if backend == GpuBackend::WebGpu && !webgpu_exposed {
            log::info!("[gpu] navigator.gpu not available, skipping {}", backend.name());
            continue;
        }
        if let Some((surface, adapter)) = try_backend(backend, canvas).await {
            log::info!(
                "[gpu] using {} adapter {:?}",
                backend.name(),
                adapter.get_info().name
            );
            return Ok((surface, adapter));
        }
    }
    Err(EngineError::NoGraphicsAdapter {
        tried: "webgpu, webgl2",
    })
}

/// Instanced hero: every particle is one instance of a shared textured quad.
pub struct GpuParticleEngine {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    globals_buffer: wgpu::Buffer,
    quad_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    opacity_buffer: wgpu::Buffer,
    texture: wgpu::Texture,
    field: HomingField,
    instances: Vec<ParticleInstance>,
}

impl GpuParticleEngine {
    pub async fn create(
        canvas: &web::HtmlCanvasElement,
        viewport: &ViewportState,
        texture_bitmap: &Bitmap,
    ) -> Result<Self, EngineError> {
        let (surface, adapter) = acquire_adapter(canvas).await?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("hero_device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await
            .map_err(|e| EngineError::Device(format!("{:?}", e)))?;
        device.on_uncaptured_error(Box::new(|e: wgpu::Error| log::error!("[gpu] {}", e)));

        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps)?;
        let (width, height) = helpers::clamp_extent(
            viewport.width,
            viewport.height,
            device.limits().max_texture_dimension_2d,
        );
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: helpers::pick_alpha_mode(&caps),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let particles = create_particle_pipeline(&device, format);
        if let Some(err) = device.pop_error_scope().await {
            return Err(EngineError::Shader(err.to_string()));
        }

        let (texture, texture_view) =
            helpers::create_rgba_texture(&device, &queue, "particle_tex", texture_bitmap);
        let sampler = helpers::create_linear_sampler(&device);
        let globals = Globals {
            resolution: [width as f32, height as f32],
            _pad: [0.0; 2],
        };
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particles_globals"),
            contents: bytemuck::bytes_of(&globals),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particles_bg"),
            layout: &particles.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let field = HomingField::populate(GPU_PARTICLE_COUNT, viewport, &mut rand::thread_rng());
        let mut instances = Vec::with_capacity(field.len());
        field.write_instances(&mut instances);

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particles_quad"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particles_instances"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        // written once: opacity never changes after creation
        let opacity_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particles_opacity"),
            contents: bytemuck::cast_slice(&field.opacities()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::info!(
            "[gpu] {} particles on a {}x{} {:?} surface",
            field.len(),
            width,
            height,
            format
        );
        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline: particles.pipeline,
            bind_group,
            globals_buffer,
            quad_buffer,
            instance_buffer,
            opacity_buffer,
            texture,
            field,
            instances,
        })
    }

    fn resize_if_needed(&mut self, viewport: &ViewportState) {
        let (width, height) = helpers::clamp_extent(
            viewport.width,
            viewport.height,
            self.device.limits().max_texture_dimension_2d,
        );
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        let globals = Globals {
            resolution: [width as f32, height as f32],
            _pad: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        log::debug!("[gpu] surface resized to {}x{}", width, height);
    }
}

impl Animation for GpuParticleEngine {
    fn tick(&mut self, viewport: &ViewportState, _dt: Duration) {
        if self.field.is_empty() {
            return;
        }
        self.field.tick(viewport.pointer);
        self.field.write_instances(&mut self.instances);
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));
    }

    fn render(&mut self, viewport: &ViewportState) -> anyhow::Result<()> {
        if self.field.is_empty() {
            return Ok(());
        }
        self.resize_if_needed(viewport);
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                self.surface.configure(&self.device, &self.config);
                log::debug!("[gpu] surface reconfigured");
                return Ok(());
            }
            Err(e) => return Err(anyhow::anyhow!("acquire frame: {}", e)),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("particles_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("particles_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            rpass.set_vertex_buffer(2, self.opacity_buffer.slice(..));
            rpass.draw(0..QUAD_VERTICES.len() as u32, 0..self.instances.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl ParticleEngine for GpuParticleEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Gpu
    }

    fn particle_count(&self) -> usize {
        self.field.len()
    }

    fn dispose(&mut self) {
        self.field = HomingField::from_particles(Vec::new());
        self.instances.clear();
        self.instance_buffer.destroy();
        self.opacity_buffer.destroy();
        self.quad_buffer.destroy();
        self.texture.destroy();
        log::info!("[gpu] engine disposed");
    }
}
