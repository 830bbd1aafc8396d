use blade_graphics as gpu;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::{
    canvas::{Frame, FrameTarget},
    config::{CameraConfig, FieldConfig, SpriteStyle},
    point_cloud::PointCloud,
    MountError,
};

const SHADER_SOURCE: &str = include_str!("shader.wgsl");

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
struct Parameters {
    projection: [[f32; 4]; 4],
    view_model: [[f32; 4]; 4],
    color: [f32; 4],
    sprite_extent: f32,
    round_sprites: u32,
    pad: [u32; 2],
}

#[derive(blade_macros::ShaderData)]
struct DrawData {
    g_parameters: Parameters,
    g_positions: gpu::BufferPiece,
}

/// Blade-backed drawing surface of a particle canvas.
///
/// Owns the GPU context, the window surface, the pipeline and the particle
/// buffer. Everything is released on drop.
pub struct Renderer {
    camera: CameraConfig,
    sprite: SpriteStyle,
    aspect: f32,
    draw_pipeline: gpu::RenderPipeline,
    command_encoder: gpu::CommandEncoder,
    prev_sync_point: Option<gpu::SyncPoint>,
    point_cloud: PointCloud,
    surface: gpu::Surface,
    context: gpu::Context,
}

impl Renderer {
    fn make_surface_config(config: &FieldConfig) -> gpu::SurfaceConfig {
        gpu::SurfaceConfig {
            size: gpu::Extent {
                width: config.width,
                height: config.height,
                depth: 1,
            },
            usage: gpu::TextureUsage::TARGET,
            display_sync: gpu::DisplaySync::Recent,
            ..Default::default()
        }
    }

    fn blend_state(sprite: &SpriteStyle) -> gpu::BlendState {
        if sprite.additive {
            let add = gpu::BlendComponent {
                src_factor: gpu::BlendFactor::One,
                dst_factor: gpu::BlendFactor::One,
                operation: gpu::BlendOperation::Add,
            };
            gpu::BlendState {
                color: add,
                alpha: add,
            }
        } else {
            gpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING
        }
    }

    fn color_target(format: gpu::TextureFormat, sprite: &SpriteStyle) -> gpu::ColorTargetState {
        gpu::ColorTargetState {
            format,
            blend: Some(Self::blend_state(sprite)),
            write_mask: gpu::ColorWrites::ALL,
        }
    }

    /// Creates the GPU context and a surface of the configured canvas size.
    ///
    /// Fails when the platform offers no usable context or surface; whatever
    /// was created up to that point is released before returning.
    pub fn mount<W: HasWindowHandle + HasDisplayHandle>(
        window: &W,
        config: &FieldConfig,
    ) -> Result<Self, MountError> {
        let context = unsafe {
            gpu::Context::init(gpu::ContextDesc {
                presentation: true,
                validation: cfg!(debug_assertions),
                timing: false,
                capture: false,
                overlay: false,
                device_id: 0,
            })
        }
        .map_err(|e| MountError::ContextUnavailable(format!("{:?}", e)))?;
        log::info!("{:?}", context.device_information());

        let surface = context
            .create_surface_configured(window, Self::make_surface_config(config))
            .map_err(|e| MountError::SurfaceUnavailable(format!("{:?}", e)))?;
        let info = surface.info();
        log::info!(
            "Canvas {}x{} with {:?}",
            config.width,
            config.height,
            info.format
        );

        let shader = context.create_shader(gpu::ShaderDesc {
            source: SHADER_SOURCE,
        });
        let draw_layout = <DrawData as gpu::ShaderData>::layout();
        let draw_pipeline = context.create_render_pipeline(gpu::RenderPipelineDesc {
            name: "particles",
            data_layouts: &[&draw_layout],
            primitive: gpu::PrimitiveState {
                topology: gpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            vertex: shader.at("draw_vs"),
            vertex_fetches: &[],
            fragment: Some(shader.at("draw_fs")),
            color_targets: &[Self::color_target(info.format, &config.sprite)],
            depth_stencil: None,
            multisample_state: Default::default(),
        });

        let command_encoder = context.create_command_encoder(gpu::CommandEncoderDesc {
            name: "particles",
            buffer_count: 2,
        });
        let point_cloud = PointCloud::new(config.particle_count, &context);

        Ok(Self {
            camera: config.camera.clone(),
            sprite: config.sprite.clone(),
            aspect: config.aspect(),
            draw_pipeline,
            command_encoder,
            prev_sync_point: None,
            point_cloud,
            surface,
            context,
        })
    }

    fn wait_for_gpu(&mut self) {
        if let Some(sp) = self.prev_sync_point.take() {
            self.context.wait_for(&sp, !0);
        }
    }

    fn parameters(&self, frame: &Frame) -> Parameters {
        let view_model = self.camera.view_matrix() * frame.model;
        // World-space quad that covers as many pixels as a perspective point sprite.
        let half_fov = self.camera.fov_y.to_radians() * 0.5;
        Parameters {
            projection: self
                .camera
                .projection_matrix(self.aspect)
                .to_cols_array_2d(),
            view_model: view_model.to_cols_array_2d(),
            color: frame.color.extend(self.sprite.opacity).into(),
            sprite_extent: self.sprite.size * half_fov.tan(),
            round_sprites: self.sprite.round as u32,
            pad: [0; 2],
        }
    }
}

impl FrameTarget for Renderer {
    fn draw(&mut self, frame: &Frame) {
        // The position buffer is shared with the GPU.
        self.wait_for_gpu();
        self.point_cloud.upload(frame.positions);
        let parameters = self.parameters(frame);

        let target = self.surface.acquire_frame();
        self.command_encoder.start();
        self.command_encoder.init_texture(target.texture());

        if let mut pass = self.command_encoder.render(
            "particles",
            gpu::RenderTargetSet {
                colors: &[gpu::RenderTarget {
                    view: target.texture_view(),
                    init_op: gpu::InitOp::Clear(gpu::TextureColor::TransparentBlack),
                    finish_op: gpu::FinishOp::Store,
                }],
                depth_stencil: None,
            },
        ) {
            let mut pen = pass.with(&self.draw_pipeline);
            pen.bind(
                0,
                &DrawData {
                    g_parameters: parameters,
                    g_positions: self.point_cloud.position_buf.at(0),
                },
            );
            pen.draw(0, 4, 0, self.point_cloud.count() as u32);
        }
        self.command_encoder.present(target);
        let sync_point = self.context.submit(&mut self.command_encoder);
        self.prev_sync_point = Some(sync_point);
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.wait_for_gpu();
        self.context
            .destroy_render_pipeline(&mut self.draw_pipeline);
        self.context
            .destroy_command_encoder(&mut self.command_encoder);
        self.point_cloud.deinit(&self.context);
        self.context.destroy_surface(&mut self.surface);
    }
}
