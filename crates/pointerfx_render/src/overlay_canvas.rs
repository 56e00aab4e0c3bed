//! GPU-backed [`Canvas`]
//!
//! Draw calls made during a frame tick are batched as [`CircleInstance`]s and
//! submitted in a single pass when the frame is presented.

use pointerfx_core::{Canvas, PresentError, Rgba, Vec2};

use crate::context::RenderContext;
use crate::pipeline::{CircleInstance, OverlayPipeline, OverlayUniforms};

/// The overlay window's drawing surface
pub struct OverlayCanvas {
    context: RenderContext,
    pipeline: OverlayPipeline,
    instances: Vec<CircleInstance>,
}

impl OverlayCanvas {
    pub fn new(context: RenderContext) -> Self {
        let pipeline = OverlayPipeline::new(&context.device, context.format());
        Self {
            context,
            pipeline,
            instances: Vec::new(),
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Circles batched for the next present
    pub fn pending(&self) -> &[CircleInstance] {
        &self.instances
    }
}

impl Canvas for OverlayCanvas {
    fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    fn clear(&mut self) {
        self.instances.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.instances.push(CircleInstance::disc(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba) {
        self.instances
            .push(CircleInstance::ring(center, radius, line_width, color));
    }

    fn present(&mut self) -> Result<(), PresentError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(PresentError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(PresentError::OutOfMemory),
            Err(e) => return Err(PresentError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (width, height) = self.size();
        self.pipeline.prepare(
            &self.context.device,
            &self.context.queue,
            &OverlayUniforms::new(width, height),
            &self.instances,
        );

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Overlay Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, self.instances.len() as u32);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
