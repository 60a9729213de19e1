//! Text overlay drawn with egui on top of the 3D pass.

use corelib::scene::TextItem;
use egui::{Color32, Context, RichText};
use egui_wgpu::{Renderer, ScreenDescriptor};
use wgpu::{CommandBuffer, CommandEncoder, Device, Queue, RenderPass, TextureFormat};

const TEXT_SIZE: f32 = 18.0;

/// Tessellated overlay for one frame.
pub struct HudFrame {
    primitives: Vec<egui::ClippedPrimitive>,
    textures: egui::TexturesDelta,
    screen: ScreenDescriptor,
}

pub struct HudPainter {
    ctx: Context,
    renderer: Renderer,
}

impl HudPainter {
    pub fn new(device: &Device, format: TextureFormat) -> Self {
        Self {
            ctx: Context::default(),
            renderer: Renderer::new(device, format, None, 1, false),
        }
    }

    /// Lay out `texts` (normalized, origin bottom-left) for a surface of
    /// `size` physical pixels.
    pub fn prepare(&mut self, texts: &[TextItem], size: [u32; 2], pixels_per_point: f32) -> HudFrame {
        let ppp = pixels_per_point.max(0.1);
        let w = size[0] as f32 / ppp;
        let h = size[1] as f32 / ppp;

        let mut raw = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(w, h))),
            ..Default::default()
        };
        if let Some(vp) = raw.viewports.get_mut(&raw.viewport_id) {
            vp.native_pixels_per_point = Some(ppp);
        }

        let output = self.ctx.run(raw, |ctx| {
            for (i, item) in texts.iter().enumerate() {
                let pos = egui::pos2(item.x * w, (1.0 - item.y) * h - TEXT_SIZE);
                egui::Area::new(egui::Id::new(("hud", i)))
                    .fixed_pos(pos)
                    .interactable(false)
                    .show(ctx, |ui| {
                        ui.label(RichText::new(&item.text).size(TEXT_SIZE).color(Color32::WHITE));
                    });
            }
        });

        let primitives = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        HudFrame {
            primitives,
            textures: output.textures_delta,
            screen: ScreenDescriptor {
                size_in_pixels: size,
                pixels_per_point: output.pixels_per_point,
            },
        }
    }

    /// Upload font textures and vertex data; returns extra command buffers
    /// to submit before the main encoder.
    pub fn upload(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        frame: &HudFrame,
    ) -> Vec<CommandBuffer> {
        for (id, delta) in &frame.textures.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &frame.primitives, &frame.screen)
    }

    pub fn paint(&self, pass: &mut RenderPass<'static>, frame: &HudFrame) {
        self.renderer.render(pass, &frame.primitives, &frame.screen);
    }

    /// Release textures egui no longer needs.
    pub fn finish(&mut self, frame: HudFrame) {
        for id in &frame.textures.free {
            self.renderer.free_texture(id);
        }
    }
}
