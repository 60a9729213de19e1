//! Platform layer: windowing & event loop.
//!
//! - Continuous redraws: every frame ticks the game, then renders it.
//! - Keyboard events are translated to core keys and dispatched.
//! - Proper handling of resize/scale/close.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use corelib::config::WorldConfig;
use corelib::game::Game;
use corelib::input::Key;
use corelib::scene::{DrawList, RenderSink};
use corelib::world::Control;
use renderer::GpuState;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key as WinitKey, NamedKey},
    window::{Window, WindowId},
};

const WINDOW_TITLE: &str = "Underwater Research Base - Oxygen Run";

/// Translate a winit logical key into a core key; `None` for keys the
/// game never binds.
pub fn translate_key(key: &WinitKey) -> Option<Key> {
    match key {
        WinitKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Key::Char(c)),
                _ => None,
            }
        }
        WinitKey::Named(NamedKey::ArrowUp) => Some(Key::ArrowUp),
        WinitKey::Named(NamedKey::ArrowDown) => Some(Key::ArrowDown),
        WinitKey::Named(NamedKey::ArrowLeft) => Some(Key::ArrowLeft),
        WinitKey::Named(NamedKey::ArrowRight) => Some(Key::ArrowRight),
        WinitKey::Named(NamedKey::Escape) => Some(Key::Escape),
        _ => None,
    }
}

/// Frames-per-second over a rolling one-second window.
#[derive(Debug)]
pub struct FpsCounter {
    window_start: Duration,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            window_start: Duration::ZERO,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Count a frame at `now`; returns the latest estimate.
    pub fn frame(&mut self, now: Duration) -> f32 {
        self.frames += 1;
        let span = now.saturating_sub(self.window_start);
        if span >= Duration::from_secs(1) {
            self.fps = self.frames as f32 / span.as_secs_f32();
            self.frames = 0;
            self.window_start = now;
            log::debug!("fps={:.1}", self.fps);
        }
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    backends: wgpu::Backends,
    show_fps: bool,
    size: PhysicalSize<u32>,

    game: Game,
    start: Instant,
    fps: FpsCounter,
    frame: DrawList,

    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    error: Option<anyhow::Error>,
}

impl App {
    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(self.size);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("Failed to create window")?,
        );
        log::info!(
            "Window created: {}x{}",
            window.inner_size().width,
            window.inner_size().height
        );

        let gpu = pollster::block_on(GpuState::new(window.clone(), self.backends))?;
        self.gpu = Some(gpu);
        self.window = Some(window);
        Ok(())
    }

    fn on_key(&mut self, key: &WinitKey) {
        let Some(key) = translate_key(key) else {
            return;
        };
        if self.game.handle_key(key) == Control::Exit {
            log::info!("Exit key pressed. Terminating.");
            std::process::exit(0);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.start.elapsed();
        self.game.tick(now);

        self.frame.clear();
        self.game.render(&mut self.frame);
        if self.show_fps {
            let fps = self.fps.frame(now);
            self.frame.draw_text(&format!("FPS: {fps:.0}"), 0.85, 0.95);
        }

        let (Some(gpu), Some(window)) = (self.gpu.as_mut(), self.window.as_ref()) else {
            return;
        };
        match gpu.render(&self.frame, window.scale_factor() as f32) {
            Ok(()) => {}
            Err(e) if GpuState::is_surface_lost(&e) => {
                log::warn!("Surface lost/outdated: {e:?}. Recreating.");
                gpu.recreate_surface();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory. Exiting event loop.");
                self.error = Some(anyhow!("GPU out of memory"));
                event_loop.exit();
            }
            Err(e) => log::warn!("Frame skipped: {e:?}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            log::error!("Startup failed: {e:#}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested. Exiting event loop.");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                log::info!("Resized: {}x{}", new_size.width, new_size.height);
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::info!("Scale factor changed: {scale_factor:.3}");
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.on_key(&logical_key),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Idle callback: keep the simulation ticking.
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

/// Open the game window and run until it is closed.
pub fn run_with_renderer(
    backends: wgpu::Backends,
    show_fps: bool,
    width: u32,
    height: u32,
    config: WorldConfig,
) -> Result<()> {
    let game = Game::new(config)?;
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        backends,
        show_fps,
        size: PhysicalSize::new(width.max(1), height.max(1)),
        game,
        start: Instant::now(),
        fps: FpsCounter::new(),
        frame: DrawList::new(),
        window: None,
        gpu: None,
        error: None,
    };

    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("Event loop error: {e:?}"))?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    #[test]
    fn translates_game_keys() {
        assert_eq!(
            translate_key(&WinitKey::Character(SmolStr::new("i"))),
            Some(Key::Char('i'))
        );
        assert_eq!(
            translate_key(&WinitKey::Named(NamedKey::ArrowLeft)),
            Some(Key::ArrowLeft)
        );
        assert_eq!(translate_key(&WinitKey::Named(NamedKey::Escape)), Some(Key::Escape));
        assert_eq!(translate_key(&WinitKey::Named(NamedKey::Tab)), None);
        assert_eq!(translate_key(&WinitKey::Character(SmolStr::new("ab"))), None);
    }

    #[test]
    fn fps_counter_reports_after_one_second() {
        let mut fps = FpsCounter::new();
        for i in 1..=30 {
            fps.frame(Duration::from_millis(i * 20));
        }
        // 30 frames over 0.6 s: no estimate yet
        assert_eq!(fps.frame(Duration::from_millis(620)), 0.0);
        let est = fps.frame(Duration::from_millis(1000));
        assert!(est > 0.0);
    }
}
