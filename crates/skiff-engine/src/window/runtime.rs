use anyhow::{anyhow, Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{FrameCtx, FrameInfo, Game, InitCtx};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::{InputEvent, InputState};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget, SpriteBatch, SpriteRenderer};
use crate::texture::TextureLoader;
use crate::time::FrameClock;

use super::keymap;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
    /// Framebuffer clear colour, applied before every `Game::render`.
    pub clear_color: Color,
    /// Close the window when Escape is released.
    pub close_on_escape: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Window".to_string(),
            initial_size: LogicalSize::new(1440.0, 900.0),
            resizable: true,
            clear_color: Color::TRANSPARENT,
            close_on_escape: true,
        }
    }
}

/// Runtime lifecycle.
///
/// Transitions only move forward: `Uninitialized -> Running -> Terminated`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Lifecycle {
    Uninitialized,
    Running,
    Terminated,
}

/// Entry point for the runtime. One window, one game, run once.
pub struct Runtime {
    config: RuntimeConfig,
    gpu_init: GpuInit,
}

impl Runtime {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            gpu_init: GpuInit::default(),
        }
    }

    pub fn with_gpu_init(mut self, gpu_init: GpuInit) -> Self {
        self.gpu_init = gpu_init;
        self
    }

    /// Opens the window and drives `game` until a close signal.
    ///
    /// Returns the initialization error (window, GPU or `Game::init`) if
    /// the runtime never reached the render loop.
    pub fn run<G: Game>(self, game: G) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(self.config, self.gpu_init, game);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    clock: FrameClock,
    renderer: SpriteRenderer,
    batch: SpriteBatch,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Result of driving one frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum FrameOutcome {
    Continue,
    Close,
    Fatal,
}

struct AppState<G: Game> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    game: G,

    entry: Option<WindowEntry>,
    lifecycle: Lifecycle,
    error: Option<anyhow::Error>,
}

impl<G: Game> AppState<G> {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, game: G) -> Self {
        Self {
            config,
            gpu_init,
            game,
            entry: None,
            lifecycle: Lifecycle::Uninitialized,
            error: None,
        }
    }

    fn set_lifecycle(&mut self, next: Lifecycle) {
        log::info!("runtime {:?} -> {:?}", self.lifecycle, next);
        self.lifecycle = next;
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable)
            .with_visible(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        if let Some(monitor) = window.primary_monitor().or_else(|| window.current_monitor()) {
            let pos = centered_position(monitor.position(), monitor.size(), window.outer_size());
            log::debug!("centering window at {},{} on {:?}", pos.x, pos.y, monitor.name());
            window.set_outer_position(pos);
        }

        let gpu_init = self.gpu_init.clone();
        let mut entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            clock: FrameClock::new(),
            renderer: SpriteRenderer::new(),
            batch: SpriteBatch::new(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
            },
        }
        .try_build()?;

        let game = &mut self.game;
        entry.with_mut(|fields| -> Result<()> {
            let gpu: &Gpu<'_> = fields.gpu;
            let layout = fields.renderer.texture_layout(gpu.device());
            let loader = TextureLoader::new(
                gpu.device(),
                gpu.queue(),
                layout,
                gpu.supports_clamp_to_border(),
            );

            let mut ctx = InitCtx::new(loader, logical_size(fields.window));
            game.init(&mut ctx).context("game initialization failed")?;

            // Loading time is not part of the first frame's delta.
            fields.clock.reset();
            fields.window.set_visible(true);
            fields.window.request_redraw();
            Ok(())
        })?;

        self.entry = Some(entry);
        self.set_lifecycle(Lifecycle::Running);
        Ok(())
    }

    fn terminate(&mut self, event_loop: &ActiveEventLoop, reason: &str) {
        if self.lifecycle == Lifecycle::Terminated {
            return;
        }

        log::info!("closing: {reason}");
        // Drops the GPU context before the window it borrows.
        self.entry = None;
        self.set_lifecycle(Lifecycle::Terminated);
        event_loop.exit();
    }

    fn redraw(&mut self) -> FrameOutcome {
        let (game, clear, entry) = (&mut self.game, self.config.clear_color, &mut self.entry);
        let Some(entry) = entry.as_mut() else {
            return FrameOutcome::Continue;
        };

        entry.with_mut(|fields| {
            let ft = fields.clock.tick();
            let (width, height) = logical_size(fields.window);
            let info = FrameInfo {
                delta: ft.dt,
                width,
                height,
                frame_index: ft.frame_index,
            };

            let mut frame = match fields.gpu.begin_frame() {
                Ok(f) => f,
                Err(err) => {
                    log::warn!("failed to acquire surface frame: {err}");
                    return match fields.gpu.handle_surface_error(err) {
                        SurfaceErrorAction::Fatal => FrameOutcome::Fatal,
                        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                            FrameOutcome::Continue
                        }
                    };
                }
            };

            // Clear pass, dropped before the sprite pass begins.
            {
                let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("skiff clear"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &frame.view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color {
                                r: clear.r as f64,
                                g: clear.g as f64,
                                b: clear.b as f64,
                                a: clear.a as f64,
                            }),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                    multiview_mask: None,
                });
            }

            fields.batch.clear();
            let close_requested = {
                let mut ctx = FrameCtx::new(fields.input_state, fields.batch);
                game.render(info, &mut ctx);
                ctx.close_requested()
            };

            {
                let gpu: &Gpu<'_> = fields.gpu;
                let rctx = RenderCtx::for_viewport(
                    gpu.device(),
                    gpu.queue(),
                    gpu.surface_format(),
                    Viewport::new(width, height),
                );
                let mut target = RenderTarget {
                    encoder: &mut frame.encoder,
                    view: &frame.view,
                };
                fields.renderer.render(&rctx, &mut target, fields.batch);
            }

            fields.window.pre_present_notify();
            fields.gpu.submit(frame);
            // Release this frame's bind-group references.
            fields.batch.clear();

            if close_requested {
                FrameOutcome::Close
            } else {
                FrameOutcome::Continue
            }
        })
    }
}

impl<G: Game> ApplicationHandler for AppState<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.lifecycle != Lifecycle::Uninitialized {
            return;
        }

        if let Err(err) = self.start(event_loop) {
            log::error!("initialization failed: {err:#}");
            self.error = Some(err);
            self.set_lifecycle(Lifecycle::Terminated);
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }

        // Continuous redraw; FIFO presentation paces the loop.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        let close_on_escape = self.config.close_on_escape;
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => self.terminate(event_loop, "window close requested"),

            WindowEvent::KeyboardInput { event, .. } => {
                let ev = keymap::key_event(event.physical_key, event.state, event.repeat);
                entry.with_input_state_mut(|input| input.apply_event(&ev));

                if close_on_escape && keymap::is_close_key(&ev) {
                    self.terminate(event_loop, "escape released");
                }
            }

            WindowEvent::Focused(focused) => {
                entry.with_input_state_mut(|input| input.apply_event(&InputEvent::Focused(focused)));
            }

            WindowEvent::Resized(new_size) => {
                log::debug!("resized to {}x{}", new_size.width, new_size.height);
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => match self.redraw() {
                FrameOutcome::Continue => {}
                FrameOutcome::Close => self.terminate(event_loop, "close requested by game"),
                FrameOutcome::Fatal => {
                    self.error = Some(anyhow!("surface is out of memory"));
                    self.terminate(event_loop, "fatal surface error");
                }
            },

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.lifecycle != Lifecycle::Terminated {
            self.entry = None;
            self.set_lifecycle(Lifecycle::Terminated);
        }
    }
}

/// Logical window size as `(width, height)`.
fn logical_size(window: &Window) -> (f32, f32) {
    let logical: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
    (logical.width as f32, logical.height as f32)
}

/// Top-left position that centres `window` on a monitor.
///
/// A window larger than the monitor is pinned to the monitor's origin so
/// its decorations stay reachable.
fn centered_position(
    monitor_pos: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |monitor: u32, window: u32| (monitor.saturating_sub(window) / 2) as i32;
    PhysicalPosition::new(
        monitor_pos.x + offset(monitor_size.width, window.width),
        monitor_pos.y + offset(monitor_size.height, window.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_on_monitor() {
        let pos = centered_position(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(1920, 1080),
            PhysicalSize::new(1440, 900),
        );
        assert_eq!(pos, PhysicalPosition::new(240, 90));
    }

    #[test]
    fn honours_monitor_origin() {
        let pos = centered_position(
            PhysicalPosition::new(1920, -200),
            PhysicalSize::new(2560, 1440),
            PhysicalSize::new(1440, 900),
        );
        assert_eq!(pos, PhysicalPosition::new(1920 + 560, -200 + 270));
    }

    #[test]
    fn oversized_window_pins_to_origin() {
        let pos = centered_position(
            PhysicalPosition::new(100, 50),
            PhysicalSize::new(1280, 720),
            PhysicalSize::new(1440, 900),
        );
        assert_eq!(pos, PhysicalPosition::new(100, 50));
    }

    #[test]
    fn default_config_matches_window_contract() {
        let config = RuntimeConfig::default();
        assert_eq!(config.title, "Window");
        assert_eq!(config.initial_size, LogicalSize::new(1440.0, 900.0));
        assert!(config.resizable);
        assert!(config.close_on_escape);
        assert_eq!(config.clear_color, Color::TRANSPARENT);
    }
}
