use std::sync::Arc;

use log::{debug, error, info, warn};
use tessera_assets::{DirectorySource, GlyphLoader, LayoutBuilder};
use tessera_core::{InputState, TimeClock};
use tessera_renderer::PatchStyle;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::config::AppConfig;
use crate::controls::LayoutControls;
use crate::graphics::GraphicsState;

/// Frames between two frame-rate log lines.
const STATS_INTERVAL: u64 = 600;

struct Runner {
    config: AppConfig,
    window: Option<Arc<Window>>,
    graphics: Option<GraphicsState>,
    input: InputState,
    controls: LayoutControls,
    layout: LayoutBuilder<DirectorySource>,
    clock: TimeClock,
    /// first fatal error; reported by `run_internal` after the loop exits
    failure: Option<anyhow::Error>,
}

impl Runner {
    fn new(config: AppConfig) -> Self {
        let source = DirectorySource::new(config.glyph_prefix.clone());
        let loader = if config.cache_glyphs {
            GlyphLoader::cached(source)
        } else {
            GlyphLoader::new(source)
        };

        Self {
            controls: LayoutControls::new(config.scale, config.translate, config.step),
            layout: LayoutBuilder::new(loader),
            config,
            window: None,
            graphics: None,
            input: InputState::new(),
            clock: TimeClock::new(),
            failure: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = Arc::new(event_loop.create_window(attributes)?);
        let size = window.inner_size();

        let style = PatchStyle::new(self.config.color, self.config.segments);
        let mut gfx = pollster::block_on(GraphicsState::new(
            window.clone(),
            size.width,
            size.height,
            self.config.vsync,
            style,
        ))?;
        let [r, g, b, a] = self.config.background.map(f64::from);
        gfx.renderer.set_clear_color(wgpu::Color { r, g, b, a });

        info!(
            "rendering {:?} from {}<code>",
            self.config.text, self.config.glyph_prefix
        );

        window.request_redraw();
        self.window = Some(window);
        self.graphics = Some(gfx);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{err:#}");
        self.failure.get_or_insert(err);
        event_loop.exit();
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key) = event.physical_key {
            self.input
                .update_key(key, event.state == ElementState::Pressed, event.repeat);
        }
    }

    /// One frame: apply queued key presses, rebuild the patch buffer from the
    /// current parameters, upload it and draw.
    fn redraw(&mut self) -> anyhow::Result<()> {
        let Some(gfx) = &mut self.graphics else {
            return Ok(());
        };
        let time = self.clock.tick();

        if self.controls.apply_keys(self.input.drain_presses()) {
            debug!(
                "scale {:.2}, translate {:.2}",
                self.controls.scale, self.controls.translate
            );
        }

        let buffer = self.layout.build(
            &self.config.text,
            self.controls.scale,
            self.controls.translate,
        );
        gfx.renderer.upload(&buffer);

        let frame = match gfx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gfx.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                anyhow::bail!("surface out of memory");
            }
            Err(e) => {
                warn!("skipping frame: {e}");
                return Ok(());
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gfx.renderer.begin_frame();
        gfx.renderer.render_to_view(&mut encoder, &view);
        gfx.renderer.context.queue.submit(Some(encoder.finish()));
        frame.present();

        if time.frame_count % STATS_INTERVAL == 0 {
            debug!(
                "frame {}: {:.0} fps, {} patches",
                time.frame_count,
                time.fps,
                buffer.patches()
            );
        }
        Ok(())
    }
}

impl ApplicationHandler for Runner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        if let Err(err) = self.init_graphics(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gfx) = &mut self.graphics {
                    gfx.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!(
            "exiting after {:.1}s, {} glyph outlines cached",
            self.clock.uptime().as_secs_f32(),
            self.layout.loader().cached_len()
        );
    }
}

pub(crate) fn run_internal(config: AppConfig) -> anyhow::Result<()> {
    let mut runner = Runner::new(config);
    let event_loop = EventLoop::new()?;
    // redraws are requested continuously from `about_to_wait`
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut runner)?;
    match runner.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
