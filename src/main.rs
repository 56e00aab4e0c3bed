//! pointerfx - pointer particle overlay
//!
//! Opens a transparent window and runs the pointer effect in it.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use pointerfx::config::AppConfig;
use pointerfx::input::{InputAction, InputMapper};
use pointerfx::systems::{OverlaySystem, WindowSystem};
use pointerfx_core::{ContentLoader, FrameStatus, PresentError, RonContentSource};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    overlay: Option<OverlaySystem>,
    content: Option<ContentLoader>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let content = config.content.enabled.then(|| {
            log::info!("Loading content from {}", config.content.path);
            ContentLoader::spawn(RonContentSource::new(&config.content.path))
        });

        Self {
            config,
            window: None,
            overlay: None,
            content,
        }
    }

    /// Pick up finished content loads
    fn poll_content(&mut self) {
        let Some(loader) = &mut self.content else {
            return;
        };
        if !loader.poll() {
            return;
        }

        let page = loader.content();
        if let Some(window) = &self.window {
            window.update_title(page.display_name().as_deref());
        }
        if let Some(job) = page.job_title() {
            log::info!("{}", job);
        }
        log::info!("Hero: {}", page.hero_title());
        for item in &page.portfolio {
            log::debug!(
                "[{}] {} ({}) -> {}",
                item.order_index,
                item.title,
                item.year,
                item.link_or_placeholder()
            );
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(overlay) = &mut self.overlay {
            overlay.unmount();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let overlay = OverlaySystem::attach(window.window().clone(), &self.config);
        if overlay.is_active() {
            window.request_redraw();
        }

        self.window = Some(window);
        self.overlay = Some(overlay);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
                return;
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let PhysicalKey::Code(key) = key_event.physical_key {
                    match InputMapper::map_keyboard(key, key_event.state) {
                        Some(InputAction::Exit) => {
                            self.shutdown(event_loop);
                            return;
                        }
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        None => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.poll_content();

                let Some(overlay) = &mut self.overlay else {
                    return;
                };
                let status = overlay.frame();

                if let FrameStatus::Failed(PresentError::OutOfMemory) = status {
                    log::error!("GPU out of memory, exiting");
                    self.shutdown(event_loop);
                    return;
                }
                if status.wants_next_frame() {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
                return;
            }

            _ => {}
        }

        // Pointer and resize events reach the overlay without being consumed
        if let Some(overlay) = &mut self.overlay {
            overlay.handle_window_event(&event);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(overlay) = &mut self.overlay {
            overlay.unmount();
        }
        log::info!("Shutting down");
    }
}

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting pointerfx");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
