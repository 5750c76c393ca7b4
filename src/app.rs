use std::{sync::Arc, time::Instant};

use anyhow::Context;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    asset::FlatBuffers,
    config::ViewerConfig,
    gfx::{
        scene::Scene,
        ui::{panel, UiManager},
        RenderEngine,
    },
};

/// Start maximized when the window would cover at least this share of the monitor
pub const MAXIMIZE_AREA_RATIO: f64 = 0.75;

pub fn should_maximize(window: (u32, u32), monitor: (u32, u32)) -> bool {
    let monitor_area = monitor.0 as f64 * monitor.1 as f64;
    if monitor_area <= 0.0 {
        return false;
    }
    let window_area = window.0 as f64 * window.1 as f64;
    window_area >= MAXIMIZE_AREA_RATIO * monitor_area
}

/// Button or key releases always reach the controller so held state can clear
fn is_release(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::KeyboardInput { event, .. } => event.state == ElementState::Released,
        WindowEvent::MouseInput { state, .. } => *state == ElementState::Released,
        _ => false,
    }
}

pub struct ViewerApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    scene: Scene,
    last_frame: Instant,
    fatal: Option<anyhow::Error>,
}

impl ViewerApp {
    /// Prepares the viewer for an already flattened model
    pub fn new(config: ViewerConfig, buffers: FlatBuffers) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;
        let scene = Scene::new(&config, buffers);

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                ui_manager: None,
                scene,
                last_frame: Instant::now(),
                fatal: None,
            },
        })
    }

    /// Runs the event loop until the window closes
    pub fn run(mut self) -> anyhow::Result<()> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop
            .run_app(&mut self.app_state)
            .context("Event loop terminated abnormally")?;

        match self.app_state.fatal.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let (width, height) = self.config.window_size;
        let attributes = WindowAttributes::default()
            .with_title(self.config.window_title.clone())
            .with_inner_size(LogicalSize::new(width, height));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );

        if let Some(monitor) = window.current_monitor() {
            let outer = window.outer_size();
            let screen = monitor.size();
            if should_maximize((outer.width, outer.height), (screen.width, screen.height)) {
                info!("Window covers most of the screen, maximizing");
                window.set_maximized(true);
            }
        }

        let (width, height) = window.inner_size().into();
        let render_engine = pollster::block_on(RenderEngine::new(
            window.clone(),
            width,
            height,
            self.config.vsync,
        ))?;

        self.scene.upload(render_engine.device());

        let ui_manager = UiManager::new(
            render_engine.device(),
            render_engine.queue(),
            render_engine.surface_format(),
            &window,
        );

        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(render_engine);
        self.window = Some(window);
        self.last_frame = Instant::now();
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let AppState {
            window,
            render_engine,
            ui_manager,
            scene,
            last_frame,
            fatal,
            ..
        } = self;
        let (Some(window), Some(render_engine)) = (window.as_ref(), render_engine.as_mut()) else {
            return;
        };

        let now = Instant::now();
        scene.update((now - *last_frame).as_secs_f32());
        *last_frame = now;

        if let Some(ui_manager) = ui_manager.as_mut() {
            ui_manager.update_logic(window, |ui| panel::control_panel(ui, scene));
        }

        render_engine.update(scene.globals());

        let result = render_engine.render_frame(scene, |device, queue, encoder, view| {
            if let Some(ui_manager) = ui_manager.as_mut() {
                ui_manager.render_display_only(device, queue, encoder, view);
            }
        });

        if let Some(ui_manager) = ui_manager.as_mut() {
            ui_manager.discard_frame();
        }

        if let Err(e) = result {
            error!("Rendering failed: {}", e);
            *fatal = Some(anyhow::Error::new(e).context("Failed to render frame"));
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_graphics(event_loop) {
            error!("{:#}", e);
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        let captured = match self.ui_manager.as_mut() {
            Some(ui_manager) => ui_manager.handle_input(&window, window_id, &event),
            None => false,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {
                if !captured || is_release(&event) {
                    let scene = &mut self.scene;
                    scene.controller.process_window_event(&event, &mut scene.view);
                }
            }
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let Some(ui_manager) = self.ui_manager.as_ref() {
            if ui_manager.wants_mouse() && !self.scene.controller.is_rotating() {
                return;
            }
        }

        let scene = &mut self.scene;
        scene.controller.process_device_event(&event, &mut scene.view);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.fatal.is_none() {
            info!("Viewer closed");
        } else {
            warn!("Viewer exiting after an error");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_maximize() {
        assert!(should_maximize((1920, 1080), (1920, 1080)));
        assert!(should_maximize((1700, 950), (1920, 1080)));
        assert!(!should_maximize((900, 600), (1920, 1080)));
        assert!(!should_maximize((900, 600), (0, 0)));
    }
}
