#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod render;

pub use render::{frame_size, render_frame, window_title};

use error_iter::ErrorIter as _;
use life_board::{ConfigError, Control, LifeSimulator};
use log::{debug, error};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, KeyEvent, MouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Cursor, CursorIcon, Window, WindowId};

const BACKGROUND_COLOR: Color = Color::BLACK;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration")]
    Config(#[from] ConfigError),
    #[error("event loop failed")]
    EventLoop(#[from] EventLoopError),
    #[error("could not create window")]
    Window(#[from] OsError),
    #[error("could not draw frame")]
    Pixels(#[from] pixels::Error),
    #[error("could not resize drawing surface")]
    Texture(#[from] pixels::TextureError),
}

/// Logs `err` followed by each error in its source chain.
pub fn log_error(err: &Error) {
    error!("{err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

/// Maps a released key to the control action bound to it.
pub fn control_for_key(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Enter | KeyCode::KeyR => Some(Control::Run),
        KeyCode::Space | KeyCode::KeyS => Some(Control::Stop),
        KeyCode::KeyN => Some(Control::Randomize),
        KeyCode::KeyC => Some(Control::Clear),
        _ => None,
    }
}

/// Surface size to resize to, or `None` for a collapsed (minimized) window.
pub fn drawable_surface_size(size: PhysicalSize<u32>) -> Option<(u32, u32)> {
    (size.width > 0 && size.height > 0).then_some((size.width, size.height))
}

/// Opens a window showing `simulator` and runs the event loop until the
/// window closes. The loop sleeps until the simulator's next step deadline
/// while running, and until the next input event otherwise.
pub fn animate(simulator: LifeSimulator) -> Result<(), Error> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(simulator);
    event_loop.run_app(&mut handler)?;
    handler.error.map_or(Ok(()), Err)
}

struct App {
    simulator: LifeSimulator,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    cursor: Option<PhysicalPosition<f64>>,
}

impl App {
    fn new(event_loop: &ActiveEventLoop, simulator: LifeSimulator) -> Result<Self, Error> {
        let (width, height) = frame_size(simulator.size(), simulator.cell_size());
        let window = Arc::new(Self::build_window(event_loop, width, height)?);
        let pixels = Self::build_pixels(&window, width, height)?;
        Ok(Self {
            simulator,
            window,
            pixels,
            cursor: None,
        })
    }

    fn build_window(
        event_loop: &ActiveEventLoop,
        width: u32,
        height: u32,
    ) -> Result<Window, Error> {
        let window_attributes = Window::default_attributes()
            .with_title("Conway's Game of Life")
            .with_cursor(Cursor::Icon(CursorIcon::Crosshair))
            .with_inner_size(LogicalSize::new(width, height))
            .with_min_inner_size(LogicalSize::new(width, height))
            .with_resizable(false)
            .with_visible(false);
        Ok(event_loop.create_window(window_attributes)?)
    }

    fn build_pixels(
        window: &Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        Ok(PixelsBuilder::new(width, height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()?)
    }

    fn on_create(&mut self) {
        self.update_title();
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_time_step(&mut self, now: Instant) {
        if self.simulator.tick(now) {
            self.update_title();
            self.window.request_redraw();
        }
    }

    fn on_control(&mut self, control: Control) {
        let now = Instant::now();
        self.simulator.apply(control, now);
        self.on_time_step(now);
        self.update_title();
        self.window.request_redraw();
    }

    fn on_click(&mut self) {
        let Some(position) = self.cursor else {
            return;
        };
        match self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        {
            Ok((px, py)) => {
                if self.simulator.toggle_at_pixel(px as f64, py as f64).is_some() {
                    self.window.request_redraw();
                }
            }
            Err(_) => debug!("Ignoring click at {position:?} outside the drawing area"),
        }
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) -> Result<(), Error> {
        let Some((width, height)) = drawable_surface_size(size) else {
            debug!("Skipping resize to empty surface {size:?}");
            return Ok(());
        };
        self.pixels.resize_surface(width, height)?;
        self.window.request_redraw();
        Ok(())
    }

    fn on_redraw(&mut self) -> Result<(), Error> {
        let (width, _) = frame_size(self.simulator.size(), self.simulator.cell_size());
        render_frame(
            self.pixels.frame_mut(),
            width,
            self.simulator.cell_size(),
            &self.simulator.live_cells(),
        );
        Ok(self.pixels.render()?)
    }

    fn update_title(&self) {
        self.window.set_title(&window_title(&self.simulator));
    }
}

struct AppEventHandler {
    simulator: Option<LifeSimulator>,
    app: Option<App>,
    error: Option<Error>,
}

impl AppEventHandler {
    fn new(simulator: LifeSimulator) -> Self {
        Self {
            simulator: Some(simulator),
            app: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        self.error.get_or_insert(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for AppEventHandler {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let (StartCause::ResumeTimeReached { .. }, Some(app)) = (cause, self.app.as_mut()) {
            app.on_time_step(Instant::now());
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(simulator) = self.simulator.take() else {
            return;
        };
        match App::new(event_loop, simulator) {
            Ok(mut app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        let result = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                Ok(())
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                match code {
                    KeyCode::Escape | KeyCode::KeyQ => event_loop.exit(),
                    _ => {
                        if let Some(control) = control_for_key(code) {
                            app.on_control(control);
                        }
                    }
                }
                Ok(())
            }
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor = Some(position);
                Ok(())
            }
            WindowEvent::CursorLeft { .. } => {
                app.cursor = None;
                Ok(())
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                app.on_click();
                Ok(())
            }
            WindowEvent::Resized(size) => app.on_resize(size),
            WindowEvent::RedrawRequested => app.on_redraw(),
            _ => Ok(()),
        };
        if let Err(err) = result {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let control_flow = match self.app.as_ref().and_then(|app| app.simulator.next_deadline()) {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
        event_loop.set_control_flow(control_flow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_controls() {
        assert_eq!(control_for_key(KeyCode::Enter), Some(Control::Run));
        assert_eq!(control_for_key(KeyCode::KeyR), Some(Control::Run));
        assert_eq!(control_for_key(KeyCode::Space), Some(Control::Stop));
        assert_eq!(control_for_key(KeyCode::KeyS), Some(Control::Stop));
        assert_eq!(control_for_key(KeyCode::KeyN), Some(Control::Randomize));
        assert_eq!(control_for_key(KeyCode::KeyC), Some(Control::Clear));
        assert_eq!(control_for_key(KeyCode::Escape), None);
        assert_eq!(control_for_key(KeyCode::KeyX), None);
    }

    #[test]
    fn minimized_window_skips_surface_resize() {
        assert_eq!(drawable_surface_size(PhysicalSize::new(0, 0)), None);
        assert_eq!(drawable_surface_size(PhysicalSize::new(800, 0)), None);
        assert_eq!(drawable_surface_size(PhysicalSize::new(0, 600)), None);
        assert_eq!(
            drawable_surface_size(PhysicalSize::new(800, 600)),
            Some((800, 600))
        );
    }

    #[test]
    fn config_errors_keep_their_source() {
        let err = Error::from(ConfigError::ZeroCellSize);
        let chain: Vec<String> = err.sources().map(|source| source.to_string()).collect();
        assert_eq!(
            chain,
            vec![
                "invalid configuration".to_string(),
                "cell size must be at least one pixel".to_string()
            ]
        );
    }
}
