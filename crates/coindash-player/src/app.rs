//! Player application implementing winit ApplicationHandler
//!
//! Cursor capture stands in for pointer lock: clicking the window captures
//! the cursor and enables controls, Escape releases it. The simulation keeps
//! ticking either way.

use crate::hud::ConsoleHud;
use anyhow::Result;
use coindash_game::GameSession;
use coindash_runtime::GameClock;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

pub struct PlayerApp {
    session: GameSession,
    clock: GameClock,
    window: Option<Arc<Window>>,
    fullscreen: bool,
    cursor_captured: bool,
}

impl PlayerApp {
    pub fn new(seed: Option<u64>, fullscreen: bool) -> Result<Self> {
        let hud = Box::new(ConsoleHud::new());
        let session = match seed {
            Some(seed) => GameSession::with_seed(seed, hud)?,
            None => GameSession::new(hud)?,
        };

        Ok(Self {
            session,
            clock: GameClock::new(),
            window: None,
            fullscreen,
            cursor_captured: false,
        })
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title("Coindash")
            .with_inner_size(PhysicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        if self.fullscreen {
            window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        self.window = Some(window);
        print_instructions();
        Ok(())
    }

    fn capture_cursor(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        // Try confined first, then locked
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));

        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.cursor_captured = true;
                self.session.activate();
            }
            Err(err) => {
                // Capture failure is non-fatal: show the instructions again
                // and keep simulating without input
                log::warn!("cursor capture failed: {err}");
                print_instructions();
                self.session.deactivate();
            }
        }
    }

    fn release_cursor(&mut self) {
        if let Some(window) = &self.window {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
        self.cursor_captured = false;
        self.session.deactivate();
        print_instructions();
    }

    fn tick(&mut self) {
        self.clock.tick();

        while self.clock.should_fixed_update() {
            let dt = self.clock.fixed_timestep as f32;
            if let Err(err) = self.session.tick(dt) {
                log::error!("simulation tick failed: {err}");
            }
            self.clock.consume_fixed_step();
        }
    }
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.initialize(event_loop) {
                log::error!("window creation failed: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            // Escape releases the cursor; a second press exits
                            if key_code == KeyCode::Escape {
                                if self.cursor_captured {
                                    self.release_cursor();
                                } else {
                                    event_loop.exit();
                                }
                                return;
                            }
                            self.session.input.process_key_down(key_code);
                        }
                        ElementState::Released => {
                            self.session.input.process_key_up(key_code);
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if !self.cursor_captured
                    && state == ElementState::Pressed
                    && button == MouseButton::Left
                {
                    log::info!("requesting cursor capture");
                    self.capture_cursor();
                }
            }

            WindowEvent::RedrawRequested => {
                self.tick();
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if !self.cursor_captured {
            return;
        }

        if let DeviceEvent::MouseMotion { delta } = event {
            self.session.input.process_mouse_raw_delta(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn print_instructions() {
    println!();
    println!("Click the window to capture the mouse and play.");
    println!("  WASD     - Move");
    println!("  Mouse    - Look");
    println!("  Space    - Jump");
    println!("  Escape   - Release cursor / Exit");
}
