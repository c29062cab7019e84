//! Native window host (winit + pixels)
//!
//! winit owns the event pump, so instead of `GameLoop::run` the host calls
//! `GameLoop::tick` once per `MainEventsCleared` and sleeps for the returned
//! budget on the same thread.

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

use crate::engine::{GameLoop, Sleeper, ThreadSleeper};
use crate::renderer::{FrameBuffer, Renderer};
use crate::sim::{DeskCollision, Key, KeyState};
use crate::{EngineError, GameConfig};

/// Map a physical key to a game key
pub fn map_key(code: VirtualKeyCode) -> Option<Key> {
    match code {
        VirtualKeyCode::Up => Some(Key::Up),
        VirtualKeyCode::Down => Some(Key::Down),
        VirtualKeyCode::Left => Some(Key::Left),
        VirtualKeyCode::Right => Some(Key::Right),
        VirtualKeyCode::W => Some(Key::W),
        VirtualKeyCode::A => Some(Key::A),
        VirtualKeyCode::S => Some(Key::S),
        VirtualKeyCode::D => Some(Key::D),
        _ => None,
    }
}

struct PixelsRenderer<'w> {
    window: &'w Window,
    pixels: Pixels,
}

impl Renderer for PixelsRenderer<'_> {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), EngineError> {
        let bytes = frame.as_bytes();
        let target = self.pixels.frame_mut();
        if target.len() != bytes.len() {
            return Err(EngineError::Present(format!(
                "surface holds {} bytes, frame has {}",
                target.len(),
                bytes.len()
            )));
        }
        target.copy_from_slice(bytes);
        self.pixels
            .render()
            .map_err(|err| EngineError::Present(err.to_string()))
    }

    fn hide(&mut self) {
        self.window.set_visible(false);
    }
}

/// Open the window and run the desk game until it is closed
pub fn run(config: &GameConfig) -> Result<(), EngineError> {
    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(|err| EngineError::Window(err.to_string()))?;

    let size = window.inner_size();
    let surface = SurfaceTexture::new(size.width, size.height, &window);
    let pixels = Pixels::new(config.width, config.height, surface)
        .map_err(|err| EngineError::Window(err.to_string()))?;
    let mut renderer = PixelsRenderer {
        window: &window,
        pixels,
    };

    let mut game = GameLoop::new(DeskCollision, config);
    let run_flag = game.run_flag();
    let mut keys = KeyState::new();
    let mut sleeper = ThreadSleeper;
    game.start();

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => run_flag.stop(),
                // Key-up events are not delivered while unfocused
                WindowEvent::Focused(false) => keys.clear(),
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(code),
                            ..
                        },
                    ..
                } => {
                    if let Some(key) = map_key(code) {
                        keys.set(key, state == ElementState::Pressed);
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if game.is_running() {
                    let pause = game.tick(&keys, &mut renderer);
                    if let Err(err) = sleeper.sleep(pause) {
                        log::warn!("{err}; continuing");
                    }
                } else {
                    game.finish(&mut renderer);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    Ok(())
}
