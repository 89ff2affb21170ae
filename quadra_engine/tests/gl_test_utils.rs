#![allow(dead_code)]
//! GPU test utilities - event-loop harness for OpenGL integration tests
//!
//! glutin needs an active event loop to create a context, and a GL context
//! is current on exactly one thread. Each test therefore spins up its own
//! short-lived event loop and runs its body inside it.
//!
//! # Why per-test event loops?
//!
//! A context made current on one test thread cannot be touched from another,
//! so one global renderer shared across the whole test binary is not an
//! option here. X11 and Windows allow event loop creation off the main
//! thread with `any_thread`, which keeps plain `cargo test` working.

use quadra_engine::quadra::render::Config;
use quadra_engine_renderer_gl::{GlContext, GlRenderer};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::run_on_demand::EventLoopExtRunOnDemand;
use winit::window::{Window, WindowId};

/// Runs the test body as soon as the event loop is active, then exits it
struct HeadlessApp<F: FnOnce(&ActiveEventLoop)> {
    body: Option<F>,
}

impl<F: FnOnce(&ActiveEventLoop)> ApplicationHandler for HeadlessApp<F> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(body) = self.body.take() {
            body(event_loop);
        }
        event_loop.exit();
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        _event: WindowEvent,
    ) {
    }
}

/// Run a test body on an active event loop, as required for GL bring-up
pub fn run_on_event_loop<F: FnOnce(&ActiveEventLoop)>(body: F) {
    let mut builder = EventLoop::builder();

    // Tests run off the main thread
    #[cfg(target_os = "linux")]
    {
        use winit::platform::x11::EventLoopBuilderExtX11;
        builder.with_any_thread(true);
    }
    #[cfg(target_os = "windows")]
    {
        use winit::platform::windows::EventLoopBuilderExtWindows;
        builder.with_any_thread(true);
    }

    let mut event_loop = builder.build().unwrap();
    let mut app = HeadlessApp { body: Some(body) };
    event_loop.run_app_on_demand(&mut app).unwrap();
}

/// Create a hidden test window with a GL context and renderer on it
pub fn create_test_renderer(event_loop: &ActiveEventLoop) -> (Window, GlContext, GlRenderer) {
    let window_attrs = Window::default_attributes()
        .with_title("GPU Test Window")
        .with_inner_size(winit::dpi::LogicalSize::new(800, 600))
        .with_visible(false); // Hidden window for tests

    let (window, context) = GlContext::new(event_loop, window_attrs)
        .expect("Failed to create GL context for tests");
    let renderer = GlRenderer::new(context.gl(), &Config::default())
        .expect("Failed to create GlRenderer for tests");

    (window, context, renderer)
}
