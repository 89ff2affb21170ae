//! Quadra demo - a quad in a "Hello World" window
//!
//! Minimal bring-up application for the engine: one 640x480 window, one
//! OpenGL renderer behind the engine singleton, and one quad drawn every
//! frame from a two-stage shader file.

use std::num::NonZeroU32;
use std::sync::Arc;

use quadra_engine::quadra::render::{
    Buffer, BufferDesc, BufferUsage, ClearFlags, Config, IndexType,
    PrimitiveTopology, ShaderProgram, ShaderProgramDesc, VertexLayout, Viewport,
};
use quadra_engine::quadra::resource::{
    parse_shader_file, quad_index_data, quad_vertex_data, quad_vertex_layout,
    QUAD_INDICES,
};
use quadra_engine::quadra::{Engine, Result};
use quadra_engine::{engine_debug, engine_error, engine_info, engine_warn};
use quadra_engine_renderer_gl::{print_error_check_stats_report, GlContext, GlRenderer};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Shader file with both stages of the quad program
const SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/res/shaders/Basic.shader");

/// GPU resources for the quad, dropped before the context on exit
struct QuadScene {
    vertex_buffer: Arc<dyn Buffer>,
    index_buffer: Arc<dyn Buffer>,
    program: Arc<dyn ShaderProgram>,
    layout: VertexLayout,
}

/// Application state driven by the winit event loop
struct DemoApp {
    /// Window, kept alive for the surface bound to it
    window: Option<Window>,
    /// Surface and current GL context (main thread only)
    context: Option<GlContext>,
    /// Uploaded quad resources
    scene: Option<QuadScene>,
    /// Current framebuffer size
    size: (u32, u32),
    /// Window or context bring-up failed; main exits with -1
    startup_failed: bool,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            window: None,
            context: None,
            scene: None,
            size: (640, 480),
            startup_failed: false,
        }
    }

    /// Bring up the window, the renderer and the quad resources
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        // 1. Window and GL context
        let window_attrs = Window::default_attributes()
            .with_title("Hello World")
            .with_inner_size(LogicalSize::new(640, 480));
        let (window, context) = GlContext::new(event_loop, window_attrs)?;

        // 2. Renderer behind the engine singleton
        let renderer = GlRenderer::new(
            context.gl(),
            &Config {
                app_name: "Quadra Demo".to_string(),
                ..Config::default()
            },
        )?;
        Engine::create_renderer(renderer)?;
        let engine_renderer = Engine::renderer()?;
        let mut guard = engine_renderer.lock().unwrap();

        // 3. Quad geometry
        let vertex_buffer = guard.create_buffer(BufferDesc {
            size: quad_vertex_data().len() as u64,
            usage: BufferUsage::Vertex,
        })?;
        vertex_buffer.update(0, quad_vertex_data())?;

        let index_buffer = guard.create_buffer(BufferDesc {
            size: quad_index_data().len() as u64,
            usage: BufferUsage::Index,
        })?;
        index_buffer.update(0, quad_index_data())?;

        // 4. Shader program from the two-stage source file
        let sources = parse_shader_file(SHADER_PATH);
        engine_debug!("quadra::demo", "Vertex source:\n{}", sources.vertex);
        engine_debug!("quadra::demo", "Fragment source:\n{}", sources.fragment);

        let program = guard.create_shader_program(ShaderProgramDesc {
            vertex_source: &sources.vertex,
            fragment_source: &sources.fragment,
        })?;

        drop(guard);

        let size = window.inner_size();
        self.size = (size.width, size.height);
        self.window = Some(window);
        self.context = Some(context);
        self.scene = Some(QuadScene {
            vertex_buffer,
            index_buffer,
            program,
            layout: quad_vertex_layout(),
        });

        engine_info!("quadra::demo", "Startup complete");
        Ok(())
    }

    /// Record, submit and present one frame
    fn render_frame(&mut self) -> Result<()> {
        let (Some(scene), Some(context)) = (&self.scene, &self.context) else {
            return Ok(());
        };

        let engine_renderer = Engine::renderer()?;
        let guard = engine_renderer.lock().unwrap();

        let mut cmd_list = guard.create_command_list()?;
        cmd_list.begin()?;
        cmd_list.clear(ClearFlags::COLOR, [0.0, 0.0, 0.0, 1.0])?;
        cmd_list.set_viewport(Viewport {
            x: 0.0,
            y: 0.0,
            width: self.size.0 as f32,
            height: self.size.1 as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        })?;
        cmd_list.bind_shader_program(&scene.program)?;
        cmd_list.bind_vertex_buffer(&scene.vertex_buffer, &scene.layout)?;
        cmd_list.bind_index_buffer(&scene.index_buffer, IndexType::U32)?;
        cmd_list.draw_indexed(PrimitiveTopology::TriangleList, QUAD_INDICES.len() as u32, 0)?;
        cmd_list.end()?;

        guard.submit(&[cmd_list.as_ref()])?;

        context.swap_buffers()?;
        Ok(())
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.start(event_loop) {
            engine_error!("quadra::demo", "Startup failed: {}", err);
            self.startup_failed = true;
            event_loop.exit();
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

            WindowEvent::Resized(new_size) => {
                self.size = (new_size.width, new_size.height);

                // Zero sizes arrive while minimized; the surface keeps its
                // old dimensions until a real size shows up.
                if let Some(context) = &self.context {
                    if let (Some(width), Some(height)) =
                        (NonZeroU32::new(new_size.width), NonZeroU32::new(new_size.height))
                    {
                        context.resize(width, height);
                    }
                }

                if let Ok(renderer) = Engine::renderer() {
                    renderer.lock().unwrap().resize(new_size.width, new_size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.render_frame() {
                    engine_error!("quadra::demo", "Frame failed: {}", err);
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Continuous rendering, paced by the vsync'd swap
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // GL resources must be released before the context they live on
        self.scene = None;
        if let Err(err) = Engine::destroy_renderer() {
            engine_warn!("quadra::demo", "Renderer teardown failed: {}", err);
        }

        print_error_check_stats_report();

        self.context = None;
        self.window = None;
    }
}

fn main() {
    // Engine first so every later failure is logged
    if let Err(err) = Engine::initialize() {
        eprintln!("Engine initialization failed: {}", err);
        std::process::exit(-1);
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            engine_error!("quadra::demo", "Failed to create event loop: {}", err);
            std::process::exit(-1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new();
    if let Err(err) = event_loop.run_app(&mut app) {
        engine_error!("quadra::demo", "Event loop error: {}", err);
        std::process::exit(-1);
    }

    Engine::shutdown();

    if app.startup_failed {
        std::process::exit(-1);
    }
}
