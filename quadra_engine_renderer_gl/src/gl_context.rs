/// GlContext - window surface and current OpenGL context

use std::num::NonZeroU32;
use std::sync::Arc;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use quadra_engine::quadra::{Error, Result};
use quadra_engine::{engine_info, engine_warn, engine_error, engine_err};

/// Window surface plus the context made current on it
///
/// Not `Send`: the current context is tied to the thread that created it,
/// so the application keeps this next to the window on the main thread.
/// The renderer and its resources only share the loaded function pointers.
pub struct GlContext {
    /// Loaded OpenGL function pointers, handed out through `gl()`
    gl: Arc<glow::Context>,
    /// Window surface the context draws to
    surface: Surface<WindowSurface>,
    /// The context, current for the lifetime of this object
    context: PossiblyCurrentContext,
}

impl GlContext {
    /// Create the window and make an OpenGL context current on it
    ///
    /// Returns the window together with the context so the application
    /// can keep driving the event loop with both.
    pub fn new(
        event_loop: &ActiveEventLoop,
        window_attributes: WindowAttributes,
    ) -> Result<(Window, GlContext)> {
        // 1. Create the window and pick a framebuffer config for it
        let template = ConfigTemplateBuilder::new();
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes))
            .build(event_loop, template, pick_gl_config)
            .map_err(|e| {
                engine_error!("quadra::gl", "Failed to create window and GL display: {}", e);
                Error::InitializationFailed(format!("Failed to create window and GL display: {}", e))
            })?;
        let window = window.ok_or_else(|| {
            engine_error!("quadra::gl", "Display builder returned no window");
            Error::InitializationFailed("Display builder returned no window".to_string())
        })?;

        engine_info!(
            "quadra::gl",
            "Picked a GL config with {} samples",
            gl_config.num_samples()
        );

        let gl_display = gl_config.display();

        // 2. Create the context, preferring desktop GL with a GLES fallback
        let raw_window_handle = window
            .window_handle()
            .map_err(|e| {
                engine_error!("quadra::gl", "Failed to get window handle: {}", e);
                Error::InitializationFailed(format!("Failed to get window handle: {}", e))
            })?
            .as_raw();

        let context_attributes = ContextAttributesBuilder::new().build(Some(raw_window_handle));
        let fallback_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(None))
            .build(Some(raw_window_handle));

        let not_current = unsafe {
            gl_display
                .create_context(&gl_config, &context_attributes)
                .or_else(|_| {
                    engine_warn!("quadra::gl", "Desktop GL context unavailable, falling back to GLES");
                    gl_display.create_context(&gl_config, &fallback_attributes)
                })
                .map_err(|e| {
                    engine_error!("quadra::gl", "Failed to create GL context: {}", e);
                    Error::InitializationFailed(format!("Failed to create GL context: {}", e))
                })?
        };

        // 3. Create the surface and make the context current on it
        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| {
                engine_error!("quadra::gl", "Failed to build surface attributes: {}", e);
                Error::InitializationFailed(format!("Failed to build surface attributes: {}", e))
            })?;

        let surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &surface_attributes)
                .map_err(|e| {
                    engine_error!("quadra::gl", "Failed to create window surface: {}", e);
                    Error::InitializationFailed(format!("Failed to create window surface: {}", e))
                })?
        };

        let context = not_current.make_current(&surface).map_err(|e| {
            engine_error!("quadra::gl", "Failed to make GL context current: {}", e);
            Error::InitializationFailed(format!("Failed to make GL context current: {}", e))
        })?;

        // 4. Load function pointers and enable vsync
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s))
        };

        if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
            engine_warn!("quadra::gl", "Failed to enable vsync: {}", e);
        }

        Ok((
            window,
            GlContext {
                gl: Arc::new(gl),
                surface,
                context,
            },
        ))
    }

    /// Function-pointer table, shared with the renderer and its resources
    pub fn gl(&self) -> Arc<glow::Context> {
        Arc::clone(&self.gl)
    }

    /// Resize the surface after the window changed size
    pub fn resize(&self, width: NonZeroU32, height: NonZeroU32) {
        self.surface.resize(&self.context, width, height);
    }

    /// Present the back buffer
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| engine_err!("quadra::gl", "Failed to swap buffers: {}", e))
    }
}

/// Prefer the config with the most samples
///
/// The iterator only yields configs matching the template, and glutin
/// guarantees at least one.
fn pick_gl_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, next| {
            if next.num_samples() > best.num_samples() {
                next
            } else {
                best
            }
        })
        .expect("at least one matching GL config")
}
