use glfw::{Context as _, Glfw, GlfwReceiver, PWindow, WindowEvent};

use crate::AppError;

/// Window configuration. lightweight and Copy, only the title varies between callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// framebuffer width in pixels
    pub width: u32,
    /// framebuffer height in pixels
    pub height: u32,
    pub title: &'static str,
    pub resizable: bool,
    pub gl_es_major: u32,
    pub gl_es_minor: u32,
}

impl WindowConfig {
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const RESIZABLE: bool = false;
    pub const GL_ES_VERSION_MAJOR: u32 = 2;
    pub const GL_ES_VERSION_MINOR: u32 = 0;

    /// fixed 800x600 non-resizable GL ES 2.0 window with the given title
    pub fn new(title: &'static str) -> Self {
        Self {
            width: Self::WINDOW_WIDTH,
            height: Self::WINDOW_HEIGHT,
            title,
            resizable: Self::RESIZABLE,
            gl_es_major: Self::GL_ES_VERSION_MAJOR,
            gl_es_minor: Self::GL_ES_VERSION_MINOR,
        }
    }
}

/// glfw error callback. only logs, failures surface through the `Option`/`Result` of the failing call
pub fn log_glfw_error(error: glfw::Error, description: String) {
    tracing::error!(?error, "glfw error: {description}");
}

/// The presentation side of the render loop
pub trait Surface {
    fn should_close(&self) -> bool;
    fn poll_events(&mut self);
    fn swap_buffers(&mut self);
}

/// GLFW window with a current OpenGL ES context
pub struct GlfwSurface {
    window: PWindow,
    events: GlfwReceiver<(f64, WindowEvent)>,
    glfw: Glfw,
}

impl GlfwSurface {
    fn set_window_hints(glfw: &mut Glfw, config: &WindowConfig) {
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGlEs));
        glfw.window_hint(glfw::WindowHint::ContextVersion(
            config.gl_es_major,
            config.gl_es_minor,
        ));
        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));
    }

    /// creates the window, makes its context current and loads the gl functions through it
    pub fn create(config: &WindowConfig) -> Result<(GlfwSurface, glow::Context), AppError> {
        let mut glfw = glfw::init(log_glfw_error).map_err(AppError::GlfwInit)?;

        Self::set_window_hints(&mut glfw, config);

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(AppError::WindowCreation)?;
        window.make_current();
        window.set_close_polling(true);

        let gl = unsafe {
            glow::Context::from_loader_function(|s| window.get_proc_address(s) as *const _)
        };
        tracing::info!(
            width = config.width,
            height = config.height,
            title = config.title,
            "window created"
        );

        Ok((
            GlfwSurface {
                window,
                events,
                glfw,
            },
            gl,
        ))
    }
}

impl Surface for GlfwSurface {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            tracing::trace!(?event, "window event");
        }
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}
