/// OpenGL ES 2.0 triangle sample
///
/// Opens a window, builds a fixed shader program, uploads one triangle and
/// redraws it every frame until the window is closed.
use std::io::{self, Write};
use std::rc::Rc;

use glsample_core::Triangle;
use tracing::{debug, info, warn};

pub mod buffer;
pub mod gl;
pub mod shader;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use buffer::{BufferError, VertexAttribute, VertexBuffer};
pub use gl::{DriverInfo, Gl};
pub use shader::{build_program, ShaderError, ShaderPolicy, ShaderProgram};
pub use window::{GlfwSurface, Surface, WindowConfig};

/// Name of the vertex attribute fed from the vertex buffer
pub const POSITION_ATTRIBUTE: &str = "position";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to initialize glfw: {0:?}")]
    GlfwInit(glfw::InitError),
    #[error("failed to create glfw window")]
    WindowCreation,
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error("failed to write to stdout: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Uninitialized,
    Running,
    Terminated,
}

/// Owns everything the sample draws with.
///
/// Fields drop in declaration order: the buffer and program are deleted
/// before the surface tears down the context they live in.
pub struct TriangleApp<G: Gl, S: Surface> {
    vertex_buffer: VertexBuffer<G>,
    program: ShaderProgram<G>,
    gl: Rc<G>,
    surface: S,
    vertex_count: i32,
    state: AppState,
    frames: u64,
}

impl<G: Gl, S: Surface> TriangleApp<G, S> {
    /// Sets up the program and vertex data. Driver strings and any shader
    /// diagnostics are written to `out`.
    pub fn new<W: Write>(
        gl: Rc<G>,
        surface: S,
        config: &WindowConfig,
        policy: ShaderPolicy,
        out: &mut W,
    ) -> Result<Self, AppError> {
        let info = DriverInfo::query(gl.as_ref());
        debug!(?info, "driver");
        writeln!(out, "{info}")?;

        let build = build_program(
            &gl,
            shader::VERTEX_SHADER_SOURCE,
            shader::FRAGMENT_SHADER_SOURCE,
            policy,
        )?;
        for diagnostic in &build.diagnostics {
            writeln!(out, "{diagnostic}")?;
        }
        let program = build.program;
        let position = program.attrib_location(POSITION_ATTRIBUTE);

        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.viewport(0, 0, config.width as i32, config.height as i32);

        let positions = Triangle::sample().positions();
        let vertex_buffer = VertexBuffer::with_data(gl.clone(), &positions)?;
        match position {
            Some(index) => VertexAttribute::vec3(index).enable(gl.as_ref()),
            None => warn!(
                attribute = POSITION_ATTRIBUTE,
                "attribute not found in program, skipping vertex layout"
            ),
        }
        vertex_buffer.unbind();

        Ok(Self {
            vertex_count: (vertex_buffer.len() / 3) as i32,
            vertex_buffer,
            program,
            gl,
            surface,
            state: AppState::Uninitialized,
            frames: 0,
        })
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Polls, clears, draws and presents until the surface asks to close.
    /// Does nothing once the app has terminated.
    pub fn run(&mut self) {
        if self.state == AppState::Terminated {
            return;
        }
        self.state = AppState::Running;
        info!("entering render loop");

        while !self.surface.should_close() {
            self.surface.poll_events();
            self.render();
            self.surface.swap_buffers();
            self.frames += 1;
        }

        self.state = AppState::Terminated;
        info!(frames = self.frames, "window closed");
    }

    fn render(&self) {
        self.gl.clear(glow::COLOR_BUFFER_BIT);
        self.program.bind();
        self.gl.draw_arrays(glow::TRIANGLES, 0, self.vertex_count);
    }
}

/// Runs the sample in a GLFW window, printing to stdout
pub fn run(config: &WindowConfig, policy: ShaderPolicy) -> Result<(), AppError> {
    let (surface, gl) = GlfwSurface::create(config)?;
    let mut stdout = io::stdout().lock();
    let mut app = TriangleApp::new(Rc::new(gl), surface, config, policy, &mut stdout)?;
    stdout.flush()?;
    app.run();
    Ok(())
}
