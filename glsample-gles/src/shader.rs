use std::fmt;
use std::rc::Rc;

use crate::gl::Gl;

/// Pass-through vertex shader, no transform applied to `position`
pub const VERTEX_SHADER_SOURCE: &str = "#version 100
attribute vec3 position;
void main() {
    gl_Position = vec4(position, 1.0);
}
";

/// Fragment shader emitting solid red
pub const FRAGMENT_SHADER_SOURCE: &str = "#version 100
void main() {
    gl_FragColor = vec4(1.0, 0.0, 0.0, 1.0);
}
";

/// Upper bound on the characters kept from a driver info log
pub const INFO_LOG_LEN: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "VERTEX",
            ShaderStage::Fragment => "FRAGMENT",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("ERROR::SHADER::{stage}::COMPILATION_FAILED\n{log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("ERROR::SHADER::PROGRAM::LINKING_FAILED\n{log}")]
    Link { log: String },
    #[error("failed to create shader object: {0}")]
    CreateShader(String),
    #[error("failed to create program object: {0}")]
    CreateProgram(String),
}

/// What to do when a stage fails to compile or the program fails to link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShaderPolicy {
    /// report the driver log and keep going with whatever handle we got
    #[default]
    Lenient,
    /// stop at the first failure
    Strict,
}

impl ShaderPolicy {
    fn check(
        self,
        status: Result<(), ShaderError>,
        diagnostics: &mut Vec<ShaderError>,
    ) -> Result<(), ShaderError> {
        match (status, self) {
            (Ok(()), _) => Ok(()),
            (Err(e), ShaderPolicy::Strict) => Err(e),
            (Err(e), ShaderPolicy::Lenient) => {
                tracing::error!("{e}");
                diagnostics.push(e);
                Ok(())
            }
        }
    }
}

fn truncate_log(mut log: String) -> String {
    if let Some((idx, _)) = log.char_indices().nth(INFO_LOG_LEN) {
        log.truncate(idx);
    }
    log
}

/// A single compiled stage. Deleted when dropped.
pub struct CompiledShader<G: Gl> {
    id: G::Shader,
    stage: ShaderStage,
    gl: Rc<G>,
}

impl<G: Gl> CompiledShader<G> {
    /// creates the shader object and compiles `source`. compile errors are reported by [`Self::status`]
    pub fn new(gl: Rc<G>, stage: ShaderStage, source: &str) -> Result<Self, ShaderError> {
        let id = gl
            .create_shader(stage.gl_enum())
            .map_err(ShaderError::CreateShader)?;
        gl.shader_source(id, source);
        gl.compile_shader(id);
        Ok(Self { id, stage, gl })
    }

    pub fn id(&self) -> G::Shader {
        self.id
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn status(&self) -> Result<(), ShaderError> {
        if self.gl.shader_compile_status(self.id) {
            return Ok(());
        }
        Err(ShaderError::Compile {
            stage: self.stage,
            log: truncate_log(self.gl.shader_info_log(self.id)),
        })
    }
}

impl<G: Gl> Drop for CompiledShader<G> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.id);
    }
}

/// Linked shader program. id is the program id.
/// destroys the program when dropped, so keep it alive if you don't want that.
pub struct ShaderProgram<G: Gl> {
    id: G::Program,
    gl: Rc<G>,
}

impl<G: Gl> ShaderProgram<G> {
    /// attaches both stages to a new program and links it. link errors are reported by [`Self::link_status`]
    pub fn link(
        gl: Rc<G>,
        vertex: &CompiledShader<G>,
        fragment: &CompiledShader<G>,
    ) -> Result<Self, ShaderError> {
        let id = gl.create_program().map_err(ShaderError::CreateProgram)?;
        gl.attach_shader(id, vertex.id());
        gl.attach_shader(id, fragment.id());
        gl.link_program(id);
        Ok(Self { id, gl })
    }

    pub fn id(&self) -> G::Program {
        self.id
    }

    pub fn link_status(&self) -> Result<(), ShaderError> {
        if self.gl.program_link_status(self.id) {
            return Ok(());
        }
        Err(ShaderError::Link {
            log: truncate_log(self.gl.program_info_log(self.id)),
        })
    }

    /// makes the program the active one
    pub fn bind(&self) {
        self.gl.use_program(Some(self.id));
    }

    pub fn attrib_location(&self, name: &str) -> Option<u32> {
        self.gl.attrib_location(self.id, name)
    }
}

impl<G: Gl> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        self.gl.delete_program(self.id);
    }
}

/// A program together with the compile/link failures that were tolerated while building it
pub struct ProgramBuild<G: Gl> {
    pub program: ShaderProgram<G>,
    pub diagnostics: Vec<ShaderError>,
}

/// Compiles both stages, links them and deletes the stages again.
///
/// With [`ShaderPolicy::Lenient`] a failed compile or link only lands in
/// [`ProgramBuild::diagnostics`] and the (possibly unusable) program is still returned.
/// Every object created along the way is deleted on all return paths.
pub fn build_program<G: Gl>(
    gl: &Rc<G>,
    vertex_source: &str,
    fragment_source: &str,
    policy: ShaderPolicy,
) -> Result<ProgramBuild<G>, ShaderError> {
    let mut diagnostics = Vec::new();

    let vertex = CompiledShader::new(gl.clone(), ShaderStage::Vertex, vertex_source)?;
    policy.check(vertex.status(), &mut diagnostics)?;

    let fragment = CompiledShader::new(gl.clone(), ShaderStage::Fragment, fragment_source)?;
    policy.check(fragment.status(), &mut diagnostics)?;

    let program = ShaderProgram::link(gl.clone(), &vertex, &fragment)?;
    policy.check(program.link_status(), &mut diagnostics)?;

    drop(vertex);
    drop(fragment);
    Ok(ProgramBuild {
        program,
        diagnostics,
    })
}
