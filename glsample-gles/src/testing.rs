//! Recording fakes for the gl and surface seams.
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::gl::Gl;
use crate::window::Surface;

/// Every state-changing call the fakes observed, in order. Queries are not recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader { stage: u32, id: u32 },
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateBuffer(u32),
    BindBuffer(u32, Option<u32>),
    BufferData { target: u32, len: usize, usage: u32 },
    VertexAttribPointer {
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    DeleteBuffer(u32),
    ClearColor([f32; 4]),
    Viewport(i32, i32, i32, i32),
    Clear(u32),
    DrawArrays(u32, i32, i32),
    PollEvents,
    SwapBuffers,
    DestroySurface,
}

/// A gl that "compiles" any source containing `void main()` and links
/// whenever all attached stages compiled, unless told otherwise.
/// A stage set with [`FakeGl::fail_compiles`] never compiles, whatever its source.
#[derive(Default)]
pub struct FakeGl {
    next_id: Cell<u32>,
    calls: RefCell<Vec<Call>>,
    stages: RefCell<HashMap<u32, u32>>,
    sources: RefCell<HashMap<u32, String>>,
    compiled: RefCell<HashMap<u32, bool>>,
    attached: RefCell<HashMap<u32, Vec<u32>>>,
    linked: RefCell<HashMap<u32, bool>>,
    fail_links: Cell<bool>,
    failing_stage: Cell<Option<u32>>,
}

impl FakeGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_links(&self) {
        self.fail_links.set(true);
    }

    pub fn fail_compiles(&self, stage: u32) {
        self.failing_stage.set(Some(stage));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn is_linked(&self, program: u32) -> bool {
        self.linked.borrow().get(&program).copied().unwrap_or(false)
    }
}

impl Gl for FakeGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;

    fn create_shader(&self, stage: u32) -> Result<u32, String> {
        let id = self.next_id();
        self.stages.borrow_mut().insert(id, stage);
        self.record(Call::CreateShader { stage, id });
        Ok(id)
    }
    fn shader_source(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_owned());
        self.record(Call::ShaderSource(shader));
    }
    fn compile_shader(&self, shader: u32) {
        let stage = self.stages.borrow().get(&shader).copied();
        let ok = stage.is_some()
            && stage != self.failing_stage.get()
            && self
                .sources
                .borrow()
                .get(&shader)
                .is_some_and(|s| s.contains("void main()"));
        self.compiled.borrow_mut().insert(shader, ok);
        self.record(Call::CompileShader(shader));
    }
    fn shader_compile_status(&self, shader: u32) -> bool {
        self.compiled.borrow().get(&shader).copied().unwrap_or(false)
    }
    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "0:1: S0001: 'main' function undefined".to_owned()
        }
    }
    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.next_id();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }
    fn attach_shader(&self, program: u32, shader: u32) {
        self.attached
            .borrow_mut()
            .entry(program)
            .or_default()
            .push(shader);
        self.record(Call::AttachShader(program, shader));
    }
    fn link_program(&self, program: u32) {
        let stages_ok = self
            .attached
            .borrow()
            .get(&program)
            .is_some_and(|stages| stages.iter().all(|s| self.shader_compile_status(*s)));
        let ok = stages_ok && !self.fail_links.get();
        self.linked.borrow_mut().insert(program, ok);
        self.record(Call::LinkProgram(program));
    }
    fn program_link_status(&self, program: u32) -> bool {
        self.is_linked(program)
    }
    fn program_info_log(&self, program: u32) -> String {
        if self.is_linked(program) {
            String::new()
        } else {
            "error: program could not be linked".to_owned()
        }
    }
    fn attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        (self.is_linked(program) && name == "position").then_some(0)
    }
    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }
    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let id = self.next_id();
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }
    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(Call::BindBuffer(target, buffer));
    }
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        self.record(Call::BufferData {
            target,
            len: data.len(),
            usage,
        });
    }
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(Call::VertexAttribPointer {
            index,
            size,
            normalized,
            stride,
            offset,
        });
    }
    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }
    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(Call::ClearColor([red, green, blue, alpha]));
    }
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }
    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }
    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(Call::DrawArrays(mode, first, count));
    }
    fn parameter_string(&self, parameter: u32) -> String {
        match parameter {
            glow::VENDOR => "fake vendor",
            glow::VERSION => "OpenGL ES 2.0 fake",
            glow::RENDERER => "fake renderer",
            glow::SHADING_LANGUAGE_VERSION => "OpenGL ES GLSL ES 1.00",
            _ => "",
        }
        .to_owned()
    }
}

/// Reports "should close" after `close_after` polls
pub struct FakeSurface {
    gl: Rc<FakeGl>,
    close_after: u32,
    polls: u32,
}

impl FakeSurface {
    pub fn new(gl: Rc<FakeGl>, close_after: u32) -> Self {
        Self {
            gl,
            close_after,
            polls: 0,
        }
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }
}

impl Surface for FakeSurface {
    fn should_close(&self) -> bool {
        self.polls >= self.close_after
    }

    fn poll_events(&mut self) {
        self.polls += 1;
        self.gl.record(Call::PollEvents);
    }

    fn swap_buffers(&mut self) {
        self.gl.record(Call::SwapBuffers);
    }
}

impl Drop for FakeSurface {
    fn drop(&mut self) {
        self.gl.record(Call::DestroySurface);
    }
}
