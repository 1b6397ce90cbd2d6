use std::rc::Rc;

use crate::gl::Gl;

#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("failed to create buffer object: {0}")]
    Create(String),
}

/// This struct wraps a gpu array buffer holding `f32` vertex data. Deleted when dropped.
pub struct VertexBuffer<G: Gl> {
    id: G::Buffer,
    len: usize,
    gl: Rc<G>,
}

impl<G: Gl> VertexBuffer<G> {
    /// creates the buffer and uploads `data` with `STATIC_DRAW`. leaves the buffer bound to `ARRAY_BUFFER`.
    pub fn with_data(gl: Rc<G>, data: &[f32]) -> Result<Self, BufferError> {
        let id = gl.create_buffer().map_err(BufferError::Create)?;
        let buffer = Self {
            id,
            len: data.len(),
            gl,
        };
        buffer.bind();
        buffer.gl.buffer_data(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(data),
            glow::STATIC_DRAW,
        );
        Ok(buffer)
    }

    pub fn id(&self) -> G::Buffer {
        self.id
    }

    /// number of floats uploaded
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bind(&self) {
        self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.id));
    }

    pub fn unbind(&self) {
        self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
    }
}

impl<G: Gl> Drop for VertexBuffer<G> {
    fn drop(&mut self) {
        self.gl.delete_buffer(self.id);
    }
}

/// A float vertex attribute sourced from the currently bound array buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub index: u32,
    pub components: i32,
    pub normalized: bool,
    pub stride: i32,
    pub offset: i32,
}

impl VertexAttribute {
    /// tightly packed `vec3` at the start of the buffer
    pub fn vec3(index: u32) -> Self {
        Self {
            index,
            components: 3,
            normalized: false,
            stride: 0,
            offset: 0,
        }
    }

    /// points the attribute at the bound buffer and enables it
    pub fn enable<G: Gl>(&self, gl: &G) {
        gl.vertex_attrib_pointer_f32(
            self.index,
            self.components,
            self.normalized,
            self.stride,
            self.offset,
        );
        gl.enable_vertex_attrib_array(self.index);
    }
}
