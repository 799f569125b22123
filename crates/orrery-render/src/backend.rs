//! The abstract rasterizer interface.

use glam::Mat4;

/// Opaque handle to an uploaded vertex buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// Primitive topologies the core emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    /// Orbit paths.
    LineStrip,
    /// Bodies and the asteroid field.
    Points,
}

/// Values the core uploads as shader uniforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Matrix(Mat4),
}

/// What the core requires of a rasterizer.
///
/// The asteroid buffer is created once and re-drawn at several time uniforms
/// per frame; the small body buffer is rewritten every frame through
/// `write_vertex_buffer` rather than leaking a fresh handle per frame.
pub trait RenderBackend {
    /// Upload a packed byte buffer, returning a handle for draws.
    fn create_vertex_buffer(&mut self, bytes: &[u8]) -> BufferHandle;

    /// Replace the contents of an existing buffer.
    fn write_vertex_buffer(&mut self, handle: BufferHandle, bytes: &[u8]);

    /// Set a named shader uniform for subsequent draws.
    fn upload_uniform(&mut self, name: &str, value: UniformValue);

    /// Draw `count` vertices of `buffer` starting at `first`.
    fn draw(&mut self, primitive: Primitive, buffer: BufferHandle, first: u32, count: u32);
}
