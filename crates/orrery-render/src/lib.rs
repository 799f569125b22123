//! The rasterizer seam: packed vertex buffers in, uniform uploads and draw
//! ranges out. The core never sees shader or buffer mechanics beyond this.

mod backend;
mod trace;

pub use backend::{BufferHandle, Primitive, RenderBackend, UniformValue};
pub use trace::{TraceBackend, TraceCommand};
