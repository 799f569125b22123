//! A recording backend: stores every submitted command instead of drawing.
//!
//! Backs the orchestrator tests and the headless demo binary; a GPU backend
//! implements [`RenderBackend`] against a real device instead.

use crate::backend::{BufferHandle, Primitive, RenderBackend, UniformValue};

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceCommand {
    CreateBuffer {
        handle: BufferHandle,
        byte_len: usize,
    },
    WriteBuffer {
        handle: BufferHandle,
        byte_len: usize,
    },
    Uniform {
        name: String,
        value: UniformValue,
    },
    Draw {
        primitive: Primitive,
        buffer: BufferHandle,
        first: u32,
        count: u32,
    },
}

/// Records the command stream of one or more frames.
#[derive(Default)]
pub struct TraceBackend {
    next_handle: u32,
    pub commands: Vec<TraceCommand>,
}

impl TraceBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands, keeping allocated handles valid.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All recorded draws, in submission order.
    pub fn draws(&self) -> impl Iterator<Item = &TraceCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, TraceCommand::Draw { .. }))
    }

    /// Recorded draws of one primitive kind.
    pub fn draw_count(&self, of: Primitive) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, TraceCommand::Draw { primitive, .. } if *primitive == of))
            .count()
    }

    /// The most recent value uploaded for a named uniform.
    pub fn last_uniform(&self, of: &str) -> Option<UniformValue> {
        self.commands.iter().rev().find_map(|c| match c {
            TraceCommand::Uniform { name, value } if name == of => Some(*value),
            _ => None,
        })
    }
}

impl RenderBackend for TraceBackend {
    fn create_vertex_buffer(&mut self, bytes: &[u8]) -> BufferHandle {
        let handle = BufferHandle(self.next_handle);
        self.next_handle += 1;
        self.commands.push(TraceCommand::CreateBuffer {
            handle,
            byte_len: bytes.len(),
        });
        handle
    }

    fn write_vertex_buffer(&mut self, handle: BufferHandle, bytes: &[u8]) {
        self.commands.push(TraceCommand::WriteBuffer {
            handle,
            byte_len: bytes.len(),
        });
    }

    fn upload_uniform(&mut self, name: &str, value: UniformValue) {
        self.commands.push(TraceCommand::Uniform {
            name: name.to_string(),
            value,
        });
    }

    fn draw(&mut self, primitive: Primitive, buffer: BufferHandle, first: u32, count: u32) {
        self.commands.push(TraceCommand::Draw {
            primitive,
            buffer,
            first,
            count,
        });
    }
}
