//! Pieces of a frame. Each one appends its bytes, escapes included, to the
//! frame's [`crate::append_buffer::AppendBuffer`].

pub mod rows;
pub mod status;
