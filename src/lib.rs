//! A small terminal text editor.
//!
//! Everything the screen shows is assembled from raw bytes and VT100 escape
//! sequences into one [`append_buffer::AppendBuffer`] per frame. Input comes
//! straight from the terminal in raw mode and is decoded by [`keys`].

pub mod app;
pub mod append_buffer;
pub mod components;
pub mod config;
pub mod editor;
pub mod error;
pub mod file_io;
pub mod keys;
pub mod logging;
pub mod terminal;
pub mod text;

pub use error::{Error, Result};
