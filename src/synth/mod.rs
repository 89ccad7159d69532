//! The kick engine: parameters in, PCM out.
//!
//! [`render`] is the in-memory entry point used by the optimizer and the pad
//! grid; [`render_to_writer`], [`save`] and [`save_to_dir`] push the same
//! buffer through the WAV sink.

mod engine;
mod output;

pub use engine::render;
pub use output::{next_free_path, render_to_writer, save, save_to_dir};
