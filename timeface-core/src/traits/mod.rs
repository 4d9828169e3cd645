//! Output surface traits
//!
//! These traits define the interface between the face logic and a
//! display-specific drawing implementation.

pub mod canvas;

pub use canvas::{Canvas, Ink};

#[cfg(test)]
pub use canvas::{DrawOp, RecordingCanvas};
