//! embedded-graphics drawing surface for Timeface
//!
//! This crate provides:
//! - `GraphicsCanvas`, an implementation of the core `Canvas` trait on top of
//!   any embedded-graphics `DrawTarget`
//! - `Palette` for mapping the face's black/white ink to panel colors
//! - `render_frame` to paint the background and draw a face in one call
//!
//! # Architecture
//!
//! The face logic in `timeface-core` knows nothing about pixels. A host
//! owns the panel driver (anything implementing `DrawTarget`), wraps it in a
//! `GraphicsCanvas`, and calls `render_frame` whenever the face is dirty.

#![no_std]
#![deny(unsafe_code)]

pub mod canvas;
pub mod frame;

// Re-export key types
pub use canvas::{GraphicsCanvas, Palette};
pub use frame::{bounds_of, render_frame, render_if_dirty};
