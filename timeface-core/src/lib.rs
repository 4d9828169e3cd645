//! Board-agnostic core logic for the Timeface clock renderer
//!
//! This crate contains everything that does not depend on a specific
//! display or host runtime:
//!
//! - Integer point geometry (add, tween, scale, polylines)
//! - Fixed-point sine/cosine lookup
//! - Constant polygon templates for eyes, brows and mouths
//! - Eye and mouth renderers
//! - The per-surface face state and frame layout
//! - The `Canvas` trait that display crates implement
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod face;
pub mod geometry;
pub mod shapes;
pub mod traits;

pub use config::{DisplayShape, FaceConfig};
pub use face::{Bounds, ClockTime, TimeFace};
pub use geometry::Point;
pub use traits::{Canvas, Ink};
