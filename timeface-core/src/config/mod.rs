//! Configuration
//!
//! Face configuration is handed over by the host when the face is created.
//! Nothing here is persisted.

pub mod types;

pub use types::{DisplayShape, FaceConfig, DEFAULT_MOUTH_CHANGE_MINUTES, DEFAULT_STROKE_WIDTH};
