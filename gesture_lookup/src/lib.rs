extern crate serde_derive;
extern crate thiserror;

mod engine;
mod entities;
mod matcher;
mod point_buffer;
mod registry;

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

pub use engine::GestureEngine;
pub use entities::{Gesture, Match};
pub use matcher::sequence_dist;
pub use point_buffer::PointBuffer;
pub use registry::GestureRegistry;

// One recorded pointer sample, in raw device coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GestureError {
    // Backing storage could not grow; nothing was committed.
    #[error("failed to allocate backing storage")]
    AllocationFailure,
    #[error("point index {index} out of range for stroke of {size} points")]
    OutOfRange { index: usize, size: usize },
    #[error("no gestures registered")]
    NoTemplates,
    #[error("cannot register a degenerate gesture: {reason}")]
    DegenerateTemplate { reason: &'static str },
    #[error("live stroke is empty")]
    EmptyStroke,
}
