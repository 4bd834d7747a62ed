//! Two fixed-magnitude vectors rotating about the origin, their cross
//! product, and tick labels for angles written as fractions of π.

pub mod animation;
pub mod config;
pub mod error;
pub mod kinematics;
pub mod labeler;
pub mod math;
pub mod text_renderer;
pub mod vec2;

#[cfg(test)]
mod testing;

pub use crate::animation::{run, step, AnimationState, CrossProductSample, FrameOutput, Renderer};
pub use crate::config::{Config, Schedule};
pub use crate::error::{Error, Result};
pub use crate::kinematics::{compute_frame, Frame, RotationPolicy, RotationState};
pub use crate::labeler::{label, FractionLabel, LabelStyle, MultipleOf};
pub use crate::vec2::Vec2;
