//! Camera path interpolation
//!
//! Shortest-arc interpolation between two orientations, and animation paths
//! through a sequence of views.

pub mod interpolate;
pub mod path;

pub use interpolate::{interpolate, shortest_angular_delta, CameraPath};
pub use path::{animate, plan_path, AnimationPath, AnimationReport};
