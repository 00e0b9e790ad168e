//! Image set export
//!
//! Drives the render-and-capture cycle over a sequence of views, producing
//! one named image file per view, or one numbered file per rotation frame.

pub mod frames;
pub mod imageset;

pub use frames::save_rotation_frames;
pub use imageset::{export_views, image_path, save_image, ExportReport, ImageRecord};
