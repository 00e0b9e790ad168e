//! Montage composition
//!
//! Captures a set of views to temporary files, decodes them and tiles them
//! into a single image. Temporary files never outlive the call.

pub mod compose;
pub mod grid;
pub mod scratch;

pub use compose::{compose_montage, composite_size, save_composite, tile_images, MontageReport};
pub use grid::compose_grid;
pub use scratch::ScratchImages;
