//! View name normalization
//!
//! Maps preset view names, or unique leading substrings of them, to the
//! hemisphere's camera orientation.

pub mod view_name;

pub use view_name::{prefix_matches, resolve, resolve_name};
