//! Module for additional computational capabilities
pub mod geom_transformation;
pub mod math_utils;
pub mod test_helper;
pub mod uom_macros;
pub use math_utils::{centered_offset, usize_to_f64};
