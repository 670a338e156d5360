//! This is the documentation for the **sfs-arrays** package. It computes secondary source distributions
//! for sound field synthesis: positions and facing directions of loudspeakers placed along a line, a circle
//! or a rectangle.
//!
//! The distributions are located in the [`source_distributions`] module and produce [`SecondarySources`].
//! The [`utils::geom_transformation`] module provides the rotation helpers used to reorient whole arrays.
#![allow(clippy::module_name_repetitions)]

pub mod array_config;
pub mod console;
pub mod error;
pub mod secondary_sources;
pub mod source_distributions;
pub mod utils;

pub use secondary_sources::SecondarySources;
