#![warn(missing_docs)]
//! Module for handling secondary source distributions
//!
//! These distributions place secondary sources (loudspeakers) along simple geometric shapes for sound field
//! synthesis. Each generated source carries a position and a unit direction vector (the orientation the
//! source is facing).
//!
//! ## Example
//!
//! ```rust
//! use sfs_arrays::{meter, source_distributions::{SourceDistribution, Circular}};
//!
//! let circle = Circular::new(32, meter!(1.5)).unwrap();
//! let sources = circle.generate();
//! assert_eq!(sources.len(), 32);
//! ```
//! `sources` now contains 32 sources evenly placed on a circle with a radius of 1.5 m around the origin,
//! all facing the center.
use crate::secondary_sources::SecondarySources;

mod circular;
mod linear;
mod rectangular;

pub use circular::Circular;
pub use linear::Linear;
pub use rectangular::Rectangular;

/// Trait for the generation of secondary source distributions
pub trait SourceDistribution {
    /// Generate the secondary sources.
    ///
    /// This function generates the positions (of dimension [`Length`](uom::si::f64::Length)) and direction
    /// vectors of all sources with the parameters defined earlier. All parameters are validated during
    /// construction, so generation cannot fail.
    fn generate(&self) -> SecondarySources;
}

/// Enum of all available secondary source distributions
#[derive(Clone, Debug, PartialEq, strum::Display)]
pub enum SourceArrayType {
    /// Linear array, see [`Linear`]
    Linear(Linear),
    /// Circular array, see [`Circular`]
    Circular(Circular),
    /// Rectangular array composed of four linear arrays, see [`Rectangular`]
    Rectangular(Rectangular),
}

impl SourceDistribution for SourceArrayType {
    fn generate(&self) -> SecondarySources {
        match self {
            Self::Linear(dist) => dist.generate(),
            Self::Circular(dist) => dist.generate(),
            Self::Rectangular(dist) => dist.generate(),
        }
    }
}

impl Default for SourceArrayType {
    fn default() -> Self {
        Self::Linear(Linear::default())
    }
}
