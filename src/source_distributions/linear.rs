#![warn(missing_docs)]
//! Linear, evenly-spaced secondary source distribution
use super::SourceDistribution;
use crate::{
    centimeter,
    error::{SfsError, SfsResult},
    meter,
    secondary_sources::{is_finite_point, offset_of, SecondarySources},
    utils::{
        centered_offset,
        geom_transformation::{apply_rotation, rotation_between_directions},
    },
};
use log::warn;
use nalgebra::{Point3, Vector3};
use num::Zero;
use uom::si::{f64::Length, length::meter};

/// Linear, evenly-spaced secondary source distribution
///
/// The sources are placed along the local y-axis, all facing the local x-axis. The whole array is then
/// rotated such that the local x-axis coincides with the given normal and finally shifted to the given
/// center.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Linear {
    nr_of_sources: usize,
    spacing: Length,
    center: Point3<Length>,
    normal: Vector3<f64>,
}

impl Linear {
    /// Create a new [`Linear`] distribution generator centered at the origin with the normal along the x-axis.
    ///
    /// If the given spacing is zero and more than one source is requested, all sources are located at
    /// the same position. A warning is logged in this case.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the given `spacing` is negative or not finite.
    pub fn new(nr_of_sources: usize, spacing: Length) -> SfsResult<Self> {
        if spacing.is_sign_negative() || !spacing.is_finite() {
            return Err(SfsError::Distribution(
                "spacing must be >= zero and finite".into(),
            ));
        }
        if spacing.is_zero() && nr_of_sources > 1 {
            warn!("zero spacing: all {nr_of_sources} sources are located at the same position");
        }
        Ok(Self::from_validated(
            nr_of_sources,
            spacing,
            Point3::origin(),
            Vector3::x(),
        ))
    }
    /// Create a [`Linear`] distribution from already validated parameters. `normal` must have unit length.
    pub(crate) const fn from_validated(
        nr_of_sources: usize,
        spacing: Length,
        center: Point3<Length>,
        normal: Vector3<f64>,
    ) -> Self {
        Self {
            nr_of_sources,
            spacing,
            center,
            normal,
        }
    }
    /// Shift the distribution to the given center.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given `center` is not finite.
    pub fn with_center(mut self, center: Point3<Length>) -> SfsResult<Self> {
        if !is_finite_point(&center) {
            return Err(SfsError::Distribution("center must be finite".into()));
        }
        self.center = center;
        Ok(self)
    }
    /// Orient the distribution such that all sources face the given normal.
    ///
    /// The normal is normalized before being stored.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given `normal` has a zero length or is not finite.
    pub fn with_normal(mut self, normal: Vector3<f64>) -> SfsResult<Self> {
        if normal.iter().any(|x| !x.is_finite()) || normal.norm().is_zero() {
            return Err(SfsError::Distribution(
                "normal must be finite and have a non-zero length".into(),
            ));
        }
        self.normal = normal.normalize();
        Ok(self)
    }
    /// Returns the number of sources of this [`Linear`] distribution.
    #[must_use]
    pub const fn nr_of_sources(&self) -> usize {
        self.nr_of_sources
    }
    /// Returns the spacing between two neighboring sources.
    #[must_use]
    pub fn spacing(&self) -> Length {
        self.spacing
    }
    /// Returns the center of this [`Linear`] distribution.
    #[must_use]
    pub fn center(&self) -> Point3<Length> {
        self.center
    }
    /// Returns the (unit) normal vector all sources are facing.
    #[must_use]
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }
}

impl Default for Linear {
    fn default() -> Self {
        Self::from_validated(16, centimeter!(20.), Point3::origin(), Vector3::x())
    }
}

impl SourceDistribution for Linear {
    fn generate(&self) -> SecondarySources {
        let spacing = self.spacing.get::<meter>();
        let positions: Vec<Point3<Length>> = (0..self.nr_of_sources)
            .map(|i| meter!(0.0, centered_offset(i, self.nr_of_sources, spacing), 0.0))
            .collect();
        let directions = vec![Vector3::x(); self.nr_of_sources];
        let rotation = rotation_between_directions(&Vector3::x(), &self.normal);
        let (positions, directions) = apply_rotation(&rotation, &positions, &directions);
        SecondarySources::from_parts(positions, directions).translated(&offset_of(&self.center))
    }
}

impl From<Linear> for super::SourceArrayType {
    fn from(dist: Linear) -> Self {
        Self::Linear(dist)
    }
}
