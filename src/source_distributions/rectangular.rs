#![warn(missing_docs)]
//! Rectangular secondary source distribution composed of four linear distributions
use super::{Linear, SourceDistribution};
use crate::{
    centimeter,
    error::{SfsError, SfsResult},
    secondary_sources::{is_finite_point, offset_of, SecondarySources},
    utils::{
        geom_transformation::{apply_rotation, rotation_between_directions},
        usize_to_f64,
    },
};
use log::warn;
use nalgebra::{Point3, Vector3};
use num::Zero;
use uom::si::f64::Length;

/// Rectangular secondary source distribution
///
/// The rectangle is built from four [`Linear`] distributions which are concatenated in the order
/// left, top, right, bottom such that the sources form one closed loop. The sources of each side face the
/// enclosed area. Neighboring sources at a corner are separated by half the spacing in each direction.
///
/// The rectangle is centered at the given center. If a normal is given, the whole rectangle is rotated as one
/// rigid body such that the local x-axis coincides with that normal.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rectangular {
    nr_of_sources: (usize, usize),
    spacing: (Length, Length),
    center: Point3<Length>,
    normal: Option<Vector3<f64>>,
}

impl Rectangular {
    /// Create a new [`Rectangular`] distribution generator.
    ///
    /// `nr_of_sources` holds the number of sources on the horizontal (top & bottom) sides and on the
    /// vertical (left & right) sides. `spacing` holds the respective distances between neighboring sources.
    /// A zero number of sources degenerates the respective pair of sides to empty sequences. The
    /// remaining two sides then collapse onto each other: for `nr_of_sources.0 == 0` the left and right
    /// sides both lie on the local y-axis, forming coincident pairs of sources facing opposite directions.
    /// The same holds for the top and bottom sides if `nr_of_sources.1 == 0`.
    ///
    /// A zero spacing with more than one source on the respective sides places these sources at the same
    /// position. A warning is logged in this case.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - one `spacing` component is negative or not finite.
    pub fn new(nr_of_sources: (usize, usize), spacing: (Length, Length)) -> SfsResult<Self> {
        if spacing.0.is_sign_negative() || !spacing.0.is_finite() {
            return Err(SfsError::Distribution(
                "spacing x must be >= zero and finite".into(),
            ));
        }
        if spacing.1.is_sign_negative() || !spacing.1.is_finite() {
            return Err(SfsError::Distribution(
                "spacing y must be >= zero and finite".into(),
            ));
        }
        if spacing.0.is_zero() && nr_of_sources.0 > 1 {
            warn!(
                "zero spacing x: {} sources per horizontal side are located at the same position",
                nr_of_sources.0
            );
        }
        if spacing.1.is_zero() && nr_of_sources.1 > 1 {
            warn!(
                "zero spacing y: {} sources per vertical side are located at the same position",
                nr_of_sources.1
            );
        }
        Ok(Self {
            nr_of_sources,
            spacing,
            center: Point3::origin(),
            normal: None,
        })
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
    /// Rotate the whole distribution from the x-axis to the given normal.
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
        self.normal = Some(normal.normalize());
        Ok(self)
    }
    /// Returns the number of sources along the horizontal and vertical sides.
    ///
    /// # Returns
    ///
    /// A tuple `(usize, usize)` where the first element is the number of sources on the top and bottom
    /// sides and the second element is the number of sources on the left and right sides.
    #[must_use]
    pub const fn nr_of_sources(&self) -> (usize, usize) {
        self.nr_of_sources
    }
    /// Returns the spacings along the horizontal and vertical sides.
    #[must_use]
    pub fn spacing(&self) -> (Length, Length) {
        self.spacing
    }
    /// Returns the center of this [`Rectangular`] distribution.
    #[must_use]
    pub fn center(&self) -> Point3<Length> {
        self.center
    }
    /// Returns the (unit) normal the distribution is rotated to or `None` if it is not rotated.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        self.normal
    }
}

impl Default for Rectangular {
    fn default() -> Self {
        Self {
            nr_of_sources: (16, 16),
            spacing: (centimeter!(20.), centimeter!(20.)),
            center: Point3::origin(),
            normal: None,
        }
    }
}

impl SourceDistribution for Rectangular {
    fn generate(&self) -> SecondarySources {
        let (nr_x, nr_y) = self.nr_of_sources;
        let (dx, dy) = self.spacing;
        let half_width = dx * (usize_to_f64(nr_x) / 2.0);
        // distance of the outermost source of a side from its center. Stays finite for empty sides.
        let half_extent_x = dx * ((usize_to_f64(nr_x) - 1.0) / 2.0);
        let half_extent_y = dy * ((usize_to_f64(nr_y) - 1.0) / 2.0);

        let left = Linear::from_validated(nr_y, dy, Point3::origin(), Vector3::x()).generate();
        let left_last_y = half_extent_y;
        let top = Linear::from_validated(
            nr_x,
            dx,
            Point3::new(half_width, left_last_y + dy / 2.0, Length::zero()),
            -Vector3::y(),
        )
        .generate();
        let top_last_x = half_width + half_extent_x;
        // runs from top to bottom after reversal
        let right = Linear::from_validated(
            nr_y,
            dy,
            Point3::new(top_last_x + dx / 2.0, Length::zero(), Length::zero()),
            -Vector3::x(),
        )
        .generate()
        .reversed();
        let right_last_y = -half_extent_y;
        let bottom = Linear::from_validated(
            nr_x,
            dx,
            Point3::new(half_width, right_last_y - dy / 2.0, Length::zero()),
            Vector3::y(),
        )
        .generate();

        let mut sources: SecondarySources = [left, top, right, bottom].into_iter().collect();
        sources = sources.translated(&Vector3::new(-half_width, Length::zero(), Length::zero()));
        if let Some(normal) = self.normal {
            let rotation = rotation_between_directions(&Vector3::x(), &normal);
            let (positions, directions) =
                apply_rotation(&rotation, sources.positions(), sources.directions());
            sources = SecondarySources::from_parts(positions, directions);
        }
        sources.translated(&offset_of(&self.center))
    }
}

impl From<Rectangular> for super::SourceArrayType {
    fn from(dist: Rectangular) -> Self {
        Self::Rectangular(dist)
    }
}
