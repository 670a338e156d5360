//! Circular secondary source distribution parallel to the xy-plane
use std::f64::consts::PI;

use super::SourceDistribution;
use crate::{
    error::{SfsError, SfsResult},
    meter,
    secondary_sources::{is_finite_point, SecondarySources},
    utils::usize_to_f64,
};
use log::warn;
use nalgebra::{Point3, Vector3};
use num::Zero;
use uom::si::f64::Length;

/// Circular secondary source distribution parallel to the xy-plane
///
/// The sources are evenly spaced by angle around the center (starting on the positive x-axis) and all
/// face the center of the circle.
///
/// **Note**: In contrast to [`Linear`](super::Linear) and [`Rectangular`](super::Rectangular) this
/// distribution cannot be reoriented. It always lies in a plane parallel to the xy-plane.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circular {
    nr_of_sources: usize,
    radius: Length,
    center: Point3<Length>,
}
impl Circular {
    /// Create a new [`Circular`] distribution generator centered at the origin.
    ///
    /// If the given radius is zero and more than one source is requested, all sources are located at the
    /// center. A warning is logged in this case.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the given `radius` is negative or not finite.
    pub fn new(nr_of_sources: usize, radius: Length) -> SfsResult<Self> {
        if radius.is_sign_negative() || !radius.is_finite() {
            return Err(SfsError::Distribution(
                "radius must be positive and finite".into(),
            ));
        }
        if radius.is_zero() && nr_of_sources > 1 {
            warn!("zero radius: all {nr_of_sources} sources are located at the center");
        }
        Ok(Self {
            nr_of_sources,
            radius,
            center: Point3::origin(),
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
    /// Returns the number of sources of this [`Circular`] distribution.
    #[must_use]
    pub const fn nr_of_sources(&self) -> usize {
        self.nr_of_sources
    }
    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius
    }
    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point3<Length> {
        self.center
    }
}

impl Default for Circular {
    fn default() -> Self {
        Self {
            nr_of_sources: 32,
            radius: meter!(1.5),
            center: Point3::origin(),
        }
    }
}

impl SourceDistribution for Circular {
    fn generate(&self) -> SecondarySources {
        let mut positions: Vec<Point3<Length>> = Vec::with_capacity(self.nr_of_sources);
        let mut directions: Vec<Vector3<f64>> = Vec::with_capacity(self.nr_of_sources);
        let angle_step = 2.0 * PI / usize_to_f64(self.nr_of_sources.max(1));
        for source_nr in 0..self.nr_of_sources {
            let alpha = usize_to_f64(source_nr) * angle_step;
            let (sin, cos) = alpha.sin_cos();
            positions.push(Point3::new(
                self.center.x + self.radius * cos,
                self.center.y + self.radius * sin,
                self.center.z,
            ));
            // facing the center
            let (sin, cos) = (alpha + PI).sin_cos();
            directions.push(Vector3::new(cos, sin, 0.0));
        }
        SecondarySources::from_parts(positions, directions)
    }
}
impl From<Circular> for super::SourceArrayType {
    fn from(dist: Circular) -> Self {
        Self::Circular(dist)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        secondary_sources::distance_in_meters,
        utils::{geom_transformation::point_to_meters, test_helper::test_helper::check_logs},
    };
    use approx::assert_abs_diff_eq;
    use log::Level;
    use uom::si::length::meter;
    #[test]
    fn new_wrong() {
        assert!(Circular::new(4, meter!(-0.1)).is_err());
        assert!(Circular::new(4, meter!(f64::NAN)).is_err());
        assert!(Circular::new(4, meter!(f64::INFINITY)).is_err());
        assert!(Circular::new(4, meter!(1.0))
            .unwrap()
            .with_center(meter!(0.0, f64::NEG_INFINITY, 0.0))
            .is_err());
    }
    #[test]
    fn new() {
        let c = Circular::new(4, meter!(2.0))
            .unwrap()
            .with_center(meter!(1.0, 0.0, 0.0))
            .unwrap();
        assert_eq!(c.nr_of_sources(), 4);
        assert_eq!(c.radius(), meter!(2.0));
        assert_eq!(c.center(), meter!(1.0, 0.0, 0.0));
    }
    #[test]
    fn new_zero_radius() {
        testing_logger::setup();
        assert!(Circular::new(1, Length::zero()).is_ok());
        check_logs(Level::Warn, vec![]);
        testing_logger::setup();
        assert!(Circular::new(2, Length::zero()).is_ok());
        check_logs(
            Level::Warn,
            vec!["zero radius: all 2 sources are located at the center"],
        );
    }
    #[test]
    fn generate_empty() {
        assert!(Circular::new(0, meter!(1.0)).unwrap().generate().is_empty());
    }
    #[test]
    fn generate_four() {
        let sources = Circular::new(4, meter!(1.0)).unwrap().generate();
        assert_eq!(sources.len(), 4);
        let expected_positions = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
        ];
        let expected_directions = [
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        for (i, (pos, dir)) in sources.iter().enumerate() {
            assert_abs_diff_eq!(point_to_meters(pos), expected_positions[i], epsilon = 1e-12);
            assert_abs_diff_eq!(*dir, expected_directions[i], epsilon = 1e-12);
        }
    }
    #[test]
    fn generate_on_circle() {
        let center = meter!(0.5, -1.0, 2.0);
        for nr_of_sources in [1, 3, 8, 31] {
            let sources = Circular::new(nr_of_sources, meter!(1.7))
                .unwrap()
                .with_center(center)
                .unwrap()
                .generate();
            assert_eq!(sources.len(), nr_of_sources);
            for (pos, dir) in sources.iter() {
                assert_abs_diff_eq!(distance_in_meters(pos, &center), 1.7, epsilon = 1e-12);
                assert_eq!(pos.z, center.z);
                assert_abs_diff_eq!(dir.norm(), 1.0, epsilon = 1e-12);
                let radial = point_to_meters(pos) - point_to_meters(&center);
                assert!(dir.dot(&radial) < 0.0);
            }
        }
    }
    #[test]
    fn generate_no_duplicate_at_seam() {
        let sources = Circular::new(6, meter!(1.0)).unwrap().generate();
        let first = sources.positions()[0];
        let last = sources.positions()[5];
        assert_abs_diff_eq!(distance_in_meters(&first, &last), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(first.x.get::<meter>(), 1.0);
    }
    #[test]
    fn generate_zero_radius() {
        let sources = Circular::new(3, Length::zero()).unwrap().generate();
        for pos in sources.positions() {
            assert_eq!(*pos, meter!(0.0, 0.0, 0.0));
        }
    }
}
