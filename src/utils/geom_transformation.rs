//!for all the functions that are used for rotating and translating secondary sources
#![warn(missing_docs)]
//!
//! All rotations follow the column-vector convention: a vector `v` is rotated by `v' = R * v`. Array
//! libraries storing one vector per row apply the same rotation as `v'^T = v^T * R^T`.
use std::f64::consts::PI;

use log::debug;
use nalgebra::{Matrix3, Point3, Rotation3, Unit, Vector3};
use uom::si::{f64::Length, length::meter};

use crate::error::{SfsError, SfsResult};

/// Convert a point of [`Length`]s into a point of `f64` values in meter.
#[must_use]
pub fn point_to_meters(point: &Point3<Length>) -> Point3<f64> {
    Point3::new(
        point.x.get::<meter>(),
        point.y.get::<meter>(),
        point.z.get::<meter>(),
    )
}
/// Convert a point of `f64` values (interpreted as meter) into a point of [`Length`]s.
#[must_use]
pub fn meters_to_point(point: &Point3<f64>) -> Point3<Length> {
    Point3::new(
        Length::new::<meter>(point.x),
        Length::new::<meter>(point.y),
        Length::new::<meter>(point.z),
    )
}
/// Convert a vector of [`Length`]s into a vector of `f64` values in meter.
#[must_use]
pub fn vector_to_meters(vector: &Vector3<Length>) -> Vector3<f64> {
    Vector3::new(
        vector.x.get::<meter>(),
        vector.y.get::<meter>(),
        vector.z.get::<meter>(),
    )
}

fn check_reference_vector(vector: &Vector3<f64>, name: &str) -> SfsResult<()> {
    if vector.iter().any(|x| !f64::is_finite(*x)) {
        return Err(SfsError::Rotation(format!("{name} vector must be finite!")));
    }
    if vector.norm() < f64::EPSILON {
        return Err(SfsError::Rotation(format!(
            "{name} vector must have a non zero length!"
        )));
    }
    Ok(())
}

/// Half turn about an axis perpendicular to `direction`.
///
/// The axis is the cross product of `direction` with the coordinate axis along which `direction` has its
/// smallest component (ties resolved towards z, then y). For the x-axis this yields a half turn about
/// the y-axis.
fn half_turn_perpendicular_to(direction: &Vector3<f64>) -> Rotation3<f64> {
    let magnitudes = direction.abs();
    let base_axis = if magnitudes.z <= magnitudes.y && magnitudes.z <= magnitudes.x {
        Vector3::z()
    } else if magnitudes.y <= magnitudes.x {
        Vector3::y()
    } else {
        Vector3::x()
    };
    let axis = Unit::new_normalize(direction.cross(&base_axis));
    Rotation3::from_axis_angle(&axis, PI)
}

/// Rotation mapping the direction of `from` onto the direction of `to`.
///
/// Both vectors are normalized internally. Parallel vectors give the identity, antiparallel vectors a
/// half turn about a perpendicular axis. Zero-length vectors give the identity as well.
pub(crate) fn rotation_between_directions(
    from: &Vector3<f64>,
    to: &Vector3<f64>,
) -> Rotation3<f64> {
    Rotation3::rotation_between(from, to).unwrap_or_else(|| {
        debug!("antiparallel reference vectors: using half turn about a perpendicular axis");
        half_turn_perpendicular_to(from)
    })
}

/// Apply a rotation to all positions (as vectors from the origin) and all directions.
pub(crate) fn apply_rotation(
    rotation: &Rotation3<f64>,
    positions: &[Point3<Length>],
    directions: &[Vector3<f64>],
) -> (Vec<Point3<Length>>, Vec<Vector3<f64>>) {
    let positions = positions
        .iter()
        .map(|p| meters_to_point(&(rotation * point_to_meters(p))))
        .collect();
    let directions = directions.iter().map(|d| rotation * d).collect();
    (positions, directions)
}

/// Returns the 3x3 rotation matrix `R` which maps the direction of `n1` onto the direction of `n2` (`R * n1 = n2`).
///
/// The matrix is orthonormal with a determinant of +1. It is calculated via the axis-angle (Rodrigues)
/// formulation about the axis `n1 x n2`. If both vectors point into the same direction, the identity
/// is returned. If they are antiparallel, a half turn about an axis perpendicular to `n1` is returned.
/// # Attributes
/// `n1`: reference direction to rotate from. Need not be normalized.
/// `n2`: reference direction to rotate to. Need not be normalized.
/// # Errors
/// This function errors if one of the vectors has a zero length or contains non-finite values.
pub fn rotation_matrix(n1: &Vector3<f64>, n2: &Vector3<f64>) -> SfsResult<Matrix3<f64>> {
    check_reference_vector(n1, "first reference")?;
    check_reference_vector(n2, "second reference")?;
    Ok(rotation_between_directions(n1, n2).into_inner())
}

/// Rotates all positions and direction vectors from the reference axis `from_axis` to `to_axis`.
///
/// The rotation matrix is calculated by [`rotation_matrix`] and applied to every position (as a vector
/// from the origin) and every direction. New vectors are returned.
/// # Attributes
/// `positions`: positions of the secondary sources
/// `directions`: direction vectors of the secondary sources
/// `from_axis`: reference axis to rotate from
/// `to_axis`: reference axis to rotate to
/// # Errors
/// This function errors if
///  - `positions` and `directions` differ in length.
///  - one of the axes has a zero length or contains non-finite values.
pub fn rotate_array(
    positions: &[Point3<Length>],
    directions: &[Vector3<f64>],
    from_axis: &Vector3<f64>,
    to_axis: &Vector3<f64>,
) -> SfsResult<(Vec<Point3<Length>>, Vec<Vector3<f64>>)> {
    if positions.len() != directions.len() {
        return Err(SfsError::Rotation(format!(
            "number of positions ({}) and directions ({}) must be equal",
            positions.len(),
            directions.len()
        )));
    }
    check_reference_vector(from_axis, "first reference")?;
    check_reference_vector(to_axis, "second reference")?;
    let rotation = rotation_between_directions(from_axis, to_axis);
    Ok(apply_rotation(&rotation, positions, directions))
}
