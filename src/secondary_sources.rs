#![warn(missing_docs)]
//! Module for handling sets of secondary sources
//!
//! A set of secondary sources consists of two co-indexed sequences of equal length: the positions of the
//! sources and their (unit) direction vectors, i.e. the orientation each source is facing.
use std::{fmt::Display, fs::File, io::Write, path::Path};

use nalgebra::{Point3, Vector3};
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::meter};

use crate::{
    error::{SfsError, SfsResult},
    utils::{
        geom_transformation::{point_to_meters, rotate_array},
        usize_to_f64,
    },
};

/// Positions and direction vectors of a secondary source distribution.
///
/// `positions()[i]` and `directions()[i]` always belong to the same source. Deserialization is validated
/// like [`SecondarySources::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedSources")]
pub struct SecondarySources {
    positions: Vec<Point3<Length>>,
    directions: Vec<Vector3<f64>>,
}

#[derive(Deserialize)]
struct UncheckedSources {
    positions: Vec<Point3<Length>>,
    directions: Vec<Vector3<f64>>,
}

impl TryFrom<UncheckedSources> for SecondarySources {
    type Error = SfsError;

    fn try_from(sources: UncheckedSources) -> SfsResult<Self> {
        Self::new(sources.positions, sources.directions)
    }
}

impl SecondarySources {
    /// Creates a new set of [`SecondarySources`].
    ///
    /// The direction vectors are normalized.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the number of positions and directions differ.
    ///  - a position is not finite.
    ///  - a direction vector has a zero length or is not finite.
    pub fn new(positions: Vec<Point3<Length>>, directions: Vec<Vector3<f64>>) -> SfsResult<Self> {
        if positions.len() != directions.len() {
            return Err(SfsError::Distribution(format!(
                "number of positions ({}) and directions ({}) must be equal",
                positions.len(),
                directions.len()
            )));
        }
        if positions.iter().any(|p| p.iter().any(|c| !c.is_finite())) {
            return Err(SfsError::Distribution("positions must be finite".into()));
        }
        if directions
            .iter()
            .any(|d| d.iter().any(|c| !c.is_finite()) || d.norm().is_zero())
        {
            return Err(SfsError::Distribution(
                "directions must be finite and have a non-zero length".into(),
            ));
        }
        let directions = directions.iter().map(Vector3::normalize).collect();
        Ok(Self {
            positions,
            directions,
        })
    }
    /// Create sources from already validated positions and unit directions.
    pub(crate) fn from_parts(
        positions: Vec<Point3<Length>>,
        directions: Vec<Vector3<f64>>,
    ) -> Self {
        Self {
            positions,
            directions,
        }
    }
    /// Concatenate the given sets of [`SecondarySources`] in the given order.
    #[must_use]
    pub fn concatenate(sources: &[Self]) -> Self {
        sources.iter().cloned().collect()
    }
    /// Returns the number of sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }
    /// Returns `true` if this set contains no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
    /// Returns the positions of the sources.
    #[must_use]
    pub fn positions(&self) -> &[Point3<Length>] {
        &self.positions
    }
    /// Returns the direction vectors of the sources.
    #[must_use]
    pub fn directions(&self) -> &[Vector3<f64>] {
        &self.directions
    }
    /// Split into the position and direction vectors.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Point3<Length>>, Vec<Vector3<f64>>) {
        (self.positions, self.directions)
    }
    /// Returns an iterator over (position, direction) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Point3<Length>, &Vector3<f64>)> {
        self.positions.iter().zip(self.directions.iter())
    }
    /// Returns the mean position of all sources or `None` if there are no sources.
    #[must_use]
    pub fn centroid(&self) -> Option<Point3<Length>> {
        if self.is_empty() {
            return None;
        }
        let nr_of_sources = usize_to_f64(self.len());
        let mut sum = Point3::<Length>::origin();
        for p in &self.positions {
            sum.x += p.x;
            sum.y += p.y;
            sum.z += p.z;
        }
        Some(Point3::new(
            sum.x / nr_of_sources,
            sum.y / nr_of_sources,
            sum.z / nr_of_sources,
        ))
    }
    /// Returns a copy of these sources with all positions shifted by the given offset.
    #[must_use]
    pub fn translated(&self, offset: &Vector3<Length>) -> Self {
        let positions = self
            .positions
            .iter()
            .map(|p| Point3::new(p.x + offset.x, p.y + offset.y, p.z + offset.z))
            .collect();
        Self {
            positions,
            directions: self.directions.clone(),
        }
    }
    /// Returns a copy of these sources rotated from the reference axis `from_axis` to `to_axis`.
    ///
    /// The rotation is performed about the origin. Positions and directions are rotated alike.
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the axes has a zero length or is not finite.
    pub fn rotated(&self, from_axis: &Vector3<f64>, to_axis: &Vector3<f64>) -> SfsResult<Self> {
        let (positions, directions) =
            rotate_array(&self.positions, &self.directions, from_axis, to_axis)?;
        Ok(Self {
            positions,
            directions,
        })
    }
    /// Returns a copy of these sources in reversed order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut sources = self.clone();
        sources.positions.reverse();
        sources.directions.reverse();
        sources
    }
    /// Append the given sources at the end of this set.
    pub fn append(&mut self, mut other: Self) {
        self.positions.append(&mut other.positions);
        self.directions.append(&mut other.directions);
    }
    /// Write the sources as CSV (header `x,y,z,nx,ny,nz`, positions in meter) into the given writer.
    ///
    /// # Errors
    ///
    /// This function will return an error if writing fails.
    pub fn write_csv<W: Write>(&self, writer: W) -> SfsResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["x", "y", "z", "nx", "ny", "nz"])
            .map_err(|e| SfsError::Export(format!("writing csv header failed: {e}")))?;
        for (pos, dir) in self.iter() {
            let pos = point_to_meters(pos);
            wtr.serialize((pos.x, pos.y, pos.z, dir.x, dir.y, dir.z))
                .map_err(|e| SfsError::Export(format!("writing csv record failed: {e}")))?;
        }
        wtr.flush()
            .map_err(|e| SfsError::Export(format!("flushing csv writer failed: {e}")))?;
        Ok(())
    }
    /// Write the sources to a CSV file at the given path. See [`SecondarySources::write_csv`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the file cannot be created.
    ///   - writing into the file fails.
    pub fn to_csv_file(&self, path: &Path) -> SfsResult<()> {
        let file = File::create(path).map_err(|e| {
            SfsError::Export(format!(
                "could not create file path: {}: {}",
                path.display(),
                e
            ))
        })?;
        self.write_csv(file)
    }
}

impl FromIterator<SecondarySources> for SecondarySources {
    fn from_iter<T: IntoIterator<Item = SecondarySources>>(iter: T) -> Self {
        let mut sources = Self::default();
        for s in iter {
            sources.append(s);
        }
        sources
    }
}

impl Display for SecondarySources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} secondary sources", self.len())?;
        for (i, (pos, dir)) in self.iter().enumerate() {
            writeln!(
                f,
                "{i:>4}: pos: ({:.4}, {:.4}, {:.4}) m, dir: ({:.4}, {:.4}, {:.4})",
                pos.x.get::<meter>(),
                pos.y.get::<meter>(),
                pos.z.get::<meter>(),
                dir.x,
                dir.y,
                dir.z
            )?;
        }
        Ok(())
    }
}

/// Convert a position into an offset vector (from the origin).
pub(crate) fn offset_of(point: &Point3<Length>) -> Vector3<Length> {
    Vector3::new(point.x, point.y, point.z)
}

/// Returns `true` if all components of the given point are finite.
pub(crate) fn is_finite_point(point: &Point3<Length>) -> bool {
    point.iter().all(|c| c.is_finite())
}

/// Distance (in meter) between two points.
#[cfg(test)]
pub(crate) fn distance_in_meters(a: &Point3<Length>, b: &Point3<Length>) -> f64 {
    nalgebra::distance(&point_to_meters(a), &point_to_meters(b))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::meter;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn two_sources() -> SecondarySources {
        SecondarySources::new(
            vec![meter!(1., 0., 0.), meter!(0., 1., 0.)],
            vec![Vector3::new(-2., 0., 0.), Vector3::new(0., -1., 0.)],
        )
        .unwrap()
    }
    #[test]
    fn new() {
        let s = two_sources();
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
        assert_eq!(s.directions()[0], -Vector3::x());
        assert_eq!(s.positions()[1], meter!(0., 1., 0.));
    }
    #[test]
    fn new_wrong() {
        assert_matches!(
            SecondarySources::new(vec![meter!(0., 0., 0.)], vec![]),
            Err(SfsError::Distribution(_))
        );
        assert!(SecondarySources::new(vec![meter!(0., 0., 0.)], vec![Vector3::zeros()]).is_err());
        assert!(
            SecondarySources::new(vec![meter!(0., 0., 0.)], vec![Vector3::new(f64::NAN, 0., 0.)])
                .is_err()
        );
        assert!(
            SecondarySources::new(vec![meter!(f64::INFINITY, 0., 0.)], vec![Vector3::x()])
                .is_err()
        );
    }
    #[test]
    fn default() {
        let s = SecondarySources::default();
        assert!(s.is_empty());
        assert!(s.centroid().is_none());
    }
    #[test]
    fn centroid() {
        let c = two_sources().centroid().unwrap();
        assert_abs_diff_eq!(point_to_meters(&c), Point3::new(0.5, 0.5, 0.0));
    }
    #[test]
    fn translated() {
        let s = two_sources().translated(&Vector3::new(meter!(1.0), meter!(0.0), meter!(-1.0)));
        assert_eq!(s.positions()[0], meter!(2., 0., -1.));
        assert_eq!(s.positions()[1], meter!(1., 1., -1.));
        assert_eq!(s.directions(), two_sources().directions());
    }
    #[test]
    fn rotated() {
        let s = two_sources()
            .rotated(&Vector3::x(), &Vector3::y())
            .unwrap();
        assert_abs_diff_eq!(
            point_to_meters(&s.positions()[0]),
            Point3::new(0., 1., 0.),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(s.directions()[1], Vector3::x(), epsilon = 1e-12);
        assert!(two_sources()
            .rotated(&Vector3::zeros(), &Vector3::y())
            .is_err());
    }
    #[test]
    fn reversed() {
        let s = two_sources().reversed();
        assert_eq!(s.positions()[0], meter!(0., 1., 0.));
        assert_eq!(s.directions()[0], -Vector3::y());
    }
    #[test]
    fn append_and_concatenate() {
        let mut s = two_sources();
        s.append(two_sources().reversed());
        assert_eq!(s.len(), 4);
        assert_eq!(s.positions()[2], meter!(0., 1., 0.));
        let c = SecondarySources::concatenate(&[two_sources(), SecondarySources::default(), two_sources()]);
        assert_eq!(c.len(), 4);
        assert_eq!(c.positions()[3], meter!(0., 1., 0.));
    }
    #[test]
    fn write_csv() {
        let mut buffer = Vec::new();
        two_sources().write_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "x,y,z,nx,ny,nz");
        assert_eq!(lines[1], "1.0,0.0,0.0,-1.0,0.0,0.0");
        assert_eq!(lines[2], "0.0,1.0,0.0,0.0,-1.0,0.0");
    }
    #[test]
    fn to_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.csv");
        two_sources().to_csv_file(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("x,y,z,nx,ny,nz"));
        assert_matches!(
            two_sources().to_csv_file(&dir.path().join("missing/sources.csv")),
            Err(SfsError::Export(_))
        );
    }
    #[test]
    fn yaml_round_trip() {
        let yaml = serde_yaml::to_string(&two_sources()).unwrap();
        let sources: SecondarySources = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(sources, two_sources());
    }
    #[test]
    fn deserialize_wrong() {
        let unequal = SecondarySources::from_parts(vec![meter!(1., 2., 3.)], vec![]);
        let yaml = serde_yaml::to_string(&unequal).unwrap();
        let err = serde_yaml::from_str::<SecondarySources>(&yaml).unwrap_err();
        assert!(err
            .to_string()
            .contains("number of positions (1) and directions (0) must be equal"));
        let zero_direction =
            SecondarySources::from_parts(vec![meter!(1., 2., 3.)], vec![Vector3::zeros()]);
        let yaml = serde_yaml::to_string(&zero_direction).unwrap();
        assert!(serde_yaml::from_str::<SecondarySources>(&yaml).is_err());
    }
    #[test]
    fn display() {
        let text = format!("{}", two_sources());
        assert!(text.starts_with("2 secondary sources"));
        assert_eq!(text.lines().count(), 3);
    }
}
