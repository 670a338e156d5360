#![warn(missing_docs)]
//! Configuration files describing a secondary source distribution.
//!
//! An array configuration is a small YAML document selecting the distribution type with the `type` key.
//! All lengths are given in meter, vectors as three-element lists.
//!
//! ```yaml
//! type: rectangular
//! nr_of_sources: [16, 8]
//! spacing: [0.2, 0.2]
//! center: [0.0, 0.0, 1.2]
//! normal: [0.0, 0.0, 1.0]
//! ```
//!
//! Optional keys: `center` (default origin) for all types, `normal` for `linear` (default x-axis) and
//! `rectangular` (default: no reorientation).
use std::{fs, path::Path};

use log::info;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    error::{SfsError, SfsResult},
    meter,
    source_distributions::{Circular, Linear, Rectangular, SourceArrayType},
};

const fn default_normal() -> [f64; 3] {
    [1.0, 0.0, 0.0]
}

/// Description of a secondary source distribution as read from a configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ArrayConfig {
    /// linear distribution
    Linear {
        /// number of sources
        nr_of_sources: usize,
        /// spacing between neighboring sources in meter
        spacing: f64,
        /// center in meter
        #[serde(default)]
        center: [f64; 3],
        /// direction all sources are facing
        #[serde(default = "default_normal")]
        normal: [f64; 3],
    },
    /// circular distribution parallel to the xy-plane
    Circular {
        /// number of sources
        nr_of_sources: usize,
        /// radius in meter
        radius: f64,
        /// center in meter
        #[serde(default)]
        center: [f64; 3],
    },
    /// rectangular distribution
    Rectangular {
        /// number of sources on the horizontal and vertical sides
        nr_of_sources: (usize, usize),
        /// spacing on the horizontal and vertical sides in meter
        spacing: (f64, f64),
        /// center in meter
        #[serde(default)]
        center: [f64; 3],
        /// optional normal the whole rectangle is rotated to
        #[serde(default)]
        normal: Option<[f64; 3]>,
    },
}

impl ArrayConfig {
    /// Read an [`ArrayConfig`] from the YAML file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing of the file failed.
    pub fn from_file(path: &Path) -> SfsResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SfsError::Config(format!("cannot read file {} : {}", path.display(), e))
        })?;
        info!("read array configuration {}", path.display());
        Self::from_yaml_str(&contents)
    }
    /// Parse an [`ArrayConfig`] from the given YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing failed.
    pub fn from_yaml_str(yaml: &str) -> SfsResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| SfsError::Config(format!("parsing of array configuration failed: {e}")))
    }
    /// Return this [`ArrayConfig`] as YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization failed.
    pub fn to_yaml_string(&self) -> SfsResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| SfsError::Config(format!("serialization of array configuration failed: {e}")))
    }
}

impl TryFrom<ArrayConfig> for SourceArrayType {
    type Error = SfsError;

    fn try_from(config: ArrayConfig) -> SfsResult<Self> {
        let array: Self = match config {
            ArrayConfig::Linear {
                nr_of_sources,
                spacing,
                center,
                normal,
            } => Linear::new(nr_of_sources, meter!(spacing))?
                .with_center(meter!(center[0], center[1], center[2]))?
                .with_normal(Vector3::from(normal))?
                .into(),
            ArrayConfig::Circular {
                nr_of_sources,
                radius,
                center,
            } => Circular::new(nr_of_sources, meter!(radius))?
                .with_center(meter!(center[0], center[1], center[2]))?
                .into(),
            ArrayConfig::Rectangular {
                nr_of_sources,
                spacing,
                center,
                normal,
            } => {
                let mut rectangular =
                    Rectangular::new(nr_of_sources, (meter!(spacing.0), meter!(spacing.1)))?
                        .with_center(meter!(center[0], center[1], center[2]))?;
                if let Some(normal) = normal {
                    rectangular = rectangular.with_normal(Vector3::from(normal))?;
                }
                rectangular.into()
            }
        };
        Ok(array)
    }
}
