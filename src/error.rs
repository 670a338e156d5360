#![warn(missing_docs)]
//! Error structures of the secondary source distribution generators
use std::{error::Error, fmt::Display};

/// Application specific Result type
pub type SfsResult<T> = std::result::Result<T, SfsError>;

/// Errors that can be returned by the various functions of this crate.
#[derive(Debug, PartialEq, Eq)]
pub enum SfsError {
    /// invalid reference vectors given to a rotation (e.g. zero length)
    Rotation(String),
    /// invalid parameters while setting up a secondary source distribution
    Distribution(String),
    /// errors while reading or converting an array configuration file
    Config(String),
    /// errors while exporting secondary sources (e.g. to a CSV file)
    Export(String),
    /// errors handling the command line
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for SfsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rotation(m) => {
                write!(f, "Rotation:{m}")
            }
            Self::Distribution(m) => {
                write!(f, "Distribution:{m}")
            }
            Self::Config(m) => {
                write!(f, "Config:{m}")
            }
            Self::Export(m) => {
                write!(f, "Export:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "SFS Error:Other:{m}"),
        }
    }
}
impl Error for SfsError {}

impl std::convert::From<String> for SfsError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = SfsError::from("test".to_string());
        assert_eq!(error, SfsError::Other("test".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", SfsError::Rotation("test".to_string())),
            "Rotation:test"
        );
        assert_eq!(
            format!("{}", SfsError::Distribution("test".to_string())),
            "Distribution:test"
        );
        assert_eq!(
            format!("{}", SfsError::Config("test".to_string())),
            "Config:test"
        );
        assert_eq!(
            format!("{}", SfsError::Export("test".to_string())),
            "Export:test"
        );
        assert_eq!(
            format!("{}", SfsError::Console("test".to_string())),
            "Console:test"
        );
        assert_eq!(
            format!("{}", SfsError::Other("test".to_string())),
            "SFS Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", SfsError::Distribution("test".to_string())),
            "Distribution(\"test\")"
        );
    }
}
