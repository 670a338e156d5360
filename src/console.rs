//! Handling the command line interface
//!
//! This module handles the command line parsing and the validation of the given paths.
use crate::error::{SfsError, SfsResult};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Validated command line arguments of the `sfs-arrays` application.
#[derive(Debug)]
pub struct Args {
    /// file path of the array configuration (YAML)
    pub config: PathBuf,
    /// destination file of the generated sources (CSV). If not defined, the sources are written to stdout.
    pub output: Option<PathBuf>,
}

/// Raw command line arguments as parsed by `clap`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct PartialArgs {
    /// file path of the array configuration (YAML) to read in
    #[arg(short, long)]
    config: String,

    /// destination CSV file of the secondary sources. If not defined, stdout is used
    #[arg(short, long)]
    output: Option<String>,
}

/// Checks if the passed config file path is valid.
///
/// The file must exist and have a `yaml` or `yml` extension.
fn config_path_is_valid(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

/// Checks if the passed output file can be created, i.e. its parent directory exists.
fn output_path_is_valid(path: &Path) -> bool {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
        _ => true,
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = SfsError;

    fn try_from(part_args: PartialArgs) -> SfsResult<Self> {
        let config = PathBuf::from(part_args.config);
        if !config_path_is_valid(&config) {
            return Err(SfsError::Console(format!(
                "invalid array configuration file: {}",
                config.display()
            )));
        }
        let output = part_args.output.map(PathBuf::from);
        if let Some(path) = &output {
            if !output_path_is_valid(path) {
                return Err(SfsError::Console(format!(
                    "directory of output file does not exist: {}",
                    path.display()
                )));
            }
        }
        Ok(Self { config, output })
    }
}
