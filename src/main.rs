use clap::Parser;
use env_logger::Env;
use log::info;
use sfs_arrays::{
    array_config::ArrayConfig,
    console::{Args, PartialArgs},
    error::{SfsError, SfsResult},
    source_distributions::{SourceArrayType, SourceDistribution},
};
use std::io;

fn main() -> SfsResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    //parse CLI arguments
    let args = Args::try_from(PartialArgs::parse())?;
    //read array configuration and validate it
    let array = SourceArrayType::try_from(ArrayConfig::from_file(&args.config)?)?;
    let sources = array.generate();
    info!("generated {} secondary sources ({array})", sources.len());
    match &args.output {
        Some(path) => {
            sources.to_csv_file(path)?;
            info!("sources written to {}", path.display());
        }
        None => sources
            .write_csv(io::stdout().lock())
            .map_err(|e| SfsError::Console(format!("writing to stdout failed: {e}")))?,
    }
    Ok(())
}
