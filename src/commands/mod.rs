//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod transform_command;
pub mod batch_command;
pub mod srs_command;
pub mod info_command;
#[cfg(test)]
mod tests;

pub use command_traits::{Command, CommandFactory};
pub use transform_command::TransformCommand;
pub use batch_command::BatchCommand;
pub use srs_command::SrsCommand;
pub use info_command::InfoCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::api::ProjKit;
use crate::crs::{ProjError, ProjResult};

/// Build the command line interface
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("projkit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Look up coordinate reference systems and reproject coordinates")
        .arg(
            Arg::new("from")
                .short('f')
                .long("from")
                .help("Source CRS (e.g. EPSG:4326, 4326 or a +proj definition)")
                .value_name("CRS")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("to")
                .short('t')
                .long("to")
                .help("Target CRS")
                .value_name("CRS")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("coordinate")
                .short('c')
                .long("coordinate")
                .help("Coordinates to transform in 'x,y[,x,y...]' format")
                .value_name("COORDINATES")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("geometry")
                .short('g')
                .long("geometry")
                .help("Geometry to transform as WKT")
                .value_name("WKT")
                .required(false),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("File with one 'x,y' coordinate per line")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for batch transforms")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("srs")
                .long("srs")
                .help("Print the identifier of a CRS")
                .value_name("CRS")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .help("Describe a CRS")
                .value_name("CRS")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("registry")
                .long("registry")
                .help("TOML file with additional CRS definitions")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Hide the progress bar")
                .action(ArgAction::SetTrue),
        )
}

/// Fetch a required string argument
pub(crate) fn required_arg(args: &ArgMatches, name: &str) -> ProjResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| ProjError::GenericError(format!("Missing --{} argument", name)))
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct ProjkitCommandFactory;

impl ProjkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ProjkitCommandFactory
    }
}

impl Default for ProjkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for ProjkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a ProjKit) -> ProjResult<Box<dyn Command + 'a>> {
        if args.contains_id("srs") {
            Ok(Box::new(SrsCommand::new(args, kit)?))
        } else if args.contains_id("info") {
            Ok(Box::new(InfoCommand::new(args, kit)?))
        } else if args.contains_id("input") {
            Ok(Box::new(BatchCommand::new(args, kit)?))
        } else if args.contains_id("coordinate") || args.contains_id("geometry") {
            Ok(Box::new(TransformCommand::new(args, kit)?))
        } else {
            Err(ProjError::GenericError(
                "Nothing to do. Use --coordinate, --geometry, --input, --srs or --info".to_string()))
        }
    }
}
