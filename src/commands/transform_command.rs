//! Single transform command
//!
//! Reprojects coordinates or a WKT geometry given on the command line.

use clap::ArgMatches;
use log::info;

use super::required_arg;
use crate::api::ProjKit;
use crate::commands::command_traits::Command;
use crate::crs::{ProjError, ProjResult};
use crate::utils::format_utils;

/// What the user asked to transform
#[derive(Debug, Clone, PartialEq)]
pub enum TransformInput {
    Coordinates(Vec<f64>),
    Wkt(String),
}

/// Command for transforming one coordinate sequence or geometry
pub struct TransformCommand<'a> {
    from: String,
    to: String,
    input: TransformInput,
    kit: &'a ProjKit,
}

impl<'a> TransformCommand<'a> {
    /// Create a new transform command from CLI arguments
    pub fn new(args: &ArgMatches, kit: &'a ProjKit) -> ProjResult<Self> {
        let from = required_arg(args, "from")?;
        let to = required_arg(args, "to")?;

        let input = if let Some(coords) = args.get_one::<String>("coordinate") {
            TransformInput::Coordinates(format_utils::parse_coordinates(coords)?)
        } else if let Some(wkt) = args.get_one::<String>("geometry") {
            TransformInput::Wkt(wkt.clone())
        } else {
            return Err(ProjError::GenericError(
                "Missing --coordinate or --geometry to transform".to_string()));
        };

        Ok(Self::from_parts(&from, &to, input, kit))
    }

    pub fn from_parts(from: &str, to: &str, input: TransformInput, kit: &'a ProjKit) -> Self {
        TransformCommand {
            from: from.to_string(),
            to: to.to_string(),
            input,
            kit,
        }
    }
}

impl<'a> Command for TransformCommand<'a> {
    fn run(&self) -> ProjResult<String> {
        info!("Transforming from {} to {}", self.from, self.to);

        match &self.input {
            TransformInput::Coordinates(coords) => {
                let transformed = self.kit.transform_coordinates(coords, &self.from, &self.to)?;
                Ok(format_utils::format_coordinates(&transformed))
            }
            TransformInput::Wkt(wkt) => self.kit.transform_wkt(wkt, &self.from, &self.to),
        }
    }
}
