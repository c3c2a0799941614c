//! Reverse identifier lookup command

use clap::ArgMatches;
use log::info;

use super::required_arg;
use crate::api::ProjKit;
use crate::commands::command_traits::Command;
use crate::crs::ProjResult;

/// Marker printed when a CRS has no known identifier
pub const NO_IDENTIFIER: &str = "(none)";

/// Command printing the identifier of a CRS
pub struct SrsCommand<'a> {
    crs: String,
    kit: &'a ProjKit,
}

impl<'a> SrsCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a ProjKit) -> ProjResult<Self> {
        Ok(Self::from_parts(&required_arg(args, "srs")?, kit))
    }

    pub fn from_parts(crs: &str, kit: &'a ProjKit) -> Self {
        SrsCommand {
            crs: crs.to_string(),
            kit,
        }
    }
}

impl<'a> Command for SrsCommand<'a> {
    fn run(&self) -> ProjResult<String> {
        let crs = self.kit.to_crs(&self.crs)?;
        let srs = self.kit.srs(&crs);
        info!("Identifier of '{}': {:?}", self.crs, srs);
        Ok(srs.unwrap_or_else(|| NO_IDENTIFIER.to_string()))
    }
}
