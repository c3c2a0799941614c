//! CRS description command

use clap::ArgMatches;

use super::required_arg;
use crate::api::ProjKit;
use crate::commands::command_traits::Command;
use crate::crs::ProjResult;

/// Command describing a CRS
pub struct InfoCommand<'a> {
    crs: String,
    kit: &'a ProjKit,
}

impl<'a> InfoCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a ProjKit) -> ProjResult<Self> {
        Ok(InfoCommand {
            crs: required_arg(args, "info")?,
            kit,
        })
    }
}

impl<'a> Command for InfoCommand<'a> {
    fn run(&self) -> ProjResult<String> {
        self.kit.describe(&self.crs)
    }
}
