//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application, enabling a clean separation of concerns.

use crate::api::ProjKit;
use crate::crs::ProjResult;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation,
/// allowing for separation of concerns and better testability.
pub trait Command {
    /// Run the command and return the text it reports
    fn run(&self) -> ProjResult<String>;

    /// Run the command and print its report to stdout
    fn execute(&self) -> ProjResult<()> {
        let output = self.run()?;
        if !output.is_empty() {
            println!("{}", output.trim_end());
        }
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
///
/// This trait defines the interface for command factories
/// which can parse CLI arguments and create the appropriate Command.
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade the command runs against
    fn create_command(&self, args: &clap::ArgMatches, kit: &'a ProjKit) -> ProjResult<Box<dyn Command + 'a>>;
}
