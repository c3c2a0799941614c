//! Batch transform command
//!
//! Reads one coordinate sequence per line, transforms every line with a
//! single transform and writes the results in the same order. Blank lines
//! and `#` comments are copied through unchanged.

use std::fs;
use std::io::Write;

use clap::ArgMatches;
use log::{debug, info};

use super::required_arg;
use crate::api::ProjKit;
use crate::commands::command_traits::Command;
use crate::coordinate::{transform_coordinates, CoordinateTransformer};
use crate::crs::{CrsRef, ProjError, ProjResult};
use crate::utils::format_utils;
use crate::utils::progress::ProgressTracker;

/// Command for transforming a file of coordinates
pub struct BatchCommand<'a> {
    from: String,
    to: String,
    input_file: String,
    /// Results go to stdout when no output file is given
    output_file: Option<String>,
    show_progress: bool,
    kit: &'a ProjKit,
}

impl<'a> BatchCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a ProjKit) -> ProjResult<Self> {
        Ok(BatchCommand {
            from: required_arg(args, "from")?,
            to: required_arg(args, "to")?,
            input_file: required_arg(args, "input")?,
            output_file: args.get_one::<String>("output").cloned(),
            show_progress: !args.get_flag("quiet"),
            kit,
        })
    }

    pub fn from_parts(from: &str, to: &str, input_file: &str, output_file: Option<&str>, kit: &'a ProjKit) -> Self {
        BatchCommand {
            from: from.to_string(),
            to: to.to_string(),
            input_file: input_file.to_string(),
            output_file: output_file.map(|s| s.to_string()),
            show_progress: false,
            kit,
        }
    }

    /// Transform the lines of `content`, returning the output text and the
    /// number of transformed lines
    fn transform_lines(&self, content: &str) -> ProjResult<(String, usize)> {
        let transformer = CoordinateTransformer::new(self.kit.engine());
        let math_transform = transformer.find_transform(&CrsRef::from(&self.from), &CrsRef::from(&self.to))?;

        let lines: Vec<&str> = content.lines().collect();
        let progress = if self.show_progress {
            ProgressTracker::new(lines.len() as u64, "Transforming coordinates")
        } else {
            ProgressTracker::hidden()
        };

        let mut output = String::with_capacity(content.len());
        let mut count = 0;

        for (index, line) in lines.iter().enumerate() {
            match format_utils::parse_coordinate_line(line) {
                Ok(Some(coords)) => {
                    let transformed = transform_coordinates(math_transform.as_ref(), &coords)
                        .map_err(|e| line_error(index, e))?;
                    output.push_str(&format_utils::format_coordinates(&transformed));
                    count += 1;
                }
                Ok(None) => output.push_str(line),
                Err(e) => return Err(line_error(index, e)),
            }
            output.push('\n');
            progress.increment(1);
        }

        progress.finish();
        Ok((output, count))
    }
}

fn line_error(index: usize, error: ProjError) -> ProjError {
    ProjError::InvalidCoordinates(format!("line {}: {}", index + 1, error))
}

impl<'a> Command for BatchCommand<'a> {
    fn run(&self) -> ProjResult<String> {
        info!("Batch transforming {} from {} to {}", self.input_file, self.from, self.to);

        let content = fs::read_to_string(&self.input_file)?;
        let (output, count) = self.transform_lines(&content)?;
        debug!("Transformed {} coordinate lines", count);

        match &self.output_file {
            Some(path) => {
                let mut file = fs::File::create(path)?;
                file.write_all(output.as_bytes())?;
                Ok(format!("Transformed {} coordinates into {}", count, path))
            }
            None => Ok(output),
        }
    }
}
