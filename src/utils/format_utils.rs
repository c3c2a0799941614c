//! Text formats for coordinates
//!
//! Parsing and printing of the comma-separated coordinate lines used by the
//! CLI and by batch files.

use crate::crs::{ProjError, ProjResult};

/// Parse a comma-separated list of numbers
pub fn parse_coordinates(text: &str) -> ProjResult<Vec<f64>> {
    text.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|_| ProjError::InvalidCoordinates(format!("'{}' is not a number", part)))
        })
        .collect()
}

/// Parse one line of a batch file
///
/// Blank lines and lines starting with `#` yield `None`.
pub fn parse_coordinate_line(line: &str) -> ProjResult<Option<Vec<f64>>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    parse_coordinates(trimmed).map(Some)
}

/// Format numbers as a comma-separated line
pub fn format_coordinates(coords: &[f64]) -> String {
    coords.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_line() {
        assert_eq!(parse_coordinate_line(" 1.5, -2 ").unwrap(), Some(vec![1.5, -2.0]));
        assert_eq!(parse_coordinate_line("   ").unwrap(), None);
        assert_eq!(parse_coordinate_line("# header").unwrap(), None);
        assert!(parse_coordinate_line("1;2").is_err());
    }

    #[test]
    fn test_format_coordinates() {
        assert_eq!(format_coordinates(&[1071693.5, -0.25]), "1071693.5,-0.25");
        assert_eq!(format_coordinates(&[]), "");
    }
}
