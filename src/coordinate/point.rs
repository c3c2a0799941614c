//! Point structure for representing coordinates

use crate::crs::{ProjError, ProjResult};

/// A 2D point in some coordinate system
///
/// For geographic systems `x` is the longitude and `y` the latitude, both
/// in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Parse a point from a string (format: "x,y")
    pub fn from_string(coord_str: &str) -> ProjResult<Self> {
        let parts: Vec<&str> = coord_str.split(',').collect();
        if parts.len() != 2 {
            return Err(ProjError::InvalidCoordinates(format!(
                "'{}' must be in format 'x,y'", coord_str.trim()
            )));
        }

        let x = parts[0].trim().parse::<f64>()
            .map_err(|_| ProjError::InvalidCoordinates(format!("Invalid x value '{}'", parts[0].trim())))?;
        let y = parts[1].trim().parse::<f64>()
            .map_err(|_| ProjError::InvalidCoordinates(format!("Invalid y value '{}'", parts[1].trim())))?;

        Ok(Point::new(x, y))
    }

    /// Flat `[x, y]` coordinate sequence
    pub fn to_coordinates(&self) -> Vec<f64> {
        vec![self.x, self.y]
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(p: Point) -> Self {
        geo_types::Point::new(p.x, p.y)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(p: geo_types::Point<f64>) -> Self {
        Point::new(p.x(), p.y())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
