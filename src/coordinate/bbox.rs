//! Bounding box structure for defining regions

use super::point::Point;
use crate::crs::{Identifier, ProjError, ProjResult};

/// An axis-aligned envelope in a coordinate system
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    /// Identifier of the coordinate system, when known
    pub crs: Option<Identifier>,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
            crs: None,
        }
    }

    /// Smallest box holding all points, or `None` for an empty slice
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = BoundingBox::new(first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> ProjResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(ProjError::InvalidCoordinates(
                "Bounding box must have 4 comma-separated values".to_string()));
        }

        let mut values = [0.0; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part.trim().parse::<f64>()
                .map_err(|_| ProjError::InvalidCoordinates(format!("Invalid bounding box value '{}'", part.trim())))?;
        }

        let [min_x, min_y, max_x, max_y] = values;
        if min_x > max_x || min_y > max_y {
            return Err(ProjError::InvalidCoordinates(format!(
                "Bounding box minimum exceeds maximum: {}", bbox_str.trim()
            )));
        }

        Ok(BoundingBox::new(min_x, min_y, max_x, max_y))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x &&
            point.y >= self.min_y && point.y <= self.max_y
    }

    /// Points along the boundary, `segments` per edge, corners included once
    ///
    /// Edges of a box are curves in most other projections, so reprojecting
    /// only the corners can miss the true extent.
    pub fn boundary_points(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let mut points = Vec::with_capacity(segments * 4);

        let corners = [
            (self.min_x, self.min_y),
            (self.max_x, self.min_y),
            (self.max_x, self.max_y),
            (self.min_x, self.max_y),
        ];

        for i in 0..4 {
            let (x0, y0) = corners[i];
            let (x1, y1) = corners[(i + 1) % 4];
            for s in 0..segments {
                let t = s as f64 / segments as f64;
                points.push(Point::new(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t));
            }
        }

        points
    }
}
