//! Values the transform applier accepts

use geo_types::Geometry;

/// Either a geometry or a flat coordinate sequence
///
/// Coordinates hold one tuple, `x, y` followed by any extra ordinates. A
/// transformed payload keeps its variant, and a coordinate sequence keeps
/// its length.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Geometry(Geometry<f64>),
    Coordinates(Vec<f64>),
}

impl Payload {
    pub fn into_geometry(self) -> Option<Geometry<f64>> {
        match self {
            Payload::Geometry(g) => Some(g),
            Payload::Coordinates(_) => None,
        }
    }

    pub fn into_coordinates(self) -> Option<Vec<f64>> {
        match self {
            Payload::Coordinates(c) => Some(c),
            Payload::Geometry(_) => None,
        }
    }
}

impl From<Geometry<f64>> for Payload {
    fn from(g: Geometry<f64>) -> Self {
        Payload::Geometry(g)
    }
}

impl From<geo_types::Point<f64>> for Payload {
    fn from(p: geo_types::Point<f64>) -> Self {
        Payload::Geometry(Geometry::Point(p))
    }
}

impl From<geo_types::LineString<f64>> for Payload {
    fn from(l: geo_types::LineString<f64>) -> Self {
        Payload::Geometry(Geometry::LineString(l))
    }
}

impl From<geo_types::Polygon<f64>> for Payload {
    fn from(p: geo_types::Polygon<f64>) -> Self {
        Payload::Geometry(Geometry::Polygon(p))
    }
}

impl From<Vec<f64>> for Payload {
    fn from(c: Vec<f64>) -> Self {
        Payload::Coordinates(c)
    }
}

impl From<&[f64]> for Payload {
    fn from(c: &[f64]) -> Self {
        Payload::Coordinates(c.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Payload {
    fn from(c: [f64; N]) -> Self {
        Payload::Coordinates(c.to_vec())
    }
}

impl From<(f64, f64)> for Payload {
    fn from((x, y): (f64, f64)) -> Self {
        Payload::Coordinates(vec![x, y])
    }
}
