//! Geometry-level adapter over a [`MathTransform`]

use geo::MapCoords;
use geo_types::{Coord, Geometry};

use crate::crs::ProjResult;
use crate::engine::MathTransform;

/// Applies a math transform to every coordinate of a geometry
pub struct GeometryTransformer<'a> {
    math_transform: &'a dyn MathTransform,
}

impl<'a> GeometryTransformer<'a> {
    pub fn new(math_transform: &'a dyn MathTransform) -> Self {
        GeometryTransformer { math_transform }
    }

    /// Produce a transformed copy of `geometry`
    pub fn transform(&self, geometry: &Geometry<f64>) -> ProjResult<Geometry<f64>> {
        if self.math_transform.is_identity() {
            return Ok(geometry.clone());
        }

        let math_transform = self.math_transform;
        geometry.try_map_coords(|c: Coord<f64>| -> ProjResult<Coord<f64>> {
            let (x, y) = math_transform.transform_coord(c.x, c.y)?;
            Ok(Coord { x, y })
        })
    }
}
