//! Coordinate transformation functionality

use log::debug;

use super::bbox::BoundingBox;
use super::geometry_transformer::GeometryTransformer;
use super::payload::Payload;
use super::point::Point;
use crate::crs::{Crs, CrsRef, ProjError, ProjResult};
use crate::engine::{CrsEngine, MathTransform};

/// Samples per bounding box edge when reprojecting an envelope
const BBOX_EDGE_SEGMENTS: usize = 8;

/// Transformer for converting payloads between coordinate systems
///
/// Every call resolves its references and asks the engine for a fresh
/// transform; nothing is cached here.
pub struct CoordinateTransformer<'a> {
    engine: &'a dyn CrsEngine,
}

impl<'a> CoordinateTransformer<'a> {
    pub fn new(engine: &'a dyn CrsEngine) -> Self {
        CoordinateTransformer { engine }
    }

    /// Resolve a reference to a handle
    pub fn to_crs(&self, crs: &CrsRef) -> ProjResult<Crs> {
        crs.resolve(self.engine)
    }

    /// Resolve both references and look up the transform between them
    pub fn find_transform(&self, src: &CrsRef, dst: &CrsRef) -> ProjResult<Box<dyn MathTransform>> {
        let source = self.to_crs(src)?;
        let target = self.to_crs(dst)?;
        debug!("Looking up transform {} -> {}", source, target);
        self.engine.find_math_transform(&source, &target)
    }

    /// Reproject a geometry or coordinate sequence from `src` to `dst`
    ///
    /// The result has the same variant as the input. Geometries are copied,
    /// never modified in place.
    pub fn transform(&self, payload: &Payload, src: &CrsRef, dst: &CrsRef) -> ProjResult<Payload> {
        let math_transform = self.find_transform(src, dst)?;

        match payload {
            Payload::Coordinates(coords) => {
                transform_coordinates(math_transform.as_ref(), coords).map(Payload::Coordinates)
            }
            Payload::Geometry(geometry) => {
                GeometryTransformer::new(math_transform.as_ref())
                    .transform(geometry)
                    .map(Payload::Geometry)
            }
        }
    }

    /// Transform a single point
    pub fn transform_point(&self, point: &Point, src: &CrsRef, dst: &CrsRef) -> ProjResult<Point> {
        let math_transform = self.find_transform(src, dst)?;
        let (x, y) = math_transform.transform_coord(point.x, point.y)?;
        Ok(Point::new(x, y))
    }

    /// Transform a bounding box between coordinate systems
    ///
    /// The result is the envelope of the reprojected boundary, tagged with
    /// the identifier of `dst` when one is known.
    pub fn transform_bbox(&self, bbox: &BoundingBox, src: &CrsRef, dst: &CrsRef) -> ProjResult<BoundingBox> {
        let target = self.to_crs(dst)?;
        let math_transform = self.engine.find_math_transform(&self.to_crs(src)?, &target)?;

        let boundary: Vec<f64> = bbox.boundary_points(BBOX_EDGE_SEGMENTS)
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect();
        let transformed = transform_points(math_transform.as_ref(), &boundary)?;

        let points: Vec<Point> = transformed
            .chunks_exact(2)
            .map(|c| Point::new(c[0], c[1]))
            .collect();

        let mut result = BoundingBox::from_points(&points)
            .ok_or_else(|| ProjError::InvalidCoordinates("Bounding box has no boundary".to_string()))?;
        result.crs = self.engine.lookup_identifier(&target, false);
        Ok(result)
    }

    /// Identifier string of a CRS, or `None` when the engine knows none
    pub fn srs(&self, crs: &Crs) -> Option<String> {
        self.engine.lookup_identifier(crs, true).map(|id| id.to_string())
    }
}

/// Apply a transform to one coordinate tuple
///
/// The leading `x, y` pair is reprojected; any further ordinates are carried
/// through unchanged, so the output has the input's length.
pub fn transform_coordinates(math_transform: &dyn MathTransform, coords: &[f64]) -> ProjResult<Vec<f64>> {
    if coords.len() < 2 {
        return Err(ProjError::InvalidCoordinates(format!(
            "expected at least 2 values, got {}", coords.len()
        )));
    }

    let mut transformed = coords.to_vec();
    math_transform.transform(coords, 0, &mut transformed, 0, 1)?;
    Ok(transformed)
}

/// Apply a transform to an interleaved `x, y, x, y ...` point buffer
pub fn transform_points(math_transform: &dyn MathTransform, points: &[f64]) -> ProjResult<Vec<f64>> {
    if points.len() % 2 != 0 {
        return Err(ProjError::InvalidCoordinates(format!(
            "interleaved points need an even number of values, got {}", points.len()
        )));
    }

    let mut transformed = vec![0.0; points.len()];
    math_transform.transform(points, 0, &mut transformed, 0, points.len() / 2)?;
    Ok(transformed)
}
