//! Point transforms between two reference systems

use proj4rs::transform::transform;
use proj4rs::Proj;

use crate::crs::{ProjError, ProjResult};

/// Values per point in the interleaved buffers
const DIMENSIONS: usize = 2;

/// A mathematical mapping from one CRS to another
///
/// Buffers are interleaved `x, y` pairs. Geographic systems use degrees with
/// longitude first.
pub trait MathTransform {
    /// Transform `num_points` points read from `src` at `src_offset` and
    /// write them into `dst` at `dst_offset`
    fn transform(
        &self,
        src: &[f64],
        src_offset: usize,
        dst: &mut [f64],
        dst_offset: usize,
        num_points: usize,
    ) -> ProjResult<()>;

    /// True if the transform leaves coordinates unchanged
    fn is_identity(&self) -> bool {
        false
    }

    /// Transform a single point
    fn transform_coord(&self, x: f64, y: f64) -> ProjResult<(f64, f64)> {
        let mut out = [0.0; DIMENSIONS];
        self.transform(&[x, y], 0, &mut out, 0, 1)?;
        Ok((out[0], out[1]))
    }
}

/// Make sure both buffers hold `num_points` points at their offsets
fn check_bounds(src: &[f64], src_offset: usize, dst: &[f64], dst_offset: usize, num_points: usize) -> ProjResult<()> {
    let needed = num_points.checked_mul(DIMENSIONS).ok_or_else(|| {
        ProjError::InvalidCoordinates(format!("{} points overflow the buffer size", num_points))
    })?;
    if src_offset.checked_add(needed).map_or(true, |end| end > src.len()) {
        return Err(ProjError::InvalidCoordinates(format!(
            "source buffer of length {} cannot supply {} points from offset {}",
            src.len(), num_points, src_offset
        )));
    }
    if dst_offset.checked_add(needed).map_or(true, |end| end > dst.len()) {
        return Err(ProjError::InvalidCoordinates(format!(
            "target buffer of length {} cannot hold {} points from offset {}",
            dst.len(), num_points, dst_offset
        )));
    }
    Ok(())
}

/// Transform between equivalent systems
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTransform;

impl MathTransform for IdentityTransform {
    fn transform(&self, src: &[f64], src_offset: usize, dst: &mut [f64], dst_offset: usize, num_points: usize) -> ProjResult<()> {
        check_bounds(src, src_offset, dst, dst_offset, num_points)?;
        let len = num_points * DIMENSIONS;
        dst[dst_offset..dst_offset + len].copy_from_slice(&src[src_offset..src_offset + len]);
        Ok(())
    }

    fn is_identity(&self) -> bool {
        true
    }
}

/// Transform backed by a pair of proj4rs projections
pub struct Proj4Transform {
    source: Proj,
    target: Proj,
    /// Label of the source CRS, used in error messages
    source_label: String,
    /// Label of the target CRS, used in error messages
    target_label: String,
}

impl Proj4Transform {
    pub fn new(source: Proj, target: Proj, source_label: String, target_label: String) -> Self {
        Proj4Transform {
            source,
            target,
            source_label,
            target_label,
        }
    }
}

impl std::fmt::Debug for Proj4Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proj4Transform")
            .field("source", &self.source_label)
            .field("target", &self.target_label)
            .finish_non_exhaustive()
    }
}

impl MathTransform for Proj4Transform {
    fn transform(&self, src: &[f64], src_offset: usize, dst: &mut [f64], dst_offset: usize, num_points: usize) -> ProjResult<()> {
        check_bounds(src, src_offset, dst, dst_offset, num_points)?;

        // proj4rs works in radians for geographic systems
        let source_is_geographic = self.source.is_latlong();
        let target_is_geographic = self.target.is_latlong();

        let mut points: Vec<(f64, f64, f64)> = src[src_offset..src_offset + num_points * DIMENSIONS]
            .chunks_exact(DIMENSIONS)
            .map(|c| {
                if source_is_geographic {
                    (c[0].to_radians(), c[1].to_radians(), 0.0)
                } else {
                    (c[0], c[1], 0.0)
                }
            })
            .collect();

        transform(&self.source, &self.target, points.as_mut_slice()).map_err(|e| {
            ProjError::TransformFailed(format!("{} to {}: {}", self.source_label, self.target_label, e))
        })?;

        for (i, (x, y, _)) in points.into_iter().enumerate() {
            let (x, y) = if target_is_geographic {
                (x.to_degrees(), y.to_degrees())
            } else {
                (x, y)
            };
            if !x.is_finite() || !y.is_finite() {
                return Err(ProjError::TransformFailed(format!(
                    "{} to {}: point {} has no finite image", self.source_label, self.target_label, i
                )));
            }
            dst[dst_offset + i * DIMENSIONS] = x;
            dst[dst_offset + i * DIMENSIONS + 1] = y;
        }

        Ok(())
    }
}
