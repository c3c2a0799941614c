//! Coordinate handling and reprojection
//!
//! This module provides the value types the library transforms and the
//! transform applier that routes them through the projection engine.

mod bbox;
mod geometry_transformer;
mod payload;
mod point;
mod transform;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::geometry_transformer::GeometryTransformer;
pub use self::payload::Payload;
pub use self::point::Point;
pub use self::transform::{transform_coordinates, transform_points, CoordinateTransformer};
