//! CRS lookup and reprojection of geometries and coordinate sequences.
//!
//! ```
//! use projkit::{srs, to_crs, transform};
//! use geo_types::Point;
//!
//! let p = transform(Point::new(-125.0, 50.0), "epsg:4326", "epsg:3005").unwrap();
//! assert!(p.into_geometry().is_some());
//! let crs = to_crs("EPSG:4326").unwrap();
//! assert_eq!(srs(&crs).as_deref(), Some("EPSG:4326"));
//! ```

pub mod crs;
pub mod engine;
pub mod coordinate;
pub mod commands;
pub mod utils;
pub mod api;

pub use crate::api::{default_engine, srs, to_crs, transform, ProjKit};

pub use crs::{Crs, CrsRef, CrsRegistry, Identifier, ProjError, ProjResult};
pub use engine::{CrsEngine, MathTransform, Proj4Engine};
pub use coordinate::{BoundingBox, CoordinateTransformer, GeometryTransformer, Payload, Point};
