use geo_types::Geometry;
use lazy_static::lazy_static;
use log::info;
use wkt::{ToWkt, TryFromWkt};

use crate::coordinate::{BoundingBox, CoordinateTransformer, Payload};
use crate::crs::{Crs, CrsRef, CrsRegistry, ProjError, ProjResult};
use crate::engine::{CrsEngine, Proj4Engine};

lazy_static! {
    static ref DEFAULT_ENGINE: Proj4Engine = Proj4Engine::new();
}

/// The process-wide engine used by the free functions of this crate
pub fn default_engine() -> &'static Proj4Engine {
    &DEFAULT_ENGINE
}

/// Resolve a CRS reference with the default engine
pub fn to_crs(crs: impl Into<CrsRef>) -> ProjResult<Crs> {
    crs.into().resolve(default_engine())
}

/// Reproject a geometry or coordinate sequence with the default engine
///
/// ```
/// use projkit::transform;
///
/// let out = transform(vec![-125.0, 50.0], "epsg:4326", "epsg:3005").unwrap();
/// let coords = out.into_coordinates().unwrap();
/// assert!((coords[0] - 1071693.13).abs() < 1.0);
/// assert!((coords[1] - 554289.94).abs() < 1.0);
/// ```
pub fn transform(payload: impl Into<Payload>, src: impl Into<CrsRef>, dst: impl Into<CrsRef>) -> ProjResult<Payload> {
    CoordinateTransformer::new(default_engine()).transform(&payload.into(), &src.into(), &dst.into())
}

/// Look up the identifier of a CRS with the default engine
///
/// ```
/// let crs = projkit::to_crs("EPSG:4326").unwrap();
/// assert_eq!(projkit::srs(&crs).as_deref(), Some("EPSG:4326"));
/// ```
pub fn srs(crs: &Crs) -> Option<String> {
    CoordinateTransformer::new(default_engine()).srs(crs)
}

/// Main interface to the ProjKit library
pub struct ProjKit<E: CrsEngine = Proj4Engine> {
    engine: E,
}

impl ProjKit<Proj4Engine> {
    /// Create a ProjKit instance over the built-in CRS registry
    pub fn new() -> Self {
        ProjKit { engine: Proj4Engine::new() }
    }

    /// Create a ProjKit instance whose registry is extended by a TOML file
    ///
    /// Entries in the file replace built-in entries with the same code.
    pub fn with_registry_file(path: &str) -> ProjResult<Self> {
        let extra = CrsRegistry::from_file(path)?;
        info!("Loaded {} CRS definitions from {}", extra.len(), path);
        let registry = CrsRegistry::new().merge(extra);
        Ok(ProjKit { engine: Proj4Engine::with_registry(registry) })
    }
}

impl Default for ProjKit<Proj4Engine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CrsEngine> ProjKit<E> {
    /// Create a ProjKit instance over any engine
    pub fn with_engine(engine: E) -> Self {
        ProjKit { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn transformer(&self) -> CoordinateTransformer<'_> {
        CoordinateTransformer::new(&self.engine)
    }

    /// Resolve a CRS reference to a handle
    pub fn to_crs(&self, crs: impl Into<CrsRef>) -> ProjResult<Crs> {
        self.transformer().to_crs(&crs.into())
    }

    /// Reproject a geometry or coordinate sequence
    pub fn transform(&self, payload: impl Into<Payload>, src: impl Into<CrsRef>, dst: impl Into<CrsRef>) -> ProjResult<Payload> {
        self.transformer().transform(&payload.into(), &src.into(), &dst.into())
    }

    /// Reproject one coordinate tuple `x, y[, z ...]`
    pub fn transform_coordinates(&self, coords: &[f64], src: impl Into<CrsRef>, dst: impl Into<CrsRef>) -> ProjResult<Vec<f64>> {
        self.transform(coords, src, dst)?
            .into_coordinates()
            .ok_or_else(|| ProjError::GenericError("Expected coordinates back from transform".to_string()))
    }

    /// Reproject a geometry
    pub fn transform_geometry(&self, geometry: &Geometry<f64>, src: impl Into<CrsRef>, dst: impl Into<CrsRef>) -> ProjResult<Geometry<f64>> {
        self.transform(geometry.clone(), src, dst)?
            .into_geometry()
            .ok_or_else(|| ProjError::GenericError("Expected a geometry back from transform".to_string()))
    }

    /// Reproject a geometry given as WKT and return WKT
    pub fn transform_wkt(&self, wkt: &str, src: impl Into<CrsRef>, dst: impl Into<CrsRef>) -> ProjResult<String> {
        let geometry = Geometry::<f64>::try_from_wkt_str(wkt)
            .map_err(|e| ProjError::InvalidGeometry(e.to_string()))?;
        Ok(self.transform_geometry(&geometry, src, dst)?.wkt_string())
    }

    /// Reproject a bounding box
    pub fn transform_bbox(&self, bbox: &BoundingBox, src: impl Into<CrsRef>, dst: impl Into<CrsRef>) -> ProjResult<BoundingBox> {
        self.transformer().transform_bbox(bbox, &src.into(), &dst.into())
    }

    /// Identifier string of a CRS, or `None` when none is known
    pub fn srs(&self, crs: &Crs) -> Option<String> {
        self.transformer().srs(crs)
    }

    /// Multi-line description of a CRS
    pub fn describe(&self, crs: impl Into<CrsRef>) -> ProjResult<String> {
        let crs = self.to_crs(crs)?;

        let mut result = format!("Name: {}\n", crs.name());
        result.push_str(&format!("Identifier: {}\n",
                                 self.srs(&crs).unwrap_or_else(|| "(none)".to_string())));
        result.push_str(&format!("Type: {}\n",
                                 if crs.is_geographic() { "geographic" } else { "projected" }));
        result.push_str(&format!("Definition: {}\n", crs.proj_definition()));
        Ok(result)
    }
}
