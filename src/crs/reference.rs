//! CRS references: either a resolved handle or something that names one

use std::fmt;

use log::debug;

use super::errors::ProjResult;
use super::handle::Crs;
use super::identifier::Identifier;
use crate::engine::CrsEngine;

/// A reference to a coordinate reference system
#[derive(Debug, Clone)]
pub enum CrsRef {
    /// An already resolved handle
    Resolved(Crs),
    /// Identifier text such as `EPSG:4326`, decoded by the engine
    Named(String),
    /// A bare EPSG code
    Epsg(u32),
}

impl CrsRef {
    /// Resolve this reference to a handle
    ///
    /// A `Resolved` reference is returned as the same handle. Named and EPSG
    /// references are decoded by the engine, whose errors are passed through.
    pub fn resolve(&self, engine: &dyn CrsEngine) -> ProjResult<Crs> {
        match self {
            CrsRef::Resolved(crs) => Ok(crs.clone()),
            CrsRef::Named(name) => {
                debug!("Resolving CRS '{}'", name);
                engine.decode(name)
            }
            CrsRef::Epsg(code) => engine.decode(&Identifier::epsg(*code).to_string()),
        }
    }
}

impl fmt::Display for CrsRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrsRef::Resolved(crs) => write!(f, "{}", crs),
            CrsRef::Named(name) => write!(f, "{}", name),
            CrsRef::Epsg(code) => write!(f, "{}", Identifier::epsg(*code)),
        }
    }
}

impl From<Crs> for CrsRef {
    fn from(crs: Crs) -> Self {
        CrsRef::Resolved(crs)
    }
}

impl From<&Crs> for CrsRef {
    fn from(crs: &Crs) -> Self {
        CrsRef::Resolved(crs.clone())
    }
}

impl From<&str> for CrsRef {
    fn from(name: &str) -> Self {
        CrsRef::Named(name.to_string())
    }
}

impl From<String> for CrsRef {
    fn from(name: String) -> Self {
        CrsRef::Named(name)
    }
}

impl From<&String> for CrsRef {
    fn from(name: &String) -> Self {
        CrsRef::Named(name.clone())
    }
}

impl From<u32> for CrsRef {
    fn from(code: u32) -> Self {
        CrsRef::Epsg(code)
    }
}

impl From<&Identifier> for CrsRef {
    fn from(id: &Identifier) -> Self {
        CrsRef::Named(id.to_string())
    }
}
