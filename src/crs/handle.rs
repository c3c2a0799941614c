//! Resolved coordinate reference system handles

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::identifier::Identifier;

// Parameters that never change the meaning of a definition
const IGNORED_PARAMETERS: [&str; 3] = ["+no_defs", "+type=crs", "+wktext"];

/// The data behind a CRS handle
#[derive(Debug, PartialEq)]
pub struct CrsDefinition {
    /// Human readable name
    pub name: String,
    /// Registry identifier, if the CRS came from the registry
    pub identifier: Option<Identifier>,
    /// PROJ.4 style definition string
    pub proj: String,
}

/// Opaque, immutable handle to a resolved reference system
///
/// Cloning is cheap and keeps the same underlying definition, so a clone
/// is the same handle as its original.
#[derive(Clone)]
pub struct Crs {
    inner: Arc<CrsDefinition>,
}

impl Crs {
    /// Wrap a definition in a new handle
    pub fn new(definition: CrsDefinition) -> Self {
        Crs {
            inner: Arc::new(definition),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Identifier recorded when the handle was decoded, if any
    pub fn identifier(&self) -> Option<&Identifier> {
        self.inner.identifier.as_ref()
    }

    /// The PROJ.4 definition string handed to the projection engine
    pub fn proj_definition(&self) -> &str {
        &self.inner.proj
    }

    /// True for longitude/latitude systems, whose coordinates are degrees
    pub fn is_geographic(&self) -> bool {
        is_geographic_definition(&self.inner.proj)
    }

    /// True when both values are the very same handle
    pub fn is_same_handle(&self, other: &Crs) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Order-insensitive parameter set used for approximate matching
    pub fn normalized_parameters(&self) -> BTreeSet<String> {
        normalize_definition(&self.inner.proj)
    }

    /// True when both definitions describe the same parameters
    pub fn is_equivalent_to(&self, other: &Crs) -> bool {
        self.is_same_handle(other) || self.normalized_parameters() == other.normalized_parameters()
    }
}

impl PartialEq for Crs {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_handle(other) || self.inner == other.inner
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crs")
            .field("name", &self.inner.name)
            .field("identifier", &self.inner.identifier)
            .field("proj", &self.inner.proj)
            .finish()
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.identifier {
            Some(id) => write!(f, "{} ({})", self.inner.name, id),
            None => write!(f, "{}", self.inner.name),
        }
    }
}

/// Check whether a definition string describes a geographic system
pub fn is_geographic_definition(proj: &str) -> bool {
    proj.split_whitespace().any(|p| {
        matches!(
            p.to_lowercase().as_str(),
            "+proj=longlat" | "+proj=latlong" | "+proj=lonlat" | "+proj=latlon"
        )
    })
}

/// Split a definition into a lower-cased parameter set
pub fn normalize_definition(proj: &str) -> BTreeSet<String> {
    proj.split_whitespace()
        .map(|p| p.to_lowercase())
        .filter(|p| !IGNORED_PARAMETERS.contains(&p.as_str()))
        .map(|p| match p.as_str() {
            "+proj=latlong" | "+proj=lonlat" | "+proj=latlon" => "+proj=longlat".to_string(),
            _ => p,
        })
        .collect()
}
