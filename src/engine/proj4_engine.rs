//! Projection engine backed by proj4rs and the CRS registry

use log::debug;
use proj4rs::Proj;

use super::math_transform::{IdentityTransform, MathTransform, Proj4Transform};
use super::CrsEngine;
use crate::crs::{Crs, CrsDefinition, CrsRegistry, Identifier, ProjError, ProjResult};

/// Engine that decodes identifiers through a [`CrsRegistry`] and builds
/// transforms with proj4rs
pub struct Proj4Engine {
    registry: CrsRegistry,
}

impl Proj4Engine {
    /// Engine over the built-in registry
    pub fn new() -> Self {
        Proj4Engine {
            registry: CrsRegistry::new(),
        }
    }

    /// Engine over a caller supplied registry
    pub fn with_registry(registry: CrsRegistry) -> Self {
        Proj4Engine { registry }
    }

    pub fn registry(&self) -> &CrsRegistry {
        &self.registry
    }

    /// Build an identifier-less CRS from a PROJ.4 definition
    ///
    /// The definition is checked with proj4rs before a handle is returned.
    pub fn parse_definition(&self, proj: &str) -> ProjResult<Crs> {
        let proj = proj.trim();
        Proj::from_proj_string(proj)
            .map_err(|e| ProjError::InvalidDefinition(format!("'{}': {}", proj, e)))?;

        Ok(Crs::new(CrsDefinition {
            name: proj.to_string(),
            identifier: None,
            proj: proj.to_string(),
        }))
    }

    fn instantiate(crs: &Crs) -> Result<Proj, String> {
        Proj::from_proj_string(crs.proj_definition()).map_err(|e| e.to_string())
    }
}

impl Default for Proj4Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl CrsEngine for Proj4Engine {
    fn decode(&self, identifier: &str) -> ProjResult<Crs> {
        if identifier.trim_start().starts_with('+') {
            return self.parse_definition(identifier);
        }

        let id = Identifier::parse(identifier)?;
        self.registry.decode(&id)
    }

    fn find_math_transform(&self, source: &Crs, target: &Crs) -> ProjResult<Box<dyn MathTransform>> {
        if source.is_equivalent_to(target) {
            debug!("Identity transform for {}", source);
            return Ok(Box::new(IdentityTransform));
        }

        let not_found = |reason: String| ProjError::TransformNotFound {
            source: source.to_string(),
            target: target.to_string(),
            reason,
        };

        let source_proj = Self::instantiate(source).map_err(&not_found)?;
        let target_proj = Self::instantiate(target).map_err(&not_found)?;

        if !source_proj.has_inverse() {
            return Err(not_found(format!("{} has no inverse projection", source)));
        }
        if !target_proj.has_forward() {
            return Err(not_found(format!("{} has no forward projection", target)));
        }

        debug!("Built transform {} -> {}", source, target);
        Ok(Box::new(Proj4Transform::new(
            source_proj,
            target_proj,
            source.to_string(),
            target.to_string(),
        )))
    }

    fn lookup_identifier(&self, crs: &Crs, fuzzy: bool) -> Option<Identifier> {
        self.registry.lookup(crs, fuzzy)
    }
}
