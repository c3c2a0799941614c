//! Projection engine interface
//!
//! The reprojection code only talks to the engine through [`CrsEngine`] and
//! [`MathTransform`], so the projection backend can be swapped (or faked in
//! tests) without touching the callers.

mod math_transform;
mod proj4_engine;
#[cfg(test)]
pub(crate) mod tests;

pub use self::math_transform::{IdentityTransform, MathTransform, Proj4Transform};
pub use self::proj4_engine::Proj4Engine;

use crate::crs::{Crs, Identifier, ProjResult};

/// Registry and transform lookup operations of a projection engine
pub trait CrsEngine {
    /// Resolve identifier text (e.g. `EPSG:4326`) to a handle
    fn decode(&self, identifier: &str) -> ProjResult<Crs>;

    /// Find the transform from `source` to `target`
    ///
    /// Fails with [`crate::crs::ProjError::TransformNotFound`] when no path exists.
    fn find_math_transform(&self, source: &Crs, target: &Crs) -> ProjResult<Box<dyn MathTransform>>;

    /// Find a known identifier for a handle; `fuzzy` allows approximate matches
    fn lookup_identifier(&self, crs: &Crs, fuzzy: bool) -> Option<Identifier>;
}
