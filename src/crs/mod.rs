//! Coordinate reference systems
//!
//! Identifiers, resolved handles, references that name a CRS, and the
//! registry of definitions the engine decodes identifiers against.

pub mod errors;
mod handle;
mod identifier;
mod reference;
mod registry;
#[cfg(test)]
mod tests;

pub use self::errors::{ProjError, ProjResult};
pub use self::handle::{is_geographic_definition, normalize_definition, Crs, CrsDefinition};
pub use self::identifier::{Identifier, DEFAULT_AUTHORITY};
pub use self::reference::CrsRef;
pub use self::registry::{CrsRegistry, RegistryEntry};
