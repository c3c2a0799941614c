//! Custom error types for CRS resolution and reprojection

use std::fmt;
use std::io;

/// Errors raised while resolving reference systems or transforming coordinates
#[derive(Debug)]
pub enum ProjError {
    /// I/O error
    IoError(io::Error),
    /// Identifier text could not be parsed as AUTHORITY:CODE
    InvalidIdentifier(String),
    /// Authority is not known to the registry
    UnknownAuthority(String),
    /// Authority is known but the code is not
    NoSuchCode(String),
    /// A CRS definition string was rejected by the projection engine
    InvalidDefinition(String),
    /// No transform path exists between two reference systems
    TransformNotFound {
        source: String,
        target: String,
        reason: String,
    },
    /// The engine failed while transforming a coordinate
    TransformFailed(String),
    /// Coordinate buffer has the wrong shape
    InvalidCoordinates(String),
    /// Geometry text could not be parsed
    InvalidGeometry(String),
    /// Registry file is malformed
    RegistryError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ProjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjError::IoError(e) => write!(f, "I/O error: {}", e),
            ProjError::InvalidIdentifier(id) => write!(f, "Invalid CRS identifier: '{}'", id),
            ProjError::UnknownAuthority(a) => write!(f, "Unknown CRS authority: {}", a),
            ProjError::NoSuchCode(id) => write!(f, "No CRS found for code {}", id),
            ProjError::InvalidDefinition(msg) => write!(f, "Invalid CRS definition: {}", msg),
            ProjError::TransformNotFound { source, target, reason } => write!(
                f, "No transform found from {} to {}: {}", source, target, reason
            ),
            ProjError::TransformFailed(msg) => write!(f, "Transform failed: {}", msg),
            ProjError::InvalidCoordinates(msg) => write!(f, "Invalid coordinates: {}", msg),
            ProjError::InvalidGeometry(msg) => write!(f, "Invalid geometry: {}", msg),
            ProjError::RegistryError(msg) => write!(f, "Registry error: {}", msg),
            ProjError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for ProjError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProjError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ProjError {
    fn from(error: io::Error) -> Self {
        ProjError::IoError(error)
    }
}

impl From<String> for ProjError {
    fn from(msg: String) -> Self {
        ProjError::GenericError(msg)
    }
}

/// Result type for CRS operations
pub type ProjResult<T> = Result<T, ProjError>;
