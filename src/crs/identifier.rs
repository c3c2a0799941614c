//! Authority identifiers such as `EPSG:4326`

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::{ProjError, ProjResult};

/// Authority assumed for bare numeric codes
pub const DEFAULT_AUTHORITY: &str = "EPSG";

lazy_static! {
    // AUTHORITY:CODE, optionally as an OGC URN with or without a version
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(
        r"(?i)^(?:urn:ogc:def:crs:)?([a-z][a-z0-9_]*):(?:[0-9.]*:)?([0-9]+)$"
    ).expect("identifier pattern is valid");
}

/// An authority-qualified CRS code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    authority: String,
    code: u32,
}

impl Identifier {
    /// Create an identifier; the authority is upper-cased
    pub fn new(authority: &str, code: u32) -> Self {
        Identifier {
            authority: authority.trim().to_uppercase(),
            code,
        }
    }

    /// Shorthand for an EPSG identifier
    pub fn epsg(code: u32) -> Self {
        Identifier::new(DEFAULT_AUTHORITY, code)
    }

    /// Parse identifier text
    ///
    /// Accepts `EPSG:4326` in any case, the OGC URN forms
    /// `urn:ogc:def:crs:EPSG::4326` / `urn:ogc:def:crs:EPSG:6.6:4326`,
    /// and a bare numeric code, which is taken as EPSG.
    pub fn parse(text: &str) -> ProjResult<Self> {
        let trimmed = text.trim();

        if let Ok(code) = trimmed.parse::<u32>() {
            return Ok(Identifier::epsg(code));
        }

        let captures = IDENTIFIER_PATTERN
            .captures(trimmed)
            .ok_or_else(|| ProjError::InvalidIdentifier(text.to_string()))?;

        let code = captures[2]
            .parse::<u32>()
            .map_err(|_| ProjError::InvalidIdentifier(text.to_string()))?;

        Ok(Identifier::new(&captures[1], code))
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn code(&self) -> u32 {
        self.code
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.authority, self.code)
    }
}

impl FromStr for Identifier {
    type Err = ProjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::parse(s)
    }
}
