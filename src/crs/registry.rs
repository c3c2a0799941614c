//! Registry of CRS definitions keyed by authority code
//!
//! Definitions are data: the built-in set is embedded from
//! `crs_registry.toml` and parsed once, and callers can extend it with their
//! own TOML files using the same layout:
//!
//! ```toml
//! [epsg.3005]
//! name = "NAD83 / BC Albers"
//! proj = "+proj=aea +lat_0=45 +lon_0=-126 ..."
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::sync::Mutex;

use lazy_static::lazy_static;
use log::{debug, warn};

use super::errors::{ProjError, ProjResult};
use super::handle::{normalize_definition, Crs, CrsDefinition};
use super::identifier::{Identifier, DEFAULT_AUTHORITY};

lazy_static! {
    // Parse the embedded definitions once
    static ref BUILTIN_ENTRIES: BTreeMap<Identifier, RegistryEntry> = {
        let content = include_str!("../../crs_registry.toml");
        match parse_entries(content) {
            Ok(mut entries) => {
                add_utm_zones(&mut entries);
                entries
            }
            Err(e) => {
                warn!("Failed to parse built-in CRS definitions: {}", e);
                BTreeMap::new()
            }
        }
    };
}

/// A single registry record
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub name: String,
    pub proj: String,
}

/// Definition database consulted when decoding identifiers
///
/// Decoded handles are cached, so decoding the same identifier twice
/// yields the same handle.
pub struct CrsRegistry {
    entries: BTreeMap<Identifier, RegistryEntry>,
    cache: Mutex<HashMap<Identifier, Crs>>,
}

impl CrsRegistry {
    /// Registry holding the built-in definitions
    pub fn new() -> Self {
        Self::from_entries(BUILTIN_ENTRIES.clone())
    }

    /// Registry holding no definitions at all
    pub fn empty() -> Self {
        Self::from_entries(BTreeMap::new())
    }

    fn from_entries(entries: BTreeMap<Identifier, RegistryEntry>) -> Self {
        CrsRegistry {
            entries,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Parse a registry from a TOML string
    pub fn from_str(content: &str) -> ProjResult<Self> {
        Ok(Self::from_entries(parse_entries(content)?))
    }

    /// Load a registry from a TOML file
    pub fn from_file(path: &str) -> ProjResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Add the entries of `other`, replacing entries with the same identifier
    pub fn merge(mut self, other: CrsRegistry) -> Self {
        for (id, entry) in other.entries {
            if self.entries.contains_key(&id) {
                debug!("Overriding registry definition for {}", id);
            }
            self.entries.insert(id, entry);
        }
        self.cache = Mutex::new(HashMap::new());
        self
    }

    /// Add or replace one definition
    pub fn insert(&mut self, id: Identifier, name: &str, proj: &str) {
        self.entries.insert(id.clone(), RegistryEntry {
            name: name.to_string(),
            proj: proj.trim().to_string(),
        });
        if let Ok(mut cache) = self.cache.lock() {
            cache.remove(&id);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.entries.contains_key(id)
    }

    pub fn entry(&self, id: &Identifier) -> Option<&RegistryEntry> {
        self.entries.get(id)
    }

    fn knows_authority(&self, authority: &str) -> bool {
        self.entries.keys().any(|id| id.authority() == authority)
    }

    /// Resolve an identifier to a handle
    pub fn decode(&self, id: &Identifier) -> ProjResult<Crs> {
        let mut cache = self.cache.lock()
            .map_err(|_| ProjError::RegistryError("Handle cache is poisoned".to_string()))?;

        if let Some(crs) = cache.get(id) {
            return Ok(crs.clone());
        }

        let entry = match self.entries.get(id) {
            Some(entry) => entry,
            None if !self.knows_authority(id.authority()) => {
                return Err(ProjError::UnknownAuthority(id.authority().to_string()));
            }
            None => return Err(ProjError::NoSuchCode(id.to_string())),
        };

        debug!("Decoded {} as '{}'", id, entry.name);
        let crs = Crs::new(CrsDefinition {
            name: entry.name.clone(),
            identifier: Some(id.clone()),
            proj: entry.proj.clone(),
        });
        cache.insert(id.clone(), crs.clone());
        Ok(crs)
    }

    /// Find the identifier of a handle
    ///
    /// The handle's own identifier wins. Otherwise the first registry entry
    /// with an identical definition string is returned, and with `fuzzy`
    /// also the first entry whose parameters match in any order.
    pub fn lookup(&self, crs: &Crs, fuzzy: bool) -> Option<Identifier> {
        if let Some(id) = crs.identifier() {
            return Some(id.clone());
        }

        let definition = crs.proj_definition().trim();
        if let Some((id, _)) = self.entries.iter().find(|(_, e)| e.proj == definition) {
            return Some(id.clone());
        }

        if !fuzzy {
            return None;
        }

        let parameters = crs.normalized_parameters();
        self.entries
            .iter()
            .find(|(_, e)| normalize_definition(&e.proj) == parameters)
            .map(|(id, _)| {
                debug!("Approximate match for '{}': {}", definition, id);
                id.clone()
            })
    }
}

impl Default for CrsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `[authority.code]` tables with `name` and `proj` keys
fn parse_entries(content: &str) -> ProjResult<BTreeMap<Identifier, RegistryEntry>> {
    let toml_value: toml::Value = content.parse()
        .map_err(|e| ProjError::RegistryError(format!("Failed to parse TOML: {}", e)))?;

    let authorities = toml_value.as_table()
        .ok_or_else(|| ProjError::RegistryError("Registry root must be a table".to_string()))?;

    let mut entries = BTreeMap::new();
    for (authority, codes) in authorities {
        let codes = codes.as_table().ok_or_else(|| {
            ProjError::RegistryError(format!("Authority '{}' must be a table of codes", authority))
        })?;

        for (code, definition) in codes {
            let code = code.parse::<u32>().map_err(|_| {
                ProjError::RegistryError(format!("Invalid code '{}' under '{}'", code, authority))
            })?;
            let id = Identifier::new(authority, code);

            let proj = definition.get("proj").and_then(|v| v.as_str())
                .ok_or_else(|| ProjError::RegistryError(format!("{} has no 'proj' definition", id)))?;
            let name = definition.get("name").and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| id.to_string());

            entries.insert(id, RegistryEntry {
                name,
                proj: proj.trim().to_string(),
            });
        }
    }

    Ok(entries)
}

/// Generate WGS 84 / UTM definitions (EPSG 32601-32660 north, 32701-32760 south)
fn add_utm_zones(entries: &mut BTreeMap<Identifier, RegistryEntry>) {
    for zone in 1..=60u32 {
        for (base, hemisphere, south) in [(32600, 'N', ""), (32700, 'S', " +south")] {
            entries.entry(Identifier::new(DEFAULT_AUTHORITY, base + zone))
                .or_insert_with(|| RegistryEntry {
                    name: format!("WGS 84 / UTM zone {}{}", zone, hemisphere),
                    proj: format!("+proj=utm +zone={}{} +datum=WGS84 +units=m +no_defs", zone, south),
                });
        }
    }
}
