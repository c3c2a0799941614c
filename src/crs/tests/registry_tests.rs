//! Tests for the CRS registry

extern crate std;

use crate::crs::{CrsDefinition, Crs, CrsRegistry, Identifier, ProjError};

const SAMPLE_REGISTRY: &str = r#"
[epsg.4326]
name = "WGS 84"
proj = "+proj=longlat +datum=WGS84 +no_defs"

[epsg.3005]
name = "NAD83 / BC Albers"
proj = "+proj=aea +lat_0=45 +lon_0=-126 +lat_1=50 +lat_2=58.5 +x_0=1000000 +y_0=0 +datum=NAD83 +units=m +no_defs"

[test.7]
proj = "+proj=merc +datum=WGS84"
"#;

fn anonymous(proj: &str) -> Crs {
    Crs::new(CrsDefinition {
        name: "custom".to_string(),
        identifier: None,
        proj: proj.to_string(),
    })
}

#[test]
fn test_from_str_reads_entries() {
    let registry = CrsRegistry::from_str(SAMPLE_REGISTRY).unwrap();

    std::assert_eq!(registry.len(), 3);
    std::assert_eq!(registry.entry(&Identifier::epsg(3005)).unwrap().name, "NAD83 / BC Albers");
    // Missing names fall back to the identifier
    std::assert_eq!(registry.entry(&Identifier::new("TEST", 7)).unwrap().name, "TEST:7");
}

#[test]
fn test_from_str_rejects_entry_without_definition() {
    let result = CrsRegistry::from_str("[epsg.1]\nname = \"broken\"\n");
    std::assert!(std::matches!(result, Err(ProjError::RegistryError(_))));
}

#[test]
fn test_from_str_rejects_non_numeric_code() {
    let result = CrsRegistry::from_str("[epsg.abc]\nproj = \"+proj=longlat\"\n");
    std::assert!(std::matches!(result, Err(ProjError::RegistryError(_))));
}

#[test]
fn test_builtin_registry_contains_common_codes() {
    let registry = CrsRegistry::new();

    for code in [4326, 3857, 3005, 4269] {
        std::assert!(registry.contains(&Identifier::epsg(code)), "missing EPSG:{}", code);
    }
}

#[test]
fn test_builtin_registry_generates_utm_zones() {
    let registry = CrsRegistry::new();

    let north = registry.entry(&Identifier::epsg(32633)).unwrap();
    std::assert_eq!(north.name, "WGS 84 / UTM zone 33N");
    std::assert!(north.proj.contains("+zone=33"));
    std::assert!(!north.proj.contains("+south"));

    let south = registry.entry(&Identifier::epsg(32760)).unwrap();
    std::assert!(south.proj.contains("+south"));
}

#[test]
fn test_decode_returns_cached_handle() {
    let registry = CrsRegistry::from_str(SAMPLE_REGISTRY).unwrap();

    let first = registry.decode(&Identifier::epsg(4326)).unwrap();
    let second = registry.decode(&Identifier::epsg(4326)).unwrap();

    std::assert!(first.is_same_handle(&second));
    std::assert_eq!(first.identifier(), Some(&Identifier::epsg(4326)));
    std::assert!(first.is_geographic());
}

#[test]
fn test_decode_unknown_code_and_authority() {
    let registry = CrsRegistry::from_str(SAMPLE_REGISTRY).unwrap();

    std::assert!(std::matches!(
        registry.decode(&Identifier::epsg(9999)),
        Err(ProjError::NoSuchCode(id)) if id == "EPSG:9999"
    ));
    std::assert!(std::matches!(
        registry.decode(&Identifier::new("IGNF", 1)),
        Err(ProjError::UnknownAuthority(a)) if a == "IGNF"
    ));
}

#[test]
fn test_lookup_uses_own_identifier() {
    let registry = CrsRegistry::from_str(SAMPLE_REGISTRY).unwrap();
    let crs = registry.decode(&Identifier::epsg(3005)).unwrap();

    std::assert_eq!(registry.lookup(&crs, false), Some(Identifier::epsg(3005)));
}

#[test]
fn test_lookup_exact_definition_without_fuzzy() {
    let registry = CrsRegistry::from_str(SAMPLE_REGISTRY).unwrap();
    let crs = anonymous("+proj=longlat +datum=WGS84 +no_defs");

    std::assert_eq!(registry.lookup(&crs, false), Some(Identifier::epsg(4326)));
}

#[test]
fn test_lookup_reordered_definition_needs_fuzzy() {
    let registry = CrsRegistry::from_str(SAMPLE_REGISTRY).unwrap();
    let crs = anonymous("+datum=WGS84 +proj=longlat");

    std::assert_eq!(registry.lookup(&crs, false), None);
    std::assert_eq!(registry.lookup(&crs, true), Some(Identifier::epsg(4326)));
}

#[test]
fn test_lookup_unknown_definition_is_absent() {
    let registry = CrsRegistry::from_str(SAMPLE_REGISTRY).unwrap();
    let crs = anonymous("+proj=laea +lat_0=10 +lon_0=20 +datum=WGS84");

    std::assert_eq!(registry.lookup(&crs, true), None);
}

#[test]
fn test_merge_overrides_and_extends() {
    let base = CrsRegistry::from_str(SAMPLE_REGISTRY).unwrap();
    let extra = CrsRegistry::from_str(r#"
[epsg.4326]
name = "Renamed"
proj = "+proj=longlat +datum=WGS84 +no_defs"

[epsg.900913]
name = "Google"
proj = "+proj=merc +a=6378137 +b=6378137"
"#).unwrap();

    let merged = base.merge(extra);
    std::assert_eq!(merged.len(), 4);
    std::assert_eq!(merged.entry(&Identifier::epsg(4326)).unwrap().name, "Renamed");
    std::assert!(merged.decode(&Identifier::epsg(900913)).is_ok());
}

#[test]
fn test_insert_invalidates_cached_handle() {
    let mut registry = CrsRegistry::empty();
    registry.insert(Identifier::epsg(1), "one", "+proj=longlat +datum=WGS84");
    let before = registry.decode(&Identifier::epsg(1)).unwrap();

    registry.insert(Identifier::epsg(1), "one again", "+proj=longlat +datum=NAD83");
    let after = registry.decode(&Identifier::epsg(1)).unwrap();

    std::assert!(!before.is_same_handle(&after));
    std::assert_eq!(after.name(), "one again");
}
