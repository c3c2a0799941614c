//! Tests for identifier parsing

extern crate std;

use crate::crs::{Identifier, ProjError};

#[test]
fn test_parse_upper_and_lower_case() {
    let upper = Identifier::parse("EPSG:4326").unwrap();
    let lower = Identifier::parse("epsg:4326").unwrap();

    std::assert_eq!(upper, lower);
    std::assert_eq!(upper.authority(), "EPSG");
    std::assert_eq!(upper.code(), 4326);
    std::assert_eq!(lower.to_string(), "EPSG:4326");
}

#[test]
fn test_parse_bare_code_defaults_to_epsg() {
    let id = Identifier::parse(" 3005 ").unwrap();
    std::assert_eq!(id, Identifier::epsg(3005));
}

#[test]
fn test_parse_ogc_urn() {
    std::assert_eq!(Identifier::parse("urn:ogc:def:crs:EPSG::3857").unwrap(), Identifier::epsg(3857));
    std::assert_eq!(Identifier::parse("urn:ogc:def:crs:EPSG:6.6:4326").unwrap(), Identifier::epsg(4326));
}

#[test]
fn test_parse_other_authority() {
    let id: Identifier = "esri:102100".parse().unwrap();
    std::assert_eq!(id.authority(), "ESRI");
    std::assert_eq!(id.code(), 102100);
}

#[test]
fn test_parse_rejects_malformed_text() {
    for text in ["", "EPSG", "EPSG:", "EPSG:abc", "4326:EPSG", "EPSG:43 26", "-4326"] {
        match Identifier::parse(text) {
            Err(ProjError::InvalidIdentifier(original)) => std::assert_eq!(original, text),
            other => std::panic!("expected InvalidIdentifier for '{}', got {:?}", text, other),
        }
    }
}
