//! Tests for resolving CRS references

extern crate std;

use crate::crs::{CrsRef, ProjError};
use crate::engine::tests::fake_engine::FakeEngine;
use crate::engine::CrsEngine;

#[test]
fn test_resolved_reference_is_returned_unchanged() {
    let engine = FakeEngine::new();
    let crs = engine.decode("FAKE:1").unwrap();
    let calls = engine.decode_calls.get();

    let resolved = CrsRef::from(&crs).resolve(&engine).unwrap();

    std::assert!(resolved.is_same_handle(&crs));
    std::assert_eq!(engine.decode_calls.get(), calls);
}

#[test]
fn test_named_reference_is_decoded() {
    let engine = FakeEngine::new();

    let resolved = CrsRef::from("fake:2").resolve(&engine).unwrap();

    std::assert_eq!(resolved.name(), "Fake shifted");
    std::assert_eq!(engine.decode_calls.get(), 1);
}

#[test]
fn test_epsg_reference_decodes_epsg_identifier() {
    let engine = FakeEngine::new();

    // The fake engine only knows the FAKE authority
    match CrsRef::from(4326u32).resolve(&engine) {
        Err(ProjError::UnknownAuthority(authority)) => std::assert_eq!(authority, "EPSG"),
        other => std::panic!("expected UnknownAuthority, got {:?}", other),
    }
}

#[test]
fn test_resolution_errors_pass_through() {
    let engine = FakeEngine::new();

    std::assert!(std::matches!(
        CrsRef::from("FAKE:99").resolve(&engine),
        Err(ProjError::NoSuchCode(_))
    ));
    std::assert!(std::matches!(
        CrsRef::from(String::from("fake")).resolve(&engine),
        Err(ProjError::InvalidIdentifier(_))
    ));
}

#[test]
fn test_display() {
    std::assert_eq!(CrsRef::from(3005u32).to_string(), "EPSG:3005");
    std::assert_eq!(CrsRef::from("epsg:4326").to_string(), "epsg:4326");
}
