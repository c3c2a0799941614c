//! Tests for the proj4rs backed engine

extern crate std;

use approx::assert_abs_diff_eq;

use crate::crs::{CrsRegistry, Identifier, ProjError};
use crate::engine::{CrsEngine, Proj4Engine};

#[test]
fn test_decode_is_case_insensitive_and_cached() {
    let engine = Proj4Engine::new();

    let upper = engine.decode("EPSG:4326").unwrap();
    let lower = engine.decode("epsg:4326").unwrap();

    std::assert!(upper.is_same_handle(&lower));
    std::assert_eq!(upper.name(), "WGS 84");
}

#[test]
fn test_decode_definition_string() {
    let engine = Proj4Engine::new();
    let crs = engine.decode("+proj=longlat +datum=WGS84").unwrap();

    std::assert!(crs.identifier().is_none());
    std::assert!(crs.is_geographic());
}

#[test]
fn test_decode_failures_are_explicit() {
    let engine = Proj4Engine::new();

    std::assert!(std::matches!(engine.decode("EPSG:1"), Err(ProjError::NoSuchCode(_))));
    std::assert!(std::matches!(engine.decode("not a crs"), Err(ProjError::InvalidIdentifier(_))));
    std::assert!(std::matches!(engine.decode("+proj=nowhere"), Err(ProjError::InvalidDefinition(_))));
}

#[test]
fn test_equivalent_systems_get_identity() {
    let engine = Proj4Engine::new();
    let wgs84 = engine.decode("EPSG:4326").unwrap();
    let same = engine.parse_definition("+no_defs +datum=WGS84 +proj=longlat").unwrap();

    let transform = engine.find_math_transform(&wgs84, &same).unwrap();
    std::assert!(transform.is_identity());
}

#[test]
fn test_wgs84_to_web_mercator() {
    let engine = Proj4Engine::new();
    let wgs84 = engine.decode("EPSG:4326").unwrap();
    let mercator = engine.decode("EPSG:3857").unwrap();

    let transform = engine.find_math_transform(&wgs84, &mercator).unwrap();
    let (x, y) = transform.transform_coord(10.0, 45.0).unwrap();

    // Spherical mercator on the WGS 84 semi-major axis
    let radius = 6378137.0_f64;
    assert_abs_diff_eq!(x, radius * 10f64.to_radians(), epsilon = 1e-3);
    assert_abs_diff_eq!(y, radius * (std::f64::consts::FRAC_PI_4 + 45f64.to_radians() / 2.0).tan().ln(), epsilon = 1e-3);
}

#[test]
fn test_transform_several_points_at_once() {
    let engine = Proj4Engine::new();
    let wgs84 = engine.decode("EPSG:4326").unwrap();
    let mercator = engine.decode("EPSG:3857").unwrap();
    let forward = engine.find_math_transform(&wgs84, &mercator).unwrap();
    let inverse = engine.find_math_transform(&mercator, &wgs84).unwrap();

    let src = [0.0, 0.0, -75.0, 40.0, 139.7, 35.7];
    let mut projected = [0.0; 6];
    let mut back = [0.0; 6];
    forward.transform(&src, 0, &mut projected, 0, 3).unwrap();
    inverse.transform(&projected, 0, &mut back, 0, 3).unwrap();

    assert_abs_diff_eq!(projected[0], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(projected[1], 0.0, epsilon = 1e-6);
    for (expected, actual) in src.iter().zip(back.iter()) {
        assert_abs_diff_eq!(*expected, *actual, epsilon = 1e-8);
    }
}

#[test]
fn test_broken_definition_has_no_transform() {
    let mut registry = CrsRegistry::new();
    registry.insert(Identifier::new("TEST", 1), "broken", "+proj=nonexistent");
    let engine = Proj4Engine::with_registry(registry);

    let broken = engine.decode("TEST:1").unwrap();
    let wgs84 = engine.decode("EPSG:4326").unwrap();

    match engine.find_math_transform(&wgs84, &broken) {
        Err(ProjError::TransformNotFound { target, .. }) => std::assert!(target.contains("broken")),
        Err(other) => std::panic!("expected TransformNotFound, got {}", other),
        Ok(_) => std::panic!("expected TransformNotFound, got a transform"),
    }
}

#[test]
fn test_lookup_identifier_fuzzy_matches_reordered_definition() {
    let engine = Proj4Engine::new();
    let custom = engine.parse_definition("+datum=WGS84 +proj=longlat").unwrap();

    std::assert_eq!(engine.lookup_identifier(&custom, false), None);
    std::assert_eq!(engine.lookup_identifier(&custom, true), Some(Identifier::epsg(4326)));
}
