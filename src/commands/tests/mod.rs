//! Tests for CLI commands

extern crate std;

use std::fs;

use crate::api::ProjKit;
use crate::commands::{build_cli, BatchCommand, Command, CommandFactory, ProjkitCommandFactory, SrsCommand};
use crate::commands::srs_command::NO_IDENTIFIER;
use crate::crs::ProjError;

fn run_cli(args: &[&str], kit: &ProjKit) -> Result<String, ProjError> {
    let matches = build_cli().try_get_matches_from(args).unwrap();
    ProjkitCommandFactory::new().create_command(&matches, kit)?.run()
}

fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(std::format!("projkit-{}-{}", std::process::id(), name))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_coordinate_command_accepts_negative_values() {
    let kit = ProjKit::new();
    let output = run_cli(&["projkit", "--from", "epsg:4326", "--to", "epsg:4326", "--coordinate", "-125,50"], &kit).unwrap();

    std::assert_eq!(output, "-125,50");
}

#[test]
fn test_geometry_command_outputs_wkt() {
    let kit = ProjKit::new();
    let output = run_cli(&["projkit", "-f", "EPSG:4326", "-t", "EPSG:3005", "-g", "POINT(-125 50)"], &kit).unwrap();

    std::assert!(output.starts_with("POINT("), "unexpected output {}", output);
}

#[test]
fn test_invalid_wkt_is_reported() {
    let kit = ProjKit::new();
    let result = run_cli(&["projkit", "-f", "EPSG:4326", "-t", "EPSG:3005", "-g", "POINT(-125"], &kit);

    std::assert!(std::matches!(result, Err(ProjError::InvalidGeometry(_))));
}

#[test]
fn test_transform_requires_both_systems() {
    let kit = ProjKit::new();
    let result = run_cli(&["projkit", "--from", "epsg:4326", "--coordinate", "1,2"], &kit);

    std::assert!(std::matches!(result, Err(ProjError::GenericError(_))));
}

#[test]
fn test_no_action_is_an_error() {
    let kit = ProjKit::new();
    std::assert!(run_cli(&["projkit"], &kit).is_err());
}

#[test]
fn test_srs_command() {
    let kit = ProjKit::new();

    std::assert_eq!(run_cli(&["projkit", "--srs", "epsg:3857"], &kit).unwrap(), "EPSG:3857");
    std::assert_eq!(SrsCommand::from_parts("+proj=longlat +datum=WGS84 +no_defs", &kit).run().unwrap(), "EPSG:4326");
    std::assert_eq!(SrsCommand::from_parts("+proj=eqc +lat_ts=30 +datum=WGS84", &kit).run().unwrap(), NO_IDENTIFIER);
}

#[test]
fn test_info_command() {
    let kit = ProjKit::new();
    let output = run_cli(&["projkit", "--info", "3005"], &kit).unwrap();

    std::assert!(output.contains("Name: NAD83 / BC Albers"));
    std::assert!(output.contains("Identifier: EPSG:3005"));
    std::assert!(output.contains("Type: projected"));
}

#[test]
fn test_batch_command_preserves_layout() {
    let kit = ProjKit::new();
    let input = temp_path("batch-in.txt");
    let output = temp_path("batch-out.txt");
    fs::write(&input, "# lon,lat\n0,0\n\n10,20\n").unwrap();

    let report = BatchCommand::from_parts("EPSG:4326", "EPSG:4326", &input, Some(&output), &kit).run().unwrap();

    std::assert!(report.starts_with("Transformed 2 coordinates"));
    std::assert_eq!(fs::read_to_string(&output).unwrap(), "# lon,lat\n0,0\n\n10,20\n");

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}

#[test]
fn test_batch_command_reports_bad_line() {
    let kit = ProjKit::new();
    let input = temp_path("batch-bad.txt");
    fs::write(&input, "0,0\n1,x\n").unwrap();

    let result = BatchCommand::from_parts("EPSG:4326", "EPSG:3857", &input, None, &kit).run();

    match result {
        Err(ProjError::InvalidCoordinates(msg)) => std::assert!(msg.starts_with("line 2"), "{}", msg),
        other => std::panic!("expected InvalidCoordinates, got {:?}", other),
    }
    let _ = fs::remove_file(&input);
}
