use predicates::str::contains;
use std::fs;

mod common;
use common::{rwo, temp_path, write_input};

const PACKAGES: &str = "SWM,720,1,80,25,40\nRUN,15000,1,75\nXYZ,1,1,1\n";

#[test]
fn test_export_csv() {
    let input = write_input("export_csv_in", "csv", PACKAGES);
    let out = temp_path("export_csv_out", "csv");

    rwo()
        .args(["export", "--input", &input, "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("kind,duration_hours,distance_km,mean_speed_kmh,calories_kcal")
    );
    assert_eq!(lines.clone().count(), 2);
    assert!(content.contains("Swimming"));
    assert!(content.contains("Running"));
}

#[test]
fn test_export_json() {
    let input = write_input("export_json_in", "csv", PACKAGES);
    let out = temp_path("export_json_out", "json");

    rwo()
        .args(["export", "--input", &input, "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    let rows = rows.as_array().expect("JSON array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["kind"], "Swimming");
    assert_eq!(rows[1]["kind"], "Running");
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let input = write_input("export_force_in", "csv", PACKAGES);
    let out = temp_path("export_force_out", "csv");
    fs::write(&out, "keep me").expect("seed output file");

    rwo()
        .args(["export", "--input", &input, "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rwo()
        .args(["export", "--input", &input, "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("kind,"));
}

#[test]
fn test_export_without_summaries_replaces_stale_file() {
    let input = write_input("export_empty_in", "csv", "XYZ,1,1,1\n");
    let csv_out = temp_path("export_empty_out", "csv");
    let json_out = temp_path("export_empty_out", "json");
    fs::write(&csv_out, "stale").expect("seed csv output");
    fs::write(&json_out, "stale").expect("seed json output");

    rwo()
        .args(["export", "--input", &input, "--file", &csv_out, "--force"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&csv_out).unwrap().trim_end(),
        "kind,duration_hours,distance_km,mean_speed_kmh,calories_kcal"
    );

    rwo()
        .args([
            "export", "--input", &input, "--format", "json", "--file", &json_out, "--force",
        ])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&json_out).unwrap().trim(), "[]");
}
