use predicates::str::contains;

mod common;
use common::rwo;

#[test]
fn test_calc_running() {
    rwo()
        .args(["calc", "RUN", "15000", "1", "75"])
        .assert()
        .success()
        .stdout(contains(
            "Training type: Running; Duration: 1.000 hours; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 699.750 kcal.",
        ));
}

#[test]
fn test_calc_unknown_kind_fails() {
    rwo()
        .args(["calc", "XYZ", "1", "2", "3"])
        .assert()
        .failure()
        .stderr(contains("Unknown workout kind: XYZ"));
}

#[test]
fn test_calc_wrong_arity_fails() {
    rwo()
        .args(["calc", "SWM", "720", "1", "80"])
        .assert()
        .failure()
        .stderr(contains("expected 5 values, got 3"));
}

#[test]
fn test_calc_zero_duration_fails() {
    rwo()
        .args(["calc", "RUN", "15000", "0", "75"])
        .assert()
        .failure()
        .stderr(contains("Invalid session input"));
}

#[test]
fn test_calc_json() {
    let out = rwo()
        .args(["calc", "SWM", "720", "1", "80", "25", "40", "--json"])
        .output()
        .expect("run calc --json");
    assert!(out.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(value["kind"], "Swimming");
    assert_eq!(value["mean_speed_kmh"].as_f64(), Some(1.0));
}

#[test]
fn test_demo_prints_three_lines_in_order() {
    let out = rwo().arg("demo").output().expect("run demo");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("Training type"))
        .collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Swimming") && lines[0].contains("336.000 kcal"));
    assert!(lines[1].contains("Running") && lines[1].contains("699.750 kcal"));
    assert!(lines[2].contains("SportsWalking") && lines[2].contains("157.500 kcal"));
}

#[test]
fn test_kinds_lists_every_tag() {
    rwo()
        .arg("kinds")
        .assert()
        .success()
        .stdout(contains("RUN"))
        .stdout(contains("WLK"))
        .stdout(contains("SWM"))
        .stdout(contains("pool_length_m"));
}
