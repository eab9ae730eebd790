use predicates::str::contains;
use rworkout::config::{Config, Language};
use rworkout::export::ExportFormat;
use std::fs;
use std::path::Path;

mod common;
use common::{rwo, temp_path, write_input};

#[test]
fn test_missing_config_gives_defaults() {
    let path = temp_path("config_missing", "conf");
    let cfg = Config::load_from(Path::new(&path)).expect("defaults");

    assert_eq!(cfg.language, Language::En);
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.default_export_format, ExportFormat::Csv);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let path = write_input("config_partial", "conf", "language: ru\n");
    let cfg = Config::load_from(Path::new(&path)).expect("partial config");

    assert_eq!(cfg.language, Language::Ru);
    assert_eq!(cfg.default_export_format, ExportFormat::Csv);
}

#[test]
fn test_invalid_config_is_an_error() {
    let path = write_input("config_invalid", "conf", "language: klingon\n");
    assert!(Config::load_from(Path::new(&path)).is_err());
}

#[test]
fn test_init_writes_default_config_once() {
    let path = temp_path("config_init", "conf");

    rwo()
        .args(["--config", &path, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let written = fs::read_to_string(&path).expect("config written");
    assert!(written.contains("language: en"));

    rwo()
        .args(["--config", &path, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let path = temp_path("config_init_test", "conf");

    rwo()
        .args(["--config", &path, "--test", "init"])
        .assert()
        .success();

    assert!(!Path::new(&path).exists());
}

#[test]
fn test_language_from_config() {
    let path = write_input("config_lang", "conf", "language: ru\n");

    rwo()
        .args(["--config", &path, "calc", "RUN", "15000", "1", "75"])
        .assert()
        .success()
        .stdout(contains("Тип тренировки: Running;"))
        .stdout(contains("Потрачено ккал: 699.750."));
}

#[test]
fn test_config_print() {
    let path = write_input("config_print", "conf", "default_export_format: json\n");

    rwo()
        .args(["--config", &path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_export_format: json"));
}
