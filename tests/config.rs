#![forbid(unsafe_code)]
use chrono::Weekday;
use pantry_scheduler::config::ConfigurationError;
use pantry_scheduler::{export_config_json, load_config_from_file, LocationConfig, OperatingWindow};
use tempfile::tempdir;

const SAMPLE: &str = r#"{
  "priority": ["Desk", "Stock"],
  "locations": {
    "Stock": {
      "operating_hours": { "Tuesday": [8, 18], "mon": [8, 12] },
      "required_staff": 2
    },
    "Desk": {
      "operating_hours": { "Friday": [11, 15] },
      "required_staff": 1
    }
  }
}"#;

fn with_location(hours: &str, staff: &str) -> String {
    format!(
        r#"{{"priority": ["Desk"], "locations": {{"Desk": {{"operating_hours": {hours}, "required_staff": {staff}}}}}}}"#
    )
}

#[test]
fn reference_configuration_is_valid() {
    let config = LocationConfig::reference();
    config.validate().unwrap();

    let names: Vec<_> = config.locations().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Main Office", "G Building", "Inventory Room"]);

    let inventory = config.location("Inventory Room").unwrap();
    assert_eq!(inventory.required_staff, 2);
    assert_eq!(inventory.window(Weekday::Wed), Some(OperatingWindow::new(8, 18)));
    assert_eq!(inventory.window(Weekday::Sat), None);
    assert_eq!(inventory.weekdays().count(), 5);
    assert_eq!(LocationConfig::default(), config);
}

#[test]
fn json_follows_priority_and_weekday_order() {
    let config = LocationConfig::from_json_str(SAMPLE).unwrap();

    let names: Vec<_> = config.locations().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Desk", "Stock"]);

    let stock = config.location("Stock").unwrap();
    assert_eq!(
        stock.weekdays().collect::<Vec<_>>(),
        vec![Weekday::Mon, Weekday::Tue]
    );
    assert_eq!(stock.window(Weekday::Mon), Some(OperatingWindow::new(8, 12)));
}

#[test]
fn non_positive_staff_is_rejected() {
    for staff in ["0", "-1"] {
        let raw = with_location(r#"{"Monday": [9, 17]}"#, staff);
        let err = LocationConfig::from_json_str(&raw).unwrap_err();
        assert!(
            matches!(err, ConfigurationError::NonPositiveStaff { .. }),
            "{staff}: {err}"
        );
    }
}

#[test]
fn invalid_operating_windows_are_rejected() {
    for hours in [
        r#"{"Monday": [15, 11]}"#,
        r#"{"Monday": [9, 9]}"#,
        r#"{"Monday": [8, 25]}"#,
        r#"{"Monday": [-1, 8]}"#,
    ] {
        let err = LocationConfig::from_json_str(&with_location(hours, "1")).unwrap_err();
        assert!(
            matches!(err, ConfigurationError::InvalidOperatingWindow { .. }),
            "{hours}: {err}"
        );
    }
}

#[test]
fn weekday_keys_are_checked() {
    let err = LocationConfig::from_json_str(&with_location(r#"{"Funday": [9, 17]}"#, "1"))
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::UnknownWeekday { .. }));

    let err = LocationConfig::from_json_str(&with_location(
        r#"{"Monday": [9, 17], "mon": [10, 12]}"#,
        "1",
    ))
    .unwrap_err();
    assert!(matches!(err, ConfigurationError::DuplicateWeekday { .. }));
}

#[test]
fn priority_must_match_locations() {
    let missing = SAMPLE.replace(r#"["Desk", "Stock"]"#, r#"["Desk"]"#);
    let err = LocationConfig::from_json_str(&missing).unwrap_err();
    assert!(matches!(err, ConfigurationError::MissingFromPriority(ref n) if n == "Stock"));

    let unknown = SAMPLE.replace(r#"["Desk", "Stock"]"#, r#"["Desk", "Stock", "Attic"]"#);
    let err = LocationConfig::from_json_str(&unknown).unwrap_err();
    assert!(matches!(err, ConfigurationError::UnknownPriorityLocation(ref n) if n == "Attic"));

    let twice = SAMPLE.replace(r#"["Desk", "Stock"]"#, r#"["Desk", "Desk", "Stock"]"#);
    let err = LocationConfig::from_json_str(&twice).unwrap_err();
    assert!(matches!(err, ConfigurationError::DuplicateLocation(_)));

    let err = LocationConfig::from_json_str(r#"{"locations": {}}"#).unwrap_err();
    assert!(matches!(err, ConfigurationError::NoLocations));
}

#[test]
fn malformed_json_is_a_configuration_error() {
    let err = LocationConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigurationError::Parse(_)));
}

#[test]
fn export_and_reload_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("locations.json");

    export_config_json(&path, &LocationConfig::reference()).unwrap();
    let loaded = load_config_from_file(&path).unwrap();
    assert_eq!(loaded, LocationConfig::reference());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let err = load_config_from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigurationError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
