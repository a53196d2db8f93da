//! Tests for catalog configuration files and the headless drivers
//!
//! These tests verify:
//! - Catalog save/load round-trips through real files
//! - Validation of loaded catalogs
//! - Booking and validating forms read from disk

use salon_booking::config::BookingConfig;
use salon_booking::error::BookingError;
use salon_booking::headless::{self, load_form};
use salon_booking::wizard::{Field, FormData, Step};
use std::fs;
use tempfile::tempdir;

// =============================================================================
// Catalog Files
// =============================================================================

#[test]
fn test_catalog_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let mut catalog = BookingConfig::default();
    catalog.services.push("Scalp Treatment".to_string());
    catalog.toast_seconds = 8;
    catalog.save_to_file(&path).unwrap();

    let loaded = BookingConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, catalog);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_load_or_default_without_path() {
    let catalog = BookingConfig::load_or_default(None).unwrap();
    assert_eq!(catalog, BookingConfig::default());
}

#[test]
fn test_load_or_default_rejects_invalid_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, r#"{"time_slots": []}"#).unwrap();

    let err = BookingConfig::load_or_default(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("time_slots"));
}

#[test]
fn test_load_missing_catalog_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nowhere.json");

    let err = BookingConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("nowhere.json"));
}

// =============================================================================
// Headless Booking
// =============================================================================

#[test]
fn test_book_form_read_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("form.json");
    fs::write(
        &path,
        r#"{
            "service": "Luxury Color Experience",
            "stylist": "Jordan Blake - Color Specialist",
            "name": "Sam Lee",
            "email": "sam@example.org",
            "phone": "555-9876",
            "date": "2025-03-14",
            "time": "10:00 AM",
            "notes": "First visit"
        }"#,
    )
    .unwrap();

    let form = load_form(&path).unwrap();
    let booking = headless::book(&form, Vec::new()).unwrap();

    assert_eq!(
        booking.notification.body,
        "Luxury Color Experience with Jordan Blake on 2025-03-14 at 10:00 AM."
    );
    assert_eq!(booking.summary.len(), 8);
    assert_eq!(booking.summary[7].value, "First visit");
}

#[test]
fn test_book_empty_form_stops_on_first_step() {
    let err = headless::book(&FormData::default(), Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        BookingError::StepIncomplete { step: Step::ServiceSelection, ref errors } if errors.len() == 2
    ));
    assert_eq!(
        err.to_string(),
        "Step 1 (Service Selection) is incomplete: service: Please select a service; stylist: Please select a stylist"
    );
}

#[test]
fn test_validate_form_flags_only_failing_steps() {
    let form = FormData {
        service: "Bridal Experience".into(),
        stylist: "Morgan Reed - Creative Director".into(),
        email: "morgan@".into(),
        date: "2025-05-05".into(),
        time: "3:00 PM".into(),
        ..Default::default()
    };

    let report = headless::validate_form(&form);
    let failing: Vec<Step> = report
        .iter()
        .filter(|check| !check.is_valid())
        .map(|check| check.step)
        .collect();
    assert_eq!(failing, vec![Step::PersonalDetails]);
    assert_eq!(
        report[1].errors.get(Field::Email),
        Some("Email address is invalid")
    );
}
