//! Integration tests for module exports.
//!
//! Verify that public modules and types are accessible via absolute paths
//! and that the module-level re-exports point at the same items.

use chrono::NaiveDate;

/// Test that the time module is accessible via absolute path.
#[test]
fn test_time_module_exports() {
    use payoff_core::types::time::days_to_expiry;
    use payoff_core::types::time::time_to_expiry;
    use payoff_core::types::time::Date;
    use payoff_core::types::time::DAYS_PER_YEAR;

    let today = Date::from_ymd(2024, 1, 1).unwrap();
    let expiry = Date::from_ymd(2024, 1, 31).unwrap();

    assert_eq!(days_to_expiry(today, expiry), 30);
    assert_eq!(days_to_expiry(expiry, today), 0);
    assert!((time_to_expiry(30) - 30.0 / DAYS_PER_YEAR).abs() < 1e-15);

    assert_eq!(
        expiry.into_inner(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    );
}

/// Test that the units module is accessible via absolute path.
#[test]
fn test_units_module_exports() {
    use payoff_core::types::units::percent_to_fraction;

    assert!((percent_to_fraction(20.0) - 0.2).abs() < 1e-15);
}

/// Test that error types are accessible and convert.
#[test]
fn test_error_module_exports() {
    use payoff_core::types::error::{DateError, PricingError};

    let err: PricingError = DateError::ParseError("bad".to_string()).into();
    assert!(matches!(err, PricingError::InvalidInput(_)));

    let err = PricingError::InvalidConfig("num_points".to_string());
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("num_points"));
}

/// Test that re-exports at `types` level resolve to the same items.
#[test]
fn test_types_reexports() {
    use payoff_core::types::{days_to_expiry, percent_to_fraction, Date, DateError, PricingError};

    let date: Date = "2024-02-29".parse().unwrap();
    assert_eq!(date.to_string(), "2024-02-29");
    assert!(matches!(
        "2023-02-29".parse::<Date>(),
        Err(DateError::ParseError(_))
    ));
    assert_eq!(days_to_expiry(date, date.add_days(7)), 7);
    assert_eq!(percent_to_fraction(0.0), 0.0);

    let _: Option<PricingError> = None;
}

#[cfg(feature = "serde")]
#[test]
fn test_date_serialises_as_iso_string() {
    use payoff_core::types::Date;

    let date = Date::from_ymd(2025, 12, 19).unwrap();
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, "\"2025-12-19\"");
}
