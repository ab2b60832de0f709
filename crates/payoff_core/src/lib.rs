//! # payoff_core: Foundation for the Payoff Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! payoff_core is the bottom layer of the workspace, providing:
//! - Error types shared by every layer: `PricingError`, `DateError` (`types::error`)
//! - Calendar helpers: `Date`, `days_to_expiry`, `time_to_expiry` (`types::time`)
//! - Unit conversion: `percent_to_fraction` (`types::units`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other payoff_* crates, with minimal external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use payoff_core::types::{days_to_expiry, percent_to_fraction, time_to_expiry, Date};
//!
//! let today = Date::from_ymd(2024, 1, 1).unwrap();
//! let expiry = Date::from_ymd(2024, 1, 31).unwrap();
//!
//! let days = days_to_expiry(today, expiry);
//! assert_eq!(days, 30);
//! assert!((time_to_expiry(days) - 30.0 / 365.0).abs() < 1e-15);
//! assert!((percent_to_fraction(20.0) - 0.2).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
