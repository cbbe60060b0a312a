//! Identifier Validator
//!
//! Checks whether a string is a legal Java identifier for a given kind of
//! program element and reports naming-convention advisories.
//!
//! This library provides:
//! - Character-class and reserved-word validation
//! - Category-specific style advisories
//! - Configuration management
//! - An interactive shell and a batch report for the `idv` binary

pub mod category;
pub mod config;
pub mod error;
pub mod report;
pub mod shell;
pub mod validation;

// Re-exports for clean public API
pub use category::Category;
pub use config::Config;
pub use error::{ErrorKind, IdentifierError};
pub use validation::{
    validate, validate_basic, validate_class, validate_generic, validate_method,
    validate_package, validate_package_with, validate_variable, Advisory, AdvisoryKind,
    SplitPolicy, ValidationResult, Validator, ValidatorOptions,
};
