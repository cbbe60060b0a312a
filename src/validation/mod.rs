//! Validation Engine
//!
//! Identifier rules separated from console and configuration concerns.

pub mod charset;
pub mod engine;
pub mod reserved;

pub use engine::{
    validate, validate_basic, validate_class, validate_generic, validate_method,
    validate_package, validate_package_with, validate_variable, Advisory, AdvisoryKind, Segment,
    SplitPolicy, ValidationResult, Validator, ValidatorOptions,
};
pub use reserved::{is_reserved, RESERVED_WORDS};
