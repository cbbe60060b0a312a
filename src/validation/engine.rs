//! Validation Engine
//!
//! Core identifier rules and the per-category style advisories layered on
//! top of them. Every function here is pure: the only shared state is the
//! read-only reserved-word set.

use std::fmt;

use clap::ValueEnum;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::charset::{is_identifier_part, is_identifier_start};
use super::reserved::is_reserved;
use crate::category::Category;
use crate::error::IdentifierError;

/// Label used when a single segment of a package name fails
pub const PACKAGE_SEGMENT_LABEL: &str = "Package segment";

/// Outcome of one validation: the advisories of a legal identifier, or the
/// reason it is not legal
pub type ValidationResult = Result<Vec<Advisory>, IdentifierError>;

/// Kind of naming-convention advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisoryKind {
    /// A class name does not start with an uppercase letter
    LowerCaseStart,
    /// A method or variable name does not start with a lowercase letter
    UpperCaseStart,
    ContainsUnderscore,
    /// A package segment has characters that are not lowercase
    NotAllLowercase,
}

impl AdvisoryKind {
    pub const ALL: [AdvisoryKind; 4] = [
        AdvisoryKind::LowerCaseStart,
        AdvisoryKind::UpperCaseStart,
        AdvisoryKind::ContainsUnderscore,
        AdvisoryKind::NotAllLowercase,
    ];
}

/// One dot-delimited component of a package name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Zero-based position within the package name
    pub index: usize,
    pub text: String,
}

/// A non-fatal style observation about a legal identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub category: Category,
    /// The package segment that triggered the advisory, if any
    pub segment: Option<Segment>,
}

impl Advisory {
    fn new(kind: AdvisoryKind, category: Category) -> Self {
        Self {
            kind,
            category,
            segment: None,
        }
    }

    fn for_segment(kind: AdvisoryKind, index: usize, text: &str) -> Self {
        Self {
            kind,
            category: Category::PackageSegment,
            segment: Some(Segment {
                index,
                text: text.to_string(),
            }),
        }
    }

    /// Human-readable advisory text
    pub fn message(&self) -> String {
        let subject = match self.category {
            Category::Class => "Class names",
            Category::Method => "Method names",
            Category::Variable => "Variable names",
            Category::PackageSegment => "Package segments",
            Category::Generic => "Identifiers",
        };

        match self.kind {
            AdvisoryKind::LowerCaseStart => format!(
                "{} should start with an uppercase letter (PascalCase convention)",
                subject
            ),
            AdvisoryKind::UpperCaseStart => format!(
                "{} should start with a lowercase letter (camelCase convention)",
                subject
            ),
            AdvisoryKind::ContainsUnderscore => {
                format!("{} typically don't contain underscores", subject)
            }
            AdvisoryKind::NotAllLowercase => match &self.segment {
                Some(segment) => format!("{} should be lowercase ('{}')", subject, segment.text),
                None => format!("{} should be lowercase", subject),
            },
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// How a package name is split into segments.
///
/// Leading, trailing and doubled dots all produce empty segments. `Strict`
/// rejects every one of them; `DropTrailing` discards trailing empty
/// segments first, so `com.example.` is accepted as `com.example`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SplitPolicy {
    #[default]
    Strict,
    DropTrailing,
}

/// Check the character rules and the reserved-word list.
///
/// `label` only appears in the failure message. A legal identifier yields no
/// advisories here; those come from the category-specific functions.
pub fn validate_basic(text: &str, label: &str) -> ValidationResult {
    let mut chars = text.chars();

    let Some(first) = chars.next() else {
        return Err(IdentifierError::EmptyIdentifier {
            label: label.to_string(),
        });
    };

    if !is_identifier_start(first) {
        return Err(IdentifierError::InvalidStartCharacter {
            label: label.to_string(),
            ch: first,
        });
    }

    if let Some((index, ch)) = chars
        .enumerate()
        .find(|&(_, ch)| !is_identifier_part(ch))
    {
        return Err(IdentifierError::InvalidContinuationCharacter {
            label: label.to_string(),
            ch,
            index: index + 1,
        });
    }

    if is_reserved(text) {
        return Err(IdentifierError::ReservedWord {
            label: label.to_string(),
            word: text.to_string(),
        });
    }

    Ok(Vec::new())
}

/// Validate a class name; advises PascalCase without underscores
pub fn validate_class(text: &str) -> ValidationResult {
    let category = Category::Class;
    validate_basic(text, category.label())?;

    let mut advisories = Vec::new();
    if !starts_with(text, char::is_uppercase) {
        advisories.push(Advisory::new(AdvisoryKind::LowerCaseStart, category));
    }
    if text.contains('_') {
        advisories.push(Advisory::new(AdvisoryKind::ContainsUnderscore, category));
    }
    Ok(advisories)
}

/// Validate a method name; advises camelCase without underscores
pub fn validate_method(text: &str) -> ValidationResult {
    let category = Category::Method;
    validate_basic(text, category.label())?;

    let mut advisories = Vec::new();
    if !starts_with(text, char::is_lowercase) {
        advisories.push(Advisory::new(AdvisoryKind::UpperCaseStart, category));
    }
    if text.contains('_') {
        advisories.push(Advisory::new(AdvisoryKind::ContainsUnderscore, category));
    }
    Ok(advisories)
}

/// Validate a variable name; underscores are accepted without comment
pub fn validate_variable(text: &str) -> ValidationResult {
    let category = Category::Variable;
    validate_basic(text, category.label())?;

    let mut advisories = Vec::new();
    if !starts_with(text, char::is_lowercase) {
        advisories.push(Advisory::new(AdvisoryKind::UpperCaseStart, category));
    }
    Ok(advisories)
}

/// Validate a dotted package name with [`SplitPolicy::Strict`]
pub fn validate_package(text: &str) -> ValidationResult {
    validate_package_with(text, SplitPolicy::Strict)
}

/// Validate a dotted package name.
///
/// Segments are checked left to right and the first failure is returned.
/// Only when every segment is legal are the lowercase advisories collected,
/// one per offending segment.
pub fn validate_package_with(text: &str, policy: SplitPolicy) -> ValidationResult {
    if text.is_empty() {
        return Err(IdentifierError::EmptyIdentifier {
            label: Category::PackageSegment.label().to_string(),
        });
    }

    let mut segments: Vec<&str> = text.split('.').collect();
    if policy == SplitPolicy::DropTrailing {
        // keep one segment so "..." still fails as empty
        while segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
    }

    for segment in &segments {
        validate_basic(segment, PACKAGE_SEGMENT_LABEL)?;
    }

    let advisories = segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| segment.to_lowercase() != **segment)
        .map(|(index, segment)| {
            Advisory::for_segment(AdvisoryKind::NotAllLowercase, index, segment)
        })
        .collect();
    Ok(advisories)
}

/// Validate a plain identifier with no style advisories
pub fn validate_generic(text: &str) -> ValidationResult {
    validate_basic(text, Category::Generic.label())
}

/// Dispatch to the validation for `category`
pub fn validate(category: Category, text: &str) -> ValidationResult {
    match category {
        Category::Class => validate_class(text),
        Category::Method => validate_method(text),
        Category::Variable => validate_variable(text),
        Category::PackageSegment => validate_package(text),
        Category::Generic => validate_generic(text),
    }
}

fn starts_with(text: &str, predicate: impl Fn(char) -> bool) -> bool {
    text.chars().next().is_some_and(predicate)
}

/// Options that tune a [`Validator`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    pub split_policy: SplitPolicy,
    /// Advisories of these kinds are dropped from successful results
    pub disabled_advisories: Vec<AdvisoryKind>,
}

impl ValidatorOptions {
    /// Options that suppress every advisory
    pub fn without_advisories() -> Self {
        Self {
            split_policy: SplitPolicy::default(),
            disabled_advisories: AdvisoryKind::ALL.to_vec(),
        }
    }
}

/// Category validation with configured package splitting and advisory
/// filtering. Failures are returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn validate(&self, category: Category, text: &str) -> ValidationResult {
        debug!("validating {:?} as {}", text, category);

        let result = match category {
            Category::PackageSegment => validate_package_with(text, self.options.split_policy),
            other => validate(other, text),
        };

        match result {
            Ok(mut advisories) => {
                advisories.retain(|a| !self.options.disabled_advisories.contains(&a.kind));
                trace!("{:?} accepted with {} advisories", text, advisories.len());
                Ok(advisories)
            }
            Err(e) => {
                debug!("{:?} rejected: {}", text, e);
                Err(e)
            }
        }
    }
}
