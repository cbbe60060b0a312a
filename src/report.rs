//! Batch reports for the `check` subcommand.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::category::Category;
use crate::error::ErrorKind;
use crate::shell::write_outcome;
use crate::validation::{AdvisoryKind, Segment, ValidationResult, Validator};

/// Outcome of validating one identifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub category: Category,
    pub identifier: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    pub advisories: Vec<AdvisoryReport>,
    #[serde(skip)]
    result: ValidationResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryReport {
    pub kind: AdvisoryKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<Segment>,
}

impl Report {
    pub fn new(category: Category, identifier: &str, result: ValidationResult) -> Self {
        let (error, error_kind) = match &result {
            Ok(_) => (None, None),
            Err(e) => (Some(e.to_string()), Some(e.kind())),
        };
        let advisories = result
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|a| AdvisoryReport {
                kind: a.kind,
                message: a.message(),
                segment: a.segment.clone(),
            })
            .collect();

        Report {
            category,
            identifier: identifier.to_string(),
            valid: result.is_ok(),
            error,
            error_kind,
            advisories,
            result,
        }
    }
}

/// Validate every identifier as `category`, in order
pub fn check_all<S: AsRef<str>>(
    validator: &Validator,
    category: Category,
    identifiers: &[S],
) -> Vec<Report> {
    identifiers
        .iter()
        .map(|identifier| {
            let identifier = identifier.as_ref();
            Report::new(category, identifier, validator.validate(category, identifier))
        })
        .collect()
}

/// Whether every report is valid
pub fn all_valid(reports: &[Report]) -> bool {
    reports.iter().all(|r| r.valid)
}

/// Same lines the interactive shell prints, one block per identifier
pub fn write_text<W: Write>(output: &mut W, reports: &[Report]) -> Result<()> {
    for report in reports {
        write_outcome(output, report.category, &report.identifier, &report.result)?;
    }
    Ok(())
}

/// One pretty-printed JSON array
pub fn write_json<W: Write>(output: &mut W, reports: &[Report]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *output, reports)?;
    writeln!(output)?;
    Ok(())
}
