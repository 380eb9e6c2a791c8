//! # Response Extraction and Validation
//!
//! Model output arrives wrapped in prose or markdown fencing more often than
//! not. This module locates the embedded JSON object, parses it, and checks
//! the result shape. The location heuristic is the greedy span from the first
//! `{` to the last `}` of the text; it assumes the model emitted at most one
//! JSON object and that the surrounding prose carries no stray braces. It is
//! deliberately isolated here so a stricter extractor can replace it without
//! touching callers.

use crate::{
    errors::AnalysisError,
    types::{AnalysisResult, FrictionResult},
};
use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::warn;

/// How much of the raw text a `MalformedOutput` carries for diagnostics.
const EXCERPT_CHARS: usize = 200;

fn excerpt(raw: &str) -> String {
    raw.chars().take(EXCERPT_CHARS).collect()
}

/// Finds the greedy first-`{`-to-last-`}` span, or classifies its absence.
fn json_span(raw: &str) -> Result<&str, AnalysisError> {
    let re = Regex::new(r"\{[\s\S]*\}").map_err(|e| AnalysisError::Unknown(e.to_string()))?;
    match re.find(raw) {
        Some(m) => Ok(m.as_str()),
        None => {
            warn!("completion contains no JSON object");
            Err(AnalysisError::MalformedOutput { excerpt: excerpt(raw) })
        }
    }
}

/// Parses the located span. A parse failure is logged distinctly from an
/// absent span but classifies the same at the contract level.
fn parse_span<T: DeserializeOwned>(raw: &str, span: &str) -> Result<T, AnalysisError> {
    serde_json::from_str(span).map_err(|e| {
        warn!("completion JSON span failed to parse: {e}");
        AnalysisError::MalformedOutput {
            excerpt: excerpt(raw),
        }
    })
}

fn require_non_empty(raw: &str, fields: &[&str]) -> Result<(), AnalysisError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        warn!("completion JSON parsed but carries empty required fields");
        return Err(AnalysisError::MalformedOutput {
            excerpt: excerpt(raw),
        });
    }
    Ok(())
}

/// Extracts a validated `AnalysisResult` from raw completion text.
///
/// Absent span, invalid JSON, missing or non-string fields, and empty field
/// values all classify as `MalformedOutput`; a partial result is never passed
/// through as success.
pub fn extract_analysis(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let span = json_span(raw)?;
    let result: AnalysisResult = parse_span(raw, span)?;
    require_non_empty(
        raw,
        &[
            &result.assumption,
            &result.contradiction,
            &result.axis_activated,
            &result.tension,
            &result.avoided_question,
        ],
    )?;
    Ok(result)
}

/// Extracts a validated `FrictionResult` from raw completion text.
///
/// `suggested_nodes` may be empty; the three text fields must not be.
pub fn extract_friction(raw: &str) -> Result<FrictionResult, AnalysisError> {
    let span = json_span(raw)?;
    let result: FrictionResult = parse_span(raw, span)?;
    require_non_empty(
        raw,
        &[
            &result.affirmation,
            &result.contradiction,
            &result.open_question,
        ],
    )?;
    Ok(result)
}
