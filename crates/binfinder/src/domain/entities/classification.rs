//! Waste classification payloads
//!
//! The sorting decision itself comes from an external generative model.
//! This module only describes what is sent (an image plus instructions) and
//! how the model's text answer is read back.

use serde::Serialize;

use crate::domain::errors::{DomainError, ProviderError};
use crate::domain::value_objects::WasteCategory;

/// Instructions sent alongside the photo
pub const WASTE_SORTING_PROMPT: &str = "\
You are a waste sorting expert. Analyze the image and determine if the subject is:
1. COMPOST
2. RECYCLE
3. TRASH

Format your response exactly like this:
DECISION: [One of the 3 categories]
REASON: [Short explanation]
";

/// An image to classify
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DomainError> {
        let mime_type = mime_type.into();
        if !mime_type.starts_with("image/") {
            return Err(DomainError::Validation(format!(
                "Unsupported file type: {}",
                mime_type
            )));
        }
        if bytes.is_empty() {
            return Err(DomainError::Validation("Image file is empty".to_string()));
        }
        Ok(Self { mime_type, bytes })
    }
}

/// The model's sorting decision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteClassification {
    pub decision: WasteCategory,
    pub reason: String,
    /// Unmodified model answer
    pub raw: String,
}

impl WasteClassification {
    /// Read a `DECISION: ... / REASON: ...` answer.
    ///
    /// Answers that do not follow the format come back as
    /// `ProviderError::Unparsed` with the full text attached.
    pub fn parse(text: &str) -> Result<Self, ProviderError> {
        let mut decision = None;
        let mut reason_lines: Vec<&str> = Vec::new();
        let mut in_reason = false;

        for line in text.lines() {
            let cleaned = clean_line(line);
            if let Some(value) = strip_label(cleaned, "DECISION") {
                in_reason = false;
                if decision.is_none() {
                    let category = parse_decision(value)
                        .ok_or_else(|| unparsed(format!("unknown decision '{}'", value), text))?;
                    decision = Some(category);
                }
            } else if let Some(value) = strip_label(cleaned, "REASON") {
                in_reason = true;
                if !value.is_empty() {
                    reason_lines.push(value);
                }
            } else if in_reason && !cleaned.is_empty() {
                reason_lines.push(cleaned);
            }
        }

        let decision = decision.ok_or_else(|| unparsed("no DECISION line", text))?;

        Ok(Self {
            decision,
            reason: reason_lines.join(" "),
            raw: text.to_string(),
        })
    }
}

fn unparsed(reason: impl Into<String>, text: &str) -> ProviderError {
    ProviderError::Unparsed {
        reason: reason.into(),
        raw: text.to_string(),
    }
}

fn clean_line(line: &str) -> &str {
    line.trim().trim_matches(|c: char| c == '*' || c == '#' || c == '-').trim()
}

/// `"DECISION: X"` -> `Some("X")`, case-insensitive on the label
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let (head, rest) = line.split_once(':')?;
    let head = head.trim().trim_matches('*').trim();
    if head.eq_ignore_ascii_case(label) {
        Some(rest.trim().trim_matches('*').trim())
    } else {
        None
    }
}

fn parse_decision(value: &str) -> Option<WasteCategory> {
    value
        .split(|c: char| !c.is_ascii_alphabetic())
        .find(|word| !word.is_empty())
        .and_then(|word| word.parse().ok())
}
