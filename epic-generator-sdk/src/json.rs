//! JSON utilities for extraction, parsing, and validation of model output

use crate::error::ArtifactError;
use crate::types::ArtifactTree;
use serde::Deserialize;
use serde_json::Value;

/// Number of characters of offending text carried in a decode error
pub const SNIPPET_LEN: usize = 100;

/// Iterator over top-level balanced `{...}` spans in free text
///
/// Braces inside JSON string literals (including escaped quotes) do not
/// affect nesting. Scanning stops at the first `{` that is never closed, so
/// no span nested inside an unterminated object is ever yielded.
pub struct BalancedObjects<'a> {
    text: &'a str,
    pos: usize,
}

/// Scan `text` for balanced `{...}` spans
pub fn balanced_objects(text: &str) -> BalancedObjects<'_> {
    BalancedObjects { text, pos: 0 }
}

impl<'a> Iterator for BalancedObjects<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.text.len() {
            let start = self.pos + self.text[self.pos..].find('{')?;

            match closing_brace(&self.text[start..]) {
                Some(len) => {
                    self.pos = start + len;
                    return Some(&self.text[start..start + len]);
                }
                None => self.pos = self.text.len(),
            }
        }
        None
    }
}

/// Byte length of the object starting at `text[0] == '{'`, if it closes
fn closing_brace(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Span from the first `{` to the last `}`, inclusive
///
/// Returns `None` unless both exist and the closing brace follows the
/// opening one. Does not balance nested braces.
pub fn legacy_brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Locate the substring of a model response most likely to be the JSON document
///
/// Preference order:
/// - First balanced object whose top level has an `epics` key
/// - Legacy first-`{` to last-`}` span
/// - The whole text
///
/// Other objects in the surrounding prose (`{}`, `{"indent": 2}`) are never
/// selected on their own. If the document itself is malformed the legacy
/// span covers it and fails to parse.
pub fn extract_json(text: &str) -> &str {
    balanced_objects(text)
        .find(|span| is_artifact_document(span))
        .or_else(|| legacy_brace_span(text))
        .unwrap_or(text)
}

fn is_artifact_document(span: &str) -> bool {
    serde_json::from_str::<Value>(span)
        .map(|value| value.get("epics").is_some())
        .unwrap_or(false)
}

/// First `max_chars` characters of `text`
pub fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Parse an extracted candidate into a JSON value
///
/// On failure the decode error and the offending text are logged at error
/// level before returning, so operators see them on stderr while stdout stays
/// clean.
pub fn parse_artifacts(candidate: &str) -> Result<Value, ArtifactError> {
    serde_json::from_str(candidate).map_err(|source| {
        tracing::error!(error = %source, "Error decoding LLM JSON output");
        tracing::error!(output = %candidate, "LLM output was not valid JSON");

        ArtifactError::Decode {
            snippet: snippet(candidate, SNIPPET_LEN),
            source,
        }
    })
}

/// Extract and parse the JSON document in a raw model response
pub fn decode_response(raw: &str) -> Result<Value, ArtifactError> {
    parse_artifacts(extract_json(raw))
}

/// Check that a parsed document has the artifact tree shape
pub fn validate_artifacts(value: &Value) -> Result<ArtifactTree, ArtifactError> {
    ArtifactTree::deserialize(value).map_err(|source| ArtifactError::Schema { source })
}
