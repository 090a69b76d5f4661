//! Doc-comment metadata extraction.
//!
//! BetterDiscord themes and plugins carry their metadata in the first
//! `/** ... */` comment of the file as `@key value` lines:
//!
//! ```css
//! /**
//!  * @name My Theme
//!  * @version 1.0.0
//!  * @author stngularity
//!  */
//! ```

use super::PipelineError;
use regex::Regex;
use std::sync::LazyLock;

// ============================================================================
// Metadata
// ============================================================================

/// Insertion-ordered `@key value` annotation map.
///
/// A duplicate key overwrites the value but keeps the position of its
/// first occurrence, matching plain dict-assignment semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, overwriting any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a key required by a downstream stage.
    pub fn require(&self, key: &str) -> Result<&str, PipelineError> {
        self.get(key)
            .ok_or_else(|| PipelineError::MissingMetadataKey(key.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract the first doc comment and its annotations.
///
/// The doc comment is the first non-greedy `/** ... */` span (dot matches
/// newline). It is returned verbatim, delimiters included, so the caller
/// can reuse it as the artifact header byte-for-byte. Annotation lines
/// anywhere inside the span match `@<letters> <rest-of-line>`; a later
/// duplicate key overwrites an earlier one.
///
/// Fails with [`PipelineError::MetadataMissing`] when the file has no
/// doc comment at all.
pub fn extract(text: &str) -> Result<(&str, Metadata), PipelineError> {
    static RE_DOC_COMMENT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?s)/\*\*.*?\*/").unwrap());
    static RE_ANNOTATION: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"@([a-zA-Z]+) (.*)").unwrap());

    let doc_comment = RE_DOC_COMMENT
        .find(text)
        .ok_or(PipelineError::MetadataMissing)?
        .as_str();

    let mut metadata = Metadata::new();
    for capture in RE_ANNOTATION.captures_iter(doc_comment) {
        metadata.set(&capture[1], &capture[2]);
    }

    Ok((doc_comment, metadata))
}
