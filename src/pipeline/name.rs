//! Output filename templating.

use super::{Metadata, PipelineError};
use crate::config::ProjectType;
use regex::Regex;
use std::sync::LazyLock;

/// Placeholders with a substitution source.
const RECOGNIZED: [&str; 5] = ["name", "version", "author", "type", "ext"];

/// Resolve an output filename template like `$name-$version.$type.$ext`.
///
/// Placeholder tokens (`$` followed by a lowercase-letter run) are
/// collected from the original template, then substituted one at a time
/// against the evolving output. Substitution is sequential, not
/// simultaneous: a metadata value that itself contains a `$token` can be
/// rewritten by a later round. Unrecognized tokens are left untouched.
///
/// `$name` has all spaces removed; `$version` and `$author` are taken
/// verbatim; `$type` is the project type and `$ext` its file extension.
pub fn resolve_name(
    template: &str,
    metadata: &Metadata,
    project_type: ProjectType,
) -> Result<String, PipelineError> {
    static RE_PLACEHOLDER: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\$([a-z]+)").unwrap());

    let mut output = template.to_string();
    for capture in RE_PLACEHOLDER.captures_iter(template) {
        let placeholder = &capture[1];
        if !RECOGNIZED.contains(&placeholder) {
            continue;
        }

        let value = match placeholder {
            "name" => metadata.require("name")?.replace(' ', ""),
            "version" => metadata.require("version")?.to_string(),
            "author" => metadata.require("author")?.to_string(),
            "type" => project_type.as_str().to_string(),
            _ => project_type.ext().to_string(),
        };
        output = output.replace(&capture[0], &value);
    }

    Ok(output)
}
