//! Single-level `@import` inlining.

use super::PipelineError;
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

/// Inline every `@import url("<path>");` directive found in `text`.
///
/// Each referenced path is stripped of a single leading `/`, resolved
/// against `base_dir` and read in full; every occurrence of the exact
/// directive substring is then replaced with the file content.
///
/// This is a single pass over the original text: directives brought in by
/// imported content are left as-is, so nested imports stay unresolved.
pub fn inline(text: &str, base_dir: &Path) -> Result<String, PipelineError> {
    static RE_IMPORT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"@import url\("(.+)"\);"#).unwrap());

    let mut output = text.to_string();
    for capture in RE_IMPORT.captures_iter(text) {
        let directive = &capture[0];
        let path = &capture[1];
        let target = base_dir.join(path.strip_prefix('/').unwrap_or(path));

        let content = fs::read_to_string(&target).map_err(|source| {
            PipelineError::ImportNotFound {
                path: target.clone(),
                source,
            }
        })?;

        output = output.replace(directive, &content);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_inline_replaces_directive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.css"), ".x{color:red}").unwrap();

        let input = "@import url(\"a.css\");\nbody {}";
        let output = inline(input, dir.path()).unwrap();
        assert_eq!(output, ".x{color:red}\nbody {}");
    }

    #[test]
    fn test_inline_replaces_every_occurrence() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.css"), "X").unwrap();

        let input = "@import url(\"a.css\");\n.y {}\n@import url(\"a.css\");";
        let output = inline(input, dir.path()).unwrap();
        assert_eq!(output, "X\n.y {}\nX");
    }

    #[test]
    fn test_inline_strips_leading_slash() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("parts")).unwrap();
        fs::write(dir.path().join("parts/a.css"), "X").unwrap();

        let output = inline("@import url(\"/parts/a.css\");", dir.path()).unwrap();
        assert_eq!(output, "X");
    }

    #[test]
    fn test_inline_is_not_recursive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.css"), "@import url(\"b.css\");").unwrap();
        fs::write(dir.path().join("b.css"), "should not be read").unwrap();

        let output = inline("@import url(\"a.css\");", dir.path()).unwrap();
        assert_eq!(output, "@import url(\"b.css\");");
    }

    #[test]
    fn test_inline_missing_target_fails() {
        let dir = tempdir().unwrap();
        let result = inline("@import url(\"nope.css\");", dir.path());
        assert!(matches!(
            result,
            Err(PipelineError::ImportNotFound { .. })
        ));
    }

    #[test]
    fn test_inline_without_directives_is_identity() {
        let dir = tempdir().unwrap();
        let input = "body { color: red; }";
        assert_eq!(inline(input, dir.path()).unwrap(), input);
    }
}
