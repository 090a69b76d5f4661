//! Project configuration management for `bdproject.toml`.
//!
//! # Example
//!
//! ```toml
//! type = "theme"
//! mainFilename = "src/mytheme"
//!
//! [options]
//! doMinify = true
//! autoMoveToBetterDiscordFolder = false
//!
//! [output]
//! name = "$name-$version.$type.$ext"
//! folder = "dist"
//! ```
//!
//! Key names keep the camelCase spelling of the original BetterDiscord
//! project files, mapped onto snake_case fields via serde renames.

mod error;

pub use error::ConfigError;

use crate::cli::BuildArgs;
use serde::Deserialize;
use std::{fmt, fs, path::Path};

// ============================================================================
// ProjectType
// ============================================================================

/// Artifact type of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// CSS-based theme
    Theme,
    /// JS-based plugin
    Plugin,
}

impl ProjectType {
    /// File extension of the entry file and the artifact.
    pub fn ext(self) -> &'static str {
        match self {
            ProjectType::Theme => "css",
            ProjectType::Plugin => "js",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Theme => "theme",
            ProjectType::Plugin => "plugin",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing bdproject.toml
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Artifact type: "theme" or "plugin" (required)
    #[serde(rename = "type")]
    pub project_type: ProjectType,

    /// Entry file stem, relative to the working directory
    /// (default: the type name)
    #[serde(rename = "mainFilename")]
    pub main_filename: Option<String>,

    /// Build options
    #[serde(default)]
    pub options: OptionsConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[options]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    /// Minify the artifact content
    #[serde(rename = "doMinify")]
    pub do_minify: bool,

    /// Copy the artifact into the BetterDiscord folder after the build
    #[serde(rename = "autoMoveToBetterDiscordFolder")]
    pub auto_move: bool,
}

/// `[output]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output filename template; `$name`, `$version`, `$author`, `$type`
    /// and `$ext` are substituted from metadata and config
    pub name: String,

    /// Output directory, relative to the working directory
    pub folder: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            name: "$name-$version.$type.$ext".into(),
            folder: String::new(),
        }
    }
}

impl ProjectConfig {
    /// Load and validate the project configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: ProjectConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(stem) = &self.main_filename
            && stem.is_empty()
        {
            return Err(ConfigError::Validation(
                "`mainFilename` must not be empty".into(),
            ));
        }

        if Path::new(&self.output.folder).is_absolute() {
            return Err(ConfigError::Validation(
                "`output.folder` must be relative to the working directory".into(),
            ));
        }

        Ok(())
    }

    /// Apply CLI overrides on top of the file configuration.
    pub fn apply_overrides(&mut self, args: &BuildArgs) {
        if let Some(minify) = args.minify {
            self.options.do_minify = minify;
        }
        if let Some(install) = args.install {
            self.options.auto_move = install;
        }
    }

    /// Entry file name: `<mainFilename | type>.<ext>`.
    pub fn entry_file(&self) -> String {
        let stem = self
            .main_filename
            .as_deref()
            .unwrap_or(self.project_type.as_str());
        format!("{stem}.{}", self.project_type.ext())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<ProjectConfig, ConfigError> {
        let config: ProjectConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_minimal_config() {
        let config = parse(r#"type = "theme""#).unwrap();
        assert_eq!(config.project_type, ProjectType::Theme);
        assert!(config.main_filename.is_none());
        assert!(!config.options.do_minify);
        assert!(!config.options.auto_move);
        assert_eq!(config.output.name, "$name-$version.$type.$ext");
        assert_eq!(config.output.folder, "");
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"
            type = "plugin"
            mainFilename = "src/main"

            [options]
            doMinify = true
            autoMoveToBetterDiscordFolder = true

            [output]
            name = "$name.$ext"
            folder = "dist"
            "#,
        )
        .unwrap();
        assert_eq!(config.project_type, ProjectType::Plugin);
        assert_eq!(config.main_filename.as_deref(), Some("src/main"));
        assert!(config.options.do_minify);
        assert!(config.options.auto_move);
        assert_eq!(config.output.name, "$name.$ext");
        assert_eq!(config.output.folder, "dist");
    }

    #[test]
    fn test_missing_type_is_an_error() {
        assert!(matches!(parse(""), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        assert!(matches!(
            parse(r#"type = "stylesheet""#),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_absolute_output_folder_rejected() {
        let raw = r#"
            type = "theme"
            [output]
            folder = "/tmp/out"
        "#;
        assert!(matches!(parse(raw), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_entry_file_defaults_to_type() {
        let theme = parse(r#"type = "theme""#).unwrap();
        assert_eq!(theme.entry_file(), "theme.css");

        let plugin = parse(r#"type = "plugin""#).unwrap();
        assert_eq!(plugin.entry_file(), "plugin.js");
    }

    #[test]
    fn test_entry_file_uses_main_filename() {
        let config = parse(
            r#"
            type = "theme"
            mainFilename = "src/mytheme"
            "#,
        )
        .unwrap();
        assert_eq!(config.entry_file(), "src/mytheme.css");
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = parse(r#"type = "theme""#).unwrap();
        config.apply_overrides(&BuildArgs {
            minify: Some(true),
            install: None,
        });
        assert!(config.options.do_minify);
        assert!(!config.options.auto_move);
    }
}
