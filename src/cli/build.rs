//! Build orchestration around the pure pipeline stages.
//!
//! Stage order: inline imports -> extract metadata -> minify (optional)
//! -> resolve output name -> write artifact -> install (optional). Every
//! stage must succeed before the artifact is written, so a failing build
//! never leaves a partial output file behind.

use crate::{
    config::ProjectConfig,
    debug, install, log,
    pipeline::{import, metadata, minify, name},
    utils::humanize_size,
};
use anyhow::{Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Run the full build for the configured project.
pub fn build_project(config: &ProjectConfig) -> Result<()> {
    let cwd = env::current_dir().context("failed to resolve the working directory")?;
    let artifact = run_build(config, &cwd)?;

    if config.options.auto_move {
        install::install_artifact(&artifact, config.project_type)?;
    }

    Ok(())
}

/// Run the pipeline against `base_dir` and write the artifact under it.
///
/// Returns the path of the written artifact.
pub fn run_build(config: &ProjectConfig, base_dir: &Path) -> Result<PathBuf> {
    let project_type = config.project_type;

    // Importer
    let entry = base_dir.join(config.entry_file());
    let raw = fs::read_to_string(&entry)
        .with_context(|| format!("failed to read entry file `{}`", entry.display()))?;
    let input = import::inline(&raw, base_dir)?;
    let input_size = input.len();
    debug!(
        "build"; "found `{}` with a size of {}",
        config.entry_file(), humanize_size(input_size as u64)
    );

    // Metadata
    let (doc_comment, metadata) = metadata::extract(&input)?;
    let doc_comment = doc_comment.to_string();
    let project_name = metadata.require("name")?;
    let version = metadata.require("version")?;
    let author = metadata.require("author")?;
    debug!("build"; "found {project_name} v{version} {project_type} by {author}");

    // Minifier
    let content = if config.options.do_minify {
        let minified = minify::minify(&input, project_type);
        log!("build"; "minified the {} content", project_type);
        minified
    } else {
        input
    };

    // Output
    let file_name = name::resolve_name(&config.output.name, &metadata, project_type)?;
    let folder = base_dir.join(&config.output.folder);
    fs::create_dir_all(&folder)
        .with_context(|| format!("failed to create output directory `{}`", folder.display()))?;

    let artifact = folder.join(&file_name);
    let output = format!("{doc_comment}\n{content}");
    fs::write(&artifact, &output)
        .with_context(|| format!("failed to write artifact `{}`", artifact.display()))?;

    log!(
        "build"; "generated `{}` with a size of {}",
        file_name, humanize_size(output.len() as u64)
    );
    if output.len() < input_size {
        debug!(
            "build"; "the output is {} smaller than the input",
            humanize_size((input_size - output.len()) as u64)
        );
    }

    Ok(artifact)
}
