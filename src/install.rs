//! Copying finished artifacts into the local BetterDiscord folder.

use crate::{config::ProjectType, debug, log};
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Locate the platform-specific BetterDiscord folder.
///
/// Fails when the folder does not exist, which usually means
/// BetterDiscord is not installed on this machine.
pub fn find_betterdiscord() -> Result<PathBuf> {
    let folder = betterdiscord_dir()?;
    if !folder.exists() {
        bail!(
            "couldn't find the BetterDiscord folder at `{}`",
            folder.display()
        );
    }
    Ok(folder)
}

#[cfg(target_os = "windows")]
fn betterdiscord_dir() -> Result<PathBuf> {
    let appdata = std::env::var("AppData").context("`AppData` is not set")?;
    Ok(PathBuf::from(appdata).join("BetterDiscord"))
}

#[cfg(target_os = "macos")]
fn betterdiscord_dir() -> Result<PathBuf> {
    Ok(PathBuf::from(
        shellexpand::tilde("~/Library/Application Support/BetterDiscord").into_owned(),
    ))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn betterdiscord_dir() -> Result<PathBuf> {
    Ok(PathBuf::from(
        shellexpand::tilde("~/.config/BetterDiscord").into_owned(),
    ))
}

/// Copy a built artifact into the `themes`/`plugins` subfolder of the
/// BetterDiscord installation.
pub fn install_artifact(artifact: &Path, project_type: ProjectType) -> Result<()> {
    let folder = find_betterdiscord()?;
    debug!("install"; "BetterDiscord lives in `{}`", folder.display());

    let file_name = artifact
        .file_name()
        .with_context(|| format!("artifact path `{}` has no file name", artifact.display()))?;
    let target = folder.join(format!("{project_type}s")).join(file_name);
    fs::copy(artifact, &target)
        .with_context(|| format!("failed to copy the artifact to `{}`", target.display()))?;

    log!("install"; "copied the {} into the BetterDiscord folder", project_type);
    log!("install"; "go to Discord to see the result");
    Ok(())
}
