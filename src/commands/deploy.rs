//! Remote deployment flow
//!
//! Resolves a published release, downloads its chrome archive into a scoped
//! temporary directory, extracts it into the Firefox profile and enables the
//! legacy customization preference. The temporary directory is removed when
//! it goes out of scope, on success and on every failure after its creation.

use std::path::Path;

use crate::config::DeployConfig;
use crate::error::Result;
use crate::{archive, download, http, prefs, profile, release, temp, ui};

pub fn run(config: &DeployConfig, version: &str, profile_root: Option<&Path>) -> Result<()> {
    ui::info(&format!("Starting deployment of firefox-extras {}", version));

    ui::info("Finding Firefox profile...");
    let target = profile::locate(profile_root)?;
    ui::info(&format!("Using Firefox profile: {}", target.path.display()));

    ui::info("Fetching release information...");
    let agent = http::agent();
    let descriptor = release::resolve(&agent, config, version)?;
    let asset = descriptor.asset_named(&config.asset_name)?;
    ui::info(&format!(
        "Found release {} with asset {}",
        descriptor.tag, asset.name
    ));

    // Dropped at the end of this scope, which removes the directory and the
    // downloaded archive whether the steps below succeed or fail.
    let scratch = tempfile::Builder::new()
        .prefix("firefox-extras-")
        .tempdir_in(temp::temp_dir_base())?;
    let archive_path = scratch.path().join(&config.asset_name);

    ui::info(&format!("Downloading {}...", asset.name));
    download::download(&agent, &config.user_agent, &asset.download_url, &archive_path)?;
    ui::info("Download completed");

    ui::info("Extracting files to Firefox profile...");
    archive::extract(&archive_path, &target.path)?;
    ui::info("Files extracted successfully");

    prefs::enable_legacy_stylesheets(&target.path);

    ui::success("Deployment completed successfully!");
    ui::info("Please restart Firefox to apply the changes.");
    Ok(())
}
