//! Local deployment flow
//!
//! Installs a pre-built chrome/ directory into the Firefox profile without
//! touching the network, then enables the legacy customization preference.

use std::path::Path;

use crate::error::Result;
use crate::{fsops, prefs, profile, ui};

pub fn run(build_dir: &Path, profile_root: Option<&Path>) -> Result<()> {
    ui::info("Starting local deployment of firefox-extras");

    ui::info("Finding Firefox profile...");
    let target = profile::locate(profile_root)?;
    ui::info(&format!("Using Firefox profile: {}", target.path.display()));

    fsops::install_local_build(build_dir, &target.path)?;

    prefs::enable_legacy_stylesheets(&target.path);

    ui::success("Local deployment completed successfully!");
    ui::info("Please restart Firefox to apply the changes.");
    Ok(())
}
