//! File system operations for local-mode deployment

use std::path::Path;

use crate::error::{DeployError, Result};
use crate::ui;

/// Copy the immediate files of `build_dir` into the profile's chrome/
/// subdirectory, creating it if needed. Subdirectories are not recursed
/// into; a packaged build keeps everything at the top level.
pub fn install_local_build(build_dir: &Path, profile_dir: &Path) -> Result<()> {
    if !build_dir.is_dir() {
        return Err(DeployError::LocalBuildMissing {
            path: build_dir.display().to_string(),
        });
    }

    let target = profile_dir.join("chrome");
    std::fs::create_dir_all(&target).map_err(|e| DeployError::WriteError {
        path: target.display().to_string(),
        reason: e.to_string(),
    })?;

    for entry in std::fs::read_dir(build_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        let dest = target.join(&name);
        std::fs::copy(&path, &dest).map_err(|e| DeployError::WriteError {
            path: dest.display().to_string(),
            reason: e.to_string(),
        })?;
        ui::info(&format!(
            "Copied {} to Firefox profile",
            name.to_string_lossy()
        ));
    }

    Ok(())
}
