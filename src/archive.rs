//! Archive extraction into the profile directory
//!
//! Processes zip entries one at a time in archive order, so directories are
//! created before the files inside them and at most one entry is buffered.
//! Extraction is not transactional: a failure partway through leaves the
//! already extracted files in place and the caller decides what to do.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{DeployError, Result};
use crate::ui;

/// Extract `archive_path` into `dest_dir`, overwriting existing files.
pub fn extract(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = File::open(archive_path).map_err(|e| DeployError::CorruptArchive {
        path: archive_path.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| DeployError::CorruptArchive {
        path: archive_path.display().to_string(),
        reason: e.to_string(),
    })?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| DeployError::CorruptArchive {
                path: archive_path.display().to_string(),
                reason: e.to_string(),
            })?;

        // Entries with traversal components have no enclosed name; never
        // let them write outside the destination.
        let Some(relative) = entry.enclosed_name() else {
            ui::warn(&format!(
                "Skipping archive entry with unsafe path: {}",
                entry.name()
            ));
            continue;
        };
        let out_path = dest_dir.join(&relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path).map_err(|e| DeployError::WriteError {
                path: out_path.display().to_string(),
                reason: e.to_string(),
            })?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DeployError::WriteError {
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        let mut out_file = File::create(&out_path).map_err(|e| DeployError::WriteError {
            path: out_path.display().to_string(),
            reason: e.to_string(),
        })?;

        // Manual copy so a failing entry read (truncated stream, checksum
        // mismatch) and a failing destination write stay distinguishable.
        let mut buf = [0u8; 64 * 1024];
        loop {
            let read = entry
                .read(&mut buf)
                .map_err(|e| DeployError::CorruptArchive {
                    path: archive_path.display().to_string(),
                    reason: e.to_string(),
                })?;
            if read == 0 {
                break;
            }
            out_file
                .write_all(&buf[..read])
                .map_err(|e| DeployError::WriteError {
                    path: out_path.display().to_string(),
                    reason: e.to_string(),
                })?;
        }

        ui::debug(&format!("Extracted {}", relative.display()));
    }

    Ok(())
}
