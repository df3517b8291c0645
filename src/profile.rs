//! Firefox profile discovery
//!
//! Computes the OS-specific profiles root and selects one candidate profile
//! directory, preferring the default profile when several exist.

use std::path::{Path, PathBuf};

use crate::error::{DeployError, Result};
use crate::ui;

/// Operating systems with a known Firefox profiles layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Detect the platform from the compile-time OS identifier
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    fn from_os(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(Platform::Windows),
            "macos" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(DeployError::UnsupportedPlatform {
                platform: other.to_string(),
            }),
        }
    }

    /// The fixed profiles root for this platform, relative to the home directory
    pub fn profiles_root(&self, home: &Path) -> PathBuf {
        match self {
            Platform::Windows => home
                .join("AppData")
                .join("Roaming")
                .join("Mozilla")
                .join("Firefox")
                .join("Profiles"),
            Platform::MacOs => home
                .join("Library")
                .join("Application Support")
                .join("Firefox")
                .join("Profiles"),
            Platform::Linux => home.join(".mozilla").join("firefox"),
        }
    }
}

/// A discovered Firefox profile directory
#[derive(Debug, Clone)]
pub struct ProfileDirectory {
    /// Absolute path to the profile directory
    pub path: PathBuf,
    /// Whether the directory name marks it as a default profile
    pub is_default: bool,
}

/// Locate the active Firefox profile.
///
/// With `root_override` set, profile discovery runs against that directory
/// instead of the platform default; this is how tests (and users with
/// non-standard setups) substitute the profiles root.
pub fn locate(root_override: Option<&Path>) -> Result<ProfileDirectory> {
    let root = match root_override {
        Some(path) => path.to_path_buf(),
        None => {
            let home = dirs::home_dir().ok_or_else(|| DeployError::ProfileRootMissing {
                path: "<home directory unknown>".to_string(),
            })?;
            Platform::current()?.profiles_root(&home)
        }
    };
    locate_in(&root)
}

/// Select one qualifying profile directory under `root`.
///
/// A candidate qualifies if it is a directory whose name does not start with
/// a dot and contains a dot (Firefox names profiles `<hash>.<name>`). When
/// several qualify, any name containing "default" wins; ties keep
/// directory-listing order, which is platform dependent.
pub fn locate_in(root: &Path) -> Result<ProfileDirectory> {
    if !root.exists() {
        return Err(DeployError::ProfileRootMissing {
            path: root.display().to_string(),
        });
    }

    let mut candidates: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !name.contains('.') {
            continue;
        }
        candidates.push(name);
    }

    // Stable sort: "default" profiles first, listing order otherwise preserved
    candidates.sort_by_key(|name| !name.contains("default"));

    let Some(selected) = candidates.first() else {
        return Err(DeployError::NoProfilesFound {
            path: root.display().to_string(),
        });
    };

    if candidates.len() > 1 {
        ui::info(&format!("Found multiple profiles: {}", candidates.join(", ")));
        ui::info(&format!("Using: {}", selected));
    }

    Ok(ProfileDirectory {
        path: root.join(selected),
        is_default: selected.contains("default"),
    })
}
