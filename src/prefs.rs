//! Idempotent patching of the profile's user.js
//!
//! The preference file is line-oriented; each settable preference is one
//! `user_pref("<key>", <value>);` statement. Patching replaces the line that
//! sets the target key (whatever its current value) or appends a new one,
//! leaving every other line untouched and in order.

use std::path::Path;

use crate::error::{DeployError, Result};
use crate::ui;

/// Preference that allows profile-level userChrome.css styling
pub const LEGACY_STYLESHEETS_PREF: &str = "toolkit.legacyUserProfileCustomizations.stylesheets";

/// Upsert one boolean preference in the profile's user.js.
///
/// After this returns Ok, exactly one line in the file sets `key`.
pub fn set_user_pref(profile_dir: &Path, key: &str, value: bool) -> Result<()> {
    let user_js = profile_dir.join("user.js");
    let pref_stmt = format!("user_pref(\"{}\", {});", key, value);
    let marker = format!("user_pref(\"{}\"", key);

    let content = if user_js.exists() {
        std::fs::read_to_string(&user_js)?
    } else {
        String::new()
    };

    // Appended lines reuse the file's own line-ending convention
    let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };

    let already_set = content
        .lines()
        .any(|line| line.trim_start().starts_with(&marker));

    let new_content = if already_set {
        // Swap out only the matching line; every other line keeps its
        // original bytes, including its line terminator.
        let mut rebuilt = String::with_capacity(content.len() + pref_stmt.len());
        for segment in content.split_inclusive('\n') {
            let line = segment.trim_end_matches('\n').trim_end_matches('\r');
            if line.trim_start().starts_with(&marker) {
                rebuilt.push_str(&pref_stmt);
                rebuilt.push_str(&segment[line.len()..]);
            } else {
                rebuilt.push_str(segment);
            }
        }
        rebuilt
    } else if content.is_empty() {
        format!("{}{}", pref_stmt, eol)
    } else if content.ends_with('\n') {
        format!("{}{}{}", content, pref_stmt, eol)
    } else {
        format!("{}{}{}{}", content, eol, pref_stmt, eol)
    };

    std::fs::write(&user_js, new_content).map_err(|e| DeployError::WriteError {
        path: user_js.display().to_string(),
        reason: e.to_string(),
    })
}

/// Enable the legacy customization flag, non-fatally.
///
/// A deployment whose files are already in place should not fail outright
/// just because user.js could not be written, so this logs remediation
/// guidance instead of propagating the error.
pub fn enable_legacy_stylesheets(profile_dir: &Path) {
    match set_user_pref(profile_dir, LEGACY_STYLESHEETS_PREF, true) {
        Ok(()) => {
            ui::info("Updated Firefox preferences to enable legacy user profile customizations");
        }
        Err(e) => {
            ui::warn(&format!("Could not update Firefox preferences: {}", e));
            ui::warn(&format!(
                "Please manually set {} = true in about:config",
                LEGACY_STYLESHEETS_PREF
            ));
        }
    }
}
