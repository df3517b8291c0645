//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// fx-deploy - firefox-extras deployment tool
///
/// Downloads a published firefox-extras release and installs it into the
/// active Firefox profile, or installs a locally built chrome/ directory.
#[derive(Parser, Debug)]
#[command(
    name = "fx-deploy",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install the firefox-extras chrome package into a Firefox profile",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  fx-deploy\n    \
                  fx-deploy v1.2.0\n    \
                  fx-deploy --local\n    \
                  fx-deploy --local --build-dir ./dist/chrome\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/AlexanderReaper7/firefox-extras"
)]
pub struct Cli {
    /// Release version to install (a tag name, or "latest")
    #[arg(id = "release_version", value_name = "VERSION", default_value = "latest")]
    pub version: String,

    /// Install from a locally built chrome/ directory instead of a release
    #[arg(long)]
    pub local: bool,

    /// Local build directory used with --local
    #[arg(long, default_value = "chrome")]
    pub build_dir: PathBuf,

    /// Override the Firefox profiles root directory
    #[arg(long, env = "FIREFOX_PROFILES_DIR")]
    pub profile_root: Option<PathBuf>,

    /// Override the release API base URL
    #[arg(long, hide = true, env = "FX_DEPLOY_API_BASE")]
    pub api_base: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
