//! fx-deploy - firefox-extras deployment tool
//!
//! Installs the firefox-extras chrome package into the active Firefox
//! profile, either from a published GitHub release or from a locally built
//! chrome/ directory.

use clap::Parser;

mod archive;
mod cli;
mod commands;
mod config;
mod download;
mod error;
mod fsops;
mod http;
mod prefs;
mod profile;
mod release;
mod temp;
mod ui;

use cli::Cli;
use config::DeployConfig;

fn main() {
    let cli = Cli::parse();
    ui::set_verbose(cli.verbose);

    let mut config = DeployConfig::default();
    if let Some(api_base) = cli.api_base.clone() {
        config.api_base = api_base;
    }

    let result = if cli.local {
        commands::local::run(&cli.build_dir, cli.profile_root.as_deref())
    } else {
        commands::deploy::run(&config, &cli.version, cli.profile_root.as_deref())
    };

    if let Err(e) = result {
        ui::error(&format!("Deployment failed: {}", e));
        std::process::exit(1);
    }
}
