//! Deployment configuration
//!
//! All process-wide settings (repository coordinates, asset filename, API
//! base) live in one value that is passed down the pipeline explicitly, so
//! tests can point the deployer at a local fixture server.

/// Configuration for one deployment run
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// GitHub repository owner
    pub repo_owner: String,
    /// GitHub repository name
    pub repo_name: String,
    /// Release asset filename to install
    pub asset_name: String,
    /// Base URL of the release API
    pub api_base: String,
    /// User-Agent header sent with every request (required by the GitHub API)
    pub user_agent: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            repo_owner: "AlexanderReaper7".to_string(),
            repo_name: "firefox-extras".to_string(),
            asset_name: "firefox-chrome.zip".to_string(),
            api_base: "https://api.github.com".to_string(),
            user_agent: "firefox-extras-deploy".to_string(),
        }
    }
}

impl DeployConfig {
    /// URL of the release endpoint for the requested version.
    ///
    /// `"latest"` targets the latest-release endpoint, anything else the
    /// by-tag endpoint.
    pub fn release_url(&self, version: &str) -> String {
        if version == "latest" {
            format!(
                "{}/repos/{}/{}/releases/latest",
                self.api_base, self.repo_owner, self.repo_name
            )
        } else {
            format!(
                "{}/repos/{}/{}/releases/tags/{}",
                self.api_base, self.repo_owner, self.repo_name, version
            )
        }
    }
}
