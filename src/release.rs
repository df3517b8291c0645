//! Release resolution against the GitHub releases API
//!
//! Fetches the descriptor for the latest release or a named tag and selects
//! the deployment asset from it.

use serde::Deserialize;
use ureq::Agent;

use crate::config::DeployConfig;
use crate::error::{DeployError, Result};

/// Metadata for one published release
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseDescriptor {
    /// Release tag, e.g. `v1.2.0`
    #[serde(rename = "tag_name")]
    pub tag: String,
    /// Downloadable assets in release order
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// One downloadable asset of a release
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
}

impl ReleaseDescriptor {
    /// The asset with the given filename, or `AssetNotFound` naming this
    /// release's tag.
    pub fn asset_named(&self, name: &str) -> Result<&ReleaseAsset> {
        self.assets
            .iter()
            .find(|asset| asset.name == name)
            .ok_or_else(|| DeployError::AssetNotFound {
                asset: name.to_string(),
                tag: self.tag.clone(),
            })
    }
}

/// Resolve a release descriptor for `version` ("latest" or a tag name).
pub fn resolve(agent: &Agent, config: &DeployConfig, version: &str) -> Result<ReleaseDescriptor> {
    let url = config.release_url(version);

    let response = agent
        .get(&url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", "application/vnd.github+json")
        .call()
        .map_err(|e| DeployError::NetworkError {
            url: url.clone(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DeployError::HttpStatusError {
            status: status.as_u16(),
            url,
        });
    }

    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| DeployError::NetworkError {
            url,
            reason: e.to_string(),
        })?;

    let release: ReleaseDescriptor = serde_json::from_str(&body)?;
    Ok(release)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASE_JSON: &str = r#"{
        "tag_name": "v1.2.0",
        "html_url": "https://github.com/AlexanderReaper7/firefox-extras/releases/tag/v1.2.0",
        "assets": [
            {
                "name": "firefox-chrome.zip",
                "browser_download_url": "https://github.com/AlexanderReaper7/firefox-extras/releases/download/v1.2.0/firefox-chrome.zip",
                "size": 12345
            },
            {
                "name": "source.tar.gz",
                "browser_download_url": "https://github.com/AlexanderReaper7/firefox-extras/releases/download/v1.2.0/source.tar.gz"
            }
        ]
    }"#;

    #[test]
    fn test_descriptor_deserializes_github_shape() {
        let release: ReleaseDescriptor = serde_json::from_str(RELEASE_JSON).unwrap();
        assert_eq!(release.tag, "v1.2.0");
        assert_eq!(release.assets.len(), 2);
        assert_eq!(release.assets[0].name, "firefox-chrome.zip");
        assert!(release.assets[0].download_url.ends_with("firefox-chrome.zip"));
    }

    #[test]
    fn test_descriptor_without_assets_list() {
        let release: ReleaseDescriptor =
            serde_json::from_str(r#"{"tag_name": "v0.1.0"}"#).unwrap();
        assert!(release.assets.is_empty());
    }

    #[test]
    fn test_asset_named_found() {
        let release: ReleaseDescriptor = serde_json::from_str(RELEASE_JSON).unwrap();
        let asset = release.asset_named("firefox-chrome.zip").unwrap();
        assert_eq!(asset.name, "firefox-chrome.zip");
    }

    #[test]
    fn test_asset_named_missing_names_tag() {
        let release: ReleaseDescriptor = serde_json::from_str(RELEASE_JSON).unwrap();
        let err = release.asset_named("missing.zip").unwrap_err();
        match err {
            DeployError::AssetNotFound { asset, tag } => {
                assert_eq!(asset, "missing.zip");
                assert_eq!(tag, "v1.2.0");
            }
            other => panic!("Expected AssetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_body_is_parse_error() {
        let result: std::result::Result<ReleaseDescriptor, _> =
            serde_json::from_str("<html>rate limited</html>");
        let err: DeployError = result.unwrap_err().into();
        assert!(matches!(err, DeployError::ParseError { .. }));
    }
}
