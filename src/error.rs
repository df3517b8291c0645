//! Error types for the deployment pipeline
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Every variant here is fatal: it aborts the remaining pipeline steps and maps
//! to a nonzero process exit. The one recoverable failure, not being able to
//! write the preference file, is handled as a logged warning in `prefs` and
//! never surfaces as a `DeployError`.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for deployment operations
#[derive(Error, Diagnostic, Debug)]
pub enum DeployError {
    // Platform / profile discovery errors
    #[error("Unsupported platform: {platform}")]
    #[diagnostic(
        code(fxdeploy::platform::unsupported),
        help("Supported platforms: windows, macos, linux")
    )]
    UnsupportedPlatform { platform: String },

    #[error("Firefox profiles directory not found: {path}")]
    #[diagnostic(
        code(fxdeploy::profile::root_missing),
        help("Start Firefox at least once so it creates a profile, or pass --profile-root")
    )]
    ProfileRootMissing { path: String },

    #[error("No Firefox profiles found in {path}")]
    #[diagnostic(
        code(fxdeploy::profile::none_found),
        help("Profile directories are named like 'abcd1234.default-release'")
    )]
    NoProfilesFound { path: String },

    // Release API errors
    #[error("Network request failed for {url}: {reason}")]
    #[diagnostic(
        code(fxdeploy::http::network),
        help("Check your internet connection and try again")
    )]
    NetworkError { url: String, reason: String },

    #[error("HTTP {status} from {url}")]
    #[diagnostic(code(fxdeploy::http::status))]
    HttpStatusError { status: u16, url: String },

    #[error("Failed to parse release API response: {reason}")]
    #[diagnostic(code(fxdeploy::release::parse_failed))]
    ParseError { reason: String },

    #[error("Asset '{asset}' not found in release {tag}")]
    #[diagnostic(
        code(fxdeploy::release::asset_not_found),
        help("The release may predate packaged chrome archives; try a newer version")
    )]
    AssetNotFound { asset: String, tag: String },

    // Download errors
    #[error("Too many redirects while downloading {url}")]
    #[diagnostic(code(fxdeploy::download::too_many_redirects))]
    TooManyRedirects { url: String },

    #[error("Redirect from {url} carried no usable Location header")]
    #[diagnostic(code(fxdeploy::download::bad_redirect))]
    BadRedirect { url: String },

    #[error("Download stream failed for {url}: {reason}")]
    #[diagnostic(code(fxdeploy::download::transport))]
    TransportError { url: String, reason: String },

    // Archive errors
    #[error("Cannot read archive {path}: {reason}")]
    #[diagnostic(
        code(fxdeploy::archive::corrupt),
        help("The downloaded archive may be truncated; re-run the deployment")
    )]
    CorruptArchive { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(fxdeploy::fs::write_failed))]
    WriteError { path: String, reason: String },

    // Local mode errors
    #[error("Local build directory not found: {path}")]
    #[diagnostic(
        code(fxdeploy::local::build_missing),
        help("Run the build first so the chrome/ directory exists, or pass --build-dir")
    )]
    LocalBuildMissing { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(fxdeploy::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DeployError {
    fn from(err: std::io::Error) -> Self {
        DeployError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DeployError {
    fn from(err: serde_json::Error) -> Self {
        DeployError::ParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DeployError>;
