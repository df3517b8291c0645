//! Artifact download with explicit redirect handling
//!
//! Streams an HTTP response body to a destination file. Redirects are
//! followed with a bounded loop rather than the agent's built-in handling,
//! so a redirect cycle fails closed with `TooManyRedirects` instead of
//! looping. Any failure removes the partially written destination file
//! before the error propagates.

use std::io::{Read, Write};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use ureq::Agent;
use ureq::http::{StatusCode, header};
use url::Url;

use crate::error::{DeployError, Result};
use crate::ui;

/// Maximum number of redirect hops before failing closed.
pub const MAX_REDIRECTS: u32 = 10;

const COPY_BUF_SIZE: usize = 64 * 1024;

/// Download `url` to `dest`, following at most [`MAX_REDIRECTS`] redirects.
///
/// On success `dest` contains exactly the response body bytes. On any error
/// no file is left at `dest`.
pub fn download(agent: &Agent, user_agent: &str, url: &str, dest: &Path) -> Result<()> {
    let mut current = url.to_string();

    for _ in 0..=MAX_REDIRECTS {
        let response = agent
            .get(&current)
            .header("User-Agent", user_agent)
            .call()
            .map_err(|e| {
                discard_partial(dest);
                DeployError::NetworkError {
                    url: current.clone(),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if status == StatusCode::MOVED_PERMANENTLY || status == StatusCode::FOUND {
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            let Some(location) = location else {
                return Err(DeployError::BadRedirect { url: current });
            };
            current = resolve_location(&current, &location)?;
            ui::debug(&format!("Following redirect to {}", current));
            continue;
        }

        if !status.is_success() {
            discard_partial(dest);
            return Err(DeployError::HttpStatusError {
                status: status.as_u16(),
                url: current,
            });
        }

        return write_body(response, &current, dest);
    }

    Err(DeployError::TooManyRedirects {
        url: url.to_string(),
    })
}

/// Resolve a Location header value against the URL that produced it.
/// GitHub sends absolute URLs, but relative redirects are legal.
fn resolve_location(current: &str, location: &str) -> Result<String> {
    let base = Url::parse(current).map_err(|_| DeployError::BadRedirect {
        url: current.to_string(),
    })?;
    let next = base.join(location).map_err(|_| DeployError::BadRedirect {
        url: current.to_string(),
    })?;
    Ok(next.into())
}

fn write_body(
    response: ureq::http::Response<ureq::Body>,
    url: &str,
    dest: &Path,
) -> Result<()> {
    let content_length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok());

    let progress = content_length.map(|total| {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    });

    let mut reader = response.into_body().into_reader();
    let mut file = std::fs::File::create(dest).map_err(|e| DeployError::WriteError {
        path: dest.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut buf = [0u8; COPY_BUF_SIZE];
    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                if let Some(ref pb) = progress {
                    pb.abandon();
                }
                drop(file);
                discard_partial(dest);
                return Err(DeployError::TransportError {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
            }
        };
        if let Err(e) = file.write_all(&buf[..read]) {
            if let Some(ref pb) = progress {
                pb.abandon();
            }
            drop(file);
            discard_partial(dest);
            return Err(DeployError::WriteError {
                path: dest.display().to_string(),
                reason: e.to_string(),
            });
        }
        if let Some(ref pb) = progress {
            pb.inc(read as u64);
        }
    }

    if let Some(ref pb) = progress {
        pb.finish_and_clear();
    }
    Ok(())
}

/// Best-effort removal of a partial download artifact.
fn discard_partial(dest: &Path) {
    if dest.exists() {
        let _ = std::fs::remove_file(dest);
    }
}
