//! Common test utilities for fx-deploy integration tests

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;

use tempfile::TempDir;

/// A fake Firefox profiles root for integration tests
#[allow(dead_code)]
pub struct TestProfiles {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the profiles root
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestProfiles {
    /// Create a profiles root containing the given profile directories
    pub fn with_profiles(names: &[&str]) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("Profiles");
        std::fs::create_dir_all(&root).expect("Failed to create profiles root");
        for name in names {
            std::fs::create_dir_all(root.join(name)).expect("Failed to create profile dir");
        }
        Self { temp, root }
    }

    /// Create an empty profiles root
    pub fn empty() -> Self {
        Self::with_profiles(&[])
    }

    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn read_file(&self, profile: &str, rel: &str) -> String {
        std::fs::read_to_string(self.profile_path(profile).join(rel))
            .expect("Failed to read file from profile")
    }

    pub fn file_exists(&self, profile: &str, rel: &str) -> bool {
        self.profile_path(profile).join(rel).exists()
    }
}

/// An fx-deploy command pointed at the given profiles root
pub fn fx_deploy_cmd(profiles_root: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("fx-deploy").expect("binary exists");
    // Ambient configuration must not leak into tests
    cmd.env_remove("FIREFOX_PROFILES_DIR");
    cmd.env_remove("FX_DEPLOY_API_BASE");
    cmd.args(["--profile-root"]).arg(profiles_root);
    cmd
}

/// Build an in-memory zip with the given entries (`None` content marks a
/// directory entry).
#[allow(dead_code)]
pub fn make_zip(entries: &[(&str, Option<&str>)]) -> Vec<u8> {
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut cursor);
        let options = zip::write::SimpleFileOptions::default();
        for (name, content) in entries {
            match content {
                None => zip.add_directory(*name, options).expect("add dir"),
                Some(content) => {
                    zip.start_file(*name, options).expect("start file");
                    zip.write_all(content.as_bytes()).expect("write entry");
                }
            }
        }
        zip.finish().expect("finish zip");
    }
    cursor.into_inner()
}

/// One canned route of the fixture release server
#[allow(dead_code)]
pub struct Route {
    /// Path prefix to match against the request line
    pub path: &'static str,
    /// Status line, e.g. "200 OK" or "302 Found"
    pub status: &'static str,
    /// Extra headers, each without the trailing CRLF
    pub headers: Vec<String>,
    /// Response body
    pub body: Vec<u8>,
}

/// Serve canned responses on a background thread for up to `max_connections`
/// connections. The route table is built by `build`, which receives the
/// server's base URL so bodies can reference the server itself. Returns the
/// base URL. Unmatched paths get a 404.
#[allow(dead_code)]
pub fn spawn_fixture_server<F>(build: F, max_connections: usize) -> String
where
    F: FnOnce(&str) -> Vec<Route>,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture server");
    let port = listener.local_addr().expect("local addr").port();
    let base = format!("http://127.0.0.1:{}", port);
    let routes = build(&base);

    std::thread::spawn(move || {
        for _ in 0..max_connections {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            // Read until the end of the request head
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => head.extend_from_slice(&buf[..n]),
                }
            }
            let request_line = String::from_utf8_lossy(&head)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string();

            let route = routes
                .iter()
                .find(|route| request_line.contains(route.path));
            let response = match route {
                Some(route) => {
                    let mut response = format!(
                        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
                        route.status,
                        route.body.len()
                    )
                    .into_bytes();
                    for header in &route.headers {
                        response.extend_from_slice(header.as_bytes());
                        response.extend_from_slice(b"\r\n");
                    }
                    response.extend_from_slice(b"\r\n");
                    response.extend_from_slice(&route.body);
                    response
                }
                None => {
                    b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                        .to_vec()
                }
            };
            let _ = stream.write_all(&response);
        }
    });

    base
}

/// Release JSON for a single release whose only asset downloads from
/// `{base}/download/firefox-chrome.zip`.
#[allow(dead_code)]
pub fn release_json(tag: &str, base: &str, asset_name: &str) -> Vec<u8> {
    format!(
        r#"{{"tag_name":"{}","assets":[{{"name":"{}","browser_download_url":"{}/download/{}"}}]}}"#,
        tag, asset_name, base, asset_name
    )
    .into_bytes()
}
