//! Upstream word-list sources
//!
//! A source is asked for its content together with the revalidation token of
//! the copy we already hold. It either returns fresh bytes (and a new token) or
//! reports that our copy is current.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};
use thiserror::Error;

/// Public English word list refreshed by default
pub const DEFAULT_WORD_LIST_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/refs/heads/master/words.txt";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of a conditional fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// New content, with the token identifying this version if the source has one
    Modified {
        body: Vec<u8>,
        token: Option<String>,
    },
    /// The caller's token still matches
    NotModified,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Anything that can supply a word list
pub trait WordSource {
    /// Human-readable location, used in log messages
    fn describe(&self) -> String;

    /// Fetch the word list, skipping the transfer if `token` is still current
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the source cannot be reached or read.
    fn fetch(&self, token: Option<&str>) -> Result<Fetched, SourceError>;
}

/// A word list on the local file system
///
/// The revalidation token is derived from the file's size and modification
/// time, so an unchanged file is never re-read.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> SourceError {
        SourceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Token for the file as it is on disk right now
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the file metadata cannot be read.
    pub fn current_token(&self) -> Result<String, SourceError> {
        let metadata = fs::metadata(&self.path).map_err(|e| self.io_error(e))?;
        let modified = metadata
            .modified()
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map_or(0, |elapsed| elapsed.as_nanos());
        Ok(format!("\"{:x}-{:x}\"", metadata.len(), modified))
    }
}

impl WordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self, token: Option<&str>) -> Result<Fetched, SourceError> {
        let current = self.current_token()?;
        if token == Some(current.as_str()) {
            return Ok(Fetched::NotModified);
        }

        let body = fs::read(&self.path).map_err(|e| self.io_error(e))?;
        Ok(Fetched::Modified {
            body,
            token: Some(current),
        })
    }
}

/// A word list served over HTTP(S)
///
/// The stored token is sent as `If-None-Match`; a `304` means our copy is
/// current and the response `ETag` becomes the new token.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            agent: ureq::AgentBuilder::new().timeout(HTTP_TIMEOUT).build(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LIST_URL)
    }
}

impl WordSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self, token: Option<&str>) -> Result<Fetched, SourceError> {
        let mut request = self.agent.get(&self.url);
        if let Some(token) = token {
            request = request.set("If-None-Match", token);
        }

        let response = match request.call() {
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(e) => {
                return Err(SourceError::Http {
                    url: self.url.clone(),
                    source: Box::new(e),
                });
            }
        };

        let status = response.status();
        let etag = response.header("ETag").map(str::to_string);
        fetched_from_response(&self.url, status, etag.as_deref(), || {
            let mut body = Vec::new();
            response.into_reader().read_to_end(&mut body)?;
            Ok(body)
        })
    }
}

/// Map an HTTP status and `ETag` onto a fetch result
///
/// The body is only read for a success status.
fn fetched_from_response(
    url: &str,
    status: u16,
    etag: Option<&str>,
    read_body: impl FnOnce() -> io::Result<Vec<u8>>,
) -> Result<Fetched, SourceError> {
    match status {
        304 => Ok(Fetched::NotModified),
        200..=299 => {
            let body = read_body().map_err(|source| SourceError::Body {
                url: url.to_string(),
                source,
            })?;
            let token = etag
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string);
            Ok(Fetched::Modified { body, token })
        }
        status => Err(SourceError::Status {
            url: url.to_string(),
            status,
        }),
    }
}

/// Where the upstream word list lives, as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Url(String),
    File(PathBuf),
}

impl SourceLocation {
    /// `http://` and `https://` values are URLs; anything else is a path
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    #[must_use]
    pub fn open(&self) -> Box<dyn WordSource> {
        match self {
            Self::Url(url) => Box::new(HttpSource::new(url.as_str())),
            Self::File(path) => Box::new(FileSource::new(path)),
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::Url(DEFAULT_WORD_LIST_URL.to_string())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response; the handle yields the request head
    fn serve_once(response: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/words.txt", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            stream.write_all(response.as_bytes()).unwrap();
            head
        });

        (url, handle)
    }

    #[test]
    fn status_mapping() {
        let body = || Ok(b"zebra\n".to_vec());

        assert_eq!(
            fetched_from_response("u", 200, Some("\"v2\""), body).unwrap(),
            Fetched::Modified {
                body: b"zebra\n".to_vec(),
                token: Some("\"v2\"".to_string()),
            }
        );
        assert_eq!(
            fetched_from_response("u", 200, Some("  "), body).unwrap(),
            Fetched::Modified {
                body: b"zebra\n".to_vec(),
                token: None,
            }
        );
        assert_eq!(
            fetched_from_response("u", 304, None, || panic!("body read on 304")).unwrap(),
            Fetched::NotModified
        );
        assert!(matches!(
            fetched_from_response("u", 404, None, body),
            Err(SourceError::Status { status: 404, .. })
        ));
        assert!(matches!(
            fetched_from_response("u", 200, None, || Err(io::Error::other("reset"))),
            Err(SourceError::Body { .. })
        ));
    }

    #[test]
    fn http_fetch_stores_etag() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nETag: \"abc\"\r\nContent-Length: 6\r\nConnection: close\r\n\r\nzebra\n",
        );

        let fetched = HttpSource::new(url).fetch(None).unwrap();
        assert_eq!(
            fetched,
            Fetched::Modified {
                body: b"zebra\n".to_vec(),
                token: Some("\"abc\"".to_string()),
            }
        );
        assert!(!server.join().unwrap().to_lowercase().contains("if-none-match"));
    }

    #[test]
    fn http_fetch_sends_token_and_honours_304() {
        let (url, server) =
            serve_once("HTTP/1.1 304 Not Modified\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");

        let fetched = HttpSource::new(url).fetch(Some("\"abc\"")).unwrap();
        assert_eq!(fetched, Fetched::NotModified);
        assert!(
            server
                .join()
                .unwrap()
                .to_lowercase()
                .contains("if-none-match: \"abc\"")
        );
    }

    #[test]
    fn http_error_status_is_error() {
        let (url, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );

        let result = HttpSource::new(url).fetch(None);
        assert!(matches!(result, Err(SourceError::Status { status: 500, .. })));
        server.join().unwrap();
    }

    #[test]
    fn source_location_from_arg() {
        assert_eq!(
            SourceLocation::from_arg("https://example.org/words.txt"),
            SourceLocation::Url("https://example.org/words.txt".to_string())
        );
        assert_eq!(
            SourceLocation::from_arg("lists/words.txt"),
            SourceLocation::File(PathBuf::from("lists/words.txt"))
        );
        assert_eq!(
            SourceLocation::default().to_string(),
            DEFAULT_WORD_LIST_URL
        );
        assert_eq!(
            SourceLocation::from_arg("http://localhost/w").open().describe(),
            "http://localhost/w"
        );
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wordle_filter_source_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn fetch_without_token_returns_body() {
        let dir = scratch_dir("no_token");
        let path = dir.join("upstream.txt");
        fs::write(&path, "zebra\n").unwrap();

        let source = FileSource::new(&path);
        match source.fetch(None).unwrap() {
            Fetched::Modified { body, token } => {
                assert_eq!(body, b"zebra\n");
                assert_eq!(token, Some(source.current_token().unwrap()));
            }
            Fetched::NotModified => panic!("expected fresh content"),
        }
    }

    #[test]
    fn fetch_with_current_token_is_not_modified() {
        let dir = scratch_dir("current");
        let path = dir.join("upstream.txt");
        fs::write(&path, "zebra\n").unwrap();

        let source = FileSource::new(&path);
        let token = source.current_token().unwrap();
        assert_eq!(source.fetch(Some(&token)).unwrap(), Fetched::NotModified);
    }

    #[test]
    fn fetch_with_stale_token_returns_body() {
        let dir = scratch_dir("stale");
        let path = dir.join("upstream.txt");
        fs::write(&path, "zebra\n").unwrap();

        let source = FileSource::new(&path);
        assert!(matches!(
            source.fetch(Some("\"stale\"")).unwrap(),
            Fetched::Modified { .. }
        ));
    }

    #[test]
    fn fetch_missing_file_is_error() {
        let dir = scratch_dir("missing");
        let source = FileSource::new(dir.join("nope.txt"));
        assert!(matches!(source.fetch(None), Err(SourceError::Io { .. })));
        assert!(source.describe().ends_with("nope.txt"));
    }
}
