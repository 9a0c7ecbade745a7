//! PDF resource actions: existence check, external open, download.
//!
//! Every action resolves the record's `ruta` first: absolute `http(s)` URLs
//! are used as-is, relative paths are joined against the configured base URL,
//! and anything else is treated as a local file path. Failures never escape
//! as panics; they are reported through [`ActionError`] and the caller decides
//! how to surface them.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, warn};

/// Outcome of an open or download action. Display strings are user-facing
/// (the UI status line is in Spanish, matching the catalog content).
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("ruta de recurso no válida")]
    InvalidPath,
    #[error("recurso no disponible: {0}")]
    Unavailable(String),
    #[error("no se pudo abrir el visor: {0}")]
    OpenFailed(#[source] io::Error),
    #[error("error de descarga: {0}")]
    DownloadFailed(String),
}

/// A resolved resource target
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Local(PathBuf),
    Remote(Url),
}

impl Resource {
    /// String handed to the platform opener
    pub fn target(&self) -> String {
        match self {
            Resource::Local(path) => path.display().to_string(),
            Resource::Remote(url) => url.as_str().to_string(),
        }
    }
}

/// Resolve a raw `ruta` into a resource target.
///
/// Returns None for empty or blank input. Relative paths become remote URLs
/// when a base URL is configured and local file paths otherwise.
pub fn classify(path: &str, base_url: Option<&str>) -> Option<Resource> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(trimmed) {
        if matches!(url.scheme(), "http" | "https") {
            return Some(Resource::Remote(url));
        }
    }

    if let Some(base) = base_url {
        let joined = Url::parse(base).and_then(|b| b.join(trimmed));
        return match joined {
            Ok(url) => Some(Resource::Remote(url)),
            Err(_) => None,
        };
    }

    Some(Resource::Local(PathBuf::from(trimmed)))
}

/// Determine whether a resource is retrievable without transferring its body.
///
/// Remote targets get a bodiless HEAD probe; local targets a metadata check.
/// Any transport or protocol failure collapses to `false`.
pub async fn resource_exists(client: &Client, resource: &Resource) -> bool {
    match resource {
        Resource::Local(path) => tokio::fs::try_exists(path).await.unwrap_or(false),
        Resource::Remote(url) => match client.head(url.clone()).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!(url = %url, error = %err, "existence probe failed");
                false
            }
        },
    }
}

/// Open a PDF resource in the host's external viewer.
///
/// Validates the path, awaits the existence check, and only then spawns the
/// platform opener. The spawned viewer is fully detached from this process,
/// so it holds no handle back to us. Fire and forget: success means the spawn
/// call returned, not that a document was displayed.
pub async fn open_resource(
    client: &Client,
    path: &str,
    base_url: Option<&str>,
) -> Result<(), ActionError> {
    open_resource_with(client, path, base_url, spawn_viewer).await
}

async fn open_resource_with<F>(
    client: &Client,
    path: &str,
    base_url: Option<&str>,
    launch: F,
) -> Result<(), ActionError>
where
    F: FnOnce(&str) -> io::Result<()>,
{
    let Some(resource) = classify(path, base_url) else {
        warn!(path, "refusing to open invalid resource path");
        return Err(ActionError::InvalidPath);
    };

    if !resource_exists(client, &resource).await {
        warn!(target = %resource.target(), "resource not retrievable");
        return Err(ActionError::Unavailable(resource.target()));
    }

    debug!(target = %resource.target(), "opening resource in external viewer");
    launch(&resource.target()).map_err(ActionError::OpenFailed)
}

/// Spawn the platform opener for a URL or file path, detached
fn spawn_viewer(target: &str) -> io::Result<()> {
    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", "", target]).spawn();

    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(target).spawn();

    #[cfg(all(unix, not(target_os = "macos")))]
    let result = Command::new("xdg-open").arg(target).spawn();

    result.map(|_| ())
}

/// Download a PDF resource into `dest_dir` under `filename`.
///
/// No pre-flight existence check: the GET itself reports unavailability. The
/// write goes through a transient `.part` file that is renamed into place on
/// success and removed on failure, so a failed download leaves nothing behind.
pub async fn download_resource(
    client: &Client,
    path: &str,
    base_url: Option<&str>,
    filename: &str,
    dest_dir: &Path,
) -> Result<PathBuf, ActionError> {
    if filename.trim().is_empty() {
        return Err(ActionError::InvalidPath);
    }
    let Some(resource) = classify(path, base_url) else {
        warn!(path, "refusing to download invalid resource path");
        return Err(ActionError::InvalidPath);
    };

    let bytes = match &resource {
        Resource::Local(source) => tokio::fs::read(source)
            .await
            .map_err(|e| ActionError::DownloadFailed(e.to_string()))?,
        Resource::Remote(url) => {
            let response = client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| ActionError::DownloadFailed(e.to_string()))?;
            if !response.status().is_success() {
                return Err(ActionError::DownloadFailed(format!(
                    "estado HTTP {}",
                    response.status()
                )));
            }
            response
                .bytes()
                .await
                .map_err(|e| ActionError::DownloadFailed(e.to_string()))?
                .to_vec()
        }
    };

    let dest = dest_dir.join(filename);
    let part = dest_dir.join(format!("{filename}.part"));
    if let Err(err) = tokio::fs::write(&part, &bytes).await {
        return Err(ActionError::DownloadFailed(err.to_string()));
    }
    match tokio::fs::rename(&part, &dest).await {
        Ok(()) => {
            debug!(dest = %dest.display(), "download complete");
            Ok(dest)
        }
        Err(err) => {
            let _ = tokio::fs::remove_file(&part).await;
            Err(ActionError::DownloadFailed(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_classify_empty_and_blank() {
        assert_eq!(classify("", None), None);
        assert_eq!(classify("   ", Some("https://example.com")), None);
    }

    #[test]
    fn test_classify_absolute_url() {
        let resource = classify("https://example.com/a.pdf", None).unwrap();
        assert_eq!(resource.target(), "https://example.com/a.pdf");
        assert!(matches!(resource, Resource::Remote(_)));
    }

    #[test]
    fn test_classify_relative_with_base() {
        let resource = classify("/pdfs/a.pdf", Some("https://example.com")).unwrap();
        assert_eq!(resource.target(), "https://example.com/pdfs/a.pdf");
    }

    #[test]
    fn test_classify_relative_without_base_is_local() {
        let resource = classify("pdfs/a.pdf", None).unwrap();
        assert!(matches!(resource, Resource::Local(_)));
    }

    #[test]
    fn test_classify_bad_base_url() {
        assert_eq!(classify("/pdfs/a.pdf", Some("not a url")), None);
    }

    #[tokio::test]
    async fn test_resource_exists_head_ok() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/a.pdf"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = Client::new();
        let resource = classify("/a.pdf", Some(&server.uri())).unwrap();
        assert!(resource_exists(&client, &resource).await);
    }

    #[tokio::test]
    async fn test_resource_exists_head_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = Client::new();
        let resource = classify("/missing.pdf", Some(&server.uri())).unwrap();
        assert!(!resource_exists(&client, &resource).await);
    }

    #[tokio::test]
    async fn test_resource_exists_transport_failure() {
        // Nothing listens on port 1
        let client = Client::new();
        let resource = classify("http://127.0.0.1:1/a.pdf", None).unwrap();
        assert!(!resource_exists(&client, &resource).await);
    }

    #[tokio::test]
    async fn test_resource_exists_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.pdf");
        std::fs::write(&file, b"%PDF-1.4").unwrap();

        let client = Client::new();
        let present = Resource::Local(file);
        let absent = Resource::Local(dir.path().join("missing.pdf"));
        assert!(resource_exists(&client, &present).await);
        assert!(!resource_exists(&client, &absent).await);
    }

    #[tokio::test]
    async fn test_open_invalid_path_spawns_nothing() {
        let client = Client::new();
        let launched = AtomicUsize::new(0);
        let result = open_resource_with(&client, "", None, |_| {
            launched.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(ActionError::InvalidPath)));
        assert_eq!(launched.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_open_unavailable_spawns_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new();
        let launched = AtomicUsize::new(0);
        let result = open_resource_with(&client, "/gone.pdf", Some(&server.uri()), |_| {
            launched.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(ActionError::Unavailable(_))));
        assert_eq!(launched.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_open_available_launches_exactly_once() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/a.pdf"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new();
        let launched = AtomicUsize::new(0);
        let expected = format!("{}/a.pdf", server.uri());
        let result = open_resource_with(&client, "/a.pdf", Some(&server.uri()), |target| {
            assert_eq!(target, expected);
            launched.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .await;
        assert!(result.is_ok());
        assert_eq!(launched.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_open_launch_failure_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = Client::new();
        let result = open_resource_with(&client, "/a.pdf", Some(&server.uri()), |_| {
            Err(io::Error::new(io::ErrorKind::NotFound, "no viewer"))
        })
        .await;
        assert!(matches!(result, Err(ActionError::OpenFailed(_))));
    }

    #[tokio::test]
    async fn test_download_writes_file_without_part_remnant() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a.pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 data".to_vec()))
            .mount(&server)
            .await;

        let client = Client::new();
        let dir = tempfile::tempdir().unwrap();
        let dest = download_resource(&client, "/a.pdf", Some(&server.uri()), "a.pdf", dir.path())
            .await
            .unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"%PDF-1.4 data");
        assert!(!dir.path().join("a.pdf.part").exists());
    }

    #[tokio::test]
    async fn test_download_http_error_leaves_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = Client::new();
        let dir = tempfile::tempdir().unwrap();
        let result =
            download_resource(&client, "/gone.pdf", Some(&server.uri()), "gone.pdf", dir.path())
                .await;
        assert!(matches!(result, Err(ActionError::DownloadFailed(_))));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn test_download_local_copy() {
        let src_dir = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("a.pdf");
        std::fs::write(&source, b"local bytes").unwrap();

        let client = Client::new();
        let dest_dir = tempfile::tempdir().unwrap();
        let dest = download_resource(
            &client,
            source.to_str().unwrap(),
            None,
            "copia.pdf",
            dest_dir.path(),
        )
        .await
        .unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"local bytes");
    }

    #[tokio::test]
    async fn test_download_empty_filename_rejected() {
        let client = Client::new();
        let dir = tempfile::tempdir().unwrap();
        let result = download_resource(&client, "/a.pdf", None, "  ", dir.path()).await;
        assert!(matches!(result, Err(ActionError::InvalidPath)));
    }
}
