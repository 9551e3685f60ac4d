// src/serve/static_files.rs
// =============================================================================
// Request handlers for the static server.
//
// GET /       -> <root>/index.html
// GET /<path> -> <root>/<path>, if it is a file inside root
//
// Anything that tries to climb out of root ("..") or doesn't exist is a 404.
// =============================================================================

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;
use tracing::{info, warn};

// Shared by every request
#[derive(Debug)]
pub struct ServeState {
    pub root: PathBuf,
}

pub async fn index(State(state): State<Arc<ServeState>>) -> Response {
    info!("GET /");
    send_file(&state.root.join("index.html")).await
}

pub async fn static_file(State(state): State<Arc<ServeState>>, uri: Uri) -> Response {
    info!("GET {}", uri.path());
    match resolve_path(&state.root, uri.path()) {
        Some(path) => send_file(&path).await,
        None => not_found(),
    }
}

// Maps a request path onto the filesystem under root
//
// Each segment is percent-decoded before the ".." check, so "%2e%2e" is
// caught as well. Returns None for paths that would leave root or don't
// decode to UTF-8.
fn resolve_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    for segment in request_path.split('/').filter(|s| !s.is_empty()) {
        let decoded = percent_decode_str(segment).decode_utf8().ok()?;

        // A decoded segment must stay a single path component
        let mut components = Path::new(&*decoded).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => resolved.push(part),
            (Some(Component::CurDir), None) => {}
            // "..", a root, a drive prefix or an encoded separator
            _ => return None,
        }
    }
    Some(resolved)
}

async fn send_file(path: &Path) -> Response {
    if !path.is_file() {
        return not_found();
    }

    match tokio::fs::read(path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(path))], bytes).into_response(),
        Err(e) => {
            warn!("failed to read {}: {}", path.display(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

// Guesses a Content-Type from the file extension
fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
