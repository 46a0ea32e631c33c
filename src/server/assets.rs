//! Pages and static assets, read from the deployment's static directory on every request.

use super::AppState;
use axum::extract::{Path as UrlPath, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub async fn index(State(state): State<AppState>) -> Response {
    serve_file(&state.static_root.join("index.html")).await
}

pub async fn calc1(State(state): State<AppState>) -> Response {
    serve_file(&state.static_root.join("calc1.html")).await
}

pub async fn calc2(State(state): State<AppState>) -> Response {
    serve_file(&state.static_root.join("calc2.html")).await
}

pub async fn static_asset(
    State(state): State<AppState>,
    UrlPath(requested): UrlPath<String>,
) -> Response {
    let relative = requested.strip_prefix('/').unwrap_or(&requested);
    match resolve(&state.static_root, relative) {
        Some(path) => serve_file(&path).await,
        None => {
            debug!(%requested, "refusing path outside the static root");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Joins `requested` onto `root`, or `None` if it would leave `root`.
fn resolve(root: &Path, requested: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    for component in Path::new(requested).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

async fn serve_file(path: &Path) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => ([(CONTENT_TYPE, content_type(path))], bytes).into_response(),
        Err(error) => {
            debug!(path = %path.display(), %error, "static file unavailable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
