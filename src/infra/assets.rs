//! Embedded static asset serving utilities.

use axum::{
    body::Body,
    extract::Path,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use include_dir::{Dir, include_dir};
use mime_guess::Mime;

use crate::application::error::ErrorReport;

static STATIC_PUBLIC_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static/public");

/// Serve embedded public static assets.
pub async fn serve_public(path: Option<Path<String>>) -> Response {
    const SOURCE: &str = "infra::assets::serve_public";

    let captured = path.map(|Path(value)| value);
    match resolve_asset(&STATIC_PUBLIC_ASSETS, captured) {
        Some((bytes, mime)) => build_response(bytes, mime),
        None => {
            let mut response = StatusCode::NOT_FOUND.into_response();
            ErrorReport::from_message(SOURCE, StatusCode::NOT_FOUND, "Static asset not found")
                .attach(&mut response);
            response
        }
    }
}

fn resolve_asset(bundle: &'static Dir<'static>, path: Option<String>) -> Option<(Bytes, Mime)> {
    let candidate = path.unwrap_or_default();
    let candidate = candidate.trim_start_matches('/');

    // No directory listings, no traversal.
    if candidate.is_empty() || candidate.ends_with('/') || candidate.contains("..") {
        return None;
    }

    let file = bundle.get_file(candidate)?;
    let mime = mime_guess::from_path(candidate).first_or_octet_stream();
    Some((Bytes::from_static(file.contents()), mime))
}

fn build_response(bytes: Bytes, mime: Mime) -> Response {
    let len = bytes.len();
    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = StatusCode::OK;

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    if let Ok(value) = HeaderValue::from_str(&len.to_string()) {
        headers.insert(header::CONTENT_LENGTH, value);
    }
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=3600"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_stylesheet() {
        let (bytes, mime) =
            resolve_asset(&STATIC_PUBLIC_ASSETS, Some("app.css".to_string())).expect("asset");
        assert!(!bytes.is_empty());
        assert_eq!(mime.essence_str(), "text/css");
    }

    #[test]
    fn rejects_traversal_and_directories() {
        assert!(resolve_asset(&STATIC_PUBLIC_ASSETS, Some("../Cargo.toml".into())).is_none());
        assert!(resolve_asset(&STATIC_PUBLIC_ASSETS, Some("dir/".into())).is_none());
        assert!(resolve_asset(&STATIC_PUBLIC_ASSETS, None).is_none());
    }
}
