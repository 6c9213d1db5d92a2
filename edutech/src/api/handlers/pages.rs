//! Embedded static page serving.
//!
//! Non-API paths render plain HTML pages (home, auth, dashboard, chatbot)
//! embedded into the binary at build time. There is no server-side templating
//! logic; the pages talk to the JSON API from the browser.

use axum::{
    body::Body,
    http::{Response, StatusCode, Uri},
    response::IntoResponse,
};
use tracing::instrument;

use crate::static_assets;

/// Serve an embedded static page or asset.
///
/// Directory-style paths map onto their HTML page (`/auth/` -> `auth.html`);
/// anything else is looked up verbatim (stylesheets, scripts).
#[instrument]
pub async fn serve_page(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_matches('/');

    let file = match path {
        "" => "index.html".to_string(),
        "auth" | "dashboard" | "chatbot" => format!("{path}.html"),
        other => other.to_string(),
    };

    if let Some(content) = static_assets::Assets::get(&file) {
        let mime = mime_guess::from_path(&file).first_or_octet_stream();

        return Response::builder()
            .header(axum::http::header::CONTENT_TYPE, mime.as_ref())
            .header(axum::http::header::CACHE_CONTROL, "no-cache")
            .body(Body::from(content.data.into_owned()))
            .unwrap();
    }

    Response::builder().status(StatusCode::NOT_FOUND).body(Body::empty()).unwrap()
}
