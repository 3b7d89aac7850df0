//! Landing page route handlers.
//!
//! Serves the embedded analyzer page and its script.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const INDEX_HTML: &str = include_str!("../../../../assets/web/index.html");
const SCRIPT_JS: &str = include_str!("../../../../assets/web/script.js");

/// GET / - Serve the analyzer landing page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// GET /static/script.js - Serve the landing page script.
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}
