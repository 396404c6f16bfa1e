//! Response construction from route handlers.
//!
//! # Responsibilities
//! - Serve pre-rendered pages with `Content-Type` and `ETag`
//! - Answer conditional GET/HEAD requests with 304 Not Modified
//! - Emit 302 Found redirects with the configured target verbatim
//! - Map handlers that cannot be emitted to 500
//!
//! # Design Decisions
//! - Bodies are `Bytes` clones of the compiled table (no copying)
//! - Redirect targets are not rewritten or re-validated

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::observability::metrics;
use crate::routing::router::{Handler, StaticPage};

/// Build the response for a matched route.
pub fn respond(handler: &Handler, method: &Method, headers: &HeaderMap) -> Response {
    match handler {
        Handler::StaticPage(page) => static_page(page, method, headers),
        Handler::Redirect { target } => redirect(target),
    }
}

/// Plain-text 404.
pub fn not_found() -> Response {
    metrics::record_request("not_found");
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Plain-text 500.
pub fn internal_error() -> Response {
    metrics::record_request("error");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

fn static_page(page: &StaticPage, method: &Method, headers: &HeaderMap) -> Response {
    let (content_type, etag) = match (
        HeaderValue::from_str(page.content_type()),
        HeaderValue::from_str(page.etag()),
    ) {
        (Ok(content_type), Ok(etag)) => (content_type, etag),
        _ => {
            tracing::error!(content_type = %page.content_type(), "Static page has unusable headers");
            return internal_error();
        }
    };

    let conditional = *method == Method::GET || *method == Method::HEAD;
    if conditional && if_none_match(headers, page.etag()) {
        metrics::record_request("not_modified");
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }

    metrics::record_request("page");
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type), (header::ETAG, etag)],
        Body::from(page.body().clone()),
    )
        .into_response()
}

fn redirect(target: &str) -> Response {
    match HeaderValue::from_bytes(target.as_bytes()) {
        Ok(location) => {
            metrics::record_request("redirect");
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        Err(_) => {
            tracing::error!(target = %target, "Redirect target is not a valid Location header");
            internal_error()
        }
    }
}

/// True if the request's `If-None-Match` matches `etag`.
fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|tag| tag.trim())
        .any(|tag| tag == "*" || tag.strip_prefix("W/").unwrap_or(tag) == etag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> StaticPage {
        StaticPage::html("<h1>Home</h1>")
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_static_page() {
        let page = page();
        let response = respond(&Handler::StaticPage(page.clone()), &Method::GET, &HeaderMap::new());

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html; charset=utf-8");
        assert_eq!(response.headers()[header::ETAG], page.etag());
        assert_eq!(body_string(response).await, "<h1>Home</h1>");
    }

    #[tokio::test]
    async fn test_not_modified() {
        let page = page();
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_str(page.etag()).unwrap());

        let response = respond(&Handler::StaticPage(page), &Method::GET, &headers);
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
        assert!(body_string(response).await.is_empty());
    }

    #[test]
    fn test_if_none_match_forms() {
        let etag = "\"abc\"";
        let mut headers = HeaderMap::new();
        assert!(!if_none_match(&headers, etag));

        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("\"x\", W/\"abc\""));
        assert!(if_none_match(&headers, etag));

        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("*"));
        assert!(if_none_match(&headers, etag));

        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("\"other\""));
        assert!(!if_none_match(&headers, etag));
    }

    #[test]
    fn test_conditional_ignored_for_post() {
        let page = page();
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("*"));
        let response = respond(&Handler::StaticPage(page), &Method::POST, &headers);
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_redirect_is_verbatim() {
        let target = "https://go.dev/doc/?q=a+b#Top";
        let handler = Handler::Redirect { target: target.into() };
        let response = respond(&handler, &Method::GET, &HeaderMap::new());

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], target);
    }

    #[test]
    fn test_unusable_redirect_is_internal_error() {
        let handler = Handler::Redirect {
            target: "https://example.com/\nevil".into(),
        };
        let response = respond(&handler, &Method::GET, &HeaderMap::new());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_outcomes_counted() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            let redirect = Handler::Redirect {
                target: "https://go.dev".into(),
            };
            respond(&redirect, &Method::GET, &HeaderMap::new());
            respond(&Handler::StaticPage(page()), &Method::GET, &HeaderMap::new());
            not_found();
        });

        let rendered = handle.render();
        for outcome in ["redirect", "page", "not_found"] {
            let line = format!("linkdir_requests_total{{outcome=\"{outcome}\"}} 1");
            assert!(rendered.contains(&line), "{rendered}");
        }
    }
}
