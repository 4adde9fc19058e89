use axum::extract::Request;
use axum::http::{header, HeaderValue, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;
use url::Url;

use crate::errors::BridgeError;

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF8";

/// Cross-cutting request pipeline: rejects cross-origin non-JSON writes
/// before any handler runs, and stamps the JSON content type on every
/// response a handler did not explicitly type otherwise.
pub async fn enforce(request: Request, next: Next) -> Response {
    let mut response = if rejects(&request) {
        warn!(
            origin = request
                .headers()
                .get(header::ORIGIN)
                .and_then(|v| v.to_str().ok()),
            "cross-origin request rejected"
        );
        BridgeError::validation("origin", "cross-origin request rejected").into_response()
    } else {
        next.run(request).await
    };

    let stamp = match response.headers().get(header::CONTENT_TYPE) {
        None => true,
        Some(value) => value
            .to_str()
            .map(|s| s.starts_with("application/json"))
            .unwrap_or(false),
    };
    if stamp {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }
    response
}

fn rejects(request: &Request) -> bool {
    if request.method() == Method::GET {
        return false;
    }
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    if content_type.is_some_and(|ct| ct.contains("application/json")) {
        return false;
    }
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok());
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok());
    is_cross_origin(host, origin)
}

/// An absent or empty Origin header is same-origin. A present one that fails
/// to parse, or whose authority differs from the Host header, is cross-origin.
fn is_cross_origin(host: Option<&str>, origin: Option<&str>) -> bool {
    let Some(origin) = origin.filter(|o| !o.is_empty()) else {
        return false;
    };
    let Some(host) = host else {
        return true;
    };
    match Url::parse(origin) {
        // `Url::authority` omits the scheme-default port, so the Host side
        // gets the same normalization before comparing.
        Ok(url) => url.authority() != strip_default_port(host, url.scheme()),
        Err(_) => true,
    }
}

fn strip_default_port<'a>(host: &'a str, scheme: &str) -> &'a str {
    let default = match scheme {
        "http" | "ws" => ":80",
        "https" | "wss" => ":443",
        _ => return host,
    };
    host.strip_suffix(default).unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::is_cross_origin;

    #[test]
    fn absent_or_empty_origin_is_same_origin() {
        assert!(!is_cross_origin(Some("api.local:8080"), None));
        assert!(!is_cross_origin(Some("api.local:8080"), Some("")));
    }

    #[test]
    fn matching_authority_is_same_origin() {
        assert!(!is_cross_origin(
            Some("api.local:8080"),
            Some("http://api.local:8080")
        ));
        assert!(!is_cross_origin(Some("api.local"), Some("http://api.local")));
    }

    #[test]
    fn scheme_default_ports_match_an_explicit_host_port() {
        assert!(!is_cross_origin(
            Some("api.local:80"),
            Some("http://api.local:80")
        ));
        assert!(!is_cross_origin(
            Some("api.local:80"),
            Some("http://api.local")
        ));
        assert!(!is_cross_origin(
            Some("api.local:443"),
            Some("https://api.local")
        ));
        // The default is scheme-specific: 443 is not http's.
        assert!(is_cross_origin(
            Some("api.local:443"),
            Some("http://api.local")
        ));
    }

    #[test]
    fn differing_authority_is_cross_origin() {
        assert!(is_cross_origin(
            Some("api.local:8080"),
            Some("http://evil.example")
        ));
        assert!(is_cross_origin(
            Some("api.local:8080"),
            Some("http://api.local:9090")
        ));
    }

    #[test]
    fn unparseable_origin_is_cross_origin() {
        assert!(is_cross_origin(Some("api.local:8080"), Some("not a url")));
        assert!(is_cross_origin(None, Some("http://api.local")));
    }
}
