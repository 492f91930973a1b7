//! Rewrite middleware
//!
//! Applies the resolver's decision to the request URI before the static
//! file service sees it. A rewrite replaces the path internally — no
//! redirect is ever issued, so the client-visible URL stays unchanged.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, uri::PathAndQuery, Request, Uri},
    middleware::Next,
    response::Response,
};

use super::{BrandResolver, RouteDecision};

/// Middleware that rewrites brand-domain requests to their internal
/// brand-prefixed paths.
pub async fn rewrite_request(
    State(resolver): State<Arc<BrandResolver>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or_else(|| {
            // HTTP/2 carries the host in the :authority pseudo-header
            request
                .uri()
                .authority()
                .map(|authority| authority.as_str().to_owned())
        });

    let path = request.uri().path().to_owned();
    let query = request.uri().query().map(str::to_owned);

    if let RouteDecision::Rewrite(path_and_query) =
        resolver.decide(host.as_deref(), &path, query.as_deref())
    {
        match rewritten_uri(request.uri(), &path_and_query) {
            Ok(uri) => {
                tracing::debug!(
                    host = host.as_deref().unwrap_or(""),
                    original = %path,
                    rewritten = %path_and_query,
                    "Rewriting request path"
                );
                *request.uri_mut() = uri;
            }
            Err(error) => {
                // An unrepresentable rewrite target degrades to pass-through
                tracing::warn!(
                    error = %error,
                    target = %path_and_query,
                    "Rewrite produced an invalid URI"
                );
            }
        }
    }

    next.run(request).await
}

fn rewritten_uri(original: &Uri, path_and_query: &str) -> Result<Uri, axum::http::Error> {
    let mut parts = original.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>()?);
    Ok(Uri::from_parts(parts)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    async fn echo_uri(request: Request<Body>) -> String {
        request.uri().to_string()
    }

    fn test_app() -> Router {
        let resolver = Arc::new(BrandResolver::new());
        Router::new()
            .fallback(echo_uri)
            .layer(middleware::from_fn_with_state(resolver, rewrite_request))
    }

    async fn routed_uri(app: Router, host: &str, uri: &str) -> String {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("host", host)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_rewrites_page_request_with_query() {
        let app = test_app();
        let uri = routed_uri(app, "growthwavecapital.com", "/about?utm=x").await;
        assert_eq!(uri, "/capital/about/?utm=x");
    }

    #[tokio::test]
    async fn test_unknown_host_passes_through() {
        let app = test_app();
        let uri = routed_uri(app, "preview.example.dev", "/about").await;
        assert_eq!(uri, "/about");
    }

    #[tokio::test]
    async fn test_shared_asset_passes_through() {
        let app = test_app();
        let uri = routed_uri(app, "growthwavecapital.com", "/images/hero.jpg").await;
        assert_eq!(uri, "/images/hero.jpg");
    }
}
