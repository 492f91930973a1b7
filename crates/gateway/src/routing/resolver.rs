//! Host-to-Brand Resolution
//!
//! Resolves incoming Host headers to brands and decides whether a request
//! path must be rewritten to its brand-prefixed internal form. The visible
//! URL never changes: a rewrite serves `/capital/about/index.html` while
//! the browser keeps showing `growthwavecapital.com/about`.
//!
//! The static build emits directory-style output (`/capital/about/index.html`),
//! so page rewrites force a trailing slash; without it the file server would
//! issue its own slash-adding redirect and leak the internal path. File
//! requests target an exact name and keep their slash state.

use std::collections::HashMap;

use growthwave_shared::{host_brand_map, Brand};

/// Path prefixes that must never be rewritten: shared static assets,
/// internal tooling, and the gateway's own API and health namespaces.
pub const PASSTHROUGH_PREFIXES: &[&str] = &[
    "/images/",
    "/favicon/",
    "/fonts/",
    "/_astro/",
    "/dev/",
    "/.netlify/",
    "/api/",
    "/health",
];

/// File suffixes identifying requests exempt from trailing-slash handling
pub const FILE_EXTENSIONS: &[&str] = &[
    ".html", ".css", ".js", ".json", ".xml", ".txt", ".svg", ".png", ".pdf", ".docx", ".jpg",
    ".jpeg", ".gif", ".webp", ".ico", ".woff", ".woff2", ".ttf",
];

/// Routing decision for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Serve the original path unmodified
    PassThrough,
    /// Serve the content at this internal path, keeping the visible URL
    Rewrite(String),
}

/// Hostname-based brand resolver
///
/// Holds the immutable hostname map built from the brand registry at
/// process start. Decisions are a pure function of (host, path, query).
#[derive(Debug, Clone)]
pub struct BrandResolver {
    hosts: &'static HashMap<String, Brand>,
}

impl BrandResolver {
    pub fn new() -> Self {
        Self {
            hosts: host_brand_map(),
        }
    }

    /// Resolve a Host header to a brand.
    ///
    /// Returns `None` for unmapped hosts — localhost, preview deployments,
    /// and the unbranded hub all pass through untouched.
    pub fn resolve(&self, host: &str) -> Option<Brand> {
        self.hosts.get(&normalize_host(host)).copied()
    }

    /// Decide how to route one request.
    ///
    /// Total: every (host, path, query) combination reaches a decision, and
    /// malformed or absent values pass through. The decision space is
    /// exactly {pass-through, rewrite} — never a redirect.
    pub fn decide(&self, host: Option<&str>, path: &str, query: Option<&str>) -> RouteDecision {
        if !path.starts_with('/') {
            return RouteDecision::PassThrough;
        }

        // Shared assets and internal tooling bypass brand rewriting
        if PASSTHROUGH_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
        {
            return RouteDecision::PassThrough;
        }

        let Some(brand) = host.and_then(|host| self.resolve(host)) else {
            return RouteDecision::PassThrough;
        };

        // Guard against double-prefixing when a user or crawler links
        // directly to the internal brand-prefixed path
        let prefix = format!("/{}", brand.as_str());
        if path == prefix || path.starts_with(&format!("{prefix}/")) {
            return RouteDecision::PassThrough;
        }

        let new_path = if path == "/" {
            format!("{prefix}/")
        } else if is_file_request(path) {
            format!("{prefix}{path}")
        } else if path.ends_with('/') {
            format!("{prefix}{path}")
        } else {
            format!("{prefix}{path}/")
        };

        match query {
            Some(query) if !query.is_empty() => {
                RouteDecision::Rewrite(format!("{new_path}?{query}"))
            }
            _ => RouteDecision::Rewrite(new_path),
        }
    }
}

impl Default for BrandResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a host header value
fn normalize_host(host: &str) -> String {
    // Remove port if present
    let host = host.split(':').next().unwrap_or(host);
    // Lowercase
    host.to_ascii_lowercase()
}

/// Check if the path targets an exact file rather than a directory index
fn is_file_request(path: &str) -> bool {
    FILE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(target: &str) -> RouteDecision {
        RouteDecision::Rewrite(target.to_string())
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("Example.COM"), "example.com");
        assert_eq!(normalize_host("example.com:8080"), "example.com");
        assert_eq!(normalize_host("GROWTHWAVECAPITAL.COM:443"), "growthwavecapital.com");
    }

    #[test]
    fn test_resolve_known_hosts() {
        let resolver = BrandResolver::new();
        assert_eq!(
            resolver.resolve("growthwavecapital.com"),
            Some(Brand::Capital)
        );
        assert_eq!(
            resolver.resolve("www.growthwavecapital.com"),
            Some(Brand::Capital)
        );
        assert_eq!(
            resolver.resolve("growthwaveadvisors.com"),
            Some(Brand::Advisors)
        );
        assert_eq!(resolver.resolve("unknown-preview.example.dev"), None);
        assert_eq!(resolver.resolve("localhost"), None);
    }

    #[test]
    fn test_root_path_rewrite() {
        let resolver = BrandResolver::new();
        assert_eq!(
            resolver.decide(Some("growthwavecapital.com"), "/", None),
            rewrite("/capital/")
        );
    }

    #[test]
    fn test_page_request_gets_trailing_slash() {
        let resolver = BrandResolver::new();
        assert_eq!(
            resolver.decide(Some("growthwavecapital.com"), "/about", None),
            rewrite("/capital/about/")
        );
        // Existing trailing slash is left alone
        assert_eq!(
            resolver.decide(Some("growthwavecapital.com"), "/about/", None),
            rewrite("/capital/about/")
        );
    }

    #[test]
    fn test_file_request_keeps_slash_state() {
        let resolver = BrandResolver::new();
        assert_eq!(
            resolver.decide(Some("growthwavecapital.com"), "/logo.svg", None),
            rewrite("/capital/logo.svg")
        );
        assert_eq!(
            resolver.decide(Some("growthwaveproperties.com"), "/guides/deck.pdf", None),
            rewrite("/properties/guides/deck.pdf")
        );
    }

    #[test]
    fn test_passthrough_prefixes_win_over_everything() {
        let resolver = BrandResolver::new();
        for host in [
            Some("growthwavecapital.com"),
            Some("growthwaveadvisors.com"),
            Some("unknown.example.dev"),
            None,
        ] {
            assert_eq!(
                resolver.decide(host, "/images/hero.jpg", None),
                RouteDecision::PassThrough
            );
            assert_eq!(
                resolver.decide(host, "/_astro/index.abc123.css", None),
                RouteDecision::PassThrough
            );
            assert_eq!(
                resolver.decide(host, "/api/v1/forms/submit", None),
                RouteDecision::PassThrough
            );
            assert_eq!(
                resolver.decide(host, "/health/ready", None),
                RouteDecision::PassThrough
            );
        }
    }

    #[test]
    fn test_unmapped_host_passes_through() {
        let resolver = BrandResolver::new();
        assert_eq!(
            resolver.decide(Some("unknown-preview.example.dev"), "/about", None),
            RouteDecision::PassThrough
        );
        assert_eq!(resolver.decide(None, "/about", None), RouteDecision::PassThrough);
    }

    #[test]
    fn test_already_prefixed_passes_through() {
        let resolver = BrandResolver::new();
        assert_eq!(
            resolver.decide(Some("growthwavecapital.com"), "/capital/about", None),
            RouteDecision::PassThrough
        );
        assert_eq!(
            resolver.decide(Some("growthwavecapital.com"), "/capital", None),
            RouteDecision::PassThrough
        );
        // A different brand's prefix is NOT a prefix for this host
        assert_eq!(
            resolver.decide(Some("growthwavecapital.com"), "/properties/about", None),
            rewrite("/capital/properties/about/")
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let resolver = BrandResolver::new();
        let host = Some("growthwaveproperties.com");
        for path in ["/", "/about", "/about/", "/logo.svg", "/portfolio/deck.pdf"] {
            if let RouteDecision::Rewrite(target) = resolver.decide(host, path, None) {
                let rewritten_path = target.split('?').next().unwrap_or(&target);
                assert_eq!(
                    resolver.decide(host, rewritten_path, None),
                    RouteDecision::PassThrough,
                    "re-applying to {rewritten_path} must pass through"
                );
            } else {
                panic!("expected rewrite for {path}");
            }
        }
    }

    #[test]
    fn test_query_string_preserved() {
        let resolver = BrandResolver::new();
        assert_eq!(
            resolver.decide(Some("growthwavecapital.com"), "/about", Some("utm=x")),
            rewrite("/capital/about/?utm=x")
        );
        assert_eq!(
            resolver.decide(
                Some("growthwavecapital.com"),
                "/apply",
                Some("utm_source=email&utm_campaign=q3%20launch")
            ),
            rewrite("/capital/apply/?utm_source=email&utm_campaign=q3%20launch")
        );
        // Empty query is not appended
        assert_eq!(
            resolver.decide(Some("growthwavecapital.com"), "/about", Some("")),
            rewrite("/capital/about/")
        );
    }

    #[test]
    fn test_malformed_path_passes_through() {
        let resolver = BrandResolver::new();
        assert_eq!(
            resolver.decide(Some("growthwavecapital.com"), "", None),
            RouteDecision::PassThrough
        );
        assert_eq!(
            resolver.decide(Some("growthwavecapital.com"), "about", None),
            RouteDecision::PassThrough
        );
    }

    #[test]
    fn test_www_variant_maps_like_apex() {
        let resolver = BrandResolver::new();
        assert_eq!(
            resolver.decide(Some("www.growthwaveadvisors.com"), "/companies", None),
            rewrite("/advisors/companies/")
        );
    }
}
