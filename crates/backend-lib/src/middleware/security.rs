//! Security headers and CORS.

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Settings;

/// Content security policy for every response. Nothing executable is allowed.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self' https:; \
     base-uri 'self'; \
     font-src 'none'; \
     form-action 'self'; \
     frame-ancestors 'self'; \
     img-src 'none'; \
     object-src 'none'; \
     script-src 'none'; \
     script-src-attr 'none'; \
     style-src 'none'; \
     connect-src 'self' https:; \
     upgrade-insecure-requests";

const SECURITY_HEADERS: [(&str, &str); 10] = [
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=15552000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

/// Middleware to add security headers to all responses
pub async fn security_headers(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );
    for (name, value) in SECURITY_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }

    response
}

/// CORS for the configured origin, or any origin when none is set
pub fn cors_layer(settings: &Settings) -> CorsLayer {
    let origin = match settings.allowed_origin.as_deref().filter(|o| !o.is_empty()) {
        None => AllowOrigin::any(),
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(err) => {
                tracing::warn!(%origin, error = %err, "ignoring unusable CORS origin, cross-origin requests will be refused");
                AllowOrigin::list(Vec::<HeaderValue>::new())
            }
        },
    };

    CorsLayer::new().allow_origin(origin).allow_methods([
        Method::GET,
        Method::HEAD,
        Method::PUT,
        Method::PATCH,
        Method::POST,
        Method::DELETE,
    ])
}
