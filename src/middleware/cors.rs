//! CORS policy for browser clients.
//!
//! The API is read-only, so only GET (and the preflight OPTIONS) is allowed.
//! - Development: any origin, no credentials.
//! - Production: exact-match allowlist from `CORS_ALLOWED_ORIGINS`. An empty
//!   allowlist emits no CORS headers at all.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

pub fn layer(config: &Config) -> CorsLayer {
    let base = if config.app_env.is_production() {
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        CorsLayer::new().allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _req| allowed.contains(origin),
        ))
    } else {
        CorsLayer::new().allow_origin(Any)
    };

    base.allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
        .max_age(Duration::from_secs(60 * 10))
}

pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, response::Response, routing::get};
    use tower::ServiceExt;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let mut all = vec![
            ("DATABASE_URL", "postgres://localhost/polls"),
            ("VALKEY_URL", "redis://localhost:6379"),
        ];
        all.extend_from_slice(pairs);
        Config::from_lookup(|key: &str| {
            all.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap()
    }

    async fn get_from(config: &Config, origin: &str) -> Response {
        apply(Router::new().route("/", get(|| async { "ok" })), config)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn development_allows_any_origin() {
        let res = get_from(&config(&[]), "http://localhost:5173").await;

        assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn production_only_echoes_allowlisted_origins() {
        let config = config(&[
            ("APP_ENV", "production"),
            ("CORS_ALLOWED_ORIGINS", "https://polls.example"),
        ]);

        let allowed = get_from(&config, "https://polls.example").await;
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://polls.example"
        );

        let denied = get_from(&config, "https://evil.example").await;
        assert!(
            !denied
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }
}
