//! Axum router construction for the Blog API.
//!
//! Assembles all routes into a single [`Router`] with a CORS layer limited
//! to an explicit origin allow-list and a tracing layer for access logs.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowCredentials, AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers;
use crate::state::AppState;

/// Parsed CORS origin allow-list shared by the CORS layers.
type OriginList = Arc<[HeaderValue]>;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- status message
/// - `GET /api/posts` -- list posts
/// - `GET /api/posts/{slug}` -- single post
///
/// Unknown paths and unsupported methods fall through to Axum's default
/// 404 / 405 responses.
pub fn build_router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    let origins = parse_origins(allowed_origins);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/posts", get(handlers::list_posts))
        .route("/api/posts/{slug}", get(handlers::get_post))
        .layer(cors_layer(&origins))
        .layer(middleware::from_fn_with_state(origins, withhold_foreign_grants))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer for an exact-match origin allow-list.
///
/// Matching origins get `Access-Control-Allow-Origin` echoing the origin and
/// `Access-Control-Allow-Credentials: true`. Any method and any header are
/// accepted; because credentials are allowed, preflight responses mirror the
/// requested method and headers instead of answering `*`. Requests from
/// other origins are still served, just without the allow headers.
fn cors_layer(origins: &OriginList) -> CorsLayer {
    let credential_origins = Arc::clone(origins);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(AllowCredentials::predicate(move |origin, _parts| {
            credential_origins.contains(origin)
        }))
}

/// Strip the mirrored preflight grants from responses to foreign origins.
///
/// `AllowMethods` and `AllowHeaders` mirror the request unconditionally, so
/// a preflight from an origin outside the list would otherwise still carry
/// them.
async fn withhold_foreign_grants(
    State(origins): State<OriginList>,
    request: Request,
    next: Next,
) -> Response {
    let foreign = request
        .headers()
        .get(header::ORIGIN)
        .is_some_and(|origin| !origins.contains(origin));

    let mut response = next.run(request).await;
    if foreign {
        let headers = response.headers_mut();
        headers.remove(header::ACCESS_CONTROL_ALLOW_METHODS);
        headers.remove(header::ACCESS_CONTROL_ALLOW_HEADERS);
        headers.remove(header::ACCESS_CONTROL_ALLOW_CREDENTIALS);
    }
    response
}

/// Parse configured origins into header values.
///
/// Entries that are not valid header values, and the `*` wildcard, are
/// skipped with a warning.
fn parse_origins(allowed_origins: &[String]) -> OriginList {
    allowed_origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                warn!("wildcard CORS origin is not supported, skipping");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(origin = %origin, error = %e, "invalid CORS origin, skipping");
                    None
                }
            }
        })
        .collect()
}
