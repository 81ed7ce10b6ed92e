// Lyrics routes
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{RawQuery, State},
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::controllers::LyricsController;
use crate::models::lyrics::LookupRequest;

/// Cross-origin headers stamped on every response, pre-flight included.
pub const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "Content-Type, Authorization, X-Client-Info, Apikey",
    ),
];

async fn apply_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for (name, value) in CORS_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    response
}

pub async fn lyrics_route(
    State(controller): State<Arc<LyricsController>>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let result = match LookupRequest::from_query(query.as_deref()) {
        Ok(request) => controller.get_lyrics(&request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(lyrics) => Json(lyrics).into_response(),
        Err(e) => {
            if e.status().is_server_error() {
                warn!("Lyrics relay failed: {}", e);
            }
            e.into_response()
        }
    }
}

/// The relay answers on every path and method.
pub fn lyrics_routes(controller: Arc<LyricsController>) -> Router {
    Router::new()
        .fallback(lyrics_route)
        .layer(middleware::map_response(apply_cors_headers))
        .with_state(controller)
}
