use tower_http::cors::{Any, CorsLayer};

/// The SPA talks to this API from another origin, so the whole surface is
/// served with permissive CORS; the webhook proxy exists for the one case
/// the browser cannot be allowed to call directly.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}
