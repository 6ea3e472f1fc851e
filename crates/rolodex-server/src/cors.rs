//! Cross-origin policy.

use axum::http::{HeaderValue, Method, header::InvalidHeaderValue};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the CORS layer for `frontend_url`.
///
/// Unset, empty, or `*` allows any origin; anything else is matched exactly
/// (a trailing `/` is ignored, since browsers never send one). Only the four
/// verbs the API routes use are allowed.
pub fn cors_layer(
  frontend_url: Option<&str>,
) -> Result<CorsLayer, InvalidHeaderValue> {
  let origin = match frontend_url.map(|u| u.trim().trim_end_matches('/')) {
    None | Some("" | "*") => AllowOrigin::any(),
    Some(url) => AllowOrigin::exact(HeaderValue::from_str(url)?),
  };

  Ok(
    CorsLayer::new()
      .allow_origin(origin)
      .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
      .allow_headers(Any),
  )
}
