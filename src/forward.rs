//! SPA fallback: extension-less paths the backend does not own are forwarded
//! to the client application's entry document so its router can take over.

use axum::extract::{OriginalUri, Request};
use axum::http::Uri;

use crate::routes::{ACTUATOR_PREFIX, API_PREFIX, SPA_ENTRY};

/// True for paths owned by the API or the management endpoints.
pub fn is_backend_path(path: &str) -> bool {
    path.starts_with(API_PREFIX) || path.starts_with(ACTUATOR_PREFIX)
}

/// True when the final path segment carries no file extension.
///
/// Paths with an extension (`/app.js`, `/img/logo.png`) belong to the
/// static-file server and are never forwarded.
pub fn is_client_route(path: &str) -> bool {
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    !last_segment.contains('.')
}

/// Decide where a request for `path` is forwarded.
///
/// Backend paths forward to themselves; everything else goes to the SPA
/// entry document.
pub fn forward_target(path: &str) -> &str {
    if is_backend_path(path) { path } else { SPA_ENTRY }
}

/// Middleware that rewrites eligible requests before routing.
///
/// The query string is preserved and the URI the client sent stays available
/// through the [`OriginalUri`] extension.
pub fn forward_request(mut req: Request) -> Request {
    let path = req.uri().path();
    if !is_client_route(path) {
        return req;
    }

    let target = forward_target(path);
    if target == path {
        return req;
    }

    let rewritten = match req.uri().query() {
        Some(query) => format!("{target}?{query}"),
        None => target.to_string(),
    };

    match rewritten.parse::<Uri>() {
        Ok(uri) => {
            tracing::debug!(from = %req.uri(), to = %uri, "Forwarding client route to SPA entry");
            if req.extensions().get::<OriginalUri>().is_none() {
                let original = OriginalUri(req.uri().clone());
                req.extensions_mut().insert(original);
            }
            *req.uri_mut() = uri;
        }
        Err(e) => {
            tracing::warn!("Could not build forward URI '{}': {}", rewritten, e);
        }
    }

    req
}
