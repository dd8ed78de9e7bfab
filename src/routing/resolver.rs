//! Path lookup and redirect dispatch.
//!
//! # Responsibilities
//! - Exact-match lookup of the request path against the mapping
//! - Issue a 302 Found with a Location header on a hit
//! - Delegate the whole request to the fallback service on a miss
//!
//! # Design Decisions
//! - Mapping is frozen at construction (thread-safe without locks)
//! - Exact match only, case-sensitive (no prefix or regex matching)
//! - Fallback is any tower `Service`; its response passes through verbatim
//! - No per-request error path: a lookup either hits or falls through

use std::collections::HashMap;
use std::convert::Infallible;
use std::future::{ready, Ready};
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::future::Either;
use tower::Service;

/// Redirect-or-fallback request handler.
///
/// Holds a frozen path-to-URL mapping and a fallback service. A request whose
/// path is a key in the mapping is answered with `302 Found` pointing at the
/// mapped URL; every other request is handed to the fallback untouched.
///
/// The mapping sits behind an `Arc`, so clones share it and the service can
/// be handed to a multi-threaded server as-is.
#[derive(Debug, Clone)]
pub struct RedirectService<S> {
    mapping: Arc<HashMap<String, String>>,
    fallback: S,
}

impl<S> RedirectService<S> {
    /// Create a handler from a mapping and a fallback service.
    ///
    /// Construction cannot fail. The mapping may be empty, in which case
    /// every request falls through. URL values are treated as opaque and are
    /// not validated here.
    pub fn new(mapping: HashMap<String, String>, fallback: S) -> Self {
        Self {
            mapping: Arc::new(mapping),
            fallback,
        }
    }
}

impl<S> Service<Request<Body>> for RedirectService<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible>,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Either<Ready<Result<Response, Infallible>>, S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
        self.fallback.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        match self.mapping.get(req.uri().path()) {
            Some(target) => {
                tracing::debug!(path = %req.uri().path(), target = %target, "Path matched, redirecting");
                Either::Left(ready(Ok(redirect_to(target))))
            }
            None => {
                tracing::debug!(path = %req.uri().path(), "No mapping, delegating to fallback");
                Either::Right(self.fallback.call(req))
            }
        }
    }
}

/// Build the 302 response for a matched path.
///
/// A target that is not a legal header value cannot be written into
/// `Location`; that request is answered with a 500 instead.
fn redirect_to(target: &str) -> Response {
    match HeaderValue::from_str(target) {
        Ok(location) => {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::FOUND;
            response.headers_mut().insert(header::LOCATION, location);
            response
        }
        Err(_) => {
            tracing::error!(target = %target, "Mapped URL is not a valid Location header value");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
