//! Shared utilities for integration testing.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Request, StatusCode, Uri};
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;
use tower::make::Shared;
use tower::Service;

/// Serve the given service on an ephemeral local port.
///
/// Port 0 keeps parallel test runs from colliding on fixed addresses.
pub async fn spawn_server<S>(service: S) -> SocketAddr
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, Shared::new(service)).await.unwrap();
    });

    addr
}

/// Catch-all router standing in for the externally supplied fallback.
pub fn fallback_router() -> Router {
    Router::new().fallback(|uri: Uri| async move {
        (StatusCode::NOT_FOUND, format!("no shortcut for {}", uri.path()))
    })
}

/// HTTP client that does not follow redirects, so Location stays observable.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
