//! Listener setup and request dispatch

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use hive_core::Registry;
use tokio::net::TcpListener;

/// Build the tracker service around a shared registry
///
/// Returns a Router that can be served with any tower-compatible server
pub fn router(registry: Arc<Registry>) -> Router {
    crate::handler::router().with_state(registry)
}

/// Bind the tracker listener
///
/// A tracker without a listener has nothing to do, so callers treat an
/// error here as fatal.
pub async fn bind(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Tracker listening on http://{}", listener.local_addr()?);
    Ok(listener)
}

/// Serve requests until `shutdown` resolves
///
/// Every connection is handled on its own task.
pub async fn serve<F>(listener: TcpListener, registry: Arc<Registry>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(registry))
        .with_graceful_shutdown(shutdown)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unknown_route() {
        let app = router(Arc::new(Registry::new()));

        let response = app
            .oneshot(Request::builder().uri("/peers").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_address_in_use() {
        let first = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = first.local_addr().unwrap();

        assert!(bind(addr).await.is_err());
    }
}
