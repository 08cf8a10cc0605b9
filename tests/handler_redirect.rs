mod common;

use axum::{Router, extract::ConnectInfo, http::StatusCode, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

use linkcut::api::handlers::redirect_handler;

/// Injects a fixed peer address so the handler's `ConnectInfo` extractor
/// works under the in-process test transport.
#[derive(Clone)]
struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

fn redirect_app(pool: PgPool) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    let url_id = common::create_test_url(&pool, "target1", "https://example.com/target").await;

    let server = TestServer::new(redirect_app(pool.clone())).unwrap();

    let response = server.get("/target1").await;

    assert_eq!(response.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com/target");

    assert_eq!(common::access_count(&pool, "target1").await, 1);
    assert_eq!(common::access_log_count(&pool, url_id).await, 1);
}

#[sqlx::test]
async fn test_redirect_records_peer_address(pool: PgPool) {
    let url_id = common::create_test_url(&pool, "peer01", "https://example.com").await;

    let server = TestServer::new(redirect_app(pool.clone())).unwrap();
    server.get("/peer01").await;

    let ip = sqlx::query_scalar::<_, String>(
        "SELECT ip_address FROM access_logs WHERE url_id = $1",
    )
    .bind(url_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(ip, "127.0.0.1");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let server = TestServer::new(redirect_app(pool)).unwrap();

    let response = server.get("/miss42").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_rejects_bad_code_format(pool: PgPool) {
    let server = TestServer::new(redirect_app(pool)).unwrap();

    let response = server.get("/ab").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_redirect_expired_returns_gone_without_side_effects(pool: PgPool) {
    let url_id = common::create_expired_url(&pool, "old123", "https://example.com").await;

    let server = TestServer::new(redirect_app(pool.clone())).unwrap();

    let response = server.get("/old123").await;

    response.assert_status(StatusCode::GONE);

    assert_eq!(common::access_count(&pool, "old123").await, 0);
    assert_eq!(common::access_log_count(&pool, url_id).await, 0);
}

#[sqlx::test]
async fn test_concurrent_redirects_count_every_access(pool: PgPool) {
    let url_id = common::create_test_url(&pool, "conc01", "https://example.com").await;

    let server = Arc::new(TestServer::new(redirect_app(pool.clone())).unwrap());

    let mut handles = Vec::new();
    for _ in 0..50 {
        let server = Arc::clone(&server);
        handles.push(tokio::spawn(async move {
            let response = server.get("/conc01").await;
            assert_eq!(response.status_code(), StatusCode::MOVED_PERMANENTLY);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(common::access_count(&pool, "conc01").await, 50);
    assert_eq!(common::access_log_count(&pool, url_id).await, 50);
}
