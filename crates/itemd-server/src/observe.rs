// ABOUTME: Request observation middleware for the itemd API.
// ABOUTME: Times every request through the router and logs method, path, status, and duration.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use tower::{Layer, Service};

/// A tower Layer that emits one observation line per request, whatever the outcome.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObserveLayer;

impl ObserveLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for ObserveLayer {
    type Service = ObserveMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ObserveMiddleware { inner }
    }
}

/// The middleware service that wraps the router's dispatch with a timer.
#[derive(Clone, Debug)]
pub struct ObserveMiddleware<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for ObserveMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        // Take the service that was driven to readiness, leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let resp = inner.call(req).await?;
            tracing::info!(
                "{}",
                observation_line(&method, &path, resp.status(), started.elapsed())
            );
            Ok(resp)
        })
    }
}

/// Render the observation message, with the duration in milliseconds to two decimals.
pub fn observation_line(method: &Method, path: &str, status: StatusCode, elapsed: Duration) -> String {
    format!(
        "Method: {} Path: {} Status: {} Completed_in: {:.2}ms",
        method,
        path,
        status.as_u16(),
        elapsed.as_secs_f64() * 1000.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::routing::get;
    use crate::test_support::capture_logs;
    use tower::ServiceExt;

    fn test_router() -> Router {
        Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route(
                "/missing",
                get(|| async { (StatusCode::NOT_FOUND, "nope") }),
            )
            .layer(ObserveLayer::new())
    }

    #[test]
    fn line_rounds_to_two_decimals() {
        let line = observation_line(
            &Method::GET,
            "/items/",
            StatusCode::OK,
            Duration::from_micros(1234),
        );
        assert_eq!(line, "Method: GET Path: /items/ Status: 200 Completed_in: 1.23ms");
    }

    #[test]
    fn line_pads_sub_millisecond_durations() {
        let line = observation_line(
            &Method::DELETE,
            "/items/3",
            StatusCode::NOT_FOUND,
            Duration::from_micros(50),
        );
        assert_eq!(line, "Method: DELETE Path: /items/3 Status: 404 Completed_in: 0.05ms");
    }

    #[tokio::test]
    async fn layer_passes_responses_through() {
        let app = test_router();

        let resp = app
            .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"nope");
    }

    #[tokio::test]
    async fn layer_logs_success_and_failure() {
        let (captured, _guard) = capture_logs();

        let app = test_router();
        app.clone()
            .oneshot(Request::get("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();
        app.clone()
            .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        app.oneshot(Request::get("/unrouted").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let out = captured.contents();
        assert!(out.contains("Method: GET Path: /ok Status: 200 Completed_in: "), "{out}");
        assert!(out.contains("Method: GET Path: /missing Status: 404 Completed_in: "), "{out}");
        assert!(out.contains("Method: GET Path: /unrouted Status: 404 Completed_in: "), "{out}");
        assert!(out.contains(" INFO Method: GET Path: /ok "), "{out}");
    }
}
