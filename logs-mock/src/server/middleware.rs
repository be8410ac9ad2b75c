//! Tower middleware for request tracing and HTTP metrics.

use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::response::Response;
use futures::future::BoxFuture;
use tower::{Layer, Service};
use tracing::Instrument;

use super::metrics::{HttpLabels, HttpLabelsWithStatus, HttpMethod, Metrics};

/// Route template of a request, e.g. `/logs/{id}` rather than `/logs/42`.
fn endpoint_of(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string())
}

/// Layer that wraps each request in an `http_request` span.
#[derive(Clone, Default)]
pub struct TracingLayer;

impl TracingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService { inner }
    }
}

#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
}

impl<S> Service<Request> for TracingService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let span = tracing::info_span!(
            "http_request",
            method = %req.method(),
            path = %req.uri().path(),
        );
        let start = Instant::now();
        let future = self.inner.call(req);

        Box::pin(
            async move {
                let result = future.await;
                if let Ok(response) = &result {
                    tracing::debug!(
                        status = response.status().as_u16(),
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "request completed"
                    );
                }
                result
            }
            .instrument(span),
        )
    }
}

/// Holds one unit of `http_requests_in_flight` until dropped, so requests
/// cancelled mid-flight are released as well.
struct InFlightGuard {
    metrics: Arc<Metrics>,
}

impl InFlightGuard {
    fn new(metrics: Arc<Metrics>) -> Self {
        metrics.http_requests_in_flight.inc();
        Self { metrics }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.metrics.http_requests_in_flight.dec();
    }
}

/// Layer that records request counts, latency and in-flight requests.
#[derive(Clone)]
pub struct MetricsLayer {
    metrics: Arc<Metrics>,
}

impl MetricsLayer {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }
}

impl<S> Layer<S> for MetricsLayer {
    type Service = MetricsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MetricsService {
            inner,
            metrics: self.metrics.clone(),
        }
    }
}

#[derive(Clone)]
pub struct MetricsService<S> {
    inner: S,
    metrics: Arc<Metrics>,
}

impl<S> Service<Request> for MetricsService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let method = HttpMethod::from(req.method());
        let endpoint = endpoint_of(&req);
        let metrics = self.metrics.clone();

        let in_flight = InFlightGuard::new(metrics.clone());
        let start = Instant::now();
        let future = self.inner.call(req);

        Box::pin(async move {
            let result = future.await;
            drop(in_flight);

            metrics
                .http_request_duration_seconds
                .get_or_create(&HttpLabels {
                    method: method.clone(),
                    endpoint: endpoint.clone(),
                })
                .observe(start.elapsed().as_secs_f64());

            if let Ok(response) = &result {
                metrics
                    .http_requests_total
                    .get_or_create(&HttpLabelsWithStatus {
                        method,
                        endpoint,
                        status: response.status().as_u16(),
                    })
                    .inc();
            }
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use axum::body::Body;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn should_release_in_flight_gauge_when_request_is_cancelled() {
        // given - an inner service that never responds
        let metrics = Arc::new(Metrics::new());
        let inner = tower::service_fn(|_req: Request| async {
            std::future::pending::<Result<Response, Infallible>>().await
        });
        let mut service = MetricsLayer::new(metrics.clone()).layer(inner);

        // when
        let future = service.call(Request::new(Body::empty()));
        let during = metrics.http_requests_in_flight.get();
        drop(future);

        // then
        assert_eq!(during, 1);
        assert_eq!(metrics.http_requests_in_flight.get(), 0);
    }

    #[tokio::test]
    async fn should_record_completed_request() {
        // given
        let metrics = Arc::new(Metrics::new());
        let inner = tower::service_fn(|_req: Request| async {
            Ok::<_, Infallible>(Response::new(Body::empty()))
        });
        let service = MetricsLayer::new(metrics.clone()).layer(inner);

        // when
        service.oneshot(Request::new(Body::empty())).await.unwrap();

        // then
        assert_eq!(metrics.http_requests_in_flight.get(), 0);
        let encoded = metrics.encode();
        assert!(encoded.contains(r#"endpoint="unmatched""#));
        assert!(encoded.contains(r#"status="200""#));
    }
}
