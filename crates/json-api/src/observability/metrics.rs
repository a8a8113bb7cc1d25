//! Prometheus metrics: traffic per shop area and checkout outcomes.

use std::sync::OnceLock;

use prometheus::{
    HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TEXT_FORMAT, TextEncoder,
    core::Collector,
};
use salvo::{
    Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

use super::settings;

/// How a checkout attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CheckoutOutcome {
    Placed,
    EmptyCart,
    ItemUnavailable,
    Failed,
}

impl CheckoutOutcome {
    fn label(self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::EmptyCart => "empty_cart",
            Self::ItemUnavailable => "item_unavailable",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug)]
struct ShopMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    checkouts_total: IntCounterVec,
}

static METRICS: OnceLock<Option<ShopMetrics>> = OnceLock::new();

impl ShopMetrics {
    fn build() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("foodwheels".to_string()), None)?;

        let requests_total = register(
            &registry,
            IntCounterVec::new(
                Opts::new("http_requests_total", "HTTP requests by shop area and outcome."),
                &["area", "method", "status_class"],
            )?,
        )?;

        let request_duration_seconds = register(
            &registry,
            HistogramVec::new(
                HistogramOpts::new(
                    "http_request_duration_seconds",
                    "HTTP request latency by shop area.",
                )
                .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]),
                &["area"],
            )?,
        )?;

        let checkouts_total = register(
            &registry,
            IntCounterVec::new(
                Opts::new("checkouts_total", "Order placement attempts by outcome."),
                &["outcome"],
            )?,
        )?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            checkouts_total,
        })
    }

    fn encode(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

fn register<M>(registry: &Registry, metric: M) -> Result<M, prometheus::Error>
where
    M: Collector + Clone + 'static,
{
    registry.register(Box::new(metric.clone()))?;

    Ok(metric)
}

fn metrics() -> Option<&'static ShopMetrics> {
    if !settings::metrics_enabled() {
        return None;
    }

    METRICS
        .get_or_init(|| {
            ShopMetrics::build()
                .inspect_err(|source| error!("failed to build metrics registry: {source}"))
                .ok()
        })
        .as_ref()
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let area = area(route);

    metrics
        .requests_total
        .with_label_values(&[area, method, status_class(status_code)])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[area])
        .observe(duration_seconds);
}

pub(crate) fn record_checkout(outcome: CheckoutOutcome) {
    if let Some(metrics) = metrics() {
        metrics
            .checkouts_total
            .with_label_values(&[outcome.label()])
            .inc();
    }
}

#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::NOT_FOUND);

        return;
    };

    match metrics.encode() {
        Ok(body) => {
            res.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_FORMAT));
            res.render(body);
        }
        Err(source) => {
            error!("failed to encode metrics: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

/// Which part of the shop a normalised route belongs to.
fn area(route: &str) -> &'static str {
    if route.ends_with("/bookings") {
        return "bookings";
    }

    let first = route
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();

    match first {
        "" | "items" | "search" | "restaurants" => "catalog",
        "cart" => "cart",
        "checkout" | "orders" => "orders",
        "bookings" => "bookings",
        "signup" | "login" | "logout" | "profile" => "accounts",
        "admin" => "admin",
        "healthcheck" | "metrics" => "ops",
        _ => "other",
    }
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[test]
    fn routes_group_into_shop_areas() {
        assert_eq!(area("/"), "catalog");
        assert_eq!(area("/items/{id}"), "catalog");
        assert_eq!(area("/restaurants/{id}"), "catalog");
        assert_eq!(area("/restaurants/{id}/bookings"), "bookings");
        assert_eq!(area("/cart/items/{id}"), "cart");
        assert_eq!(area("/checkout"), "orders");
        assert_eq!(area("/login"), "accounts");
        assert_eq!(area("/admin/items/{id}"), "admin");
        assert_eq!(area("/docs"), "other");
    }

    #[test]
    fn status_class_buckets_codes() {
        assert_eq!(status_class(201), "2xx", "created is a success");
        assert_eq!(status_class(409), "4xx", "conflict is a client error");
        assert_eq!(status_class(503), "5xx", "unavailable is a server error");
        assert_eq!(status_class(42), "other", "unknown codes are not bucketed");
    }

    #[tokio::test]
    async fn metrics_endpoint_exposes_traffic_and_checkouts() -> TestResult {
        observe_request("POST", "/orders", 409, 0.012);
        observe_request("POST", "/restaurants/{id}/bookings", 201, 0.02);
        record_checkout(CheckoutOutcome::EmptyCart);

        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        let body = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await?;

        assert!(
            body.contains("foodwheels_http_requests_total"),
            "expected request counter in {body}"
        );
        assert!(
            body.contains("area=\"orders\""),
            "expected orders area label in {body}"
        );
        assert!(
            body.contains("area=\"bookings\""),
            "expected bookings area label in {body}"
        );
        assert!(
            body.contains("foodwheels_checkouts_total{outcome=\"empty_cart\"}"),
            "expected empty cart checkout in {body}"
        );

        Ok(())
    }
}
