use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::error::PricingError;
use crate::pricing::Platform;

/// Install the global Prometheus recorder
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!("costcalc_estimates_total", "Total number of completed estimates");
    describe_counter!(
        "costcalc_estimate_errors_total",
        "Total number of rejected estimates"
    );
    describe_histogram!(
        "costcalc_estimate_monthly_cost",
        "Monthly cost of completed estimates in USD"
    );
    describe_gauge!("costcalc_info", "Estimator version information");

    gauge!("costcalc_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a completed estimate
pub fn record_estimate(platform: Platform, source: &str, monthly_cost: f64) {
    counter!(
        "costcalc_estimates_total",
        "platform" => platform.as_str(),
        "source" => source.to_string(),
    )
    .increment(1);

    histogram!(
        "costcalc_estimate_monthly_cost",
        "platform" => platform.as_str(),
    )
    .record(monthly_cost);
}

/// Record a rejected estimate; comparisons span every platform
pub fn record_error(platform: Option<Platform>, source: &str, error: &PricingError) {
    counter!(
        "costcalc_estimate_errors_total",
        "platform" => platform.map_or("all", |p| p.as_str()),
        "source" => source.to_string(),
        "error_type" => error.kind(),
    )
    .increment(1);
}
