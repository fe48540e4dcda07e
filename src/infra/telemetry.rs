use std::sync::Once;

use metrics::{Unit, describe_counter, describe_gauge};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

pub const POST_VIEWS_TOTAL: &str = "pdr_post_views_total";
pub const POST_NOT_FOUND_TOTAL: &str = "pdr_post_not_found_total";
pub const READING_SESSIONS_ACTIVE: &str = "pdr_reading_sessions_active";
pub const SCROLL_REPORTS_TOTAL: &str = "pdr_scroll_reports_total";

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber using the provided logging settings.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            POST_VIEWS_TOTAL,
            Unit::Count,
            "Total number of article pages rendered for a resolved post."
        );
        describe_counter!(
            POST_NOT_FOUND_TOTAL,
            Unit::Count,
            "Total number of article requests whose identifier matched no post."
        );
        describe_gauge!(
            READING_SESSIONS_ACTIVE,
            Unit::Count,
            "Current number of open reading-progress streams."
        );
        describe_counter!(
            SCROLL_REPORTS_TOTAL,
            Unit::Count,
            "Total number of scroll reports accepted for a live reading session."
        );
    });
}
