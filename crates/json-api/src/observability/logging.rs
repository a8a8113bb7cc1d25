//! Tracing subscriber setup.

use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    filter::ParseError,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::observability::{LogFormat, LoggingConfig};

use super::ObservabilityError;

/// Dependencies that only get to log warnings and above.
const QUIET_TARGETS: [&str; 3] = ["h2", "hyper", "sqlx"];

pub(super) fn init_subscriber(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    tracing_subscriber::registry()
        .with(fmt_layer(config.log_format))
        .with(env_filter(&config.log_level)?)
        .try_init()?;

    Ok(())
}

fn fmt_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed(),
    }
}

fn env_filter(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(filter_directives(level))
}

fn filter_directives(level: &str) -> String {
    std::iter::once(level.to_owned())
        .chain(QUIET_TARGETS.iter().map(|target| format!("{target}=warn")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_leads_the_directives() {
        assert_eq!(
            filter_directives("debug"),
            "debug,h2=warn,hyper=warn,sqlx=warn"
        );
    }

    #[test]
    fn per_target_levels_pass_through() {
        assert!(env_filter("info,foodwheels_app=trace").is_ok());
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(env_filter("foodwheels_app=loud").is_err());
    }
}
