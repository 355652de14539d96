use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str =
    "certivault_api=debug,certivault_services=debug,certivault_db=debug,tower_http=debug";

/// Initialize tracing.
///
/// `RUST_LOG` overrides the default filter. Production emits JSON lines;
/// everything else gets the compact console format.
pub fn init_telemetry(environment: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let production = matches!(environment.to_lowercase().as_str(), "production" | "prod");

    if production {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .try_init()?;
    } else {
        let console_fmt = tracing_subscriber::fmt::layer().event_format(
            Format::default()
                .compact()
                .with_target(false)
                .without_time(),
        );
        tracing_subscriber::registry()
            .with(filter)
            .with(console_fmt)
            .try_init()?;
    }

    tracing::info!(environment, json = production, "Tracing initialized");
    Ok(())
}
