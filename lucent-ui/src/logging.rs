//! Tracing bootstrap for hosts and demos.

/// Default filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "error,lucent_ui=info,lucent_components=info";

/// Installs a pretty `tracing` subscriber filtered by `RUST_LOG`.
///
/// Leaves an existing global subscriber in place and only reports it at
/// `debug`, so it is safe to call from every entry point.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let installed = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
    if installed.is_err() {
        tracing::debug!("global tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!("tracing initialised twice without panicking");
    }

    #[test]
    fn default_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
