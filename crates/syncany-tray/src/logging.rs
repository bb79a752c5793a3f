use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to stdout.
///
/// `RUST_LOG` wins over the configured filter when it is set.
pub(crate) fn init(filter: &str, json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
