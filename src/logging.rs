use tracing_subscriber::EnvFilter;

/// Initialise logging. Debug level must be opted into through the settings
/// file; otherwise `info` is forced regardless of `RUST_LOG`, preventing
/// accidental verbose output when the variable happens to be set in the
/// user's environment.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
