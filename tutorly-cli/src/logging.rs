use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize human-readable logging on stderr.
///
/// Defaults to `warn` level unless overridden by `TUTORLY_LOG`. Stdout stays
/// reserved for rendered output.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_env_var("TUTORLY_LOG")
        .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
