use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `webnote=debug`.
pub const LOG_ENV: &str = "WEBNOTE_LOG";

/// Install a stderr subscriber. `verbose` lowers the default level to debug;
/// `WEBNOTE_LOG` overrides either default. Returns false if a subscriber was
/// already installed.
pub fn init(verbose: bool) -> bool {
    let default_directive = if verbose { "webnote=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time(),
    );

    subscriber.try_init().is_ok()
}
