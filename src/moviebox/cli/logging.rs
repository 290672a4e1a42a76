use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set. Otherwise: warnings only, `-v` debug, `-vv` trace.
pub fn init_logging(verbose_level: u8) -> Result<(), TryInitError> {
    let default_filter = match verbose_level {
        0 => "warn",
        1 => "moviebox=debug,warn",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .with_target(verbose_level > 1)
        .with_writer(std::io::stderr);

    Registry::default().with(filter).with(fmt_layer).try_init()
}
