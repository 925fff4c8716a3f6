use std::{io, sync::OnceLock};

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the global `tracing` subscriber once.
///
/// Filtering comes from `RUST_LOG` and defaults to `warn`. Output goes to
/// stderr so stdout only carries the progress lines.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = Registry::default().with(filter).with(
            fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        );
        // A subscriber may already be installed by an embedding program.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
