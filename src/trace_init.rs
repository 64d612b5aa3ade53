//! JSON-lines keystroke tracing, compiled in with the `trace` feature.

use std::io;
use std::path::Path;

/// File name inside the log directory.
pub const TRACE_FILE: &str = "viet-trace.jsonl";

/// Filter used when `RUST_LOG` is unset.
#[cfg_attr(not(feature = "trace"), allow(dead_code))]
const DEFAULT_FILTER: &str = "viet_engine=debug,viet_session=debug,viet_core=debug";

/// Install the global JSON writer into `log_dir`, creating the directory if
/// needed. Later calls only make sure the directory exists.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> io::Result<()> {
    use std::sync::Once;
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

    static INIT: Once = Once::new();

    std::fs::create_dir_all(log_dir)?;
    INIT.call_once(|| {
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, TRACE_FILE));
        // The writer must outlive every keystroke the host sends us.
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(dir = %log_dir.display(), file = TRACE_FILE, "tracing started");
        }
    });
    Ok(())
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(log_dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(log_dir)
}
