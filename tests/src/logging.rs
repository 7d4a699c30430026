//! Tracing setup for tests and benchmarks

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();

/// Install a test-friendly subscriber once per process
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, e.g.
/// `RUST_LOG=blscore_algorithms=trace` shows every decode rejection and
/// multi-exponentiation window.
pub fn init_tracing() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // another harness may already own the global subscriber
        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        assert!(INIT.get().is_some());
        tracing::debug!("subscriber installed");
    }
}
