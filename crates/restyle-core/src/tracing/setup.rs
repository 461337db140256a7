//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default directive when `RESTYLE_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "restyle=info";

/// Initialize logging.
///
/// Reads `RESTYLE_LOG` for per-module levels, e.g.
/// `RESTYLE_LOG=restyle_engine::registry=debug,restyle_engine::classifier=warn`.
/// Falls back to [`DEFAULT_DIRECTIVE`]. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("RESTYLE_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // A host may already have installed a subscriber; keep theirs.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
        ::tracing::info!("tracing initialized twice without panicking");
    }
}
