//! Tracing subscriber setup for the site launcher.
//!
//! `RUST_LOG` wins when set; otherwise the crates of this workspace log at
//! `info` (or `debug` when verbose) and everything else at `warn`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,paktech=debug,paktech_core=debug,paktech_ui=debug"
    } else {
        "warn,paktech=info,paktech_core=info,paktech_ui=info"
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
    }

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
