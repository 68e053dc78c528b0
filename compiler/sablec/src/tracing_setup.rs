//! Opt-in logging for the driver.
//!
//! Silent unless `RUST_LOG` is set. `RUST_LOG=sable_parse=trace` traces every
//! grammar entry and disambiguation trial; add `SABLE_LOG_TREE=1` to see the
//! same events nested by span instead of as flat lines.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        if tree_requested(std::env::var("SABLE_LOG_TREE").ok().as_deref()) {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn tree_requested(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v == "1" || v.eq_ignore_ascii_case("true"))
}
