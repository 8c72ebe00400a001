//! Tracing subscriber setup for hosts embedding the analyzer.
//!
//! The analyzer crates only emit events. A host that wants to see them calls
//! [`init_tracing`] once at startup:
//!
//! ```bash
//! # Which call sites matched, and which diagnostics they produced
//! NOWAIT_LOG=nowait_analyzer=debug host-tool
//!
//! # Every classification, as an indented tree
//! NOWAIT_LOG=trace NOWAIT_LOG_FORMAT=tree host-tool
//!
//! # Machine-readable
//! NOWAIT_LOG=debug NOWAIT_LOG_FORMAT=json host-tool
//! ```
//!
//! Nothing is installed unless `NOWAIT_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "NOWAIT_LOG";
const LOG_FORMAT_VAR: &str = "NOWAIT_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat `tracing-subscriber` lines (default).
    Text,
    /// Hierarchical output via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// Unknown values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_VAR).unwrap_or_default())
    }
}

/// `NOWAIT_LOG` wins over `RUST_LOG`; both use `RUST_LOG` directive syntax.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(directives) = std::env::var(LOG_VAR) {
        return Some(EnvFilter::builder().parse_lossy(directives));
    }
    std::env::var("RUST_LOG")
        .is_ok()
        .then(EnvFilter::from_default_env)
}

/// Install the global subscriber. Returns `false` when logging was not
/// requested or a subscriber is already installed.
///
/// Output goes to stderr.
pub fn init_tracing() -> bool {
    let Some(filter) = build_filter() else {
        return false;
    };

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree).try_init().is_ok()
        }
        LogFormat::Json => {
            let json = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json).try_init().is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}
