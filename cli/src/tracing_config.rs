//! Tracing setup for the scanner driver.
//!
//! The subscriber is only installed when `LOXSCAN_LOG` (or `RUST_LOG`) is
//! set. Values use `RUST_LOG` syntax:
//!
//! ```bash
//! LOXSCAN_LOG=debug loxscan script.lox
//! LOXSCAN_LOG=loxscan=trace LOXSCAN_LOG_FORMAT=json loxscan script.lox
//! ```
//!
//! Output always goes to stderr so it never mixes with the token stream.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("LOXSCAN_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// `LOXSCAN_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("LOXSCAN_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

pub fn init_tracing() {
    let has_own_log = std::env::var("LOXSCAN_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
