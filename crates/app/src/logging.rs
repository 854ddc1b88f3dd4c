//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, debug level for this workspace
    Development,
    /// JSON structured output at info level
    Production,
    /// No output; tests install their own subscriber if they need one
    Test,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

const DEV_FILTER: &str = "info,quiz_progress=debug,api=debug,services=debug,storage=debug";
const PROD_FILTER: &str = "info";

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber. Only the first call has any effect.
///
/// `RUST_LOG` overrides the profile's default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = |default: &str| {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
        };
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter(DEV_FILTER))
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter(PROD_FILTER))
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}
