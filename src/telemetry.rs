//! Tracing subscriber setup.

use crate::config::Config;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies, with
/// `tower_http` request spans kept at `info`. Output is compact text or JSON
/// lines depending on `LOG_FORMAT`. A second call is a no-op.
pub fn init(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},tower_http=info", config.log_level))
    });

    let builder = fmt().with_env_filter(env_filter).with_target(false);

    let _ = if config.is_json_logging() {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
