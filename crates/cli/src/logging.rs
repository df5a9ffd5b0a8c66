//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter,
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::{LogFormat, LoggingConfig};

pub(crate) fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},hyper=warn,reqwest=warn", config.log_level)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.log_format {
        LogFormat::Compact => builder.compact().with_target(true).finish().try_init(),
        LogFormat::Json => builder
            .json()
            .with_current_span(true)
            .finish()
            .try_init(),
    }
}
