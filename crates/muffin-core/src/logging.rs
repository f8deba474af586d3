use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

use crate::error::{Error, Result};
use crate::settings::{LogFormat, LoggingSettings};

/// Installs the global tracing subscriber described by `settings`.
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    settings.validate()?;
    let filter = EnvFilter::try_new(&settings.level)
        .map_err(|err| Error::InvalidSettings(format!("logging.level: {err}")))?;

    let layer = tracing_subscriber::fmt::layer()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(std::io::stderr);

    let result = match settings.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init(),
    };

    result.map_err(|err| Error::Logging(err.to_string()))
}
