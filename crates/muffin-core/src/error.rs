use thiserror::Error;

/// Core error type shared across muffin crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a settings file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A settings file is not valid TOML for [`crate::FactorySettings`].
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Settings parsed but hold values that cannot be used.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    /// The tracing subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),
}

/// Convenience alias for results returned by muffin crates.
pub type Result<T> = std::result::Result<T, Error>;
