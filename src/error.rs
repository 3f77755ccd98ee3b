use thiserror::Error;

/// Invalid combinations of command-line options.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("You cannot specify an interface and use -all at the same time.")]
    InterfaceConflict,

    #[error("Refresh interval must be a positive number of seconds (got {0}).")]
    InvalidRefresh(f64),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("network statistics are not supported on this platform")]
    Unsupported,

    #[error("failed to query network statistics: {0}")]
    Stats(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
