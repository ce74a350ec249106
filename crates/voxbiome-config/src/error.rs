//! Errors raised while loading, validating, or writing `config.ron`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating the directory or writing the file failed.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`crate::Config`].
    #[error("malformed config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The config could not be rendered as RON.
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] ron::Error),

    /// No platform config directory and none given on the command line.
    #[error("no config directory available; pass --config <dir>")]
    NoConfigDir,

    /// Values parsed but make no sense (e.g. a zero-sized chunk).
    #[error("invalid config: {0}")]
    Invalid(String),
}
