//! Errors raised by the I/O providers around the simulation core.
//!
//! The core itself is total; only reading config and storing the ranking
//! can fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("could not read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum RankingError {
    /// The ranking file exists but could not be read or written.
    #[error("ranking file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The ranking file is not valid JSON.
    #[error("malformed ranking data: {0}")]
    Json(#[from] serde_json::Error),
}
