//! # error.rs
//!
//! Defines the error types of configuration loading.
//!
//! A `ConfigError` names the file that could not be read, or the line of a
//! configuration that could not be parsed, so that a front end can report it
//! without further context.

use game::error::BoardError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("Line {line}: {source}")]
    Board {
        line: usize,
        #[source]
        source: BoardError,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
