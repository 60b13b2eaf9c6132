//! Fatal conditions that abort a run.

use crate::models::AccountKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("token contains characters not allowed in an HTTP header")]
    InvalidToken,

    #[error("GitHub API rate limit exceeded; supply a token with -t TOKEN")]
    RateLimited,

    #[error("no repositories found for {kind} {name}")]
    NoRepositories { name: String, kind: AccountKind },

    #[error("cannot create directory {path}: {source}")]
    AccountDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {message}")]
    Settings { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, FetchError>;
