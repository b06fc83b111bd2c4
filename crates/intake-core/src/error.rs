//! Error types for `intake-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown service: {0:?}")]
  UnknownService(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
