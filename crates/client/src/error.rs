//! Client error taxonomy.

use thiserror::Error;

/// Failure talking to the Remote Catalog Service.
///
/// `Api` keeps the numeric status: the listing view surfaces it directly,
/// while the creation view logs it and shows its own generic message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Transport-level failure (unreachable host, connection reset).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Api(u16),

    /// The response body did not decode as the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}
