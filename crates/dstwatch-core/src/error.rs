//! Error types for DST watch operations.

use thiserror::Error;

/// Errors that can occur while checking DST state or delivering a notification.
#[derive(Error, Debug)]
pub enum WatchError {
    /// A catalog zonename did not resolve against the IANA timezone database.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    /// The notification transport rejected the send (auth, connection, timeout).
    #[error("notification delivery failed: {0}")]
    Delivery(String),

    /// The state file could not be persisted.
    #[error("could not persist state: {0}")]
    StateSave(#[from] std::io::Error),
}

/// Convenience alias used throughout dstwatch-core.
pub type Result<T> = std::result::Result<T, WatchError>;
