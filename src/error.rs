//! Error types for the IMU session logger

use thiserror::Error;

/// Error type for session setup and storage operations
#[derive(Error, Debug)]
pub enum LoggerError {
    /// Storage volume could not be mounted; fatal, the session never starts
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Every candidate file name up to the configured bound already exists
    #[error("no free log slot: {prefix}1..{prefix}{limit} all taken")]
    NoFreeSlot { prefix: String, limit: u32 },

    /// A sensor driver failed to come online
    #[error("sensor offline: {0}")]
    SensorOffline(&'static str),

    /// Underlying I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, LoggerError>;
