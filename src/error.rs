//! Error handling for brredit
//!
//! Load and device failures are recoverable: the caller's current sample
//! is never touched until a read has fully succeeded.

use thiserror::Error;

/// Result type alias for brredit operations
pub type Result<T> = std::result::Result<T, BrrError>;

/// Main error type for brredit operations
#[derive(Error, Debug)]
pub enum BrrError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid {format} container: {reason}")]
    InvalidContainer { format: &'static str, reason: String },

    #[error("Unsupported channel count: {count} (expected mono or stereo)")]
    UnsupportedChannels { count: u16 },

    #[error("Unsupported bit depth: {bits}")]
    UnsupportedBitDepth { bits: u16 },

    // Codec Errors
    #[error("Malformed BRR stream: {reason}")]
    MalformedStream { reason: String },

    // Export Errors
    #[error("Sample contains no audio to export")]
    EmptySample,

    // Device Errors
    #[error("Audio device configuration failed: {reason}")]
    DeviceConfig { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // WAV decode errors surfaced by hound
    #[error("WAV decode error: {0}")]
    Wav(#[from] hound::Error),
}

impl BrrError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            BrrError::FileNotFound { .. } => "FILE_NOT_FOUND",
            BrrError::InvalidContainer { .. } => "INVALID_CONTAINER",
            BrrError::UnsupportedChannels { .. } => "UNSUPPORTED_CHANNELS",
            BrrError::UnsupportedBitDepth { .. } => "UNSUPPORTED_BIT_DEPTH",
            BrrError::MalformedStream { .. } => "MALFORMED_STREAM",
            BrrError::EmptySample => "EMPTY_SAMPLE",
            BrrError::DeviceConfig { .. } => "DEVICE_CONFIG",
            BrrError::Io(_) => "IO_ERROR",
            BrrError::Wav(_) => "WAV_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// Recoverable errors leave the editor state untouched; the user can
    /// retry with a different file or configuration.
    pub fn is_recoverable(&self) -> bool {
        match self {
            BrrError::FileNotFound { .. } => true,
            BrrError::InvalidContainer { .. } => true,
            BrrError::UnsupportedChannels { .. } => true,
            BrrError::UnsupportedBitDepth { .. } => true,
            BrrError::MalformedStream { .. } => true,
            BrrError::EmptySample => true,
            BrrError::Wav(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = BrrError::FileNotFound {
            path: "test.brr".to_string(),
            source: None,
        };
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_load_errors_are_recoverable() {
        let err = BrrError::MalformedStream {
            reason: "stream length".to_string(),
        };
        assert!(err.is_recoverable());

        let err = BrrError::DeviceConfig {
            reason: "rollback failed".to_string(),
        };
        assert!(!err.is_recoverable());
    }
}
