//! Error types for polycodec.

use thiserror::Error;

use crate::codec::Format;

/// Boxed error surfaced by an underlying format library.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for all codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// No codec registered for the requested format.
    #[error("no codec registered for format: {0}")]
    NotRegistered(Format),

    /// The underlying library rejected or failed on the input value, or the
    /// value kind is unsupported by this codec.
    #[error("{format} encode error: {source}")]
    Encode {
        /// Format of the codec that failed.
        format: Format,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },

    /// The bytes are malformed for the format, or the destination is
    /// incompatible with it.
    #[error("{format} decode error: {source}")]
    Decode {
        /// Format of the codec that failed.
        format: Format,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },

    /// The protobuf codec was handed a value or destination that is not a
    /// protobuf message.
    #[error("{0}: value is not a protobuf message")]
    NotProtoMessage(Format),
}

impl CodecError {
    pub(crate) fn encode(format: Format, source: impl Into<BoxError>) -> Self {
        CodecError::Encode {
            format,
            source: source.into(),
        }
    }

    pub(crate) fn decode(format: Format, source: impl Into<BoxError>) -> Self {
        CodecError::Decode {
            format,
            source: source.into(),
        }
    }
}

/// Result type alias using CodecError.
pub type Result<T> = std::result::Result<T, CodecError>;
