//! Error types for the codec.

use rmp::decode::ValueReadError;
use rmp::encode::ValueWriteError;
use std::io;
use std::str::Utf8Error;
use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while encoding or decoding identifier values.
#[derive(Debug, Error)]
pub enum Error {
    /// The input ended before the value was complete.
    #[error("unexpected end of input: needed {needed} bytes, {available} available")]
    UnexpectedEof {
        /// Bytes the value needs (at least).
        needed: usize,
        /// Bytes that were left.
        available: usize,
    },

    /// The next marker is not the one this type is encoded with.
    #[error("type mismatch: expected {expected}, found marker 0x{found:02x}")]
    TypeMismatch {
        /// Wire type the decoder was looking for.
        expected: &'static str,
        /// Marker byte actually present.
        found: u8,
    },

    #[error("invalid UTF-8 in string: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    /// A composite key was encoded with a different number of components.
    #[error("array length mismatch: expected {expected}, found {found}")]
    ArityMismatch { expected: u32, found: u32 },

    /// A framed binary component has the wrong length.
    #[error("binary length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: u32, found: u32 },

    #[error("maximum nesting depth of {max} exceeded")]
    DepthExceeded { max: usize },

    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),

    /// The output writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Name used by callers that think of this as the decode failure type.
pub type DecodeError = Error;

impl From<ValueWriteError<io::Error>> for Error {
    fn from(e: ValueWriteError<io::Error>) -> Self {
        match e {
            ValueWriteError::InvalidMarkerWrite(e) | ValueWriteError::InvalidDataWrite(e) => {
                Error::Io(e)
            }
        }
    }
}

impl Error {
    /// Maps an `rmp` read failure, given what was expected and how much input was left.
    pub(crate) fn from_read(
        e: ValueReadError<io::Error>,
        expected: &'static str,
        needed: usize,
        available: usize,
    ) -> Self {
        match e {
            ValueReadError::TypeMismatch(marker) => Error::TypeMismatch {
                expected,
                found: marker.to_u8(),
            },
            ValueReadError::InvalidMarkerRead(_) | ValueReadError::InvalidDataRead(_) => {
                Error::UnexpectedEof { needed, available }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unexpected_eof() {
        let err = Error::UnexpectedEof {
            needed: 16,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("needed 16"));
        assert!(msg.contains("3 available"));
    }

    #[test]
    fn test_error_display_type_mismatch() {
        let err = Error::TypeMismatch {
            expected: "int32",
            found: 0xd1,
        };
        assert_eq!(err.to_string(), "type mismatch: expected int32, found marker 0xd1");
    }

    #[test]
    fn test_error_display_length_mismatch() {
        let err = Error::LengthMismatch {
            expected: 16,
            found: 4,
        };
        assert_eq!(err.to_string(), "binary length mismatch: expected 16, found 4");
    }

    #[test]
    fn test_write_error_maps_to_io() {
        let inner = io::Error::new(io::ErrorKind::WriteZero, "full");
        let err: Error = ValueWriteError::InvalidDataWrite(inner).into();
        assert!(matches!(err, Error::Io(_)));
    }
}
