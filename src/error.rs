//! Error types for the sbcrypt library.

use std::fmt;
use std::io;

/// Errors produced while streaming data through the cipher.
///
/// The transform itself has no failure modes; every error originates from
/// the underlying reader or writer. Errors are fatal for the transform —
/// there is no mid-stream recovery in a single-pass batch conversion.
#[derive(Debug)]
pub enum SbCryptError {
    /// Reading from the input stream failed.
    Read(io::Error),
    /// Writing to the output stream failed.
    Write(io::Error),
}

impl fmt::Display for SbCryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SbCryptError::Read(err) => write!(f, "error reading input: {}", err),
            SbCryptError::Write(err) => write!(f, "error writing output: {}", err),
        }
    }
}

impl std::error::Error for SbCryptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SbCryptError::Read(err) | SbCryptError::Write(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_read() {
        let err = SbCryptError::Read(io::Error::new(io::ErrorKind::UnexpectedEof, "boom"));
        assert_eq!(format!("{}", err), "error reading input: boom");
    }

    #[test]
    fn test_display_write() {
        let err = SbCryptError::Write(io::Error::new(io::ErrorKind::WriteZero, "disk full"));
        assert_eq!(format!("{}", err), "error writing output: disk full");
    }

    #[test]
    fn test_source_is_io_error() {
        use std::error::Error;
        let err = SbCryptError::Read(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "gone");
    }
}
