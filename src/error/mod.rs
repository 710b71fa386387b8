//! Error types for persistence.
//!
//! Tree construction and serialization are infallible: attribute and text
//! values come from a closed set of scalar types whose text conversion
//! cannot fail. The only fallible operation in the crate is writing the
//! serialized output to disk, and [`SaveError`] is its error type. Failures
//! propagate to the caller as-is — there are no retries and no recovery.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The error type returned when writing a serialized tree to disk fails.
///
/// Carries the destination path alongside the underlying I/O failure, and
/// exposes the latter through [`std::error::Error::source`].
#[derive(Debug)]
pub struct SaveError {
    /// The destination path that could not be written.
    pub path: PathBuf,
    /// The underlying I/O failure.
    pub source: io::Error,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to write {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_error_display() {
        let err = SaveError {
            path: PathBuf::from("/no/such/dir/out.svg"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(
            err.to_string(),
            "failed to write /no/such/dir/out.svg: no such directory"
        );
    }

    #[test]
    fn test_save_error_exposes_source() {
        let err = SaveError {
            path: PathBuf::from("out.svg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }

    #[test]
    fn test_save_error_is_error_trait() {
        let err = SaveError {
            path: PathBuf::from("out.svg"),
            source: io::Error::other("boom"),
        };
        let _: &dyn std::error::Error = &err;
    }
}
