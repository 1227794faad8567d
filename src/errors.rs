//! Error types shared by every store and backend.
//!
//! The taxonomy is deliberately small: callers (and the `replacing`
//! combinator) only ever need to distinguish "absent" from everything else,
//! so [`StoreError`] keeps four kinds and exposes [`StoreError::is_not_found`]
//! as the single classification hook. Backend-specific failures are wrapped
//! in [`BackendError`], codec failures in [`CodecError`].

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by every [`ValueStore`](crate::traits::store::ValueStore)
/// operation.
///
/// Errors propagate unchanged from the backing mechanism; this layer never
/// retries and never swallows, with one documented exception (the best-effort
/// forward write inside [`replacing`](crate::replacing::replacing)).
#[derive(Debug, Error)]
pub enum StoreError {
    /// No value is currently persisted under this store's identity.
    #[error("no value stored under `{identity}`")]
    NotFound { identity: String },

    /// A stored representation exists but could not be interpreted as the
    /// store's value type.
    #[error("stored value under `{identity}` could not be decoded")]
    Decoding {
        identity: String,
        #[source]
        source: CodecError,
    },

    /// The backing mechanism refused or failed to persist a value. Encoding
    /// failures on the save path are write failures too.
    #[error("failed to write value under `{identity}`")]
    Write {
        identity: String,
        #[source]
        source: BackendError,
    },

    /// Transport, permission, or availability failure in the backing
    /// mechanism itself.
    #[error("storage backend failure: {0}")]
    Backend(#[from] BackendError),
}

impl StoreError {
    pub fn not_found(identity: impl Into<String>) -> Self {
        StoreError::NotFound {
            identity: identity.into(),
        }
    }

    pub fn decoding(identity: impl Into<String>, source: impl Into<CodecError>) -> Self {
        StoreError::Decoding {
            identity: identity.into(),
            source: source.into(),
        }
    }

    pub fn write(identity: impl Into<String>, source: impl Into<BackendError>) -> Self {
        StoreError::Write {
            identity: identity.into(),
            source: source.into(),
        }
    }

    /// Whether this error means "no value persisted", as opposed to a value
    /// that exists but could not be read or written.
    ///
    /// This is the discrimination the migration combinator relies on: only a
    /// `NotFound` from the authoritative store triggers the legacy fallback.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// The store identity this error was raised for, when known.
    pub fn identity(&self) -> Option<&str> {
        match self {
            StoreError::NotFound { identity }
            | StoreError::Decoding { identity, .. }
            | StoreError::Write { identity, .. } => Some(identity),
            StoreError::Backend(_) => None,
        }
    }
}

/// Serialization failures from the codecs the built-in backends use.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("bincode encoding failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("bincode decoding failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures raised by a concrete backing mechanism.
///
/// Custom backends that have no dedicated variant here can report through
/// [`BackendError::Other`].
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "sled")]
    #[error("sled database error: {0}")]
    Sled(#[from] sled::Error),

    #[error("blocking storage task failed: {0}")]
    Runtime(#[from] tokio::task::JoinError),

    #[error("value could not be encoded: {0}")]
    Codec(#[from] CodecError),

    #[error("{0}")]
    Other(String),
}

impl BackendError {
    pub fn other(message: impl Into<String>) -> Self {
        BackendError::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let absent = StoreError::not_found("prefs.theme");
        assert!(absent.is_not_found());
        assert_eq!(absent.identity(), Some("prefs.theme"));

        let backend = StoreError::Backend(BackendError::other("connection refused"));
        assert!(!backend.is_not_found());
        assert_eq!(backend.identity(), None);
    }

    #[test]
    fn test_write_wraps_codec_failures() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = StoreError::write("prefs.theme", BackendError::Codec(json_err.into()));
        assert!(!err.is_not_found());
        assert_eq!(err.identity(), Some("prefs.theme"));
        assert!(err.to_string().contains("prefs.theme"));
    }
}
