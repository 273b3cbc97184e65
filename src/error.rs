//! Error types for ber-oid.
//!
//! All failures are local to construction: an [`Oid`](crate::oid::Oid) either
//! comes into existence fully valid or not at all. Errors fall into three groups:
//!
//! - [`Error::MalformedIdentifier`] - dotted text rejected at construction
//! - [`Error::InvalidBranchSuffix`] - a branch segment rejected before concatenation
//! - [`Error::Decode`] - binary content that cannot be decoded
//!
//! Each carries a small `Copy` kind enum describing the precise reason.
//!
//! # Example
//!
//! ```
//! use ber_oid::{DecodeErrorKind, Error, Oid};
//!
//! match Oid::from_ber(&[0x2A, 0x86]) {
//!     Err(Error::Decode { kind: DecodeErrorKind::TruncatedEncoding, offset }) => {
//!         assert_eq!(offset, 2);
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a textual OID or branch suffix was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OidErrorKind {
    /// Identifier shorter than the minimum `"N.N"`.
    TooShort,
    /// First arc is not 0, 1 or 2.
    InvalidFirstArc,
    /// Second character is not `.`.
    MissingSeparator,
    /// A character other than a digit or `.` was found.
    UnexpectedCharacter { index: usize, found: char },
    /// Empty arc: leading, trailing or doubled `.`.
    EmptyArc { index: usize },
    /// Second arc is 40 or more while the first arc is 0 or 1.
    SecondArcOutOfRange { first: u8 },
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort => write!(f, "OID must have at least 2 arcs"),
            Self::InvalidFirstArc => write!(f, "first arc must be 0, 1, or 2"),
            Self::MissingSeparator => write!(f, "expected '.' after first arc"),
            Self::UnexpectedCharacter { index, found } => {
                write!(f, "unexpected character {:?} at index {}", found, index)
            }
            Self::EmptyArc { index } => write!(f, "empty arc at index {}", index),
            Self::SecondArcOutOfRange { first } => {
                write!(f, "second arc must be below 40 when first arc is {}", first)
            }
        }
    }
}

/// BER content decode error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Zero-length OID content.
    Empty,
    /// Input ended inside a sub-identifier (continuation bit set on the last byte).
    TruncatedEncoding,
    /// More sub-identifiers than the configured maximum.
    TooManyArcs { count: usize, max: usize },
    /// A sub-identifier is encoded in more bytes than the configured maximum.
    ArcTooLong { max: usize },
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty OID encoding"),
            Self::TruncatedEncoding => write!(f, "sub-identifier truncated at end of input"),
            Self::TooManyArcs { count, max } => {
                write!(f, "OID has {} arcs, exceeds maximum {}", count, max)
            }
            Self::ArcTooLong { max } => {
                write!(f, "sub-identifier longer than {} bytes", max)
            }
        }
    }
}

/// The main error type for all ber-oid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Dotted text failed grammar validation.
    #[error("malformed OID {input:?}: {kind}")]
    MalformedIdentifier { kind: OidErrorKind, input: Box<str> },

    /// Proposed branch segment failed grammar validation.
    #[error("invalid branch suffix {suffix:?}: {kind}")]
    InvalidBranchSuffix { kind: OidErrorKind, suffix: Box<str> },

    /// BER content could not be decoded.
    #[error("decode error at offset {offset}: {kind}")]
    Decode {
        offset: usize,
        kind: DecodeErrorKind,
    },
}

impl Error {
    /// Create a malformed identifier error with the input that failed.
    pub fn malformed(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::MalformedIdentifier {
            kind,
            input: input.into(),
        }
    }

    /// Create an invalid branch suffix error with the suffix that failed.
    pub fn invalid_branch(kind: OidErrorKind, suffix: impl Into<Box<str>>) -> Self {
        Self::InvalidBranchSuffix {
            kind,
            suffix: suffix.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(offset: usize, kind: DecodeErrorKind) -> Self {
        Self::Decode { offset, kind }
    }

    /// True if the binary input ended inside a sub-identifier.
    pub fn is_truncated(&self) -> bool {
        matches!(
            self,
            Self::Decode {
                kind: DecodeErrorKind::TruncatedEncoding,
                ..
            }
        )
    }

    /// The OID kind, for text and branch errors.
    pub fn oid_kind(&self) -> Option<OidErrorKind> {
        match self {
            Self::MalformedIdentifier { kind, .. } | Self::InvalidBranchSuffix { kind, .. } => {
                Some(*kind)
            }
            Self::Decode { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_input_and_kind() {
        let err = Error::malformed(OidErrorKind::InvalidFirstArc, "3.5");
        assert_eq!(
            err.to_string(),
            "malformed OID \"3.5\": first arc must be 0, 1, or 2"
        );
    }

    #[test]
    fn test_decode_display() {
        let err = Error::decode(4, DecodeErrorKind::TruncatedEncoding);
        assert_eq!(
            err.to_string(),
            "decode error at offset 4: sub-identifier truncated at end of input"
        );
        assert!(err.is_truncated());
        assert_eq!(err.oid_kind(), None);
    }

    #[test]
    fn test_oid_kind() {
        let err = Error::invalid_branch(OidErrorKind::EmptyArc { index: 0 }, ".1");
        assert_eq!(err.oid_kind(), Some(OidErrorKind::EmptyArc { index: 0 }));
        assert!(!err.is_truncated());
    }
}
