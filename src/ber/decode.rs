//! OID content decoding.
//!
//! Decoding never trusts the input: empty content and a final byte with the
//! continuation bit set are reported as errors instead of yielding a partial
//! arc.

use std::fmt::Write as _;

use crate::arc::ArcAccumulator;
use crate::error::{DecodeErrorKind, Error, Result};

/// Maximum number of arcs (sub-identifiers) under [`DecodeConfig::strict()`].
///
/// Per RFC 2578 Section 3.5: "there are at most 128 sub-identifiers in a value".
pub const MAX_OID_LEN: usize = 128;

/// Maximum encoded length of one sub-identifier under [`DecodeConfig::strict()`].
///
/// 64 bytes holds a 448-bit arc, well above X.667 UUID arcs (19 bytes).
pub const MAX_ARC_LEN: usize = 64;

/// Limits applied while decoding.
///
/// The default places no limit on the number of arcs or on the encoded
/// length of a single arc.
///
/// # Examples
///
/// ```
/// use ber_oid::ber::{DecodeConfig, MAX_OID_LEN};
///
/// assert_eq!(DecodeConfig::default().max_arcs, None);
/// assert_eq!(DecodeConfig::strict().max_arcs, Some(MAX_OID_LEN));
/// assert_eq!(DecodeConfig::default().with_max_arcs(16).max_arcs, Some(16));
/// assert_eq!(DecodeConfig::default().max_arc_bytes, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Reject content with more arcs than this.
    pub max_arcs: Option<usize>,
    /// Reject a sub-identifier encoded in more bytes than this.
    pub max_arc_bytes: Option<usize>,
}

impl DecodeConfig {
    /// Enforce [`MAX_OID_LEN`] and [`MAX_ARC_LEN`].
    pub const fn strict() -> Self {
        Self {
            max_arcs: Some(MAX_OID_LEN),
            max_arc_bytes: Some(MAX_ARC_LEN),
        }
    }

    /// Set the maximum arc count.
    pub const fn with_max_arcs(mut self, max: usize) -> Self {
        self.max_arcs = Some(max);
        self
    }

    /// Set the maximum encoded length of one arc.
    pub const fn with_max_arc_bytes(mut self, max: usize) -> Self {
        self.max_arc_bytes = Some(max);
        self
    }
}

/// Decode BER/DER content bytes to canonical dotted text.
///
/// Equivalent to [`decode_with_config`] with the default (unlimited) config.
///
/// # Examples
///
/// ```
/// use ber_oid::ber::decode_to_canonical_string;
///
/// let text = decode_to_canonical_string(&[0x2B, 0x06, 0x01]).unwrap();
/// assert_eq!(text, "1.3.6.1");
/// ```
pub fn decode_to_canonical_string(data: &[u8]) -> Result<String> {
    decode_with_config(data, &DecodeConfig::default())
}

/// Decode BER/DER content bytes to canonical dotted text under `config`.
///
/// The first completed sub-identifier yields the first two arcs. Each later
/// sub-identifier yields one arc. Non-minimal groups (leading `0x80` bytes)
/// are accepted and decode by value.
pub fn decode_with_config(data: &[u8], config: &DecodeConfig) -> Result<String> {
    if data.is_empty() {
        tracing::debug!(target: "ber_oid::ber", { kind = %DecodeErrorKind::Empty }, "empty OID content");
        return Err(Error::decode(0, DecodeErrorKind::Empty));
    }

    let mut text = String::with_capacity(data.len() * 3);
    let mut acc = ArcAccumulator::new();
    let mut count = 0usize;
    let mut arc_len = 0usize;

    for (i, &byte) in data.iter().enumerate() {
        arc_len += 1;
        if let Some(max) = config.max_arc_bytes.filter(|&max| arc_len > max) {
            let kind = DecodeErrorKind::ArcTooLong { max };
            tracing::debug!(target: "ber_oid::ber", { ber.offset = i, kind = %kind }, "OID arc exceeds length limit");
            return Err(Error::decode(i, kind));
        }

        let Some(arc) = acc.push(byte) else {
            continue;
        };
        arc_len = 0;

        // Writing to a String cannot fail
        if count == 0 {
            let (first, second) = arc.split_leading();
            let _ = write!(text, "{}.{}", first, second);
            count = 2;
        } else {
            let _ = write!(text, ".{}", arc);
            count += 1;
        }

        if let Some(max) = config.max_arcs.filter(|&max| count > max) {
            let kind = DecodeErrorKind::TooManyArcs { count, max };
            tracing::debug!(target: "ber_oid::ber", { ber.offset = i + 1, kind = %kind }, "OID exceeds arc limit");
            return Err(Error::decode(i + 1, kind));
        }
    }

    if acc.is_pending() {
        tracing::debug!(target: "ber_oid::ber", { ber.offset = data.len(), ber.data = %hex::encode(data), kind = %DecodeErrorKind::TruncatedEncoding }, "truncated OID content");
        return Err(Error::decode(data.len(), DecodeErrorKind::TruncatedEncoding));
    }

    Ok(text)
}
