//! Arc (sub-identifier) arithmetic.
//!
//! Arcs are unbounded non-negative integers. [`ArcValue`] keeps values up to
//! [`LONG_LIMIT`] in a native `u64` and promotes anything larger to a
//! [`BigUint`]. The same boundary is used by parsing, encoding and the
//! decode accumulator, so a value has exactly one representation.
//!
//! Encoding (X.690 Section 8.19.2): big-endian base-128 groups, continuation
//! bit (0x80) set on every group except the last, no redundant leading groups.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use smallvec::SmallVec;
use std::fmt;

/// Largest value kept in the native accumulator.
///
/// Any value at or below this limit can take another 7-bit group
/// (`(v << 7) | 0x7f`) without leaving the signed 64-bit range.
pub const LONG_LIMIT: u64 = ((i64::MAX >> 7) - 0x7f) as u64;

/// Scratch size for a native arc: `LONG_LIMIT` needs at most 8 groups.
const SCRATCH_LEN: usize = 9;

/// Decimal digit count that always fits in `u64`.
const NATIVE_DIGITS: usize = 18;

/// A single OID arc.
///
/// `Small` holds values `<= LONG_LIMIT`, `Big` holds values above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArcValue {
    Small(u64),
    Big(BigUint),
}

impl ArcValue {
    /// Parse a run of ASCII decimal digits. Leading zeros are allowed.
    ///
    /// Returns `None` for an empty string or any non-digit.
    pub fn from_decimal(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if digits.len() <= NATIVE_DIGITS {
            return digits.parse::<u64>().ok().map(Self::from);
        }
        BigUint::parse_bytes(digits.as_bytes(), 10).map(Self::from)
    }

    /// Combine the first two arcs into the leading sub-identifier (`40 * first + second`).
    pub fn merge_leading(first: u8, second: ArcValue) -> ArcValue {
        let offset = 40 * u64::from(first);
        match second {
            Self::Small(v) => Self::from(v + offset),
            Self::Big(v) => Self::from(v + offset),
        }
    }

    /// Split the leading sub-identifier into the first arc and the remainder.
    ///
    /// Values below 40 map to `0.x`, below 80 to `1.(x-40)`, anything else
    /// to `2.(x-80)`.
    pub fn split_leading(self) -> (u8, ArcValue) {
        match self {
            Self::Small(v) if v < 40 => (0, Self::Small(v)),
            Self::Small(v) if v < 80 => (1, Self::Small(v - 40)),
            Self::Small(v) => (2, Self::Small(v - 80)),
            Self::Big(v) => (2, Self::from(v - 80u32)),
        }
    }

    /// Number of base-128 groups in the minimal encoding.
    pub fn encoded_len(&self) -> usize {
        let bits = match self {
            Self::Small(v) => u64::from(64 - v.leading_zeros()),
            Self::Big(v) => v.bits(),
        };
        bits.div_ceil(7).max(1) as usize
    }

    /// Append the minimal base-128 encoding to `out`.
    pub fn encode_into<A: smallvec::Array<Item = u8>>(&self, out: &mut SmallVec<A>) {
        match self {
            Self::Small(v) => {
                let (buf, len) = encode_native(*v);
                out.extend_from_slice(&buf[SCRATCH_LEN - len..]);
            }
            Self::Big(v) => encode_big(v, out),
        }
    }
}

impl From<u64> for ArcValue {
    fn from(value: u64) -> Self {
        if value <= LONG_LIMIT {
            Self::Small(value)
        } else {
            Self::Big(BigUint::from(value))
        }
    }
}

impl From<BigUint> for ArcValue {
    fn from(value: BigUint) -> Self {
        match value.to_u64() {
            Some(v) if v <= LONG_LIMIT => Self::Small(v),
            _ => Self::Big(value),
        }
    }
}

impl fmt::Display for ArcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small(v) => write!(f, "{}", v),
            Self::Big(v) => write!(f, "{}", v),
        }
    }
}

/// Encode a native arc, filling the scratch buffer from the tail.
///
/// Returns the buffer and the number of trailing bytes used; the encoding
/// is `buf[SCRATCH_LEN - len..]`. `value` must not exceed [`LONG_LIMIT`].
fn encode_native(value: u64) -> ([u8; SCRATCH_LEN], usize) {
    debug_assert!(value <= LONG_LIMIT);
    let mut buf = [0u8; SCRATCH_LEN];
    let mut pos = SCRATCH_LEN - 1;
    let mut v = value;

    buf[pos] = (v & 0x7F) as u8;
    v >>= 7;
    while v > 0 {
        pos -= 1;
        buf[pos] = (v & 0x7F) as u8 | 0x80;
        v >>= 7;
    }

    (buf, SCRATCH_LEN - pos)
}

/// Encode an arbitrary-precision arc, most significant group first.
fn encode_big<A: smallvec::Array<Item = u8>>(value: &BigUint, out: &mut SmallVec<A>) {
    // to_radix_be yields [0] for zero, so the output is never empty
    let groups = value.to_radix_be(128);
    let last = groups.len() - 1;
    for (i, group) in groups.into_iter().enumerate() {
        out.push(if i < last { group | 0x80 } else { group });
    }
}

/// Incremental base-128 decoder for one sub-identifier at a time.
///
/// Bytes are fed with [`push`](Self::push); a completed arc is returned when
/// a byte with the continuation bit clear arrives, and the accumulator resets.
/// The native accumulator is used while it stays at or below [`LONG_LIMIT`].
/// Past that, the remaining 7-bit groups of the arc are collected and
/// converted to a `BigUint` once the arc terminates, so a long arc costs
/// time linear in its length.
#[derive(Debug, Default)]
pub struct ArcAccumulator {
    native: u64,
    groups: Option<Vec<u8>>,
    pending: bool,
}

impl ArcAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one encoded byte. Returns the arc if this byte terminates it.
    pub fn push(&mut self, byte: u8) -> Option<ArcValue> {
        let low = byte & 0x7F;

        if self.groups.is_none() && self.native > LONG_LIMIT {
            tracing::trace!(target: "ber_oid::arc", { native = self.native }, "promoting sub-identifier to arbitrary precision");
            self.groups = Some(BigUint::from(self.native).to_radix_be(128));
        }

        match self.groups.as_mut() {
            Some(groups) => groups.push(low),
            None => self.native = (self.native << 7) | u64::from(low),
        }

        if byte & 0x80 != 0 {
            self.pending = true;
            return None;
        }

        let value = match self.groups.take() {
            // every group is masked to 7 bits, which radix 128 always accepts
            Some(groups) => ArcValue::from(BigUint::from_radix_be(&groups, 128)?),
            None => ArcValue::from(self.native),
        };
        self.reset();
        Some(value)
    }

    /// True if bytes have been consumed for an arc that has not terminated.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    fn reset(&mut self) {
        self.native = 0;
        self.groups = None;
        self.pending = false;
    }
}
