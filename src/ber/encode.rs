//! OID content encoding.

use smallvec::SmallVec;

use crate::arc::ArcValue;
use crate::error::{Error, Result};
use crate::grammar::check_oid;

/// Encoded OID content bytes.
///
/// Inline up to 64 bytes, which covers typical OIDs without heap allocation.
pub type EncodedOid = SmallVec<[u8; 64]>;

/// Encode dotted text to BER/DER content bytes (no tag or length).
///
/// The first two arcs are merged into one sub-identifier (`40 * first + second`);
/// each remaining arc is written as its own base-128 group sequence. Arcs
/// with leading zeros are encoded by numeric value, so `"1.007"` and `"1.7"`
/// produce the same bytes.
///
/// # Examples
///
/// ```
/// use ber_oid::ber::encode_oid;
///
/// let bytes = encode_oid("1.2.840.113549").unwrap();
/// assert_eq!(bytes.as_slice(), &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D]);
/// ```
pub fn encode_oid(text: &str) -> Result<EncodedOid> {
    check_oid(text).map_err(|kind| Error::malformed(kind, text))?;
    Ok(encode_validated(text))
}

/// Encode text that has already passed [`check_oid`].
///
/// Every arc of validated text is a digit run and the first arc is 0-2.
pub(crate) fn encode_validated(text: &str) -> EncodedOid {
    let mut bytes = EncodedOid::new();
    let mut arcs = text.split('.').filter_map(ArcValue::from_decimal);

    if let (Some(ArcValue::Small(first)), Some(second)) = (arcs.next(), arcs.next()) {
        ArcValue::merge_leading(first as u8, second).encode_into(&mut bytes);
    }
    for arc in arcs {
        arc.encode_into(&mut bytes);
    }

    bytes
}

/// Length of the minimal encoding of text that has already passed [`check_oid`].
pub(crate) fn encoded_len_validated(text: &str) -> usize {
    let mut arcs = text.split('.').filter_map(ArcValue::from_decimal);

    let leading = match (arcs.next(), arcs.next()) {
        (Some(ArcValue::Small(first)), Some(second)) => {
            ArcValue::merge_leading(first as u8, second).encoded_len()
        }
        _ => 0,
    };
    leading + arcs.map(|arc| arc.encoded_len()).sum::<usize>()
}
