//! BER/DER content codec for object identifiers (X.690 Section 8.19).
//!
//! Only the content octets are handled here; tag and length framing belong
//! to the caller's ASN.1 layer.

mod decode;
mod encode;

pub use decode::{DecodeConfig, MAX_ARC_LEN, MAX_OID_LEN, decode_to_canonical_string, decode_with_config};
pub use encode::{EncodedOid, encode_oid};

pub(crate) use encode::{encode_validated, encoded_len_validated};
