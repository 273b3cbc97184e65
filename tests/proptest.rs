//! Property-based tests for ber-oid.
//!
//! Round-trips between dotted text and BER content, value semantics of
//! `Oid`, and decoder robustness on arbitrary input.

use ber_oid::ber::{decode_to_canonical_string, encode_oid};
use ber_oid::grammar::{check_oid, is_valid_identifier};
use ber_oid::{DecodeConfig, Oid};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// =============================================================================
// Strategies
// =============================================================================

/// Canonical arc text: no leading zeros, native or arbitrary precision.
fn arb_arc() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        (0u64..128).prop_map(|v| v.to_string()),
        any::<u64>().prop_map(|v| v.to_string()),
        "[1-9][0-9]{19,60}",
    ]
}

/// Canonical OID text.
///
/// - first arc 0, 1 or 2
/// - second arc below 40 when the first arc is 0 or 1
fn arb_oid_text() -> impl Strategy<Value = String> {
    (0u8..=2)
        .prop_flat_map(|first| {
            let second = if first < 2 {
                (0u8..40).prop_map(|v| v.to_string()).boxed()
            } else {
                arb_arc().boxed()
            };
            (Just(first), second, prop::collection::vec(arb_arc(), 0..12))
        })
        .prop_map(|(first, second, rest)| {
            let mut text = format!("{}.{}", first, second);
            for arc in rest {
                text.push('.');
                text.push_str(&arc);
            }
            text
        })
}

/// Numeric arcs accepted by `Oid::from_arcs`.
fn arb_numeric_arcs() -> impl Strategy<Value = Vec<u64>> {
    (0u64..=2, 0u64..40, prop::collection::vec(0u64..1000, 0..8)).prop_map(
        |(first, second, rest)| {
            let mut arcs = vec![first, second];
            arcs.extend(rest);
            arcs
        },
    )
}

fn hash_of(oid: &Oid) -> u64 {
    let mut hasher = DefaultHasher::new();
    oid.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Codec round-trips
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn text_roundtrip(text in arb_oid_text()) {
        let bytes = encode_oid(&text).expect("encode should succeed");
        let decoded = decode_to_canonical_string(&bytes).expect("decode should succeed");
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn bytes_roundtrip_is_minimal(text in arb_oid_text()) {
        let bytes = encode_oid(&text).unwrap();
        let decoded = decode_to_canonical_string(&bytes).unwrap();
        let reencoded = encode_oid(&decoded).unwrap();
        prop_assert_eq!(reencoded.as_slice(), bytes.as_slice());
    }

    #[test]
    fn first_byte_merges_leading_arcs(first in 0u8..2, second in 0u8..40) {
        let bytes = encode_oid(&format!("{}.{}.1", first, second)).unwrap();
        prop_assert_eq!(bytes[0], 40 * first + second);
    }

    #[test]
    fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..64)) {
        match decode_to_canonical_string(&data) {
            Ok(text) => {
                prop_assert!(check_oid(&text).is_ok(), "decoded text {:?} is not valid", text);
                // decoding is idempotent through a re-encode
                let reencoded = encode_oid(&text).unwrap();
                prop_assert_eq!(decode_to_canonical_string(&reencoded).unwrap(), text);
            }
            Err(err) => {
                let truncated = data.last().is_some_and(|b| b & 0x80 != 0);
                prop_assert_eq!(err.is_truncated(), truncated);
            }
        }
    }

    #[test]
    fn strict_config_bounds_arc_count(data in prop::collection::vec(0u8..0x80, 1..200)) {
        let result = Oid::from_ber_with(&data, &DecodeConfig::strict());
        // every byte is a complete sub-identifier; the first yields two arcs
        prop_assert_eq!(result.is_ok(), data.len() < 128);
    }
}

// =============================================================================
// Value semantics
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn equality_and_hash_ignore_cache(text in arb_oid_text()) {
        let from_text = Oid::parse(&text).unwrap();
        let from_bytes = Oid::from_ber(&from_text.to_ber()).unwrap();
        let fresh = Oid::parse(&text).unwrap();

        prop_assert!(from_bytes.cached_ber().is_some());
        prop_assert!(fresh.cached_ber().is_none());
        prop_assert_eq!(&from_bytes, &fresh);
        prop_assert_eq!(hash_of(&from_bytes), hash_of(&fresh));
    }

    #[test]
    fn display_parse_roundtrip(text in arb_oid_text()) {
        let oid = Oid::parse(&text).unwrap();
        prop_assert_eq!(oid.to_string(), text.clone());
        prop_assert_eq!(text.parse::<Oid>().unwrap(), oid);
    }

    #[test]
    fn branch_is_on_stem(stem in arb_oid_text(), suffix in prop::collection::vec(arb_arc(), 1..4)) {
        let stem = Oid::parse(&stem).unwrap();
        let suffix = suffix.join(".");
        let branch = stem.branch(&suffix).unwrap();

        prop_assert!(branch.is_on(&stem));
        prop_assert!(!stem.is_on(&branch));
        prop_assert!(!branch.is_on(&branch));
        prop_assert_eq!(branch.arc_count(), stem.arc_count() + suffix.split('.').count());
    }

    #[test]
    fn child_parent_inverse(text in arb_oid_text(), arc in any::<u64>()) {
        let oid = Oid::parse(&text).unwrap();
        let child = oid.child(arc);
        prop_assert_eq!(child.parent().unwrap(), oid);
    }

    #[test]
    fn ordering_matches_numeric_arcs(a in arb_numeric_arcs(), b in arb_numeric_arcs()) {
        let oid_a = Oid::from_arcs(a.iter().copied()).unwrap();
        let oid_b = Oid::from_arcs(b.iter().copied()).unwrap();
        prop_assert_eq!(oid_a.cmp(&oid_b), a.cmp(&b));
    }

    #[test]
    fn foreign_characters_rejected(text in arb_oid_text(), index in any::<prop::sample::Index>(), c in "[^0-9.]") {
        let pos = index.index(text.len() + 1);
        let mut corrupted = text.clone();
        corrupted.insert_str(pos, &c);
        prop_assert!(!is_valid_identifier(&corrupted));
        prop_assert!(Oid::parse(&corrupted).is_err());
    }
}
