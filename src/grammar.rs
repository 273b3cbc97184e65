//! Dotted-decimal OID grammar.
//!
//! An identifier is `[0-2] "." arc ("." arc)*` where each arc is a non-empty run
//! of ASCII digits. Leading zeros inside an arc are accepted (`"1.007"` is
//! valid); the codec reads such arcs by numeric value.
//!
//! The predicates here are pure and allocation-free. [`check_oid`] adds the
//! X.690 Section 8.19.4 range rule for the second arc (below 40 under a first
//! arc of 0 or 1), which is what text construction and encoding enforce.

use crate::error::OidErrorKind;

/// Check a full dotted identifier, returning the reason on failure.
pub fn check_identifier(s: &str) -> Result<(), OidErrorKind> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 {
        return Err(OidErrorKind::TooShort);
    }
    if bytes[1] != b'.' {
        return Err(OidErrorKind::MissingSeparator);
    }
    if !matches!(bytes[0], b'0'..=b'2') {
        return Err(OidErrorKind::InvalidFirstArc);
    }
    check_branch_suffix(s, 2)
}

/// Check the arcs of `s` starting at byte offset `start`.
///
/// Scans from the end backward. A digit permits a preceding `.`; a `.`
/// consumes that permission. The scan must end with the permission held,
/// so the suffix can neither start nor end with `.` nor contain `..`.
/// Indices in the returned error are byte offsets into `s`.
pub fn check_branch_suffix(s: &str, start: usize) -> Result<(), OidErrorKind> {
    let Some(suffix) = s.get(start..) else {
        return Err(OidErrorKind::EmptyArc { index: start });
    };

    let mut period_allowed = false;
    for (i, c) in suffix.char_indices().rev() {
        match c {
            '0'..='9' => period_allowed = true,
            '.' if period_allowed => period_allowed = false,
            '.' => return Err(OidErrorKind::EmptyArc { index: start + i }),
            other => {
                return Err(OidErrorKind::UnexpectedCharacter {
                    index: start + i,
                    found: other,
                });
            }
        }
    }

    if period_allowed {
        Ok(())
    } else {
        Err(OidErrorKind::EmptyArc { index: start })
    }
}

/// Check an identifier and the range of its second arc.
///
/// `"1.40"` is grammatical but has no encoding distinct from `"2.0"`.
pub fn check_oid(s: &str) -> Result<(), OidErrorKind> {
    check_identifier(s)?;
    let first = s.as_bytes()[0] - b'0';
    if first < 2 {
        let second = s[2..].split('.').next().unwrap_or_default();
        let digits = second.trim_start_matches('0');
        if digits.len() > 2 || digits.parse::<u8>().is_ok_and(|v| v >= 40) {
            return Err(OidErrorKind::SecondArcOutOfRange { first });
        }
    }
    Ok(())
}

/// True if `s` is a valid dotted identifier.
///
/// # Examples
///
/// ```
/// use ber_oid::grammar::is_valid_identifier;
///
/// assert!(is_valid_identifier("1.2.840.113549"));
/// assert!(!is_valid_identifier("1..2"));
/// assert!(!is_valid_identifier("3.5"));
/// ```
pub fn is_valid_identifier(s: &str) -> bool {
    check_identifier(s).is_ok()
}

/// True if the arcs of `s` from byte offset `start` are valid.
///
/// # Examples
///
/// ```
/// use ber_oid::grammar::is_valid_branch_suffix;
///
/// assert!(is_valid_branch_suffix("113549.1", 0));
/// assert!(!is_valid_branch_suffix("113549.", 0));
/// assert!(!is_valid_branch_suffix("", 0));
/// ```
pub fn is_valid_branch_suffix(s: &str, start: usize) -> bool {
    check_branch_suffix(s, start).is_ok()
}
