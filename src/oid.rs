//! Object Identifier (OID) type.
//!
//! An [`Oid`] is identified by its dotted-decimal text. The BER content
//! encoding is a derived, lazily computed cache: it is kept when the value
//! was decoded from bytes and computed on first request otherwise, and it
//! never takes part in equality, hashing or ordering.

use bytes::Bytes;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::ber::{self, DecodeConfig};
use crate::error::{Error, OidErrorKind, Result};
use crate::grammar;

/// Object Identifier.
///
/// Immutable; clones share the text. Arcs are unbounded, so identifiers
/// such as `2.999999999999999999999999999999` are representable.
///
/// # Examples
///
/// ```
/// use ber_oid::Oid;
///
/// let rsa = Oid::parse("1.2.840.113549.1.1.1").unwrap();
/// assert_eq!(rsa.to_ber()[0], 0x2A);
///
/// let decoded = Oid::from_ber(&rsa.to_ber()).unwrap();
/// assert_eq!(decoded, rsa);
/// ```
#[derive(Clone)]
pub struct Oid {
    text: Arc<str>,
    encoded: OnceLock<Bytes>,
}

impl Oid {
    fn from_canonical(text: impl Into<Arc<str>>, encoded: Option<Bytes>) -> Self {
        Self {
            text: text.into(),
            encoded: encoded.map(OnceLock::from).unwrap_or_default(),
        }
    }

    /// Parse an OID from dotted text (e.g., `"1.2.840.113549"`).
    ///
    /// Fails with [`Error::MalformedIdentifier`] unless the text is
    /// `[0-2].arc(.arc)*` with digit-only arcs and, when the first arc is 0
    /// or 1, a second arc below 40. Arcs with leading zeros are accepted
    /// as-is and kept in the text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ber_oid::Oid;
    ///
    /// assert!(Oid::parse("1.3.6.1").is_ok());
    /// assert!(Oid::parse("1..2").is_err());
    /// assert!(Oid::parse("3.5").is_err());
    /// assert!(Oid::parse("1.40").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        grammar::check_oid(s).map_err(|kind| Error::malformed(kind, s))?;
        Ok(Self::from_canonical(s, None))
    }

    /// Decode BER/DER content bytes (no tag or length).
    ///
    /// The input is kept as the cached encoding. Fails on empty input and
    /// on input that ends inside a sub-identifier.
    pub fn from_ber(data: &[u8]) -> Result<Self> {
        Self::from_ber_with(data, &DecodeConfig::default())
    }

    /// Decode BER/DER content bytes under `config`.
    pub fn from_ber_with(data: &[u8], config: &DecodeConfig) -> Result<Self> {
        let text = ber::decode_with_config(data, config)?;
        Ok(Self::from_canonical(text, Some(Bytes::copy_from_slice(data))))
    }

    /// Decode BER/DER content bytes without copying them.
    ///
    /// The cached encoding shares `data`'s buffer.
    pub fn from_bytes(data: Bytes) -> Result<Self> {
        let text = ber::decode_to_canonical_string(&data)?;
        Ok(Self::from_canonical(text, Some(data)))
    }

    /// Build an OID from numeric arcs.
    ///
    /// # Examples
    ///
    /// ```
    /// use ber_oid::Oid;
    ///
    /// let oid = Oid::from_arcs([1, 3, 6, 1, 4, 1]).unwrap();
    /// assert_eq!(oid.as_str(), "1.3.6.1.4.1");
    ///
    /// assert!(Oid::from_arcs([1]).is_err());
    /// assert!(Oid::from_arcs([12, 3]).is_err());
    /// ```
    pub fn from_arcs(arcs: impl IntoIterator<Item = u64>) -> Result<Self> {
        let mut arcs = arcs.into_iter();
        let mut text = String::new();

        if let Some(first) = arcs.next() {
            text.push_str(&first.to_string());
            if first > 2 {
                return Err(Error::malformed(OidErrorKind::InvalidFirstArc, text));
            }
        }
        for arc in arcs {
            text.push('.');
            text.push_str(&arc.to_string());
        }

        grammar::check_oid(&text).map_err(|kind| Error::malformed(kind, text.as_str()))?;
        Ok(Self::from_canonical(text, None))
    }

    /// The dotted text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterate the arcs as decimal digit strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use ber_oid::Oid;
    ///
    /// let oid = Oid::parse("2.5.4.3").unwrap();
    /// assert_eq!(oid.arcs().collect::<Vec<_>>(), ["2", "5", "4", "3"]);
    /// ```
    pub fn arcs(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.split('.')
    }

    /// Number of arcs (always at least 2).
    pub fn arc_count(&self) -> usize {
        self.text.bytes().filter(|&b| b == b'.').count() + 1
    }

    /// Derive a branch by appending one or more arcs.
    ///
    /// The suffix is validated on its own before concatenation; `self` is
    /// never affected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ber_oid::Oid;
    ///
    /// let rsadsi = Oid::parse("1.2.840").unwrap();
    /// let pkcs = rsadsi.branch("113549.1").unwrap();
    /// assert_eq!(pkcs.as_str(), "1.2.840.113549.1");
    ///
    /// assert!(rsadsi.branch("113549.").is_err());
    /// assert!(rsadsi.branch("").is_err());
    /// ```
    pub fn branch(&self, suffix: &str) -> Result<Self> {
        grammar::check_branch_suffix(suffix, 0)
            .map_err(|kind| Error::invalid_branch(kind, suffix))?;
        Ok(Self::from_canonical(
            format!("{}.{}", self.text, suffix),
            None,
        ))
    }

    /// Derive a branch with a single numeric arc.
    pub fn child(&self, arc: u64) -> Self {
        Self::from_canonical(format!("{}.{}", self.text, arc), None)
    }

    /// The OID with its last arc removed.
    ///
    /// Returns `None` for a two-arc OID, since every OID has at least two arcs.
    ///
    /// # Examples
    ///
    /// ```
    /// use ber_oid::Oid;
    ///
    /// let oid = Oid::parse("1.3.6.1").unwrap();
    /// assert_eq!(oid.parent().unwrap().as_str(), "1.3.6");
    /// assert!(Oid::parse("1.3").unwrap().parent().is_none());
    /// ```
    pub fn parent(&self) -> Option<Self> {
        let end = self.text.rfind('.')?;
        let prefix = &self.text[..end];
        prefix
            .contains('.')
            .then(|| Self::from_canonical(prefix, None))
    }

    /// True if `self` is a strict branch of `stem`.
    ///
    /// This is a textual prefix test at an arc boundary: `1.23` is not on
    /// `1.2`, and an OID is not on itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use ber_oid::Oid;
    ///
    /// let stem = Oid::parse("1.2").unwrap();
    /// assert!(Oid::parse("1.2.840").unwrap().is_on(&stem));
    /// assert!(!Oid::parse("1.23").unwrap().is_on(&stem));
    /// assert!(!stem.is_on(&stem));
    /// ```
    pub fn is_on(&self, stem: &Oid) -> bool {
        let (text, prefix) = (self.text.as_bytes(), stem.text.as_bytes());
        text.len() > prefix.len() && text[prefix.len()] == b'.' && text.starts_with(prefix)
    }

    /// BER/DER content bytes (no tag or length).
    ///
    /// Returns the cached encoding when present; otherwise encodes and caches.
    /// The returned `Bytes` shares the cache.
    pub fn to_ber(&self) -> Bytes {
        self.encoded
            .get_or_init(|| Bytes::copy_from_slice(&ber::encode_validated(&self.text)))
            .clone()
    }

    /// The cached encoding, if one has been stored.
    ///
    /// For an OID decoded from bytes this is exactly the input, including
    /// any non-minimal groups.
    pub fn cached_ber(&self) -> Option<&[u8]> {
        self.encoded.get().map(|b| b.as_ref())
    }

    /// Length of the BER/DER content.
    ///
    /// Uses the cached encoding when present; otherwise the length is
    /// computed without encoding or caching.
    pub fn encoded_len(&self) -> usize {
        match self.encoded.get() {
            Some(bytes) => bytes.len(),
            None => ber::encoded_len_validated(&self.text),
        }
    }

    /// Return the shared instance from the process-wide cache.
    ///
    /// See [`OidCache`](crate::intern::OidCache).
    pub fn intern(self) -> Self {
        crate::intern::global().intern(self)
    }

    /// True if both values share the same text allocation.
    pub fn ptr_eq(&self, other: &Oid) -> bool {
        Arc::ptr_eq(&self.text, &other.text)
    }
}

/// Compare two digit runs by numeric value.
fn cmp_decimal(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl PartialEq for Oid {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Oid {}

impl Hash for Oid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must match str's Hash for Borrow<str>
        self.as_str().hash(state);
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    /// Numeric arc-by-arc order; a prefix sorts before its branches.
    ///
    /// Arcs differing only in leading zeros fall back to text order.
    fn cmp(&self, other: &Self) -> Ordering {
        let mut lhs = self.arcs();
        let mut rhs = other.arcs();
        loop {
            match (lhs.next(), rhs.next()) {
                (Some(a), Some(b)) => match cmp_decimal(a, b) {
                    Ordering::Equal => continue,
                    ord => return ord,
                },
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (None, None) => return self.text.cmp(&other.text),
            }
        }
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self.text)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Oid {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Oid {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        grammar::check_oid(&s).map_err(|kind| Error::malformed(kind, s.as_str()))?;
        Ok(Self::from_canonical(s, None))
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Borrow<str> for Oid {
    fn borrow(&self) -> &str {
        &self.text
    }
}
