//! Interning cache for frequently used OIDs.
//!
//! Decoders that see the same identifiers over and over (algorithm OIDs,
//! attribute types) can route values through an [`OidCache`] so equal OIDs
//! share one text allocation. The cache is a fixed-size slot table: each
//! OID hashes to a single slot, and a different OID landing on an occupied
//! slot replaces it. Lookups never affect correctness; an evicted OID is
//! simply returned as-is.

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;
use std::sync::{OnceLock, RwLock};

use crate::oid::Oid;

/// Slot count of the process-wide cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Fixed-capacity concurrent OID cache.
///
/// # Examples
///
/// ```
/// use ber_oid::{Oid, intern::OidCache};
///
/// let cache = OidCache::with_capacity(64);
/// let a = cache.intern(Oid::parse("1.2.840.113549.1.1.1").unwrap());
/// let b = cache.intern(Oid::from_ber(&a.to_ber()).unwrap());
/// assert!(a.ptr_eq(&b));
/// ```
#[derive(Debug)]
pub struct OidCache {
    slots: Box<[RwLock<Option<Oid>>]>,
    hasher: RandomState,
}

impl OidCache {
    /// Create a cache with `capacity` slots (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = (0..capacity.max(1)).map(|_| RwLock::new(None)).collect();
        Self {
            slots,
            hasher: RandomState::new(),
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, text: &str) -> &RwLock<Option<Oid>> {
        let index = self.hasher.hash_one(text) % self.slots.len() as u64;
        &self.slots[index as usize]
    }

    /// Look up a cached OID by its dotted text.
    pub fn get(&self, text: &str) -> Option<Oid> {
        let guard = self.slot(text).read().ok()?;
        guard.as_ref().filter(|oid| oid.as_str() == text).cloned()
    }

    /// Return the cached instance equal to `oid`, publishing `oid` if none.
    ///
    /// When another OID occupies the slot it is replaced (last writer wins).
    pub fn intern(&self, oid: Oid) -> Oid {
        let slot = self.slot(oid.as_str());

        if let Ok(guard) = slot.read() {
            if let Some(existing) = guard.as_ref().filter(|e| **e == oid) {
                return existing.clone();
            }
        }

        if let Ok(mut guard) = slot.write() {
            match guard.as_ref() {
                // published by another thread since the read
                Some(existing) if *existing == oid => return existing.clone(),
                Some(existing) => {
                    tracing::trace!(target: "ber_oid::intern", { evicted = %existing, oid = %oid }, "replacing interned OID");
                }
                None => {
                    tracing::trace!(target: "ber_oid::intern", { oid = %oid }, "interning OID");
                }
            }
            *guard = Some(oid.clone());
        }

        oid
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.read().map(|guard| guard.is_some()).unwrap_or(false))
            .count()
    }

    /// True if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty every slot.
    pub fn clear(&self) {
        for slot in self.slots.iter() {
            if let Ok(mut guard) = slot.write() {
                *guard = None;
            }
        }
    }
}

impl Default for OidCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

/// The process-wide cache used by [`Oid::intern`].
pub fn global() -> &'static OidCache {
    static CACHE: OnceLock<OidCache> = OnceLock::new();
    CACHE.get_or_init(OidCache::default)
}
