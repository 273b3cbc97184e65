//! # ber-oid
//!
//! ASN.1 object identifier codec for BER/DER content octets.
//!
//! ## Features
//!
//! - Dotted-decimal text <-> X.690 content bytes
//! - Arcs of any size: native `u64` arithmetic with transparent promotion
//!   to arbitrary precision
//! - Explicit errors for truncated or empty encodings
//! - Branch derivation and stem tests on immutable, cheaply cloned values
//! - Optional process-wide interning of common identifiers
//!
//! ## Quick Start
//!
//! ```rust
//! use ber_oid::Oid;
//!
//! # fn main() -> ber_oid::Result<()> {
//! let pkcs1 = Oid::parse("1.2.840.113549.1.1")?;
//! let rsa = pkcs1.branch("1")?;
//! assert!(rsa.is_on(&pkcs1));
//!
//! let bytes = rsa.to_ber();
//! assert_eq!(&bytes[..], &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x01]);
//!
//! let decoded = Oid::from_ber(&bytes)?;
//! assert_eq!(decoded, rsa);
//! # Ok(())
//! # }
//! ```

pub mod arc;
pub mod ber;
pub mod error;
pub mod grammar;
pub mod intern;
pub mod oid;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use ber::DecodeConfig;
pub use error::{DecodeErrorKind, Error, OidErrorKind, Result};
pub use intern::OidCache;
pub use oid::Oid;

/// Testing utilities exposed via the `testing` feature.
#[cfg(feature = "testing")]
pub mod testing {
    pub use hex::{decode, encode};
}
