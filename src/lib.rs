//! *Parser for Base58Check addresses on Bitcoin-family networks.*
//!
//! This crate implements address parsing as a two-phase process, built around the
//! [`Address`] type.
//!
//! - [`Address`] can be parsed from, and encoded to, strings, given the
//!   [`NetworkParameters`] of the network the string is expected to belong to.
//! - [`Address::convert`] can be used to convert a parsed address into custom types
//!   that implement the [`FromAddress`] trait.
//!
//! ```text
//!         Address::decode            .convert()
//!         --------------->           --------->
//! Strings                  Address              Custom types
//!         <---------------
//!            .encode()
//! ```
//!
//! A network is plain data, not a type: a [`NetworkParameters`] value carries the
//! version bytes that distinguish one Bitcoin-family coin from another, so a single
//! codec supports any number of network variants. Parameters are passed explicitly
//! into each call; there is no process-wide registry.
//!
//! # Examples
//!
//! ```
//! use base58check_address::{Address, AddressKind, NetworkParameters};
//!
//! let params = NetworkParameters::new("komodo.main", 0x3c, 0x55)?;
//! let addr = Address::decode("RHZmD7XqX7Xfs4mqhLCrd58MWQkqGkkQsM", &params)?;
//!
//! assert_eq!(addr.kind(), AddressKind::PubkeyHash);
//! assert_eq!(addr.version(), 0x3c);
//! assert_eq!(addr.encode(), "RHZmD7XqX7Xfs4mqhLCrd58MWQkqGkkQsM");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

mod convert;
mod encoding;
mod network;
pub mod wif;

pub use convert::{FromAddress, UnsupportedAddress};
pub use encoding::{encode_address, ParseError};
pub use network::{NetworkParameters, ParameterError};

/// A decoded Bitcoin-family address.
///
/// Values of this type are only produced by [`Address::decode`], so the payload has
/// always passed checksum verification and the version byte is always one that the
/// supplying [`NetworkParameters`] accepts. Callers may use the payload without
/// re-verifying it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    version: u8,
    payload: [u8; 20],
    kind: AddressKind,
}

/// The semantic type of a decoded address, derived from its version byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// The version byte is the network's pay-to-pubkey-hash version.
    PubkeyHash,
    /// The version byte is the network's pay-to-script-hash version.
    ScriptHash,
    /// The version byte is acceptable for the network, but is neither its
    /// pubkey-hash nor its script-hash version.
    Unknown,
}

impl Address {
    /// Returns the leading version byte of the decoded payload.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the 20-byte hash this address encodes.
    pub fn payload(&self) -> &[u8; 20] {
        &self.payload
    }

    /// Returns the address-type classification assigned at decode time.
    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    /// Encodes this address in its canonical string representation.
    ///
    /// The [`Display` implementation] can also be used to produce this encoding
    /// using [`address.to_string()`].
    ///
    /// [`Display` implementation]: std::fmt::Display
    /// [`address.to_string()`]: std::string::ToString
    pub fn encode(&self) -> String {
        format!("{}", self)
    }
}

#[cfg(any(test, feature = "test-dependencies"))]
pub mod testing {
    use proptest::{array::uniform20, prelude::any, prop_compose};

    use crate::NetworkParameters;

    prop_compose! {
        /// Create an arbitrary 20-byte address payload.
        pub fn arb_payload()(bytes in uniform20(any::<u8>())) -> [u8; 20] {
            bytes
        }
    }

    prop_compose! {
        /// Create arbitrary network parameters.
        ///
        /// The generated pubkey-hash and script-hash version bytes are always
        /// distinct, so construction cannot fail.
        pub fn arb_params()(pubkey in any::<u8>(), offset in 1..=u8::MAX) -> NetworkParameters {
            NetworkParameters::new("proptest", pubkey, pubkey.wrapping_add(offset))
                .expect("version bytes are distinct")
        }
    }
}
