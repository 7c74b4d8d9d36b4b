//! WIF private-key serialization.
//!
//! WIF strings are the Base58Check encoding of a network's private-key version
//! byte followed by a 32-byte secret, with an optional trailing `0x01` marker
//! for keys whose public key is serialized in compressed form.
//!
//! The version byte is passed explicitly, like everything else in this crate:
//! networks publish it alongside their address version bytes (`0x80` for
//! Bitcoin mainnet, `0xbc` for Komodo).

use std::fmt;

use crate::encoding::{self, ParseError};

/// Number of bytes in the secret a WIF string encodes.
const SECRET_LEN: usize = 32;

/// Trailing marker for compressed-pubkey keys.
const COMPRESSED_MARKER: u8 = 0x01;

/// Decoded size of an uncompressed-key WIF string.
const WIF_LEN: usize = 1 + SECRET_LEN + 4;

/// Decoded size of a compressed-key WIF string.
const WIF_COMPRESSED_LEN: usize = WIF_LEN + 1;

/// A private key recovered from a WIF string.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Wif {
    secret: [u8; SECRET_LEN],
    compressed: bool,
}

impl Wif {
    /// Returns the 32-byte secret.
    pub fn secret(&self) -> &[u8; SECRET_LEN] {
        &self.secret
    }

    /// Returns whether the key's public key is serialized in compressed form.
    pub fn compressed(&self) -> bool {
        self.compressed
    }
}

// The secret is deliberately omitted so it cannot leak through logs.
impl fmt::Debug for Wif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wif")
            .field("secret", &"..")
            .field("compressed", &self.compressed)
            .finish()
    }
}

/// Encodes a 32-byte secret as a WIF string under the given private-key version
/// byte.
pub fn encode_wif(version: u8, secret: &[u8; SECRET_LEN], compressed: bool) -> String {
    let mut data = Vec::with_capacity(WIF_COMPRESSED_LEN);
    data.push(version);
    data.extend_from_slice(secret);
    if compressed {
        data.push(COMPRESSED_MARKER);
    }
    encoding::encode_check(data)
}

/// Attempts to parse the given string as a WIF key under the given private-key
/// version byte.
///
/// # Errors
///
/// - [`ParseError::InvalidCharacter`] if the string contains a character outside
///   the Base58 alphabet.
/// - [`ParseError::InvalidLength`] if the string does not decode to 37 bytes
///   (uncompressed) or 38 bytes ending in the `0x01` compression marker.
/// - [`ParseError::ChecksumMismatch`] if the embedded checksum does not match
///   the decoded payload.
/// - [`ParseError::UnknownVersion`] if the leading byte is not `version`.
pub fn decode_wif(encoded: &str, version: u8) -> Result<Wif, ParseError> {
    let decoded = encoding::decode_base58(encoded.trim())?;

    let compressed = match decoded.len() {
        WIF_LEN => false,
        WIF_COMPRESSED_LEN if decoded[1 + SECRET_LEN] == COMPRESSED_MARKER => true,
        len => return Err(ParseError::InvalidLength(len)),
    };
    encoding::verify_checksum(&decoded)?;

    if decoded[0] != version {
        return Err(ParseError::UnknownVersion(decoded[0]));
    }

    let mut secret = [0; SECRET_LEN];
    secret.copy_from_slice(&decoded[1..1 + SECRET_LEN]);

    Ok(Wif { secret, compressed })
}
