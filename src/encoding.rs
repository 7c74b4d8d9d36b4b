//! The Base58Check string codec.

use std::{error::Error, fmt};

use sha2::{Digest, Sha256};

use crate::{Address, NetworkParameters};

/// The 58-character alphabet. `0`, `O`, `I` and `l` are excluded.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Number of bytes in the hash an address encodes.
const PAYLOAD_LEN: usize = 20;

/// Number of trailing checksum bytes in a Base58Check payload.
const CHECKSUM_LEN: usize = 4;

/// Total decoded size of an address: version byte, payload, checksum.
const DECODED_LEN: usize = 1 + PAYLOAD_LEN + CHECKSUM_LEN;

/// An error while attempting to parse a string as a Base58Check encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The string contains a character outside the Base58 alphabet.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its byte offset within the input.
        index: usize,
    },
    /// The string decodes to a byte sequence of a length no supported encoding
    /// occupies.
    InvalidLength(usize),
    /// The embedded checksum does not match the checksum recomputed from the
    /// decoded payload, signalling corruption or a typo.
    ChecksumMismatch {
        /// The checksum recomputed from the decoded payload.
        expected: [u8; CHECKSUM_LEN],
        /// The checksum embedded in the string.
        found: [u8; CHECKSUM_LEN],
    },
    /// The version byte is not acceptable for the supplied network parameters,
    /// signalling a wrong-network string.
    UnknownVersion(u8),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidCharacter { character, index } => {
                write!(
                    f,
                    "invalid base58 character {:?} at position {}",
                    character, index
                )
            }
            ParseError::InvalidLength(len) => {
                write!(f, "decoded to an invalid length of {} bytes", len)
            }
            ParseError::ChecksumMismatch { expected, found } => {
                write!(
                    f,
                    "checksum mismatch: computed {:02x?}, embedded {:02x?}",
                    expected, found
                )
            }
            ParseError::UnknownVersion(version) => {
                write!(
                    f,
                    "version byte 0x{:02x} is not valid for this network",
                    version
                )
            }
        }
    }
}

impl Error for ParseError {}

/// Converts a Base58 string to the byte sequence it denotes.
///
/// Each leading `'1'` character maps to one leading zero byte.
pub(crate) fn decode_base58(encoded: &str) -> Result<Vec<u8>, ParseError> {
    // Every character must map to an alphabet index. Scanning up front (rather
    // than mapping the decoder's error) pins the reported character and byte
    // offset to the first offender, whether or not it is ASCII.
    if let Some((index, character)) = encoded
        .char_indices()
        .find(|&(_, c)| !c.is_ascii() || !ALPHABET.contains(&(c as u8)))
    {
        return Err(ParseError::InvalidCharacter { character, index });
    }

    // The base-58 big-endian arithmetic, including the leading-'1' to
    // leading-zero mapping, is performed by `bs58` over a growable buffer.
    Ok(bs58::decode(encoded)
        .into_vec()
        .expect("all characters are in the base58 alphabet"))
}

/// First four bytes of the double-SHA-256 of `data`.
pub(crate) fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(Sha256::digest(data));
    let mut check = [0; CHECKSUM_LEN];
    check.copy_from_slice(&digest[..CHECKSUM_LEN]);
    check
}

/// Verifies the trailing checksum of a decoded byte sequence.
///
/// The caller has already validated that `decoded` is long enough to carry a
/// checksum.
pub(crate) fn verify_checksum(decoded: &[u8]) -> Result<(), ParseError> {
    let (payload, embedded) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = checksum(payload);
    if embedded != expected {
        let mut found = [0; CHECKSUM_LEN];
        found.copy_from_slice(embedded);
        return Err(ParseError::ChecksumMismatch { expected, found });
    }
    Ok(())
}

/// Appends the checksum of `data` and converts the result to Base58.
pub(crate) fn encode_check(mut data: Vec<u8>) -> String {
    let check = checksum(&data);
    data.extend_from_slice(&check);
    bs58::encode(data).into_string()
}

/// Encodes a version byte and 20-byte payload as a Base58Check address string.
///
/// This is the inverse of [`Address::decode`] and always succeeds; the network
/// parameters play no part in encoding.
pub fn encode_address(version: u8, payload: &[u8; 20]) -> String {
    let mut data = Vec::with_capacity(DECODED_LEN);
    data.push(version);
    data.extend_from_slice(payload);
    encode_check(data)
}

impl Address {
    /// Attempts to parse the given string as an address of the supplied network.
    ///
    /// Surrounding whitespace is removed, to handle copy-paste errors.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidCharacter`] if the string contains a character
    ///   outside the Base58 alphabet.
    /// - [`ParseError::InvalidLength`] if the string does not decode to exactly
    ///   25 bytes.
    /// - [`ParseError::ChecksumMismatch`] if the embedded checksum does not match
    ///   the decoded payload.
    /// - [`ParseError::UnknownVersion`] if the version byte is not one `params`
    ///   accepts.
    ///
    /// # Examples
    ///
    /// ```
    /// use base58check_address::{Address, NetworkParameters, ParseError};
    ///
    /// let params = NetworkParameters::new("komodo.main", 0x3c, 0x55)?;
    /// assert!(Address::decode("RHZmD7XqX7Xfs4mqhLCrd58MWQkqGkkQsM", &params).is_ok());
    /// assert_eq!(
    ///     Address::decode("1111111111111111111114oLvT2", &params),
    ///     Err(ParseError::UnknownVersion(0x00)),
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn decode(encoded: &str, params: &NetworkParameters) -> Result<Self, ParseError> {
        let decoded = decode_base58(encoded.trim())?;

        if decoded.len() != DECODED_LEN {
            return Err(ParseError::InvalidLength(decoded.len()));
        }
        verify_checksum(&decoded)?;

        let version = decoded[0];
        if !params.accepts(version) {
            return Err(ParseError::UnknownVersion(version));
        }

        let mut payload = [0; PAYLOAD_LEN];
        payload.copy_from_slice(&decoded[1..1 + PAYLOAD_LEN]);

        Ok(Address {
            version,
            payload,
            kind: params.classify(version),
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_address(self.version, &self.payload))
    }
}
