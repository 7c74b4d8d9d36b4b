use std::{error::Error, fmt};

use crate::{Address, AddressKind};

/// An address type is not supported for conversion.
#[derive(Debug, PartialEq, Eq)]
pub struct UnsupportedAddress(&'static str);

impl fmt::Display for UnsupportedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} addresses are not supported", self.0)
    }
}

impl Error for UnsupportedAddress {}

impl Address {
    /// Converts this address into another type.
    ///
    /// `convert` can convert into any type that implements the [`FromAddress`]
    /// trait. This enables [`Address`] to be used as a common parsing interface,
    /// while delegating operations on the decoded hash (such as building scripts)
    /// to downstream crates.
    pub fn convert<T: FromAddress>(self) -> Result<T, UnsupportedAddress> {
        match self.kind() {
            AddressKind::PubkeyHash => T::from_pubkey_hash(*self.payload()),
            AddressKind::ScriptHash => T::from_script_hash(*self.payload()),
            AddressKind::Unknown => T::from_unknown(self.version(), *self.payload()),
        }
    }
}

/// A helper trait for converting an [`Address`] into another type.
///
/// # Examples
///
/// ```
/// use base58check_address::{Address, FromAddress, NetworkParameters, UnsupportedAddress};
///
/// #[derive(Debug)]
/// struct PubkeyHash([u8; 20]);
///
/// // Implement the FromAddress trait, overriding whichever conversion methods
/// // match your requirements for the resulting type.
/// impl FromAddress for PubkeyHash {
///     fn from_pubkey_hash(data: [u8; 20]) -> Result<Self, UnsupportedAddress> {
///         Ok(PubkeyHash(data))
///     }
/// }
///
/// let params = NetworkParameters::new("komodo.main", 0x3c, 0x55).unwrap();
///
/// // For a supported address type, the conversion works.
/// let addr = Address::decode("RHZmD7XqX7Xfs4mqhLCrd58MWQkqGkkQsM", &params).unwrap();
/// assert!(addr.convert::<PubkeyHash>().is_ok());
///
/// // For an unsupported address type, we get an error.
/// let addr = Address::decode("bM1qppz3Gd7aJuG1JpXpkCw2F2CR2691P8", &params).unwrap();
/// assert_eq!(
///     addr.convert::<PubkeyHash>().unwrap_err().to_string(),
///     "pay-to-script-hash addresses are not supported",
/// );
/// ```
pub trait FromAddress: Sized {
    fn from_pubkey_hash(data: [u8; 20]) -> Result<Self, UnsupportedAddress> {
        let _ = data;
        Err(UnsupportedAddress("pay-to-pubkey-hash"))
    }

    fn from_script_hash(data: [u8; 20]) -> Result<Self, UnsupportedAddress> {
        let _ = data;
        Err(UnsupportedAddress("pay-to-script-hash"))
    }

    fn from_unknown(version: u8, data: [u8; 20]) -> Result<Self, UnsupportedAddress> {
        let _ = (version, data);
        Err(UnsupportedAddress("unrecognized-version"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetworkParameters;

    #[derive(Debug, PartialEq)]
    struct AnyHash {
        version: Option<u8>,
        data: [u8; 20],
    }

    impl FromAddress for AnyHash {
        fn from_script_hash(data: [u8; 20]) -> Result<Self, UnsupportedAddress> {
            Ok(AnyHash {
                version: None,
                data,
            })
        }

        fn from_unknown(version: u8, data: [u8; 20]) -> Result<Self, UnsupportedAddress> {
            Ok(AnyHash {
                version: Some(version),
                data,
            })
        }
    }

    #[test]
    fn dispatches_on_kind() {
        let params = NetworkParameters::new("komodo.main", 0x3c, 0x55)
            .unwrap()
            .accept_version(0x41);

        let script = Address::decode("bM1qppz3Gd7aJuG1JpXpkCw2F2CR2691P8", &params).unwrap();
        let converted = script.convert::<AnyHash>().unwrap();
        assert_eq!(converted.version, None);
        assert_eq!(&converted.data, script.payload());

        let unknown = Address::decode("TJFn8f2H51r3xEUGpRsT3hVHew3YkKuxuN", &params).unwrap();
        let converted = unknown.convert::<AnyHash>().unwrap();
        assert_eq!(converted.version, Some(0x41));

        let pubkey = Address::decode("RHZmD7XqX7Xfs4mqhLCrd58MWQkqGkkQsM", &params).unwrap();
        assert_eq!(
            pubkey.convert::<AnyHash>(),
            Err(UnsupportedAddress("pay-to-pubkey-hash")),
        );
    }
}
