//! Network parameters for Base58Check address decoding.

use std::{error::Error, fmt};

use crate::AddressKind;

/// The version-byte table identifying a Bitcoin-family network.
///
/// Construct one of these per coin variant and pass it to
/// [`Address::decode`](crate::Address::decode). Parameters are immutable once
/// constructed and can be shared freely across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkParameters {
    network_id: String,
    pubkey_version: u8,
    script_version: u8,
    acceptable_versions: Vec<u8>,
}

/// An error while constructing [`NetworkParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// The pubkey-hash and script-hash version bytes are equal, which would make
    /// the two address types indistinguishable.
    VersionCollision(u8),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::VersionCollision(version) => write!(
                f,
                "pubkey-hash and script-hash addresses would share version byte 0x{:02x}",
                version
            ),
        }
    }
}

impl Error for ParameterError {}

impl NetworkParameters {
    /// Constructs parameters for a network whose pay-to-pubkey-hash addresses use
    /// `pubkey_version` and whose pay-to-script-hash addresses use `script_version`.
    ///
    /// The set of version bytes the network accepts when decoding starts as exactly
    /// those two; use [`Self::accept_version`] to widen it.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::VersionCollision`] if the two version bytes are
    /// equal.
    pub fn new(
        network_id: impl Into<String>,
        pubkey_version: u8,
        script_version: u8,
    ) -> Result<Self, ParameterError> {
        if pubkey_version == script_version {
            return Err(ParameterError::VersionCollision(pubkey_version));
        }

        Ok(NetworkParameters {
            network_id: network_id.into(),
            pubkey_version,
            script_version,
            acceptable_versions: vec![pubkey_version, script_version],
        })
    }

    /// Adds a version byte to the set this network accepts when decoding.
    ///
    /// Addresses carrying such a version decode with [`AddressKind::Unknown`].
    /// Adding a version byte that is already accepted is a no-op.
    pub fn accept_version(mut self, version: u8) -> Self {
        if !self.acceptable_versions.contains(&version) {
            self.acceptable_versions.push(version);
        }
        self
    }

    /// The opaque label identifying this network in diagnostics.
    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    /// The version byte for pay-to-pubkey-hash addresses.
    pub fn pubkey_version(&self) -> u8 {
        self.pubkey_version
    }

    /// The version byte for pay-to-script-hash addresses.
    pub fn script_version(&self) -> u8 {
        self.script_version
    }

    /// The version bytes this network accepts when decoding.
    pub fn acceptable_versions(&self) -> &[u8] {
        &self.acceptable_versions
    }

    /// Returns whether `version` is acceptable for this network.
    pub fn accepts(&self, version: u8) -> bool {
        self.acceptable_versions.contains(&version)
    }

    pub(crate) fn classify(&self, version: u8) -> AddressKind {
        if version == self.pubkey_version {
            AddressKind::PubkeyHash
        } else if version == self.script_version {
            AddressKind::ScriptHash
        } else {
            AddressKind::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn rejects_version_collision() {
        assert_matches!(
            NetworkParameters::new("broken", 0x3c, 0x3c),
            Err(ParameterError::VersionCollision(0x3c))
        );
        assert_eq!(
            ParameterError::VersionCollision(0x3c).to_string(),
            "pubkey-hash and script-hash addresses would share version byte 0x3c",
        );
    }

    #[test]
    fn accepts_configured_versions() {
        let params = NetworkParameters::new("komodo.main", 0x3c, 0x55).unwrap();
        assert_eq!(params.network_id(), "komodo.main");
        assert!(params.accepts(0x3c));
        assert!(params.accepts(0x55));
        assert!(!params.accepts(0x00));
        assert_eq!(params.acceptable_versions(), &[0x3c, 0x55]);
    }

    #[test]
    fn widens_acceptable_set() {
        let params = NetworkParameters::new("komodo.main", 0x3c, 0x55)
            .unwrap()
            .accept_version(0xbc)
            .accept_version(0xbc);
        assert!(params.accepts(0xbc));
        assert_eq!(params.acceptable_versions(), &[0x3c, 0x55, 0xbc]);
    }

    #[test]
    fn classifies_by_version_byte() {
        let params = NetworkParameters::new("komodo.main", 0x3c, 0x55)
            .unwrap()
            .accept_version(0xbc);
        assert_eq!(params.classify(0x3c), AddressKind::PubkeyHash);
        assert_eq!(params.classify(0x55), AddressKind::ScriptHash);
        assert_eq!(params.classify(0xbc), AddressKind::Unknown);
    }
}
