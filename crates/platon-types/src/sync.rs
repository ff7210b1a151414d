//! Node sync status and program version

use serde::{Deserialize, Deserializer};

use crate::{Data, Quantity};

/// Result of `platon_syncing`: the node answers `false` when idle, or a
/// progress object while catching up.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncStatus {
    /// Whether the node is currently syncing
    pub syncing: bool,
    /// Block the sync started from
    pub starting_block: Option<Quantity>,
    /// Block the node is currently at
    pub current_block: Option<Quantity>,
    /// Highest block known to the node
    pub highest_block: Option<Quantity>,
}

impl SyncStatus {
    /// An idle, fully-synced node
    pub fn not_syncing() -> Self {
        SyncStatus {
            syncing: false,
            starting_block: None,
            current_block: None,
            highest_block: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SyncRepr {
    Flag(bool),
    Progress {
        #[serde(rename = "startingBlock")]
        starting_block: Quantity,
        #[serde(rename = "currentBlock")]
        current_block: Quantity,
        #[serde(rename = "highestBlock")]
        highest_block: Quantity,
    },
}

impl<'de> Deserialize<'de> for SyncStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match SyncRepr::deserialize(deserializer)? {
            SyncRepr::Flag(syncing) => Ok(SyncStatus {
                syncing,
                starting_block: None,
                current_block: None,
                highest_block: None,
            }),
            SyncRepr::Progress {
                starting_block,
                current_block,
                highest_block,
            } => Ok(SyncStatus {
                syncing: true,
                starting_block: Some(starting_block),
                current_block: Some(current_block),
                highest_block: Some(highest_block),
            }),
        }
    }
}

/// Result of `admin_getProgramVersion`: the node's code version and the
/// signature over it used when staking.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramVersion {
    /// Numeric program version
    #[serde(rename = "Version")]
    pub version: u32,
    /// Node signature over the version
    #[serde(rename = "Sign")]
    pub sign: Data,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn false_means_idle() {
        let status: SyncStatus = serde_json::from_str("false").unwrap();
        assert_eq!(status, SyncStatus::not_syncing());
    }

    #[test]
    fn progress_object_means_syncing() {
        let status: SyncStatus = serde_json::from_value(serde_json::json!({
            "startingBlock": "0x384",
            "currentBlock": "0x386",
            "highestBlock": "0x454",
        }))
        .unwrap();
        assert!(status.syncing);
        assert_eq!(status.current_block.unwrap().to_u64(), Some(902));
    }

    #[test]
    fn program_version_fields_are_capitalized() {
        let pv: ProgramVersion = serde_json::from_value(serde_json::json!({
            "Version": 66048,
            "Sign": "0x1234",
        }))
        .unwrap();
        assert_eq!(pv.version, 66048);
        assert_eq!(pv.sign.as_bytes(), &[0x12, 0x34]);
    }
}
