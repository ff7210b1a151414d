//! Block height selector for query methods

use serde::{Serialize, Serializer};

/// Block selector for RPC queries (`latest`, `earliest`, `pending`, or an
/// explicit height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockTag {
    /// Most recent block
    #[default]
    Latest,
    /// Genesis block
    Earliest,
    /// Pending state
    Pending,
    /// Explicit block height
    Number(u64),
}

impl Serialize for BlockTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BlockTag::Latest => serializer.serialize_str("latest"),
            BlockTag::Earliest => serializer.serialize_str("earliest"),
            BlockTag::Pending => serializer.serialize_str("pending"),
            BlockTag::Number(n) => serializer.serialize_str(&format!("0x{n:x}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_named_tags() {
        assert_eq!(serde_json::to_string(&BlockTag::Latest).unwrap(), "\"latest\"");
        assert_eq!(
            serde_json::to_string(&BlockTag::Earliest).unwrap(),
            "\"earliest\""
        );
        assert_eq!(
            serde_json::to_string(&BlockTag::Pending).unwrap(),
            "\"pending\""
        );
    }

    #[test]
    fn serializes_number_as_hex() {
        assert_eq!(
            serde_json::to_string(&BlockTag::Number(100)).unwrap(),
            "\"0x64\""
        );
    }

    #[test]
    fn default_is_latest() {
        assert_eq!(BlockTag::default(), BlockTag::Latest);
    }
}
