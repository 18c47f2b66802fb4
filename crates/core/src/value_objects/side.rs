//! Book side

use serde::{Deserialize, Serialize};

/// Which side of the book a level or row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Ask,
    Bid,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ask => "ask",
            Self::Bid => "bid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Side::Ask.as_str(), "ask");
        assert_eq!(Side::Bid.as_str(), "bid");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Ask).unwrap(), "\"ask\"");
        let side: Side = serde_json::from_str("\"bid\"").unwrap();
        assert_eq!(side, Side::Bid);
    }
}
