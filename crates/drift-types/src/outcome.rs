use serde::{Deserialize, Serialize};

/// The two fully resolved values, echoed back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPair {
    pub source: String,
    pub target: String,
}

/// Final artifact of a check invocation.
///
/// Serializes to one of the two wire shapes the host runtime consumes:
///
/// ```json
/// {"changed": true, "diff": {"source": "...", "target": "..."}}
/// {"changed": false, "skipped": true, "msg": "..."}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    /// Both specs resolved; `changed` reports exact string inequality.
    Compared { changed: bool, diff: DiffPair },
    /// A command-kind spec was reached in dry-run mode; nothing executed.
    Skipped {
        changed: bool,
        skipped: bool,
        msg: String,
    },
}

impl CheckOutcome {
    /// The skip outcome: always `changed: false, skipped: true`.
    pub fn skipped(msg: impl Into<String>) -> Self {
        Self::Skipped {
            changed: false,
            skipped: true,
            msg: msg.into(),
        }
    }

    /// Whether the two resolved values differed.
    ///
    /// A skipped outcome never reports change.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Compared { changed: true, .. })
    }

    /// Whether the invocation short-circuited without resolving.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}
