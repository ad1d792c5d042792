use serde::{Deserialize, Serialize};

use crate::session::{SessionAction, SessionRules};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    pub content_hash: u64,
    pub seed: u64,
    pub rules: SessionRules,
    pub actions: Vec<ActionRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seq: u64,
    pub action: SessionAction,
}

impl InputJournal {
    pub fn new(seed: u64, content_hash: u64, rules: SessionRules) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            build_id: "dev".to_string(),
            content_hash,
            seed,
            rules,
            actions: Vec::new(),
        }
    }

    pub fn append(&mut self, action: SessionAction) {
        let seq = self.actions.len() as u64;
        self.actions.push(ActionRecord { seq, action });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
