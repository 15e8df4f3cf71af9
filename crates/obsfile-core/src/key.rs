//! Summary vector keys (`VECTOR[:QUALIFIER]`)

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::error::{ObsError, ObsResult};

static KEY_RE: OnceLock<Regex> = OnceLock::new();

/// Entity a summary vector is reported for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCategory {
    Field,
    Well,
    Group,
    Region,
    Block,
    Completion,
    Segment,
    Other,
}

/// A parsed summary key such as `WOPR:OP_1` or `FOPT`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummaryKey {
    pub vector: String,
    pub qualifier: Option<String>,
}

impl SummaryKey {
    pub fn parse(key: &str) -> ObsResult<Self> {
        let re = KEY_RE.get_or_init(|| Regex::new(r"^([A-Z][A-Z0-9_]*)(?::(\S+))?$").unwrap());

        if key.trim().is_empty() {
            return Err(ObsError::InvalidKey {
                key: key.to_string(),
                reason: "key is empty".to_string(),
            });
        }

        let caps = re.captures(key).ok_or_else(|| ObsError::InvalidKey {
            key: key.to_string(),
            reason: "expected VECTOR or VECTOR:QUALIFIER with an upper-case vector name"
                .to_string(),
        })?;

        Ok(Self {
            vector: caps[1].to_string(),
            qualifier: caps.get(2).map(|m| m.as_str().to_string()),
        })
    }

    pub fn category(&self) -> KeyCategory {
        match self.vector.chars().next() {
            Some('F') => KeyCategory::Field,
            Some('W') => KeyCategory::Well,
            Some('G') => KeyCategory::Group,
            Some('R') => KeyCategory::Region,
            Some('B') => KeyCategory::Block,
            Some('C') => KeyCategory::Completion,
            Some('S') => KeyCategory::Segment,
            _ => KeyCategory::Other,
        }
    }

    /// Well name for well vectors (`WOPR:OP_1` -> `OP_1`)
    pub fn well(&self) -> Option<&str> {
        match self.category() {
            KeyCategory::Well | KeyCategory::Completion => self.qualifier.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for SummaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(q) => write!(f, "{}:{}", self.vector, q),
            None => write!(f, "{}", self.vector),
        }
    }
}

impl std::str::FromStr for SummaryKey {
    type Err = ObsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
