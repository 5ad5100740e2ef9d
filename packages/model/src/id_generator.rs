use crate::block::BlockId;
use serde::{Deserialize, Serialize};

/// Sequential id generator for the blocks of one document.
///
/// The counter only moves forward, so an id is never handed out twice even
/// after the block that carried it is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator {
    seed: String,
    count: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::from_seed("block")
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential ID. The counter starts over at 0 once it is
    /// exhausted, so callers holding ids must skip ones already in use.
    pub fn new_id(&mut self) -> BlockId {
        self.count = self.count.checked_add(1).unwrap_or(0);
        BlockId::new(format!("{}-{}", self.seed, self.count))
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Advance past an id that already exists, if it was issued with this
    /// generator's seed.
    pub fn observe(&mut self, id: &BlockId) {
        let Some(suffix) = id
            .as_str()
            .strip_prefix(self.seed.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            return;
        };

        if let Ok(n) = suffix.parse::<u64>() {
            self.count = self.count.max(n);
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
