// Threshold classifier: life level → house tier.
//
// Two inclusive cut points split 0–100 into three tiers:
// `level <= low` is a shack, `level <= high` a home, anything above a villa.
// The canonical cut points are 33/66. They are data in `MoodConfig` so a
// config file can retune them, but `MoodConfig::validate()` insists on
// `low < high < 100` so every tier stays reachable and the mapping stays
// monotonic.

use crate::types::{HouseTier, MAX_LEVEL};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Highest level that is still tier 1.
    pub low: u8,
    /// Highest level that is still tier 2.
    pub high: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self { low: 33, high: 66 }
    }
}

impl TierThresholds {
    pub fn classify(&self, level: u8) -> HouseTier {
        if level <= self.low {
            HouseTier::Shack
        } else if level <= self.high {
            HouseTier::Home
        } else {
            HouseTier::Villa
        }
    }

    pub fn is_valid(&self) -> bool {
        self.low < self.high && self.high < MAX_LEVEL
    }
}
