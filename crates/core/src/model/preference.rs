use serde::{Deserialize, Serialize};

use crate::model::{Rating, TraitKey};

/// One trait the user cares about, weighted by importance.
///
/// Serializes as `{"trait": "shedding", "importance": 4}`, the same shape
/// preference files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    #[serde(rename = "trait")]
    trait_key: TraitKey,
    importance: Rating,
}

impl Preference {
    #[must_use]
    pub fn new(trait_key: TraitKey, importance: Rating) -> Self {
        Self {
            trait_key,
            importance,
        }
    }

    #[must_use]
    pub fn trait_key(&self) -> TraitKey {
        self.trait_key
    }

    #[must_use]
    pub fn importance(&self) -> Rating {
        self.importance
    }
}
