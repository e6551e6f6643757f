use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::TraitKey;

/// Errors that can occur when building a breed book.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BreedBookError {
    #[error("a breed book must contain at least one breed")]
    Empty,

    #[error("breed name must not be blank")]
    BlankName,

    #[error("duplicate breed name: {0}")]
    DuplicateName(String),
}

/// One breed and the set of traits it satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    name: String,
    traits: BTreeSet<TraitKey>,
}

impl Breed {
    #[must_use]
    pub fn new(name: impl Into<String>, traits: impl IntoIterator<Item = TraitKey>) -> Self {
        Self {
            name: name.into(),
            traits: traits.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn traits(&self) -> &BTreeSet<TraitKey> {
        &self.traits
    }

    #[must_use]
    pub fn has_trait(&self, key: TraitKey) -> bool {
        self.traits.contains(&key)
    }
}

/// Ordered collection of breeds with unique, non-blank names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedBook {
    breeds: Vec<Breed>,
}

impl BreedBook {
    /// # Errors
    ///
    /// Returns `BreedBookError::Empty` for an empty book,
    /// `BreedBookError::BlankName` for a blank breed name, and
    /// `BreedBookError::DuplicateName` if two breeds share a name.
    pub fn new(breeds: Vec<Breed>) -> Result<Self, BreedBookError> {
        if breeds.is_empty() {
            return Err(BreedBookError::Empty);
        }

        let mut seen = BTreeSet::new();
        for breed in &breeds {
            if breed.name().trim().is_empty() {
                return Err(BreedBookError::BlankName);
            }
            if !seen.insert(breed.name().to_string()) {
                return Err(BreedBookError::DuplicateName(breed.name().to_string()));
            }
        }

        Ok(Self { breeds })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breed> {
        self.breeds.iter()
    }
}
