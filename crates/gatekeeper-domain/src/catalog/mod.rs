//! Visitor Catalog - The fixed table visitors are drawn from
//!
//! A catalog is built once (from the built-in table or a loaded file)
//! and never changes afterwards. Entries are handed out as `Arc<Visitor>`
//! so the queue and scheduler share them without copying.

mod builtin;

use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::error::GameError;
use crate::model::visitor::Visitor;

/// Star rating range for a visitor's challenge
pub const CHALLENGE_DIFFICULTY: RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone)]
pub struct Catalog {
    visitors: Vec<Arc<Visitor>>,
}

impl Catalog {
    /// Build a catalog, rejecting empty tables, duplicate ids and
    /// challenge difficulties outside 1-5
    pub fn new(visitors: Vec<Visitor>) -> Result<Self, CatalogError> {
        if visitors.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for visitor in &visitors {
            if !seen.insert(visitor.id().as_str().to_string()) {
                return Err(CatalogError::DuplicateId {
                    visitor_id: visitor.id().as_str().to_string(),
                });
            }
            if !CHALLENGE_DIFFICULTY.contains(&visitor.challenge_difficulty()) {
                return Err(CatalogError::InvalidDifficulty {
                    visitor_id: visitor.id().as_str().to_string(),
                    difficulty: visitor.challenge_difficulty(),
                });
            }
        }

        Ok(Self {
            visitors: visitors.into_iter().map(Arc::new).collect(),
        })
    }

    /// The nine visitors the game ships with
    pub fn builtin() -> Self {
        Self {
            visitors: builtin::visitors().into_iter().map(Arc::new).collect(),
        }
    }

    pub fn all(&self) -> &[Arc<Visitor>] {
        &self.visitors
    }

    pub fn by_id(&self, id: &str) -> Result<Arc<Visitor>, GameError> {
        self.visitors
            .iter()
            .find(|v| v.id().as_str() == id)
            .cloned()
            .ok_or_else(|| GameError::NotFound {
                visitor_id: id.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Errors raised while building a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    DuplicateId { visitor_id: String },
    InvalidDifficulty { visitor_id: String, difficulty: u8 },
}

impl core::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "Catalog must contain at least one visitor"),
            CatalogError::DuplicateId { visitor_id } => {
                write!(f, "Duplicate visitor id in catalog: {}", visitor_id)
            }
            CatalogError::InvalidDifficulty {
                visitor_id,
                difficulty,
            } => write!(
                f,
                "Visitor '{}' has challenge difficulty {} (expected 1-5)",
                visitor_id, difficulty
            ),
        }
    }
}

impl std::error::Error for CatalogError {}
