use std::collections::HashMap;
use thiserror::Error;

use crate::model::CategoryId;

/// The single container an identifier can live in at any moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Pool,
    Category(CategoryId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("duplicate identifier on board: {id}")]
    DuplicateIdentifier { id: String },
}

/// Partition of a session's number identifiers into the unassigned pool and
/// per-category buckets.
///
/// Every identifier is an owned token that lives in exactly one slot. Both
/// placement and removal go through the single [`Board::relocate`] primitive,
/// so an identifier can never be duplicated or lost by a move.
#[derive(Debug, Clone)]
pub struct Board {
    pool: Vec<String>,
    buckets: HashMap<CategoryId, Vec<String>>,
    size: usize,
}

impl Default for Board {
    /// An empty board, the state before any game has started.
    fn default() -> Self {
        Self {
            pool: Vec::new(),
            buckets: HashMap::new(),
            size: 0,
        }
    }
}

impl Board {
    /// Build a board with every identifier in the pool.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::DuplicateIdentifier` if the same identifier
    /// appears twice.
    pub fn new(identifiers: Vec<String>) -> Result<Self, BoardError> {
        for (i, id) in identifiers.iter().enumerate() {
            if identifiers[..i].contains(id) {
                return Err(BoardError::DuplicateIdentifier { id: id.clone() });
            }
        }
        let size = identifiers.len();
        Ok(Self {
            pool: identifiers,
            buckets: HashMap::new(),
            size,
        })
    }

    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Identifiers currently placed in the given category, in placement order.
    #[must_use]
    pub fn bucket(&self, category: CategoryId) -> &[String] {
        self.buckets.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Where the identifier currently lives, if it is on this board at all.
    #[must_use]
    pub fn slot_of(&self, id: &str) -> Option<Slot> {
        if self.pool.iter().any(|n| n == id) {
            return Some(Slot::Pool);
        }
        self.buckets
            .iter()
            .find(|(_, bucket)| bucket.iter().any(|n| n == id))
            .map(|(category, _)| Slot::Category(*category))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.slot_of(id).is_some()
    }

    /// Number of identifiers placed in any bucket.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.size - self.pool.len()
    }

    /// Total number of identifiers on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterate over non-empty buckets as `(category, identifiers)` pairs.
    pub fn placements(&self) -> impl Iterator<Item = (CategoryId, &[String])> {
        CategoryId::ALL
            .into_iter()
            .filter_map(|category| match self.bucket(category) {
                [] => None,
                bucket => Some((category, bucket)),
            })
    }

    /// Move an identifier into `to`, detaching it from wherever it lives now.
    ///
    /// Returns `false` (state unchanged) if the identifier is not on this
    /// board or already lives in `to`.
    pub fn relocate(&mut self, id: &str, to: Slot) -> bool {
        let Some(from) = self.slot_of(id) else {
            return false;
        };
        if from == to {
            return false;
        }

        let token = match from {
            Slot::Pool => {
                let Some(index) = self.pool.iter().position(|n| n == id) else {
                    return false;
                };
                self.pool.remove(index)
            }
            Slot::Category(category) => {
                let Some(bucket) = self.buckets.get_mut(&category) else {
                    return false;
                };
                let Some(index) = bucket.iter().position(|n| n == id) else {
                    return false;
                };
                bucket.remove(index)
            }
        };

        match to {
            Slot::Pool => self.pool.push(token),
            Slot::Category(category) => self.buckets.entry(category).or_default().push(token),
        }

        debug_assert_eq!(self.pool.len() + self.placed_count_slow(), self.size);
        true
    }

    fn placed_count_slow(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
