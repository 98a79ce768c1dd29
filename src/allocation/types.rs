//! Resolution output.

use crate::model::{ArtistId, DesignerId, Favorite};

/// The conflict-resolved outcome for one designer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// The designer this allocation belongs to.
    pub designer_id: DesignerId,
    /// Favorite records the designer retains.
    pub allocated: Vec<Favorite>,
    /// Accumulated tie-break score.
    pub score: u64,
}

impl Allocation {
    /// Returns the allocated artist ids in allocation order.
    pub fn artist_ids(&self) -> Vec<ArtistId> {
        self.allocated.iter().map(|f| f.artist_id).collect()
    }
}

/// Result of a resolution run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationResult {
    /// One allocation per input designer, in input order.
    pub allocations: Vec<Allocation>,
    /// Number of conflict records processed.
    pub conflicts: usize,
}

impl AllocationResult {
    /// Looks up the allocation of a designer.
    pub fn get(&self, designer_id: DesignerId) -> Option<&Allocation> {
        self.allocations
            .iter()
            .find(|a| a.designer_id == designer_id)
    }

    /// Returns the artist ids allocated to a designer, or an empty list
    /// for an unknown designer.
    pub fn allocated_artists(&self, designer_id: DesignerId) -> Vec<ArtistId> {
        self.get(designer_id)
            .map(Allocation::artist_ids)
            .unwrap_or_default()
    }

    /// Returns the score of a designer.
    pub fn score(&self, designer_id: DesignerId) -> Option<u64> {
        self.get(designer_id).map(|a| a.score)
    }

    /// Returns the number of designers in the result.
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    /// Returns `true` if no designers were resolved.
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}
