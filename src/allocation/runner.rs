//! Allocation resolution loop.
//!
//! [`AllocationResolver`] runs the complete pipeline:
//! validation → initialization → detection → ordering → resolution.

use super::config::{BranchPolicy, ConflictOrder, ContestScope, ResolverConfig};
use super::filter::{remove_artists, Filtered};
use super::types::{Allocation, AllocationResult};
use crate::conflict::{compare_ranks, detect_all, rank, shared_artists, ConflictRecord};
use crate::error::{AllocationError, Result};
use crate::model::{ArtistCatalog, ArtistId, Designer, DesignerId, Favorite};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, info, trace};

/// Resolves competing artist preferences into exclusive allocations.
///
/// The input designers are never modified; the outcome is returned as a
/// fresh [`AllocationResult`].
///
/// # Usage
///
/// ```
/// use u_allot::allocation::{AllocationResolver, ResolverConfig};
/// use u_allot::model::{ArtistId, Designer, DesignerId};
///
/// let x = ArtistId::from_u128(1);
/// let y = ArtistId::from_u128(2);
/// let d1 = DesignerId::from_u128(1);
/// let d2 = DesignerId::from_u128(2);
/// let designers = vec![
///     Designer::with_artists(d1, [x, y]),
///     Designer::with_artists(d2, [y, x]),
/// ];
///
/// let result = AllocationResolver::resolve(&designers, &ResolverConfig::default()).unwrap();
/// assert_eq!(result.allocated_artists(d1), vec![x]);
/// assert_eq!(result.allocated_artists(d2), vec![y]);
/// ```
pub struct AllocationResolver;

impl AllocationResolver {
    /// Resolves allocations, deriving the artist catalog from the
    /// designers' favorites.
    pub fn resolve(designers: &[Designer], config: &ResolverConfig) -> Result<AllocationResult> {
        let catalog = ArtistCatalog::from_designers(designers);
        Self::resolve_with_catalog(designers, &catalog, config)
    }

    /// Resolves allocations against an explicit artist catalog.
    ///
    /// The catalog only matters for back-reference filtering, but it must
    /// list every artist the designers favor.
    pub fn resolve_with_catalog(
        designers: &[Designer],
        catalog: &ArtistCatalog,
        config: &ResolverConfig,
    ) -> Result<AllocationResult> {
        let index = index_designers(designers)?;
        catalog.ensure_covers(designers)?;

        #[cfg(not(feature = "parallel"))]
        if config.parallel {
            tracing::warn!("parallel detection requested without the `parallel` feature");
        }

        let mut records = detect_all(designers, config.parallel);
        order_records(&mut records, config.order);

        info!(
            designers = designers.len(),
            artists = catalog.len(),
            conflicts = records.len(),
            policy = ?config.branch_policy,
            scope = ?config.contest_scope,
            filter = ?config.filter_mode,
            "resolving allocations"
        );

        let mut run = Resolution {
            designers,
            index,
            catalog,
            config,
            state: designers
                .iter()
                .map(|d| Slot {
                    allocated: d.favorites().to_vec(),
                    score: 0,
                })
                .collect(),
        };

        for record in &records {
            run.apply(record);
        }

        let allocations: Vec<Allocation> = designers
            .iter()
            .zip(run.state)
            .map(|(d, slot)| Allocation {
                designer_id: d.id(),
                allocated: slot.allocated,
                score: slot.score,
            })
            .collect();

        info!(
            conflicts = records.len(),
            allocated = allocations.iter().map(|a| a.allocated.len()).sum::<usize>(),
            "allocation resolved"
        );

        Ok(AllocationResult {
            allocations,
            conflicts: records.len(),
        })
    }
}

/// Maps designer ids to input positions, rejecting malformed designers.
fn index_designers(designers: &[Designer]) -> Result<HashMap<DesignerId, usize>> {
    let mut index = HashMap::with_capacity(designers.len());
    for (i, designer) in designers.iter().enumerate() {
        designer.validate()?;
        if index.insert(designer.id(), i).is_some() {
            return Err(AllocationError::DuplicateDesigner(designer.id()));
        }
    }
    Ok(index)
}

fn order_records(records: &mut [ConflictRecord], order: ConflictOrder) {
    match order {
        ConflictOrder::Emission => {}
        ConflictOrder::Sorted => records.sort_unstable(),
        ConflictOrder::Shuffled { seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            records.shuffle(&mut rng);
        }
    }
}

/// Working allocation of one designer.
struct Slot {
    allocated: Vec<Favorite>,
    score: u64,
}

/// Which side of a record gives up the contested artists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Loser {
    First,
    Second,
    Both,
}

/// Scratch state of one resolution run.
struct Resolution<'a> {
    designers: &'a [Designer],
    index: HashMap<DesignerId, usize>,
    catalog: &'a ArtistCatalog,
    config: &'a ResolverConfig,
    state: Vec<Slot>,
}

impl Resolution<'_> {
    fn apply(&mut self, record: &ConflictRecord) {
        let (Some(&i), Some(&j)) = (self.index.get(&record.first), self.index.get(&record.second))
        else {
            return;
        };
        let (d1, d2) = (&self.designers[i], &self.designers[j]);

        let contested = match self.config.contest_scope {
            ContestScope::Artist => vec![record.artist],
            ContestScope::SharedSet => shared_artists(d1, d2),
        };
        let by_rank = compare_ranks(rank(d1, record.artist), rank(d2, record.artist));

        match self.config.branch_policy {
            BranchPolicy::Symmetric => self.symmetric(record, i, j, by_rank, &contested),
            BranchPolicy::Legacy => self.legacy(record, i, j, by_rank, &contested),
        }
    }

    fn symmetric(
        &mut self,
        record: &ConflictRecord,
        i: usize,
        j: usize,
        by_rank: Ordering,
        contested: &[ArtistId],
    ) {
        let loser = match by_rank {
            Ordering::Less => Loser::Second,
            Ordering::Greater => Loser::First,
            // The side that has already given up more keeps the artists.
            Ordering::Equal => match self.state[i].score.cmp(&self.state[j].score) {
                Ordering::Greater => Loser::Second,
                Ordering::Less => Loser::First,
                Ordering::Equal => Loser::Both,
            },
        };

        let removed = match loser {
            Loser::First => self.lose(i, contested),
            Loser::Second => self.lose(j, contested),
            Loser::Both => self.lose(i, contested) + self.lose(j, contested),
        };

        debug!(
            first = %record.first,
            second = %record.second,
            artist = %record.artist,
            ?loser,
            contested = contested.len(),
            removed,
            "conflict resolved"
        );
    }

    /// Drops `contested` from slot `k`'s allocation and returns how many
    /// artists it gave up.
    fn lose(&mut self, k: usize, contested: &[ArtistId]) -> usize {
        let out = self.filter(&self.state[k].allocated, contested);
        self.state[k].score += out.removed as u64;
        self.state[k].allocated = out.pool;
        out.removed
    }

    fn legacy(
        &mut self,
        record: &ConflictRecord,
        i: usize,
        j: usize,
        by_rank: Ordering,
        contested: &[ArtistId],
    ) {
        let n = contested.len() as u64;
        let (s1, s2) = (self.state[i].score, self.state[j].score);

        let branch = match by_rank {
            Ordering::Less => {
                let out = self.filter(self.designers[j].favorites(), contested);
                self.state[j].allocated = out.pool;
                self.state[j].score = s2 + n;
                "first-ranks-higher"
            }
            Ordering::Greater => {
                let out = self.filter(self.designers[i].favorites(), contested);
                self.state[i].allocated = out.pool;
                self.state[i].score = s2 + n;
                "second-ranks-higher"
            }
            Ordering::Equal => match s1.cmp(&s2) {
                Ordering::Less => {
                    let out = self.filter(&self.state[i].allocated, contested);
                    self.state[j].allocated = out.pool;
                    self.state[i].score = s2 + n;
                    "tie-first-scores-lower"
                }
                Ordering::Greater => {
                    let out = self.filter(&self.state[j].allocated, contested);
                    self.state[i].allocated = out.pool;
                    self.state[i].score = s2 + n;
                    "tie-first-scores-higher"
                }
                Ordering::Equal => {
                    let first = self.filter(&self.state[i].allocated, contested);
                    let second = self.filter(&self.state[j].allocated, contested);
                    self.state[i].allocated = first.pool;
                    self.state[i].score = s2 + n;
                    self.state[j].allocated = second.pool;
                    self.state[j].score = s2 + n;
                    "tie-equal-scores"
                }
            },
        };

        debug!(
            first = %record.first,
            second = %record.second,
            artist = %record.artist,
            branch,
            contested = n,
            "conflict resolved"
        );
    }

    fn filter(&self, pool: &[Favorite], contested: &[ArtistId]) -> Filtered {
        let out = remove_artists(pool, contested, self.config.filter_mode, self.catalog);
        trace!(before = pool.len(), after = out.pool.len(), removed = out.removed, "pool filtered");
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
