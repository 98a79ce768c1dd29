//! Removing contested artists from an allocation pool.

use super::config::FilterMode;
use crate::model::{ArtistCatalog, ArtistId, Favorite};
use std::collections::HashSet;

/// A rebuilt pool and how many contested artists it lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    /// The pool without the contested artists.
    pub pool: Vec<Favorite>,
    /// Distinct contested artists that were present in the input pool.
    pub removed: usize,
}

/// Drops every entry whose artist is contested and rebuilds the rest
/// according to `mode`.
///
/// # Examples
///
/// ```
/// use u_allot::allocation::{remove_artists, FilterMode};
/// use u_allot::model::{ArtistCatalog, ArtistId, Designer, DesignerId};
///
/// let x = ArtistId::from_u128(1);
/// let y = ArtistId::from_u128(2);
/// let designer = Designer::with_artists(DesignerId::from_u128(1), [x, y]);
/// let catalog = ArtistCatalog::from_designers(std::slice::from_ref(&designer));
///
/// let out = remove_artists(designer.favorites(), &[x], FilterMode::PairLocal, &catalog);
/// assert_eq!(out.removed, 1);
/// assert_eq!(out.pool[0].artist_id, y);
/// ```
pub fn remove_artists(
    pool: &[Favorite],
    contested: &[ArtistId],
    mode: FilterMode,
    catalog: &ArtistCatalog,
) -> Filtered {
    let contested: HashSet<ArtistId> = contested.iter().copied().collect();
    let removed = pool
        .iter()
        .map(|f| f.artist_id)
        .filter(|id| contested.contains(id))
        .collect::<HashSet<_>>()
        .len();

    let survivors = pool.iter().filter(|f| !contested.contains(&f.artist_id));
    let pool = match mode {
        FilterMode::PairLocal => survivors.copied().collect(),
        FilterMode::BackReference => survivors
            .flat_map(|f| catalog.favored_by(f.artist_id).iter().copied())
            .collect(),
    };

    Filtered { pool, removed }
}
