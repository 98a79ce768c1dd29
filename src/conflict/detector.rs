//! Pairwise conflict detection.

use crate::model::{ArtistId, Designer, DesignerId};
use std::collections::HashSet;

/// One artist favored by two designers, seen from `first`'s side.
///
/// Records are directional: a shared artist between A and B yields both
/// `(A, B, artist)` and `(B, A, artist)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictRecord {
    /// Designer whose favorites were scanned.
    pub first: DesignerId,
    /// Designer compared against.
    pub second: DesignerId,
    /// The artist both designers favor.
    pub artist: ArtistId,
}

/// Returns the artists present in both favorite lists, in `first`'s
/// preference order.
pub fn shared_artists(first: &Designer, second: &Designer) -> Vec<ArtistId> {
    let other: HashSet<ArtistId> = second.favorites().iter().map(|f| f.artist_id).collect();
    first
        .favorites()
        .iter()
        .map(|f| f.artist_id)
        .filter(|id| other.contains(id))
        .collect()
}

/// Emits one record per artist shared by `first` and `second`.
///
/// Returns nothing when both refer to the same designer.
pub fn detect(first: &Designer, second: &Designer) -> Vec<ConflictRecord> {
    if first.id() == second.id() {
        return Vec::new();
    }
    shared_artists(first, second)
        .into_iter()
        .map(|artist| ConflictRecord {
            first: first.id(),
            second: second.id(),
            artist,
        })
        .collect()
}

/// Enumerates conflicts over every ordered pair of distinct designers.
///
/// Records come out in emission order: outer designer, then inner
/// designer (both in input order), then `first`'s preference order.
/// With the `parallel` feature the outer loop fans out over rayon; the
/// collected order is the same.
pub fn detect_all(designers: &[Designer], parallel: bool) -> Vec<ConflictRecord> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return designers
                .par_iter()
                .flat_map_iter(|first| conflicts_of(first, designers))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    designers
        .iter()
        .flat_map(|first| conflicts_of(first, designers))
        .collect()
}

fn conflicts_of<'a>(
    first: &'a Designer,
    designers: &'a [Designer],
) -> impl Iterator<Item = ConflictRecord> + 'a {
    designers
        .iter()
        .flat_map(move |second| detect(first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a(n: u128) -> ArtistId {
        ArtistId::from_u128(n)
    }

    fn d(n: u128) -> DesignerId {
        DesignerId::from_u128(n)
    }

    fn designer(id: u128, artists: &[u128]) -> Designer {
        Designer::with_artists(d(id), artists.iter().map(|&n| a(n)))
    }

    #[test]
    fn test_shared_artists_follow_first_order() {
        let first = designer(1, &[3, 1, 2]);
        let second = designer(2, &[2, 3, 9]);
        assert_eq!(shared_artists(&first, &second), vec![a(3), a(2)]);
        assert_eq!(shared_artists(&second, &first), vec![a(2), a(3)]);
    }

    #[test]
    fn test_shared_artists_disjoint() {
        let first = designer(1, &[1, 2]);
        let second = designer(2, &[3, 4]);
        assert!(shared_artists(&first, &second).is_empty());
    }

    #[test]
    fn test_detect_skips_self_pair() {
        let first = designer(1, &[1, 2]);
        assert!(detect(&first, &first.clone()).is_empty());
    }

    #[test]
    fn test_detect_emits_one_record_per_shared_artist() {
        let first = designer(1, &[1, 2, 3]);
        let second = designer(2, &[3, 1]);
        let records = detect(&first, &second);
        assert_eq!(
            records,
            vec![
                ConflictRecord {
                    first: d(1),
                    second: d(2),
                    artist: a(1),
                },
                ConflictRecord {
                    first: d(1),
                    second: d(2),
                    artist: a(3),
                },
            ]
        );
    }

    #[test]
    fn test_detect_all_is_directional() {
        let designers = vec![designer(1, &[5]), designer(2, &[5]), designer(3, &[6])];
        let records = detect_all(&designers, false);
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].first, records[0].second), (d(1), d(2)));
        assert_eq!((records[1].first, records[1].second), (d(2), d(1)));
        assert!(records.iter().all(|r| r.artist == a(5)));
    }

    #[test]
    fn test_detect_all_three_way() {
        let designers = vec![designer(1, &[7]), designer(2, &[7]), designer(3, &[7])];
        // 3 designers -> 6 ordered pairs, one shared artist each
        assert_eq!(detect_all(&designers, false).len(), 6);
    }

    #[test]
    fn test_detect_all_empty_inputs() {
        assert!(detect_all(&[], false).is_empty());
        let designers = vec![designer(1, &[]), designer(2, &[1])];
        assert!(detect_all(&designers, false).is_empty());
    }

    #[test]
    fn test_parallel_flag_keeps_emission_order() {
        let designers = vec![
            designer(1, &[1, 2, 3]),
            designer(2, &[3, 2]),
            designer(3, &[1, 3]),
            designer(4, &[2]),
        ];
        assert_eq!(detect_all(&designers, true), detect_all(&designers, false));
    }
}
