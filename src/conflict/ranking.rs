//! Preference rank lookup.

use crate::model::{ArtistId, Designer};
use std::cmp::Ordering;

/// Returns the zero-based position of `artist` in the designer's
/// favorites, or `None` if the designer does not list it.
pub fn rank(designer: &Designer, artist: ArtistId) -> Option<usize> {
    designer
        .favorites()
        .iter()
        .position(|f| f.artist_id == artist)
}

/// Orders two ranks, stronger preference first.
///
/// A missing rank sorts after every present one; two missing ranks tie.
pub fn compare_ranks(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DesignerId;

    #[test]
    fn test_rank_positions() {
        let x = ArtistId::from_u128(1);
        let y = ArtistId::from_u128(2);
        let z = ArtistId::from_u128(3);
        let designer = Designer::with_artists(DesignerId::from_u128(1), [y, x]);

        assert_eq!(rank(&designer, y), Some(0));
        assert_eq!(rank(&designer, x), Some(1));
        assert_eq!(rank(&designer, z), None);
    }

    #[test]
    fn test_compare_ranks() {
        assert_eq!(compare_ranks(Some(0), Some(1)), Ordering::Less);
        assert_eq!(compare_ranks(Some(2), Some(2)), Ordering::Equal);
        assert_eq!(compare_ranks(Some(3), Some(1)), Ordering::Greater);
    }

    #[test]
    fn test_missing_rank_is_weakest() {
        assert_eq!(compare_ranks(Some(usize::MAX), None), Ordering::Less);
        assert_eq!(compare_ranks(None, Some(0)), Ordering::Greater);
        assert_eq!(compare_ranks(None, None), Ordering::Equal);
    }
}
