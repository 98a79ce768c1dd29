//! Designers, artists, and the favorite relationship between them.

use super::ids::{ArtistId, DesignerId};
use crate::error::{AllocationError, Result};
use std::collections::HashSet;

/// One designer-to-artist preference record.
///
/// `order` is the persisted preference position; lower values are
/// stronger preferences. The same record type is used for a designer's
/// favorites, its allocation, and an artist's back-references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Favorite {
    /// The designer holding the preference.
    pub designer_id: DesignerId,
    /// The preferred artist.
    pub artist_id: ArtistId,
    /// Persisted preference position.
    pub order: u32,
}

impl Favorite {
    /// Creates a favorite record.
    pub fn new(designer_id: DesignerId, artist_id: ArtistId, order: u32) -> Self {
        Self {
            designer_id,
            artist_id,
            order,
        }
    }
}

/// A designer and its ordered favorite artists.
///
/// `favorites` is always sorted by `order`, so the index of an entry is
/// its rank (0 = most preferred).
///
/// # Examples
///
/// ```
/// use u_allot::model::{ArtistId, Designer, DesignerId};
///
/// let x = ArtistId::from_u128(1);
/// let y = ArtistId::from_u128(2);
/// let designer = Designer::with_artists(DesignerId::from_u128(7), [y, x]);
///
/// assert_eq!(designer.artist_ids(), vec![y, x]);
/// assert_eq!(designer.favorites()[1].order, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "DesignerRecord"))]
pub struct Designer {
    id: DesignerId,
    favorites: Vec<Favorite>,
}

/// Wire form of a [`Designer`]; rows may arrive in storage order.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DesignerRecord {
    id: DesignerId,
    favorites: Vec<Favorite>,
}

#[cfg(feature = "serde")]
impl From<DesignerRecord> for Designer {
    fn from(record: DesignerRecord) -> Self {
        Self::from_favorites(record.id, record.favorites)
    }
}

impl Designer {
    /// Creates a designer without favorites.
    pub fn new(id: DesignerId) -> Self {
        Self {
            id,
            favorites: Vec::new(),
        }
    }

    /// Creates a designer whose favorites follow the given artist order.
    pub fn with_artists<I>(id: DesignerId, artist_ids: I) -> Self
    where
        I: IntoIterator<Item = ArtistId>,
    {
        let mut designer = Self::new(id);
        designer.set_artists(artist_ids);
        designer
    }

    /// Creates a designer from persisted favorite records.
    ///
    /// Records are sorted by `order`; equal orders keep their input order.
    pub fn from_favorites(id: DesignerId, mut favorites: Vec<Favorite>) -> Self {
        favorites.sort_by_key(|f| f.order);
        Self { id, favorites }
    }

    /// Replaces the favorites, numbering them `0, 1, 2, …` in list order.
    pub fn set_artists<I>(&mut self, artist_ids: I)
    where
        I: IntoIterator<Item = ArtistId>,
    {
        let id = self.id;
        self.favorites = artist_ids
            .into_iter()
            .zip(0u32..)
            .map(|(artist_id, order)| Favorite::new(id, artist_id, order))
            .collect();
    }

    /// Returns the designer's id.
    pub fn id(&self) -> DesignerId {
        self.id
    }

    /// Returns the favorites, most preferred first.
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// Returns the favorite artist ids, most preferred first.
    pub fn artist_ids(&self) -> Vec<ArtistId> {
        self.favorites.iter().map(|f| f.artist_id).collect()
    }

    /// Returns `true` if the designer lists `artist_id`.
    pub fn favors(&self, artist_id: ArtistId) -> bool {
        self.favorites.iter().any(|f| f.artist_id == artist_id)
    }

    /// Checks that every favorite belongs to this designer and that no
    /// artist is listed twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.favorites.len());
        for favorite in &self.favorites {
            if favorite.designer_id != self.id {
                return Err(AllocationError::ForeignFavorite {
                    designer: self.id,
                    recorded: favorite.designer_id,
                });
            }
            if !seen.insert(favorite.artist_id) {
                return Err(AllocationError::DuplicateFavorite {
                    designer: self.id,
                    artist: favorite.artist_id,
                });
            }
        }
        Ok(())
    }
}

/// An artist with every favorite record that names it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artist {
    /// The artist's id.
    pub id: ArtistId,
    /// Back-references: all designers favoring this artist.
    pub favored_by: Vec<Favorite>,
}

impl Artist {
    /// Creates an artist with no back-references.
    pub fn new(id: ArtistId) -> Self {
        Self {
            id,
            favored_by: Vec::new(),
        }
    }
}
