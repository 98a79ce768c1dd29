//! Artist catalog with designer back-references.

use super::ids::ArtistId;
use super::types::{Artist, Designer, Favorite};
use crate::error::{AllocationError, Result};
use std::collections::HashMap;

/// Every artist known to a resolution run, indexed by id.
///
/// The catalog is what back-reference filtering expands surviving
/// artists through, so it must list each artist's favorite records
/// system-wide.
#[derive(Debug, Clone, Default)]
pub struct ArtistCatalog {
    artists: Vec<Artist>,
    index: HashMap<ArtistId, usize>,
}

impl ArtistCatalog {
    /// Derives the catalog from the designers' favorites.
    ///
    /// Artists appear in order of first mention; back-references follow
    /// designer order, then each designer's preference order.
    pub fn from_designers(designers: &[Designer]) -> Self {
        let mut catalog = Self::default();
        for favorite in designers.iter().flat_map(|d| d.favorites()) {
            let slot = match catalog.index.get(&favorite.artist_id) {
                Some(&i) => i,
                None => {
                    catalog.artists.push(Artist::new(favorite.artist_id));
                    let i = catalog.artists.len() - 1;
                    catalog.index.insert(favorite.artist_id, i);
                    i
                }
            };
            catalog.artists[slot].favored_by.push(*favorite);
        }
        catalog
    }

    /// Builds a catalog from explicit artist records.
    ///
    /// Every back-reference must name the artist it is filed under.
    pub fn from_artists(artists: Vec<Artist>) -> Result<Self> {
        let mut index = HashMap::with_capacity(artists.len());
        for (i, artist) in artists.iter().enumerate() {
            if let Some(f) = artist.favored_by.iter().find(|f| f.artist_id != artist.id) {
                return Err(AllocationError::ForeignBackReference {
                    artist: artist.id,
                    recorded: f.artist_id,
                });
            }
            if index.insert(artist.id, i).is_some() {
                return Err(AllocationError::DuplicateArtist(artist.id));
            }
        }
        Ok(Self { artists, index })
    }

    /// Looks up an artist.
    pub fn get(&self, id: ArtistId) -> Option<&Artist> {
        self.index.get(&id).map(|&i| &self.artists[i])
    }

    /// Returns the back-references of an artist, or an empty slice if
    /// the artist is unknown.
    pub fn favored_by(&self, id: ArtistId) -> &[Favorite] {
        self.get(id)
            .map(|a| a.favored_by.as_slice())
            .unwrap_or(&[])
    }

    /// Returns all artists in catalog order.
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Returns the number of artists.
    pub fn len(&self) -> usize {
        self.artists.len()
    }

    /// Returns `true` if the catalog holds no artists.
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Checks that every artist favored by `designers` is in the catalog.
    pub fn ensure_covers(&self, designers: &[Designer]) -> Result<()> {
        designers
            .iter()
            .flat_map(|d| d.favorites())
            .find(|f| !self.index.contains_key(&f.artist_id))
            .map_or(Ok(()), |f| Err(AllocationError::UnknownArtist(f.artist_id)))
    }
}
