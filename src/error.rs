//! Error types for allocation input.
//!
//! Resolution itself cannot fail. Every variant here describes malformed
//! input detected before the first conflict is resolved.

use crate::model::{ArtistId, DesignerId};
use thiserror::Error;

/// Errors raised while validating designers and the artist catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Two designers in the input share an id.
    #[error("duplicate designer id: {0}")]
    DuplicateDesigner(DesignerId),

    /// A designer lists the same artist more than once.
    #[error("designer {designer} lists artist {artist} more than once")]
    DuplicateFavorite {
        designer: DesignerId,
        artist: ArtistId,
    },

    /// A favorite record is filed under a different designer than its owner.
    #[error("favorite of designer {designer} is recorded under designer {recorded}")]
    ForeignFavorite {
        designer: DesignerId,
        recorded: DesignerId,
    },

    /// An artist's back-reference names a different artist.
    #[error("back-reference of artist {artist} is recorded under artist {recorded}")]
    ForeignBackReference {
        artist: ArtistId,
        recorded: ArtistId,
    },

    /// The catalog contains the same artist twice.
    #[error("duplicate artist id: {0}")]
    DuplicateArtist(ArtistId),

    /// A favorite names an artist missing from the catalog.
    #[error("artist {0} is not in the catalog")]
    UnknownArtist(ArtistId),
}

/// Result alias for allocation operations.
pub type Result<T> = std::result::Result<T, AllocationError>;
