//! Designers, artists, and their preference records.
//!
//! These are plain in-memory values supplied by whatever layer loads
//! them from storage. Resolution never mutates them.

mod catalog;
mod ids;
mod types;

pub use catalog::ArtistCatalog;
pub use ids::{ArtistId, DesignerId};
pub use types::{Artist, Designer, Favorite};
