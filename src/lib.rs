//! Exclusive allocation of artists among competing designers.
//!
//! Each designer ranks the artists it wants. When two designers want the
//! same artist, the conflict is settled by preference rank first and by
//! an accumulated score second:
//!
//! - **Model**: designer and artist identities, favorite records, and the
//!   artist catalog with its back-references.
//! - **Conflict**: pairwise detection of shared artists and rank lookup.
//! - **Allocation**: the resolver, its configurable branch policies, and
//!   the per-designer result.
//!
//! # Architecture
//!
//! Resolution is a pure function of its input. Loading designers from
//! storage and persisting allocations belong to the caller; this crate
//! only reads an immutable snapshot and returns a new result.
//!
//! # Features
//!
//! - `parallel`: detect conflicts across designers with rayon.
//! - `serde`: derive `Serialize`/`Deserialize` on model, config, and
//!   result types.

pub mod allocation;
pub mod conflict;
pub mod error;
pub mod model;

pub use error::{AllocationError, Result};
