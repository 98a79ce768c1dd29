//! Conflict detection and rank lookup.
//!
//! A conflict is an artist that appears in two designers' favorite
//! lists. Detection is a pure set intersection over artist ids; which
//! designer prevails is decided later from each side's rank.

mod detector;
mod ranking;

pub use detector::{detect, detect_all, shared_artists, ConflictRecord};
pub use ranking::{compare_ranks, rank};
