//! Allocation resolution.
//!
//! Every designer starts with its full favorites list. Each conflict
//! record is then settled by preference rank, with the accumulated score
//! breaking rank ties, until every record has been processed.
//!
//! # Key Types
//!
//! - [`ResolverConfig`]: branch policy, contest scope, filter mode, order
//! - [`AllocationResolver`]: runs detection and resolution
//! - [`AllocationResult`]: per-designer allocations and scores
//!
//! # Policies
//!
//! [`BranchPolicy::Symmetric`] is the default and guarantees that an
//! allocation only ever shrinks and that scores never decrease.
//! [`BranchPolicy::Legacy`] (via [`ResolverConfig::legacy`]) reproduces
//! the previous system's branches verbatim, including score coupling
//! between the two designers and cross-assigned pools.

mod config;
mod filter;
mod runner;
mod types;

pub use config::{BranchPolicy, ConflictOrder, ContestScope, FilterMode, ResolverConfig};
pub use filter::{remove_artists, Filtered};
pub use runner::AllocationResolver;
pub use types::{Allocation, AllocationResult};
