//! Resolver configuration.
//!
//! [`ResolverConfig`] selects how each conflict is resolved. The default
//! is the reconciled policy; [`ResolverConfig::legacy`] reproduces the
//! behavior of the system this crate replaces, quirks included.

/// How the winner and loser of a conflict are updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BranchPolicy {
    /// The loser drops the contested artists from its own current
    /// allocation and its score grows by the number it actually gave up.
    ///
    /// On a rank tie the designer that has given up more keeps the
    /// artists; equal scores make both lose.
    #[default]
    Symmetric,

    /// Branch-for-branch reproduction of the previous system.
    ///
    /// - stronger first rank: second is rebuilt from its favorites,
    ///   `second.score += n`
    /// - stronger second rank: first is rebuilt from its favorites,
    ///   `first.score = second.score + n`
    /// - rank tie, `first.score < second.score`: second receives first's
    ///   filtered allocation, `first.score = second.score + n`
    /// - rank tie, `first.score > second.score`: first receives second's
    ///   filtered allocation, `first.score = second.score + n`
    /// - rank and score tie: both filter their own allocation,
    ///   `first.score = second.score + n`, `second.score += n`
    ///
    /// Scores can decrease and allocations can receive artists the
    /// designer never favored.
    Legacy,
}

/// Which artists a single conflict record puts at stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContestScope {
    /// Only the record's own artist.
    #[default]
    Artist,

    /// Every artist the two designers share, decided by the rank of the
    /// record's artist.
    SharedSet,
}

/// How a pool is rebuilt after removing contested artists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterMode {
    /// Keep the pool's own entries whose artist is not contested.
    #[default]
    PairLocal,

    /// Replace each surviving artist by all of its catalog
    /// back-references. The result's length and order depend on how
    /// many designers favor each survivor, and filtering an already
    /// expanded pool expands it again.
    BackReference,
}

/// Order in which conflict records are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictOrder {
    /// As emitted by detection.
    Emission,

    /// Ascending first designer id, second designer id, then artist id.
    ///
    /// This is the reference order for reproducible results.
    #[default]
    Sorted,

    /// Emission order shuffled with a seeded RNG.
    Shuffled {
        /// RNG seed.
        seed: u64,
    },
}

/// Configuration for [`AllocationResolver`](super::AllocationResolver).
///
/// # Examples
///
/// ```
/// use u_allot::allocation::{BranchPolicy, ConflictOrder, ResolverConfig};
///
/// let config = ResolverConfig::default()
///     .with_order(ConflictOrder::Emission)
///     .with_parallel(true);
/// assert_eq!(config.branch_policy, BranchPolicy::Symmetric);
/// assert!(config.parallel);
///
/// let legacy = ResolverConfig::legacy();
/// assert_eq!(legacy.branch_policy, BranchPolicy::Legacy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolverConfig {
    /// Winner/loser update rules.
    pub branch_policy: BranchPolicy,
    /// Artists at stake per record.
    pub contest_scope: ContestScope,
    /// Pool rebuilding after removal.
    pub filter_mode: FilterMode,
    /// Record processing order.
    pub order: ConflictOrder,
    /// Whether to detect conflicts in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    /// Resolution is always sequential.
    pub parallel: bool,
}

impl ResolverConfig {
    /// Preset reproducing the previous system: legacy branches, whole
    /// shared set at stake, back-reference filtering, emission order.
    pub fn legacy() -> Self {
        Self {
            branch_policy: BranchPolicy::Legacy,
            contest_scope: ContestScope::SharedSet,
            filter_mode: FilterMode::BackReference,
            order: ConflictOrder::Emission,
            parallel: false,
        }
    }

    /// Sets the branch policy.
    pub fn with_branch_policy(mut self, policy: BranchPolicy) -> Self {
        self.branch_policy = policy;
        self
    }

    /// Sets the contest scope.
    pub fn with_contest_scope(mut self, scope: ContestScope) -> Self {
        self.contest_scope = scope;
        self
    }

    /// Sets the filter mode.
    pub fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    /// Sets the record processing order.
    pub fn with_order(mut self, order: ConflictOrder) -> Self {
        self.order = order;
        self
    }

    /// Shuffles records with the given seed.
    ///
    /// Equivalent to `.with_order(ConflictOrder::Shuffled { seed })`.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_order(ConflictOrder::Shuffled { seed })
    }

    /// Enables or disables parallel detection.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.branch_policy, BranchPolicy::Symmetric);
        assert_eq!(config.contest_scope, ContestScope::Artist);
        assert_eq!(config.filter_mode, FilterMode::PairLocal);
        assert_eq!(config.order, ConflictOrder::Sorted);
        assert!(!config.parallel);
    }

    #[test]
    fn test_legacy_preset() {
        let config = ResolverConfig::legacy();
        assert_eq!(config.branch_policy, BranchPolicy::Legacy);
        assert_eq!(config.contest_scope, ContestScope::SharedSet);
        assert_eq!(config.filter_mode, FilterMode::BackReference);
        assert_eq!(config.order, ConflictOrder::Emission);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ResolverConfig::default()
            .with_branch_policy(BranchPolicy::Legacy)
            .with_contest_scope(ContestScope::SharedSet)
            .with_filter_mode(FilterMode::BackReference)
            .with_seed(7)
            .with_parallel(true);

        assert_eq!(config.branch_policy, BranchPolicy::Legacy);
        assert_eq!(config.contest_scope, ContestScope::SharedSet);
        assert_eq!(config.filter_mode, FilterMode::BackReference);
        assert_eq!(config.order, ConflictOrder::Shuffled { seed: 7 });
        assert!(config.parallel);
    }

    #[test]
    fn test_preset_chainable() {
        let config = ResolverConfig::legacy().with_order(ConflictOrder::Sorted);
        assert_eq!(config.branch_policy, BranchPolicy::Legacy);
        assert_eq!(config.order, ConflictOrder::Sorted);
    }
}
