//! Solver configuration.

use crate::ShapeTransform;

/// Tuning knobs for the feasibility search.
///
/// None of the options change which regions are feasible, except
/// `transform`, which changes the problem being solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Group of transformations pieces may undergo when placed.
    pub transform: ShapeTransform,
    /// Remember states already proven infeasible and skip them when they are
    /// reached again through a different placement order.
    pub memoize: bool,
    /// Fail a state early when the cells lying in connected components large
    /// enough to hold the smallest remaining piece cannot hold the remaining
    /// area.
    pub prune_small_components: bool,
    /// Emit a `trace` progress line every this many visited search nodes.
    /// Zero disables progress logging.
    pub progress_interval: u64,
}

impl SolverConfig {
    /// Set the transformation group.
    pub fn with_transform(mut self, transform: ShapeTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Enable or disable failure memoization.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Enable or disable connected-component pruning.
    pub fn with_prune_small_components(mut self, prune: bool) -> Self {
        self.prune_small_components = prune;
        self
    }

    /// Set the progress logging interval.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            transform: ShapeTransform::FullSymmetry,
            memoize: true,
            prune_small_components: true,
            progress_interval: 50_000,
        }
    }
}
