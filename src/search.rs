//! Depth-first search over placements, deciding whether every remaining
//! piece can still be put down.
//!
//! Every node owns its [`SearchState`]; a child is a fresh copy with one more
//! placement applied, so abandoning a branch needs no undo step. Open nodes
//! are kept on an explicit stack rather than the call stack. At each node
//! the piece type with the fewest placements still fitting is branched on,
//! and states shown infeasible are remembered in a [`FailureMemo`] for the
//! rest of the region's search.

use crate::{board::Board, placement::Placement, SolverConfig};
use bumpalo::Bump;
use std::collections::HashSet;

/// Counters describing the work done by one region's search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes entered.
    pub nodes_visited: u64,
    /// Nodes that survived the cheap checks and were branched on.
    pub nodes_expanded: u64,
    /// Nodes cut because their state was already known to fail.
    pub memo_hits: u64,
    /// Nodes cut because the remaining area exceeded the available cells.
    pub area_prunes: u64,
    /// Nodes cut by connected-component accounting.
    pub component_prunes: u64,
    /// Nodes cut because some remaining piece had no compatible placement.
    pub dead_ends: u64,
    /// Child states built from compatible placements.
    pub placements_tried: u64,
    /// Distinct failed states remembered when the search finished.
    pub memo_size: usize,
}

/// The available cells and the pieces still to place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchState {
    board: Board,
    counts: Vec<usize>,
    remaining_area: usize,
}

impl SearchState {
    pub(crate) fn new(board: Board, counts: Vec<usize>, areas: &[usize]) -> Self {
        debug_assert_eq!(counts.len(), areas.len());
        let remaining_area = counts.iter().zip(areas).map(|(n, area)| n * area).sum();

        SearchState {
            board,
            counts,
            remaining_area,
        }
    }

    /// The state after putting down `placement` as one piece of type `piece`.
    fn place(&self, piece: usize, placement: &Placement) -> SearchState {
        let mut counts = self.counts.clone();
        counts[piece] -= 1;

        SearchState {
            board: self.board.without(placement),
            counts,
            remaining_area: self.remaining_area - placement.area(),
        }
    }

    /// Board words followed by the remaining counts.
    fn fingerprint(&self) -> Vec<u64> {
        let words = self.board.words();
        let mut key = Vec::with_capacity(words.len() + self.counts.len());
        key.extend_from_slice(words);
        key.extend(self.counts.iter().map(|&n| n as u64));
        key
    }
}

/// Fingerprints of states known to be infeasible, stored in an arena that
/// lives exactly as long as one region's search.
#[derive(Debug)]
pub(crate) struct FailureMemo<'b> {
    arena: &'b Bump,
    failed: HashSet<&'b [u64]>,
}

impl<'b> FailureMemo<'b> {
    pub(crate) fn new(arena: &'b Bump) -> Self {
        FailureMemo {
            arena,
            failed: HashSet::new(),
        }
    }

    fn contains(&self, key: &[u64]) -> bool {
        self.failed.contains(key)
    }

    fn insert(&mut self, key: &[u64]) {
        if !self.failed.contains(key) {
            self.failed.insert(self.arena.alloc_slice_copy(key));
        }
    }

    fn len(&self) -> usize {
        self.failed.len()
    }
}

/// One region's search: placement lists per piece type, indexed like the
/// counts of the states being searched.
pub(crate) struct Search<'a> {
    areas: &'a [usize],
    placements: &'a [Vec<Placement>],
    config: &'a SolverConfig,
    memo: Option<FailureMemo<'a>>,
    stats: SearchStats,
}

/// A node being branched on: its state, the piece type chosen for it, the
/// position in that type's placement list to resume from, and the
/// fingerprint to remember if every branch fails.
#[derive(Debug)]
struct Frame {
    state: SearchState,
    piece: usize,
    next: usize,
    key: Option<Vec<u64>>,
}

/// Outcome of entering a node.
enum Node {
    Solved,
    Failed,
    Branch(Frame),
}

impl<'a> Search<'a> {
    pub(crate) fn new(
        areas: &'a [usize],
        placements: &'a [Vec<Placement>],
        config: &'a SolverConfig,
        arena: &'a Bump,
    ) -> Self {
        debug_assert_eq!(areas.len(), placements.len());
        debug_assert!(placements
            .iter()
            .zip(areas)
            .all(|(list, &area)| list.iter().all(|p| p.area() == area)));

        Search {
            areas,
            placements,
            config,
            memo: config.memoize.then(|| FailureMemo::new(arena)),
            stats: SearchStats::default(),
        }
    }

    /// Decide whether `initial` can be driven to zero remaining area.
    pub(crate) fn run(mut self, initial: SearchState) -> (bool, SearchStats) {
        let feasible = self.solve(initial);
        self.stats.memo_size = self.memo.as_ref().map_or(0, FailureMemo::len);

        (feasible, self.stats)
    }

    /// Depth-first search on an explicit stack of frames, so the depth is
    /// bounded by memory rather than by the thread's stack.
    fn solve(&mut self, initial: SearchState) -> bool {
        let mut stack = match self.enter(initial) {
            Node::Solved => return true,
            Node::Failed => return false,
            Node::Branch(frame) => vec![frame],
        };

        let placements = self.placements;
        while let Some(frame) = stack.last_mut() {
            let list = &placements[frame.piece];
            let next = list[frame.next..]
                .iter()
                .position(|p| frame.state.board.fits(p))
                .map(|offset| frame.next + offset);

            let Some(index) = next else {
                if let Some(frame) = stack.pop() {
                    self.remember_failure(frame.key);
                }
                continue;
            };

            frame.next = index + 1;
            self.stats.placements_tried += 1;
            match self.enter(frame.state.place(frame.piece, &list[index])) {
                Node::Solved => return true,
                Node::Failed => {}
                Node::Branch(child) => stack.push(child),
            }
        }

        false
    }

    /// Run the checks of a freshly reached state, and pick the piece type to
    /// branch on if none of them settles it.
    fn enter(&mut self, state: SearchState) -> Node {
        self.stats.nodes_visited += 1;
        if self.config.progress_interval > 0
            && self.stats.nodes_visited % self.config.progress_interval == 0
        {
            log::trace!(
                "Visited [{}] nodes, remembering [{}] failures; at available [{}] remaining area [{}] counts {:?}. {:?}",
                self.stats.nodes_visited,
                self.memo.as_ref().map_or(0, FailureMemo::len),
                state.board.available(),
                state.remaining_area,
                state.counts,
                self.stats
            );
        }

        if state.remaining_area == 0 {
            return Node::Solved;
        }
        if state.remaining_area > state.board.available() {
            self.stats.area_prunes += 1;
            return Node::Failed;
        }

        let key = self.memo.as_ref().map(|_| state.fingerprint());
        if let (Some(memo), Some(key)) = (&self.memo, &key) {
            if memo.contains(key) {
                self.stats.memo_hits += 1;
                return Node::Failed;
            }
        }

        if self.config.prune_small_components {
            let smallest = state
                .counts
                .iter()
                .zip(self.areas)
                .filter(|(n, _)| **n > 0)
                .map(|(_, area)| *area)
                .min()
                .unwrap_or(0);
            if state.board.cells_in_components_of_at_least(smallest) < state.remaining_area {
                self.stats.component_prunes += 1;
                self.remember_failure(key);
                return Node::Failed;
            }
        }

        self.stats.nodes_expanded += 1;

        // Branch on the piece type with the fewest compatible placements,
        // failing at once if any remaining type has none.
        let mut chosen: Option<(usize, usize)> = None;
        for (piece, &count) in state.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let compatible = self.placements[piece]
                .iter()
                .filter(|p| state.board.fits(p))
                .count();
            if compatible == 0 {
                self.stats.dead_ends += 1;
                self.remember_failure(key);
                return Node::Failed;
            }
            if chosen.map_or(true, |(_, fewest)| compatible < fewest) {
                chosen = Some((piece, compatible));
            }
        }

        // Remaining area is non-zero, so some count is too.
        let Some((piece, _)) = chosen else {
            return Node::Failed;
        };

        Node::Branch(Frame {
            state,
            piece,
            next: 0,
            key,
        })
    }

    fn remember_failure(&mut self, key: Option<Vec<u64>>) {
        if let (Some(memo), Some(key)) = (self.memo.as_mut(), key) {
            memo.insert(&key);
        }
    }
}
