//! Regions, their piece requirements, and the solver that decides whether
//! the required pieces fit.

use crate::{
    board::Board,
    placement::{self, Placement},
    search::{Search, SearchState},
    CanonicalShape, Error, PieceType, SearchStats, Shape, SolverConfig,
};
use bumpalo::Bump;
use rayon::prelude::*;
use std::collections::HashMap;

/// A request for `count` copies of the piece at index `piece` of the piece
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Requirement {
    /// Index into the piece table.
    pub piece: usize,
    /// Number of copies that must be placed.
    pub count: usize,
}

/// A `rows × cols` rectangle of cells together with the pieces that must be
/// placed in it. The rectangle need not be covered completely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    rows: usize,
    cols: usize,
    requirements: Vec<Requirement>,
}

impl Region {
    /// An empty `rows × cols` region with no requirements.
    pub fn new(rows: usize, cols: usize) -> Self {
        Region {
            rows,
            cols,
            requirements: Vec::new(),
        }
    }

    /// A region requiring `counts[i]` copies of piece `i`, the shape in which
    /// requirements usually arrive from a puzzle description.
    pub fn with_counts(rows: usize, cols: usize, counts: impl IntoIterator<Item = usize>) -> Self {
        counts
            .into_iter()
            .enumerate()
            .fold(Region::new(rows, cols), |region, (piece, count)| {
                region.require(piece, count)
            })
    }

    /// Add a requirement of `count` copies of piece `piece`.
    pub fn require(mut self, piece: usize, count: usize) -> Self {
        self.requirements.push(Requirement { piece, count });
        self
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// The requirements, in the order they were added.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }
}

/// One piece type required by a region, with its placements on that region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPiece {
    /// The merged piece type.
    pub piece_type: PieceType,
    /// Total copies required, summed over all merged piece indices.
    pub count: usize,
    /// Piece table indices whose shapes canonicalize to this type.
    pub indices: Vec<usize>,
    /// Every distinct placement of the type on the region.
    pub placements: Vec<Placement>,
}

/// Outcome of evaluating one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionReport {
    /// Whether all required pieces can be placed.
    pub feasible: bool,
    /// Work done by the search.
    pub stats: SearchStats,
}

/// Decides feasibility of regions against a table of piece shapes.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'p> {
    pieces: &'p [Shape],
    config: SolverConfig,
}

impl<'p> Solver<'p> {
    /// Create a solver over the given piece table with the default
    /// configuration.
    pub fn new(pieces: &'p [Shape]) -> Self {
        Solver {
            pieces,
            config: SolverConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// The piece table.
    pub fn pieces(&self) -> &'p [Shape] {
        self.pieces
    }

    /// The configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Group the region's requirements by canonical shape and enumerate the
    /// placements of every resulting piece type.
    ///
    /// Requirements with a zero count are skipped without looking at their
    /// piece index.
    pub fn region_pieces(&self, region: &Region) -> Result<Vec<RegionPiece>, Error> {
        let mut by_shape: HashMap<CanonicalShape, usize> = HashMap::new();
        let mut pieces: Vec<RegionPiece> = Vec::new();

        for requirement in region.requirements() {
            if requirement.count == 0 {
                continue;
            }
            let shape = self
                .pieces
                .get(requirement.piece)
                .ok_or(Error::UnknownPiece {
                    index: requirement.piece,
                    pieces: self.pieces.len(),
                })?;

            let canonical = shape.canonicalize();
            if let Some(&existing) = by_shape.get(&canonical) {
                let piece = &mut pieces[existing];
                piece.count += requirement.count;
                if !piece.indices.contains(&requirement.piece) {
                    piece.indices.push(requirement.piece);
                }
                continue;
            }

            let piece_type = PieceType::new(shape, self.config.transform);
            let placements = placement::enumerate_piece(&piece_type, region.rows, region.cols);
            by_shape.insert(canonical, pieces.len());
            pieces.push(RegionPiece {
                piece_type,
                count: requirement.count,
                indices: vec![requirement.piece],
                placements,
            });
        }

        Ok(pieces)
    }

    /// Evaluate a region, reporting the search statistics alongside the
    /// answer.
    pub fn evaluate(&self, region: &Region) -> Result<RegionReport, Error> {
        let pieces = self.region_pieces(region)?;

        log::debug!(
            "Evaluating [{}x{}] region with [{}] piece types covering [{}] cells.",
            region.rows,
            region.cols,
            pieces.len(),
            pieces
                .iter()
                .map(|p| p.count * p.piece_type.area())
                .sum::<usize>()
        );
        for (i, piece) in pieces.iter().enumerate() {
            log::debug!(
                "Type [{}] from pieces {:?}: count [{}] area [{}] orientations [{}] placements [{}].",
                i,
                piece.indices,
                piece.count,
                piece.piece_type.area(),
                piece.piece_type.orientations().len(),
                piece.placements.len()
            );
        }

        let areas: Vec<usize> = pieces.iter().map(|p| p.piece_type.area()).collect();
        let counts: Vec<usize> = pieces.iter().map(|p| p.count).collect();
        let placements: Vec<Vec<Placement>> = pieces.into_iter().map(|p| p.placements).collect();

        let arena = Bump::new();
        let initial = SearchState::new(Board::full(region.rows, region.cols), counts, &areas);
        let (feasible, stats) = Search::new(&areas, &placements, &self.config, &arena).run(initial);

        log::debug!(
            "Region [{}x{}] feasible [{}] after [{}] nodes. {:?}",
            region.rows,
            region.cols,
            feasible,
            stats.nodes_visited,
            stats
        );

        Ok(RegionReport { feasible, stats })
    }

    /// Whether every required piece of the region can be placed without
    /// overlap.
    pub fn is_feasible(&self, region: &Region) -> Result<bool, Error> {
        self.evaluate(region).map(|report| report.feasible)
    }

    /// Number of feasible regions, evaluated one after another.
    ///
    /// Fails on the first region that references an undefined piece.
    pub fn count_feasible_regions(&self, regions: &[Region]) -> Result<usize, Error> {
        let count = regions.iter().try_fold(0, |count, region| {
            self.is_feasible(region)
                .map(|feasible| count + usize::from(feasible))
        })?;

        log::debug!("[{}] of [{}] regions are feasible.", count, regions.len());
        Ok(count)
    }

    /// Number of feasible regions, evaluated in parallel on the `rayon`
    /// thread pool. Each region's search runs on a single thread.
    pub fn par_count_feasible_regions(&self, regions: &[Region]) -> Result<usize, Error> {
        let count = regions
            .par_iter()
            .map(|region| self.is_feasible(region).map(usize::from))
            .try_reduce(|| 0, |a, b| Ok(a + b))?;

        log::debug!("[{}] of [{}] regions are feasible.", count, regions.len());
        Ok(count)
    }
}

/// Whether every required piece of `region` can be placed, using the default
/// configuration.
pub fn is_feasible(region: &Region, pieces: &[Shape]) -> Result<bool, Error> {
    Solver::new(pieces).is_feasible(region)
}

/// Number of feasible regions, using the default configuration.
pub fn count_feasible_regions(regions: &[Region], pieces: &[Shape]) -> Result<usize, Error> {
    Solver::new(pieces).count_feasible_regions(regions)
}
