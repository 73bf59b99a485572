//! Errors reported by the solver and by the layout verifier.

use thiserror::Error;

/// Errors raised while building shapes or evaluating regions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A shape was constructed from an empty set of cells.
    #[error("shape must contain at least one cell")]
    EmptyShape,
    /// A shape spans more rows or columns than translated cell coordinates
    /// can hold.
    #[error("shape spans {height} rows and {width} columns, limit is {max}", max = i32::MAX)]
    ShapeTooLarge {
        /// Rows spanned.
        height: u64,
        /// Columns spanned.
        width: u64,
    },
    /// A boolean grid handed to `Shape::from_grid` has rows of differing
    /// widths.
    #[error("grid row {row} has width {found}, expected {expected}")]
    RaggedGrid {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A region requirement refers to a piece that is not in the piece table.
    #[error("requirement references piece {index}, but only {pieces} pieces are defined")]
    UnknownPiece {
        /// The requested piece index.
        index: usize,
        /// Number of pieces in the table.
        pieces: usize,
    },
}

/// Mismatches found when checking a hand-written layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout does not have one line per region row.
    #[error("layout has {found} rows, expected {expected}")]
    RowCount {
        /// Rows in the region.
        expected: usize,
        /// Lines in the layout.
        found: usize,
    },
    /// A layout line is not exactly as wide as the region.
    #[error("layout row {row} has {found} columns, expected {expected}")]
    ColumnCount {
        /// Index of the offending line.
        row: usize,
        /// Columns in the region.
        expected: usize,
        /// Characters in the line.
        found: usize,
    },
    /// A character other than `.` or `A`-`Z` was found.
    #[error("invalid character {ch:?} at ({row}, {col})")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Its row.
        row: usize,
        /// Its column.
        col: usize,
    },
    /// A letter map entry could not be parsed.
    #[error("invalid letter map entry {0:?}, expected something like `A=0`")]
    InvalidMapEntry(String),
    /// A letter maps to an index outside the piece table.
    #[error("letter {letter} maps to piece {index}, but only {pieces} pieces are defined")]
    PieceOutOfRange {
        /// The layout letter.
        letter: char,
        /// The piece index it maps to.
        index: usize,
        /// Number of pieces in the table.
        pieces: usize,
    },
    /// A letter covers a different number of cells than its piece.
    #[error("letter {letter} covers {found} cells, but piece {index} has {expected}")]
    AreaMismatch {
        /// The layout letter.
        letter: char,
        /// The piece index it maps to.
        index: usize,
        /// Area of the piece.
        expected: usize,
        /// Cells covered by the letter.
        found: usize,
    },
    /// A letter has the right area but is not congruent to its piece.
    #[error("letter {letter} does not match piece {index} under rotation or reflection")]
    ShapeMismatch {
        /// The layout letter.
        letter: char,
        /// The piece index it maps to.
        index: usize,
    },
    /// A letter's cells are not among the placements enumerated for its piece.
    #[error(
        "placement of letter {letter} is missing from the enumerated placements of piece {index}"
    )]
    MissingPlacement {
        /// The layout letter.
        letter: char,
        /// The piece index it maps to.
        index: usize,
    },
    /// The region itself could not be evaluated.
    #[error(transparent)]
    Solver(#[from] Error),
}
