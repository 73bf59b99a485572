#![deny(missing_docs)]

//! Decide whether a multiset of [polyomino](https://en.wikipedia.org/wiki/Polyomino)
//! pieces can be placed, without overlap, inside a rectangular region. The
//! region does not have to be covered completely.
//!
//! Pieces may be rotated and reflected. The solver enumerates every in-bounds
//! placement of every orientation of each required piece, then runs a
//! depth-first search that always branches on the piece type with the fewest
//! placements still fitting, remembering states already shown to fail.
//!
//! ```
//! use polyomino_packing::{is_feasible, Region, Shape};
//!
//! let square = Shape::try_from([[1u8, 1], [1, 1]]).unwrap();
//! let pieces = [square];
//!
//! assert!(is_feasible(&Region::with_counts(4, 4, [4]), &pieces).unwrap());
//! assert!(!is_feasible(&Region::with_counts(4, 4, [5]), &pieces).unwrap());
//! ```

pub(crate) mod board;
mod config;
mod error;
pub mod placement;
mod region;
pub(crate) mod search;
pub mod shape;
pub mod verify;

pub use config::SolverConfig;
pub use error::{Error, LayoutError};
pub use placement::Placement;
pub use region::{
    count_feasible_regions, is_feasible, Region, RegionPiece, RegionReport, Requirement, Solver,
};
pub use search::SearchStats;
pub use shape::{Bounds, CanonicalShape, Cell, PieceType, Shape, ShapeTransform};
pub use verify::{Layout, LetterMap};
