//! Polyomino shapes and their orientations under the symmetries of the square.
//!
//! A [`Shape`] is a non-empty set of unit [`Cell`]s in arbitrary position. A
//! [`CanonicalShape`] is a shape translated so that its minimum row and
//! minimum column are both zero. Two canonical shapes are equal exactly when
//! their cell sets are equal, which makes them usable as identities for piece
//! types and as keys when deduplicating orientations.

use crate::Error;
use std::{collections::HashSet, ops::Deref};

/// A unit cell at a `(row, col)` coordinate.
///
/// Cells order row-major, so a sorted list of cells reads like the grid does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row coordinate, increasing downwards.
    pub row: i32,
    /// Column coordinate, increasing to the right.
    pub col: i32,
}

impl Cell {
    /// Create a cell at the given coordinate.
    pub const fn new(row: i32, col: i32) -> Self {
        Cell { row, col }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell { row, col }
    }
}

/// Inclusive bounding box of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest row of any cell.
    pub min_row: i32,
    /// Smallest column of any cell.
    pub min_col: i32,
    /// Largest row of any cell.
    pub max_row: i32,
    /// Largest column of any cell.
    pub max_col: i32,
}

impl Bounds {
    /// Number of rows spanned.
    pub fn height(&self) -> usize {
        extent(self.min_row, self.max_row) as usize
    }

    /// Number of columns spanned.
    pub fn width(&self) -> usize {
        extent(self.min_col, self.max_col) as usize
    }
}

/// Largest number of rows or columns a shape may span, so that offsets from
/// its minimum corner fit in an `i32`.
const MAX_EXTENT: u64 = i32::MAX as u64;

fn extent(min: i32, max: i32) -> u64 {
    (i64::from(max) - i64::from(min) + 1) as u64
}

/// A finite, non-empty set of cells describing one piece in some orientation.
///
/// The cells are kept sorted and free of duplicates, so the cell list doubles
/// as the structural key of the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    cells: Vec<Cell>,
}

impl Shape {
    /// Create a shape from a set of cells. Duplicate cells are collapsed.
    ///
    /// Returns [`Error::EmptyShape`] if no cells are given, and
    /// [`Error::ShapeTooLarge`] if the cells span more than `i32::MAX` rows
    /// or columns.
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Result<Self, Error> {
        let mut cells: Vec<Cell> = cells.into_iter().collect();
        if cells.is_empty() {
            return Err(Error::EmptyShape);
        }
        cells.sort_unstable();
        cells.dedup();

        let shape = Shape { cells };
        let bounds = shape.bounds();
        let height = extent(bounds.min_row, bounds.max_row);
        let width = extent(bounds.min_col, bounds.max_col);
        if height > MAX_EXTENT || width > MAX_EXTENT {
            return Err(Error::ShapeTooLarge { height, width });
        }

        Ok(shape)
    }

    /// Create a shape from a boolean grid, where `true` marks a filled cell.
    /// Row `i`, column `j` of the grid becomes `Cell::new(i, j)`.
    pub fn from_grid<R: AsRef<[bool]>>(grid: &[R]) -> Result<Self, Error> {
        let expected = grid.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::new();

        for (i, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(Error::RaggedGrid {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            cells.extend(
                row.iter()
                    .enumerate()
                    .filter(|(_, filled)| **filled)
                    .map(|(j, _)| Cell::new(i as i32, j as i32)),
            );
        }

        Shape::new(cells)
    }

    /// The cells of this shape, sorted row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Bounding box of the cells.
    pub fn bounds(&self) -> Bounds {
        // Sorted row-major, so the row extremes are the first and last cells.
        let first = self.cells[0];
        let last = self.cells[self.cells.len() - 1];
        let (min_col, max_col) = self
            .cells
            .iter()
            .fold((first.col, first.col), |(lo, hi), cell| {
                (lo.min(cell.col), hi.max(cell.col))
            });

        Bounds {
            min_row: first.row,
            min_col,
            max_row: last.row,
            max_col,
        }
    }

    /// Number of rows spanned by the shape.
    pub fn height(&self) -> usize {
        self.bounds().height()
    }

    /// Number of columns spanned by the shape.
    pub fn width(&self) -> usize {
        self.bounds().width()
    }

    /// Translate the shape so its minimum row and column are zero.
    pub fn canonicalize(&self) -> CanonicalShape {
        let Bounds {
            min_row, min_col, ..
        } = self.bounds();
        if min_row == 0 && min_col == 0 {
            return CanonicalShape(self.clone());
        }

        CanonicalShape(self.map_cells(|cell| Cell::new(cell.row - min_row, cell.col - min_col)))
    }

    /// Rotate a quarter turn clockwise about the shape's minimum corner.
    pub fn rotate90(&self) -> CanonicalShape {
        let bounds = self.bounds();
        let height = bounds.height() as i32;

        self.map_cells(|cell| {
            let row = cell.row - bounds.min_row;
            let col = cell.col - bounds.min_col;
            Cell::new(col, height - 1 - row)
        })
        .canonicalize()
    }

    /// Reflect left-right within the bounding box.
    pub fn mirror_horizontal(&self) -> CanonicalShape {
        let bounds = self.bounds();

        self.map_cells(|cell| Cell::new(cell.row, bounds.max_col - (cell.col - bounds.min_col)))
            .canonicalize()
    }

    /// Reflect top-bottom within the bounding box.
    pub fn mirror_vertical(&self) -> CanonicalShape {
        let bounds = self.bounds();

        self.map_cells(|cell| Cell::new(bounds.max_row - (cell.row - bounds.min_row), cell.col))
            .canonicalize()
    }

    /// All distinct orientations reachable by rotation and reflection.
    ///
    /// Contains between 1 and 8 canonical shapes, in the order they are first
    /// encountered: the rotations of the shape itself, then those of its
    /// horizontal mirror, then those of its vertical mirror.
    pub fn orientations(&self) -> Vec<CanonicalShape> {
        self.orientations_under(ShapeTransform::FullSymmetry)
    }

    /// Distinct orientations reachable under the given group of transforms.
    pub fn orientations_under(&self, transform: ShapeTransform) -> Vec<CanonicalShape> {
        let bases = match transform {
            ShapeTransform::NoTransform => return vec![self.canonicalize()],
            ShapeTransform::PureRotation => vec![self.canonicalize()],
            ShapeTransform::FullSymmetry => vec![
                self.canonicalize(),
                self.mirror_horizontal(),
                self.mirror_vertical(),
            ],
        };

        let mut seen = HashSet::with_capacity(8);
        let mut orientations = Vec::with_capacity(8);
        for base in bases {
            let mut current = base;
            for _ in 0..4 {
                let next = current.rotate90();
                if seen.insert(current.clone()) {
                    orientations.push(current);
                }
                current = next;
            }
        }

        orientations
    }

    fn map_cells(&self, f: impl FnMut(&Cell) -> Cell) -> Shape {
        let mut cells: Vec<Cell> = self.cells.iter().map(f).collect();
        cells.sort_unstable();

        Shape { cells }
    }
}

impl<const W: usize, const H: usize> TryFrom<[[u8; W]; H]> for Shape {
    type Error = Error;

    /// Any non-zero entry marks a filled cell.
    fn try_from(arr: [[u8; W]; H]) -> Result<Self, Self::Error> {
        let cells = arr.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, value)| **value != 0)
                .map(move |(j, _)| Cell::new(i as i32, j as i32))
        });

        Shape::new(cells)
    }
}

/// A [`Shape`] whose minimum row and minimum column are zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalShape(Shape);

impl Deref for CanonicalShape {
    type Target = Shape;

    fn deref(&self) -> &Shape {
        &self.0
    }
}

/// A distinct kind of piece: its canonical shape and every orientation it
/// may be placed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceType {
    shape: CanonicalShape,
    orientations: Vec<CanonicalShape>,
}

impl PieceType {
    /// Build the piece type of `shape` under the given transformation group.
    pub fn new(shape: &Shape, transform: ShapeTransform) -> Self {
        PieceType {
            shape: shape.canonicalize(),
            orientations: shape.orientations_under(transform),
        }
    }

    /// The distinct orientations of this piece type.
    pub fn orientations(&self) -> &[CanonicalShape] {
        &self.orientations
    }

    /// Number of cells covered by one piece.
    pub fn area(&self) -> usize {
        self.shape.area()
    }
}

/// Groups of transformations pieces may undergo when placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShapeTransform {
    /// Pieces are placed exactly as given.
    NoTransform,
    /// Pieces may be rotated by multiples of 90 degrees.
    PureRotation,
    /// Pieces may be rotated and reflected.
    #[default]
    FullSymmetry,
}
