//! Enumeration of every in-bounds translation of a piece on a region.

use crate::{board, CanonicalShape, Cell, PieceType};
use std::collections::HashSet;

/// A concrete, translated position of one piece on one region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    cells: Vec<Cell>,
    first_word: usize,
    mask: Vec<u64>,
}

impl Placement {
    fn new(cells: Vec<Cell>, cols: usize) -> Self {
        let (first_word, mask) =
            board::mask_for(cells.iter().map(|c| c.row as usize * cols + c.col as usize));

        Placement {
            cells,
            first_word,
            mask,
        }
    }

    /// The absolute cells covered, sorted row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// The cells as a bit mask over the region's words: the index of the
    /// first word touched and the words from there on.
    pub fn mask(&self) -> (usize, &[u64]) {
        (self.first_word, &self.mask)
    }
}

/// Every translation of `orientation` that keeps all of its cells inside a
/// `rows × cols` region.
///
/// Empty when the orientation's bounding box is taller or wider than the
/// region.
pub fn enumerate(orientation: &CanonicalShape, rows: usize, cols: usize) -> Vec<Placement> {
    let (height, width) = (orientation.height(), orientation.width());
    // If the orientation is larger than the region, no translation fits.
    if height > rows || width > cols {
        return vec![];
    }

    let in_bounds =
        |c: &Cell| c.row >= 0 && c.col >= 0 && (c.row as usize) < rows && (c.col as usize) < cols;

    (0..=rows - height)
        .flat_map(|dx| (0..=cols - width).map(move |dy| (dx as i32, dy as i32)))
        .filter_map(|(dx, dy)| {
            let cells: Vec<Cell> = orientation
                .cells()
                .iter()
                .map(|c| Cell::new(c.row + dx, c.col + dy))
                .collect();

            if cells.iter().all(in_bounds) {
                Some(Placement::new(cells, cols))
            } else {
                None
            }
        })
        .collect()
}

/// Every distinct placement of any orientation of `piece` on a
/// `rows × cols` region.
///
/// Orientations that coincide once translated contribute a single placement.
/// An empty list means the piece cannot be placed on this region at all.
pub fn enumerate_piece(piece: &PieceType, rows: usize, cols: usize) -> Vec<Placement> {
    let mut seen = HashSet::new();

    piece
        .orientations()
        .iter()
        .flat_map(|orientation| enumerate(orientation, rows, cols))
        .filter(|placement| seen.insert(placement.cells.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Shape, ShapeTransform};

    fn piece<const W: usize, const H: usize>(arr: [[u8; W]; H]) -> PieceType {
        PieceType::new(&Shape::try_from(arr).unwrap(), ShapeTransform::FullSymmetry)
    }

    fn cells(list: &[(i32, i32)]) -> Vec<Cell> {
        list.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_enumerate_single_placement() {
        let square = piece([[1, 1], [1, 1]]);
        let placements = enumerate_piece(&square, 2, 2);
        assert_eq!(placements.len(), 1);
        assert_eq!(
            placements[0].cells(),
            cells(&[(0, 0), (0, 1), (1, 0), (1, 1)])
        );
    }

    #[test]
    fn test_enumerate_no_placements() {
        let square = piece([[1, 1], [1, 1]]);
        assert!(enumerate_piece(&square, 1, 1).is_empty());
        assert!(enumerate_piece(&square, 1, 8).is_empty());

        let l_tromino = piece([[1, 1], [1, 0]]);
        assert!(enumerate_piece(&l_tromino, 1, 4).is_empty());
    }

    #[test]
    fn test_enumerate_only_fitting_orientations() {
        let l_tetromino = Shape::try_from([[1u8, 0], [1, 0], [1, 1]]).unwrap();
        let piece = PieceType::new(&l_tetromino, ShapeTransform::PureRotation);
        let placements = enumerate_piece(&piece, 2, 3);

        // Only the two rotations lying on their side fit in two rows.
        assert_eq!(placements.len(), 2);
        assert_eq!(
            placements[0].cells(),
            cells(&[(0, 0), (0, 1), (0, 2), (1, 0)])
        );
        assert_eq!(
            placements[1].cells(),
            cells(&[(0, 2), (1, 0), (1, 1), (1, 2)])
        );
    }

    #[test]
    fn test_enumerate_translations_in_row_major_order() {
        let domino = Shape::try_from([[1u8, 1]]).unwrap().canonicalize();
        let placements = enumerate(&domino, 2, 3);
        let firsts: Vec<Cell> = placements.iter().map(|p| p.cells()[0]).collect();
        assert_eq!(firsts, cells(&[(0, 0), (0, 1), (1, 0), (1, 1)]));
        assert!(placements.iter().all(|p| p.area() == 2));
    }

    #[test]
    fn test_enumerate_counts_on_open_board() {
        // F-pentomino: 8 orientations, each with a 3 × 3 bounding box.
        let f = piece([[0, 1, 1], [1, 1, 0], [0, 1, 0]]);
        assert_eq!(f.orientations().len(), 8);
        assert_eq!(enumerate_piece(&f, 8, 8).len(), 8 * 6 * 6);

        // Plus-pentomino: a single orientation.
        let plus = piece([[0, 1, 0], [1, 1, 1], [0, 1, 0]]);
        assert_eq!(plus.orientations().len(), 1);
        assert_eq!(enumerate_piece(&plus, 8, 8).len(), 6 * 6);

        // I-tromino: horizontal and vertical.
        let bar = piece([[1, 1, 1]]);
        assert_eq!(enumerate_piece(&bar, 3, 3).len(), 6);
        assert_eq!(enumerate_piece(&bar, 1, 3).len(), 1);
    }

    #[test]
    fn test_enumerated_placements_are_distinct_and_in_bounds() {
        let pieces = [
            piece([[1, 1, 1], [1, 0, 1]]),
            piece([[1, 1], [1, 1]]),
            piece([[1, 1, 1, 1]]),
            piece([[1, 0, 0], [1, 1, 1]]),
        ];
        for piece in &pieces {
            for (rows, cols) in [(1, 4), (2, 2), (3, 5), (4, 4), (6, 2)] {
                let placements = enumerate_piece(piece, rows, cols);
                let distinct: HashSet<_> = placements.iter().map(|p| p.cells()).collect();
                assert_eq!(distinct.len(), placements.len());
                for placement in &placements {
                    assert_eq!(placement.area(), piece.area());
                    assert!(placement.cells().iter().all(|c| c.row >= 0
                        && c.col >= 0
                        && (c.row as usize) < rows
                        && (c.col as usize) < cols));
                }
            }
        }
    }
}
