//! Checking a hand-drawn layout against the piece table and the enumerated
//! placements.
//!
//! This is a diagnostic aid: when the solver reports a region infeasible but
//! a layout is believed to exist, drawing the layout as text and verifying it
//! pinpoints the piece whose shape or placement list disagrees.
//!
//! A layout has one line per region row, `.` for an empty cell and a letter
//! `A`–`Z` for a cell covered by the piece of that letter:
//!
//! ```text
//! AAA.
//! ABAB
//! ABAB
//! .BBB
//! ```

use crate::{Cell, LayoutError, Region, Shape, Solver};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Assignment of layout letters to piece table indices.
///
/// By default `A` is piece 0, `B` piece 1 and so on up to `Z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMap([usize; 26]);

impl Default for LetterMap {
    fn default() -> Self {
        let mut indices = [0; 26];
        for (i, index) in indices.iter_mut().enumerate() {
            *index = i;
        }
        LetterMap(indices)
    }
}

impl LetterMap {
    /// The default map with the given comma separated overrides applied, for
    /// example `"A=0,B=4,C=4"`.
    pub fn parse(overrides: &str) -> Result<Self, LayoutError> {
        let mut map = LetterMap::default();

        for entry in overrides.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let invalid = || LayoutError::InvalidMapEntry(entry.to_owned());
            let (letter, index) = entry.split_once('=').ok_or_else(invalid)?;
            let mut letters = letter.trim().chars();
            let (Some(letter), None) = (letters.next(), letters.next()) else {
                return Err(invalid());
            };
            if !letter.is_ascii_uppercase() {
                return Err(invalid());
            }
            let index = index.trim().parse().map_err(|_| invalid())?;
            map.set(letter, index);
        }

        Ok(map)
    }

    /// Map `letter` to piece `index`.
    ///
    /// # Panics
    ///  - If `letter` is not in `A`–`Z`.
    pub fn set(&mut self, letter: char, index: usize) {
        assert!(letter.is_ascii_uppercase(), "Letter must be in A-Z.");
        self.0[letter as usize - 'A' as usize] = index;
    }

    /// The piece index of `letter`, or `None` if it is not in `A`–`Z`.
    pub fn get(&self, letter: char) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| self.0[letter as usize - 'A' as usize])
    }
}

/// A parsed layout: the cells covered by each letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    letters: BTreeMap<char, Vec<Cell>>,
}

impl Layout {
    /// Parse a layout of exactly `rows` lines of `cols` characters each.
    /// Leading and trailing blank space around the whole text is ignored.
    pub fn parse(text: &str, rows: usize, cols: usize) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = text.trim().lines().map(str::trim_end).collect();
        if lines.len() != rows {
            return Err(LayoutError::RowCount {
                expected: rows,
                found: lines.len(),
            });
        }

        let mut letters: BTreeMap<char, Vec<Cell>> = BTreeMap::new();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(LayoutError::ColumnCount {
                    row,
                    expected: cols,
                    found,
                });
            }

            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '.' => {}
                    'A'..='Z' => letters
                        .entry(ch)
                        .or_default()
                        .push(Cell::new(row as i32, col as i32)),
                    _ => return Err(LayoutError::InvalidChar { ch, row, col }),
                }
            }
        }

        Ok(Layout {
            rows,
            cols,
            letters,
        })
    }

    /// The letters used, each with its cells in row-major order.
    pub fn letters(&self) -> &BTreeMap<char, Vec<Cell>> {
        &self.letters
    }

    /// Check that every letter draws a copy of the piece it maps to, allowing
    /// the orientations permitted by the solver's configuration.
    pub fn verify_shapes(&self, solver: &Solver<'_>, map: &LetterMap) -> Result<(), LayoutError> {
        let pieces = solver.pieces();

        for (&letter, cells) in &self.letters {
            let index = map.get(letter).unwrap_or(usize::MAX);
            let piece = pieces.get(index).ok_or(LayoutError::PieceOutOfRange {
                letter,
                index,
                pieces: pieces.len(),
            })?;

            if cells.len() != piece.area() {
                return Err(LayoutError::AreaMismatch {
                    letter,
                    index,
                    expected: piece.area(),
                    found: cells.len(),
                });
            }

            let drawn = Shape::new(cells.iter().copied())?.canonicalize();
            if !piece
                .orientations_under(solver.config().transform)
                .contains(&drawn)
            {
                return Err(LayoutError::ShapeMismatch { letter, index });
            }
        }

        Ok(())
    }

    /// Check that every letter's cells appear verbatim in the placement list
    /// the solver enumerates for that letter's piece on `region`.
    ///
    /// Letters whose piece the region does not require are skipped.
    pub fn verify_placements(
        &self,
        solver: &Solver<'_>,
        region: &Region,
        map: &LetterMap,
    ) -> Result<(), LayoutError> {
        if self.rows != region.rows() {
            return Err(LayoutError::RowCount {
                expected: region.rows(),
                found: self.rows,
            });
        }
        if self.cols != region.cols() {
            return Err(LayoutError::ColumnCount {
                row: 0,
                expected: region.cols(),
                found: self.cols,
            });
        }

        let region_pieces = solver.region_pieces(region)?;
        let type_of: HashMap<usize, usize> = region_pieces
            .iter()
            .enumerate()
            .flat_map(|(ty, piece)| piece.indices.iter().map(move |&index| (index, ty)))
            .collect();
        let placed: Vec<HashSet<&[Cell]>> = region_pieces
            .iter()
            .map(|piece| piece.placements.iter().map(|p| p.cells()).collect())
            .collect();

        for (&letter, cells) in &self.letters {
            let Some(index) = map.get(letter) else {
                continue;
            };
            let Some(&ty) = type_of.get(&index) else {
                log::debug!(
                    "Skipping letter [{}]: piece [{}] is not required.",
                    letter,
                    index
                );
                continue;
            };

            if !placed[ty].contains(cells.as_slice()) {
                return Err(LayoutError::MissingPlacement { letter, index });
            }
        }

        Ok(())
    }
}
