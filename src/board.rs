//! Dense bitset of the available cells of one rectangular region.
//!
//! Cells are numbered row-major, cell `(row, col)` having index
//! `row * cols + col`, and packed 64 to a word.

use crate::placement::Placement;

const WORD_BITS: usize = u64::BITS as usize;

/// The set of currently available cells of a `rows × cols` region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    words: Vec<u64>,
}

impl Board {
    /// A board on which every cell is available.
    pub fn full(rows: usize, cols: usize) -> Self {
        let len = rows * cols;
        let mut words = vec![u64::MAX; (len + WORD_BITS - 1) / WORD_BITS];
        if len % WORD_BITS != 0 {
            if let Some(last) = words.last_mut() {
                *last = (1u64 << (len % WORD_BITS)) - 1;
            }
        }

        Board { rows, cols, words }
    }

    /// Number of available cells.
    pub fn available(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Whether the cell at `(row, col)` is available. Out-of-range
    /// coordinates are never available.
    #[cfg(test)]
    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.bit(row * self.cols + col)
    }

    /// Whether every cell of `placement` is available.
    pub fn fits(&self, placement: &Placement) -> bool {
        let (first_word, mask) = placement.mask();
        debug_assert!(first_word + mask.len() <= self.words.len());

        self.words[first_word..]
            .iter()
            .zip(mask)
            .all(|(word, bits)| word & bits == *bits)
    }

    /// A copy of this board with the cells of `placement` taken.
    pub fn without(&self, placement: &Placement) -> Board {
        debug_assert!(self.fits(placement));
        let mut board = self.clone();
        let (first_word, mask) = placement.mask();
        for (word, bits) in board.words[first_word..].iter_mut().zip(mask) {
            *word &= !bits;
        }

        board
    }

    /// The raw bit words, usable as a structural fingerprint.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Number of available cells lying in 4-connected components of at
    /// least `min_size` cells.
    ///
    /// Cells in smaller components can never be covered by a piece of area
    /// `min_size` or more.
    pub fn cells_in_components_of_at_least(&self, min_size: usize) -> usize {
        if min_size <= 1 {
            return self.available();
        }

        let mut visited = vec![0u64; self.words.len()];
        let mut stack = Vec::with_capacity(64);
        let mut usable = 0;

        for start in 0..self.rows * self.cols {
            if !self.bit(start) || bit_at(&visited, start) {
                continue;
            }

            set_bit(&mut visited, start);
            stack.push(start);
            let mut size = 0;
            while let Some(index) = stack.pop() {
                size += 1;
                let (row, col) = (index / self.cols, index % self.cols);
                let neighbors = [
                    (row > 0).then(|| index - self.cols),
                    (row + 1 < self.rows).then(|| index + self.cols),
                    (col > 0).then(|| index - 1),
                    (col + 1 < self.cols).then(|| index + 1),
                ];
                for next in neighbors.into_iter().flatten() {
                    if self.bit(next) && !bit_at(&visited, next) {
                        set_bit(&mut visited, next);
                        stack.push(next);
                    }
                }
            }

            if size >= min_size {
                usable += size;
            }
        }

        usable
    }

    #[inline]
    fn bit(&self, index: usize) -> bool {
        bit_at(&self.words, index)
    }
}

#[inline]
fn bit_at(words: &[u64], index: usize) -> bool {
    words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
}

#[inline]
fn set_bit(words: &mut [u64], index: usize) {
    words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
}

/// Sparse word mask for a set of cell indices: the index of the first word
/// touched, and the words from there up to the last word touched.
pub(crate) fn mask_for(indices: impl IntoIterator<Item = usize>) -> (usize, Vec<u64>) {
    let indices: Vec<usize> = indices.into_iter().collect();
    let (Some(&lo), Some(&hi)) = (indices.iter().min(), indices.iter().max()) else {
        return (0, Vec::new());
    };

    let first_word = lo / WORD_BITS;
    let mut mask = vec![0u64; hi / WORD_BITS - first_word + 1];
    for index in indices {
        mask[index / WORD_BITS - first_word] |= 1 << (index % WORD_BITS);
    }

    (first_word, mask)
}
