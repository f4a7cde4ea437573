use core::num::Saturating;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Square grid holding the mine layout and which cells have been revealed.
///
/// The mine mask is fixed once the board is built; the revealed mask only ever grows. Boards are only built through
/// [`Board::from_mine_coords`] and the generators, which keep the counts in step with the masks.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    size: Coord,
    mine_mask: Array2<bool>,
    mine_count: CellCount,
    revealed_mask: Array2<bool>,
    revealed_count: Saturating<CellCount>,
}

impl Board {
    /// Board with mines at every coordinate in `mine_coords`, duplicates collapse into one mine.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(size);
        for &coords in mine_coords {
            let index = coords.to_nd_index(size).ok_or(GameError::InvalidCoords)?;
            if !board.mine_mask[index] {
                board.mine_mask[index] = true;
                board.mine_count += 1;
            }
        }
        Ok(board)
    }

    pub(crate) fn empty(size: Coord) -> Self {
        let side = usize::from(size);
        Self {
            size,
            mine_mask: Array2::default([side, side]),
            mine_count: 0,
            revealed_mask: Array2::default([side, side]),
            revealed_count: Saturating(0),
        }
    }

    /// Places a mine, returns `false` when the cell already held one or is out of bounds.
    pub(crate) fn insert_mine(&mut self, coords: Coord2) -> bool {
        match coords.to_nd_index(self.size) {
            Some(index) if !self.mine_mask[index] => {
                self.mine_mask[index] = true;
                self.mine_count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn is_in_bounds(&self, coords: Coord2) -> bool {
        coords.to_nd_index(self.size).is_some()
    }

    /// Out-of-bounds coordinates never hold a mine.
    pub fn is_mine(&self, coords: Coord2) -> bool {
        coords
            .to_nd_index(self.size)
            .is_some_and(|index| self.mine_mask[index])
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        coords
            .to_nd_index(self.size)
            .is_some_and(|index| self.revealed_mask[index])
    }

    /// Returns whether the cell was newly revealed; repeated or out-of-bounds calls change nothing.
    pub fn mark_revealed(&mut self, coords: Coord2) -> bool {
        let Some(index) = coords.to_nd_index(self.size) else {
            return false;
        };
        if self.revealed_mask[index] {
            return false;
        }
        self.revealed_mask[index] = true;
        self.revealed_count += 1;
        true
    }

    pub fn neighbor_mine_count(&self, coords: Coord2) -> u8 {
        let mut count = 0;
        for pos in NeighborIter::new(coords) {
            if self.is_mine(pos) {
                count += 1;
            }
        }
        count
    }

    /// Whether every cell without a mine has been revealed.
    ///
    /// Only meaningful while no mine is revealed, which is the case for as long as the game is being played.
    pub fn all_safe_revealed(&self) -> bool {
        self.revealed_count.0 == self.safe_cell_count()
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| to_coords(x, y))
    }
}

/// Inverse of [`ToNdIndex`] for indices that came out of a board's own arrays.
fn to_coords(x: usize, y: usize) -> Coord2 {
    // board arrays are at most `Coord::MAX` wide, so `index + 1` always fits
    ((x + 1) as Coord, (y + 1) as Coord)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn out_of_bounds_probes_are_never_mines() {
        let board = Board::from_mine_coords(2, &[(1, 1), (2, 2)]).unwrap();

        assert!(board.is_mine((1, 1)));
        assert!(!board.is_mine((0, 0)));
        assert!(!board.is_mine((3, 3)));
        assert!(!board.is_in_bounds((0, 1)));
        assert!(board.is_in_bounds((2, 1)));
    }

    #[test]
    fn from_mine_coords_rejects_outside_and_collapses_duplicates() {
        assert_eq!(
            Board::from_mine_coords(3, &[(4, 1)]),
            Err(GameError::InvalidCoords)
        );

        let board = Board::from_mine_coords(3, &[(2, 2), (2, 2)]).unwrap();
        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.safe_cell_count(), 8);
    }

    #[test]
    fn mark_revealed_is_idempotent() {
        let mut board = Board::from_mine_coords(3, &[(3, 3)]).unwrap();

        assert!(board.mark_revealed((1, 1)));
        assert!(!board.mark_revealed((1, 1)));
        assert!(!board.mark_revealed((0, 1)));

        assert!(board.is_revealed((1, 1)));
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn neighbor_mine_count_handles_edges() {
        let board = Board::from_mine_coords(3, &[(1, 2), (2, 1), (3, 3)]).unwrap();

        assert_eq!(board.neighbor_mine_count((1, 1)), 2);
        assert_eq!(board.neighbor_mine_count((2, 2)), 3);
        assert_eq!(board.neighbor_mine_count((3, 1)), 1);
        // the cell itself does not count
        assert_eq!(board.neighbor_mine_count((3, 3)), 0);
    }

    #[test]
    fn mine_coords_lists_layout() {
        let board = Board::from_mine_coords(4, &[(4, 1), (2, 3)]).unwrap();

        let mines: Vec<_> = board.mine_coords().collect();

        assert_eq!(mines, [(2, 3), (4, 1)]);
    }

    #[test]
    fn counts_serialize_alongside_masks() {
        let mut board = Board::from_mine_coords(2, &[(1, 1)]).unwrap();
        board.mark_revealed((2, 2));

        let json = serde_json::to_value(&board).unwrap();

        assert_eq!(json["size"], 2);
        assert_eq!(json["mine_count"], 1);
        assert_eq!(json["revealed_count"], 1);
        assert_eq!(board.safe_cell_count(), 3);
    }

    #[test]
    fn all_safe_revealed_tracks_revealed_count() {
        let mut board = Board::from_mine_coords(2, &[(1, 1), (1, 2), (2, 1)]).unwrap();

        assert!(!board.all_safe_revealed());
        board.mark_revealed((2, 2));
        assert!(board.all_safe_revealed());
    }
}
