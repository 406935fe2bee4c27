use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Neighbour counts are reported up to this value even when more mines touch a cell.
pub const MAX_NEIGHBOR_MINES: u8 = 6;

/// Bonus points carried by gold cells.
pub const GOLD_VALUES: core::ops::RangeInclusive<u8> = 7..=10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coords: Coord2,
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Mines around the cell, capped at [`MAX_NEIGHBOR_MINES`]. Always 0 on mines.
    pub neighbor_mines: u8,
    /// Bonus value, present only on gold cells.
    pub gold_value: Option<u8>,
    /// Stamped on the first and only reveal.
    pub revealed_by: Option<PlayerId>,
}

impl Cell {
    pub const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            neighbor_mines: 0,
            gold_value: None,
            revealed_by: None,
        }
    }

    pub const fn is_gold(&self) -> bool {
        self.gold_value.is_some()
    }

    /// Points a reveal of this cell is worth, before any mine penalty.
    pub fn points(&self) -> i32 {
        match self.gold_value {
            Some(value) => value.into(),
            None => self.neighbor_mines.into(),
        }
    }
}

/// Square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// All-clear board with nothing revealed, flagged or mined.
    pub fn empty(side: Coord) -> Self {
        let side = usize::from(side);
        Self {
            cells: Array2::from_shape_fn((side, side), |(row, col)| {
                Cell::new((row as Coord, col as Coord))
            }),
        }
    }

    /// Builds a board with mines at exactly `mine_coords`, filling in neighbour counts.
    pub fn from_mine_coords(side: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(side);

        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board[coords].is_mine = true;
        }

        board.compute_neighbor_counts();
        Ok(board)
    }

    pub fn side(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.side(), self.side())
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let side = self.side();
        coords.0 < side && coords.1 < side
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.contains(coords).then(|| &self[coords])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.side())
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, Cell>> {
        self.cells.rows().into_iter()
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_mine)
    }

    pub fn flag_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_revealed)
    }

    pub fn gold_count(&self) -> CellCount {
        self.count_where(Cell::is_gold)
    }

    /// Whether every cell is either revealed or a mine; gold cells still have to be revealed.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_revealed || cell.is_mine)
    }

    /// Mines among the Moore neighbours of `coords`, without the display cap.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }

    pub(crate) fn compute_neighbor_counts(&mut self) {
        let side = self.side();
        for row in 0..side {
            for col in 0..side {
                let coords = (row, col);
                let count = if self[coords].is_mine {
                    0
                } else {
                    self.adjacent_mine_count(coords).min(MAX_NEIGHBOR_MINES)
                };
                self[coords].neighbor_mines = count;
            }
        }
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|cell| pred(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_all_clear() {
        let board = Board::empty(8);

        assert_eq!(board.side(), 8);
        assert_eq!(board.total_cells(), 64);
        assert_eq!(board.mine_count(), 0);
        assert_eq!(board[(3, 5)].coords, (3, 5));
        assert!(board.cells().all(|cell| !cell.is_revealed && cell.revealed_by.is_none()));
    }

    #[test]
    fn neighbor_count_is_capped_at_six() {
        let ring = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
        let board = Board::from_mine_coords(3, &ring).unwrap();

        assert_eq!(board.adjacent_mine_count((1, 1)), 8);
        assert_eq!(board[(1, 1)].neighbor_mines, MAX_NEIGHBOR_MINES);
        assert_eq!(board[(0, 0)].neighbor_mines, 0);
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds() {
        assert_eq!(
            Board::from_mine_coords(4, &[(4, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn cleared_ignores_mines_but_not_gold() {
        let mut board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();
        board[(1, 1)].gold_value = Some(8);
        for coords in [(0, 1), (1, 0)] {
            board[coords].is_revealed = true;
        }

        assert!(!board.is_cleared());

        board[(1, 1)].is_revealed = true;
        assert!(board.is_cleared());
    }

    #[test]
    fn gold_cells_score_their_value() {
        let mut cell = Cell::new((0, 0));
        cell.neighbor_mines = 2;
        assert_eq!(cell.points(), 2);

        cell.gold_value = Some(9);
        assert_eq!(cell.points(), 9);
    }
}
