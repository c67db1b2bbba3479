use crate::coords::CellCoord;
use crate::Random;
use arrayvec::ArrayVec;
use std::ops::{Index, IndexMut};

// Same visiting order as the classic eight-direction scan.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardSize {
    pub rows: u32,
    pub columns: u32,
}

impl BoardSize {
    pub fn new(rows: u32, columns: u32) -> Self {
        assert!(rows > 0 && columns > 0);
        Self { rows, columns }
    }

    pub fn num_cells(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub fn contains(&self, loc: Loc) -> bool {
        loc.row < self.rows && loc.col < self.columns
    }
}

/// Dense row-major grid of cell states, indexed by [`Loc`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<bool>,
}

impl Board {
    /// Allocates a fresh all-dead board. Never reuses an existing buffer.
    pub fn new_empty(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![false; size.num_cells()],
        }
    }

    pub fn with_live_cells<I>(size: BoardSize, live: I) -> Self
    where
        I: IntoIterator<Item = Loc>,
    {
        let mut result = Self::new_empty(size);
        for loc in live {
            result[loc] = true;
        }
        result
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn rows(&self) -> u32 {
        self.size.rows
    }

    pub fn columns(&self) -> u32 {
        self.size.columns
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn num_live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn get(&self, loc: Loc) -> Option<bool> {
        loc.grid_index(self.size).map(|index| self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> Option<&mut bool> {
        loc.grid_index(self.size).map(|index| &mut self.cells[index])
    }

    /// Row-major iteration over every location on the board.
    pub fn locs(&self) -> impl Iterator<Item = Loc> + '_ {
        let columns = self.size.columns;
        (0..self.size.rows).flat_map(move |row| (0..columns).map(move |col| Loc::new(row, col)))
    }

    /// Flips the cell at `coord`. Returns false, leaving the board untouched,
    /// when `coord` lies outside the board.
    pub fn toggle(&mut self, coord: CellCoord) -> bool {
        match self.cell_mut(Loc::from(coord)) {
            Some(cell) => {
                *cell = !*cell;
                true
            }
            None => false,
        }
    }

    pub fn randomize(&mut self, rand: &mut Random) {
        for cell in self.cells.iter_mut() {
            *cell = rand.next_bool(0.5);
        }
    }

    /// Live cells in render coordinates, ordered by row then column.
    pub fn live_cells(&self) -> Vec<CellCoord> {
        self.locs()
            .filter(|&loc| self[loc])
            .map(CellCoord::from)
            .collect()
    }
}

impl Index<Loc> for Board {
    type Output = bool;

    fn index(&self, loc: Loc) -> &Self::Output {
        loc.grid_index(self.size)
            .map(|index| &self.cells[index])
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl IndexMut<Loc> for Board {
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

/// The in-bounds part of the Moore neighborhood around a center cell.
/// There is no wraparound: a corner has three neighbors, an edge cell five.
pub struct Neighborhood {
    size: BoardSize,
    center: Loc,
}

impl Neighborhood {
    pub fn new(size: BoardSize, center: Loc) -> Self {
        Self { size, center }
    }

    pub fn locs(&self) -> ArrayVec<Loc, 8> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| self.center.offset(d_row, d_col, self.size))
            .collect()
    }
}

/// Counts live cells in the Moore neighborhood of `loc`, in `0..=8`.
pub fn count_neighbors(board: &Board, loc: Loc) -> u8 {
    Neighborhood::new(board.size(), loc)
        .locs()
        .into_iter()
        .filter(|&neighbor| board[neighbor])
        .count() as u8
}

/// Computes the following generation into a newly allocated board. Only
/// `board` is read, so cells updated earlier in the pass never feed back.
pub fn next_generation(board: &Board) -> Board {
    let mut next = Board::new_empty(board.size());
    for loc in board.locs() {
        next[loc] = next_cell_state(board[loc], count_neighbors(board, loc));
    }
    next
}

fn next_cell_state(alive: bool, neighbors: u8) -> bool {
    match neighbors {
        3 => true,
        2 => alive,
        _ => false,
    }
}

/// Storage coordinate: `row` first, then `col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, size: BoardSize) -> Option<usize> {
        if size.contains(*self) {
            Some(self.row as usize * size.columns as usize + self.col as usize)
        } else {
            None
        }
    }

    fn offset(&self, d_row: i64, d_col: i64, size: BoardSize) -> Option<Loc> {
        let row = self.row as i64 + d_row;
        let col = self.col as i64 + d_col;
        if (0..size.rows as i64).contains(&row) && (0..size.columns as i64).contains(&col) {
            Some(Loc::new(row as u32, col as u32))
        } else {
            None
        }
    }
}
