// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    #[serde(rename = "across")]
    Across,
    #[serde(rename = "down")]
    Down,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Across, Direction::Down];

    #[inline(always)]
    pub fn is_down(self) -> bool {
        self == Direction::Down
    }

    #[inline(always)]
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    // (row step, col step)
    #[inline(always)]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct RowCol {
    pub row: i8,
    pub col: i8,
}

impl RowCol {
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    // may step off the board, callers check with Dim::contains.
    #[inline(always)]
    pub fn offset(self, direction: Direction, n: i8) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr * n,
            col: self.col + dc * n,
        }
    }
}

impl std::fmt::Display for RowCol {
    // 1-based, the way players read coordinates.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row as i16 + 1, self.col as i16 + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn contains(&self, pos: RowCol) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    // every origin where a word of len fits inside the board.
    #[inline(always)]
    pub fn origins(&self, direction: Direction, len: i8) -> impl Iterator<Item = RowCol> + use<> {
        let (row_end, col_end) = match direction {
            Direction::Across => (self.rows, self.cols - len + 1),
            Direction::Down => (self.rows - len + 1, self.cols),
        };
        let col_end = col_end.max(0);
        (0..row_end.max(0)).flat_map(move |row| (0..col_end).map(move |col| RowCol { row, col }))
    }
}
