use std::slice::Iter;

/// One step to a neighbouring cell. Iteration order is fixed so searches are reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    West,
    East,
    South,
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRS: [Direction; 8] = [
            Direction::North,
            Direction::West,
            Direction::East,
            Direction::South,
            Direction::NorthWest,
            Direction::NorthEast,
            Direction::SouthEast,
            Direction::SouthWest,
        ];
        DIRS.iter()
    }

    /// (row, col) delta of a single step
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::West => (0, -1),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::NorthWest => (-1, -1),
            Self::NorthEast => (-1, 1),
            Self::SouthEast => (1, 1),
            Self::SouthWest => (1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring position in `dir`, or None if it falls off a `size` x `size` grid
    pub fn step(&self, dir: Direction, size: usize) -> Option<Position> {
        let (dr, dc) = dir.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < size && col < size {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// All in-bounds neighbours, in `Direction::iter` order
    pub fn adjacent(&self, size: usize) -> impl Iterator<Item = Position> {
        let pos = *self;
        Direction::iter().filter_map(move |&d| pos.step(d, size))
    }

    /// True if `other` is one king's move away
    pub fn is_adjacent(&self, other: Position) -> bool {
        *self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Converts the row/col to a 1d index
    pub fn as_index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }
}
