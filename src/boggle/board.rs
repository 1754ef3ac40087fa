use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rand::Rng;

use super::bag::LetterBag;
use super::error::BoggleError;
use super::util::Position;

/// Square grid of letters, stored row-major. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Builds a `size` x `size` grid. The number of cells must match exactly.
    pub fn new(size: usize, cells: Vec<char>) -> Result<Self, BoggleError> {
        check_count(size, cells.len())?;
        Ok(Self { size, cells })
    }

    /// Grid from a flat string of letters, e.g. "acdefrteiostnesn"
    pub fn from_letters(size: usize, letters: &str) -> Result<Self, BoggleError> {
        Self::from_chars(size, letters.chars())
    }

    pub fn from_chars<I: IntoIterator<Item = char>>(size: usize, letters: I) -> Result<Self, BoggleError> {
        Self::new(size, letters.into_iter().collect())
    }

    /// Grid from a list of one-letter strings. Anything that isn't exactly one
    /// character is rejected with its index.
    pub fn from_strings<S: AsRef<str>>(size: usize, letters: &[S]) -> Result<Self, BoggleError> {
        check_count(size, letters.len())?;
        let cells = letters
            .iter()
            .enumerate()
            .map(|(index, s)| {
                let s = s.as_ref();
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(BoggleError::InvalidLetter {
                        index,
                        value: s.to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(size, cells)
    }

    /// Grid from nested rows; every row must be as long as there are rows
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, BoggleError> {
        let size = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(BoggleError::NotSquare {
                row,
                len: r.len(),
                expected: size,
            });
        }
        let flat = rows.iter().flatten().collect::<Vec<_>>();
        Self::from_strings(size, &flat)
    }

    /// Reads a board stored as a JSON array of rows, e.g. `[["c","a"],["t","s"]]`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BoggleError> {
        let mut file = File::open(path.as_ref())?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        let raw_board: Vec<Vec<String>> = serde_json::from_str(&data)?;
        Self::from_rows(&raw_board)
    }

    /// Rolls a board with letters drawn from the default letter bag
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Result<Self, BoggleError> {
        let cells = LetterBag::default().draw(cell_count(size)?, rng);
        Ok(Self { size, cells })
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row < self.size && pos.col < self.size {
            Some(self.cells[pos.as_index(self.size)])
        } else {
            None
        }
    }

    /// Every cell position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size * size).map(move |i| Position::from_index(i, size))
    }

    /// Each row as a string
    pub fn rows(&self) -> Vec<String> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().collect())
            .collect()
    }
}

/// Number of cells on a `size` x `size` board, if it fits in a usize
fn cell_count(size: usize) -> Result<usize, BoggleError> {
    size.checked_mul(size).ok_or(BoggleError::BoardTooLarge { size })
}

fn check_count(size: usize, actual: usize) -> Result<(), BoggleError> {
    let expected = cell_count(size)?;
    if actual != expected {
        return Err(BoggleError::LetterCountMismatch { expected, actual });
    }
    Ok(())
}

impl std::ops::Index<Position> for Grid {
    type Output = char;

    fn index(&self, index: Position) -> &Self::Output {
        &self.cells[index.as_index(self.size)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .chars()
                .flat_map(char::to_uppercase)
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
