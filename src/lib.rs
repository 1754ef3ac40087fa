//! Finds every dictionary word that can be traced on a boggle board.
//!
//! Words are spelled by walking between adjacent cells (diagonals included) without
//! using a cell twice. The dictionary is a prefix tree so branches that can't lead
//! to a word are dropped as soon as they are seen.

pub mod boggle;
pub mod log;

pub use crate::boggle::{
    get_all_boggle_words, BoardSearcher, BoggleError, BoggleSolver, Grid, PrefixDictionary, SearchConfig,
    SearchOutcome, SearchStats,
};
