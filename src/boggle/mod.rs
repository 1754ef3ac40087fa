use std::collections::BTreeSet;
use std::path::Path;

pub mod bag;
pub mod board;
pub mod dictionary;
pub mod error;
pub mod path;
pub mod search;
pub mod util;

pub use self::board::Grid;
pub use self::dictionary::PrefixDictionary;
pub use self::error::BoggleError;
pub use self::search::{BoardSearcher, SearchConfig, SearchOutcome, SearchStats, DEFAULT_MIN_WORD_LENGTH};

/// A loaded dictionary plus search settings, reused across any number of boards.
/// The dictionary is loaded once when the solver is built and shared read-only after that.
#[derive(Debug)]
pub struct BoggleSolver {
    dictionary: PrefixDictionary,
    config: SearchConfig,
}

impl BoggleSolver {
    pub fn new(dictionary: PrefixDictionary, config: SearchConfig) -> Self {
        Self { dictionary, config }
    }

    /// Loads the word list at `path`, dropping words shorter than the configured minimum
    pub fn from_dictionary_path<P: AsRef<Path>>(path: P, config: SearchConfig) -> Result<Self, BoggleError> {
        let dictionary = PrefixDictionary::load_from_path(path, config.min_word_length)?;
        Ok(Self::new(dictionary, config))
    }

    pub fn dictionary(&self) -> &PrefixDictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn solve(&self, grid: &Grid) -> SearchOutcome {
        BoardSearcher::with_config(grid, &self.dictionary, self.config).find_words_with_stats()
    }

    pub fn solve_letters(&self, size: usize, letters: &str) -> Result<BTreeSet<String>, BoggleError> {
        let grid = Grid::from_letters(size, letters)?;
        Ok(self.solve(&grid).words)
    }

    pub fn solve_chars<I: IntoIterator<Item = char>>(
        &self,
        size: usize,
        letters: I,
    ) -> Result<BTreeSet<String>, BoggleError> {
        let grid = Grid::from_chars(size, letters)?;
        Ok(self.solve(&grid).words)
    }

    pub fn solve_strings<S: AsRef<str>>(&self, size: usize, letters: &[S]) -> Result<BTreeSet<String>, BoggleError> {
        let grid = Grid::from_strings(size, letters)?;
        Ok(self.solve(&grid).words)
    }
}

/// Finds every word from `dictionary` on a `size` x `size` board given as a flat string.
/// Fails before searching if the letter count doesn't match the board size.
pub fn get_all_boggle_words(
    size: usize,
    letters: &str,
    dictionary: &PrefixDictionary,
    min_word_length: usize,
) -> Result<BTreeSet<String>, BoggleError> {
    let grid = Grid::from_letters(size, letters)?;
    Ok(search::find_words(&grid, dictionary, min_word_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver() -> BoggleSolver {
        let dictionary = PrefixDictionary::from_words(["cat", "cats", "scat", "act", "tact", "at"], 3);
        BoggleSolver::new(
            dictionary,
            SearchConfig {
                min_word_length: 3,
                parallel: true,
            },
        )
    }

    #[test]
    fn test_input_forms_agree() {
        let solver = solver();
        let from_str = solver.solve_letters(2, "cats").unwrap();
        let from_chars = solver.solve_chars(2, vec!['c', 'a', 't', 's']).unwrap();
        let from_strings = solver.solve_strings(2, &["c", "a", "t", "s"]).unwrap();

        assert_eq!(from_str, from_chars);
        assert_eq!(from_str, from_strings);
        assert!(from_str.contains("cats"));
        assert!(from_str.contains("scat"));
        assert!(from_str.contains("act"));
        // One 't' on the board
        assert!(!from_str.contains("tact"));
        // Filtered out at load time
        assert!(!solver.dictionary().is_word("at"));
    }

    #[test]
    fn test_validation_before_search() {
        let solver = solver();
        assert!(matches!(
            solver.solve_letters(3, "cats").unwrap_err(),
            BoggleError::LetterCountMismatch { expected: 9, actual: 4 }
        ));
        assert!(matches!(
            solver.solve_strings(2, &["c", "at", "t", "s"]).unwrap_err(),
            BoggleError::InvalidLetter { index: 1, .. }
        ));
    }

    #[test]
    fn test_get_all_boggle_words() {
        let dictionary = PrefixDictionary::from_words(["cat"], 3);
        let words = get_all_boggle_words(2, "cats", &dictionary, 3).unwrap();
        assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["cat"]);
        assert!(get_all_boggle_words(2, "cat", &dictionary, 3).is_err());
    }
}
