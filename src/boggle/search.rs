use std::collections::BTreeSet;
use std::ops::AddAssign;

use log::{debug, trace};
use rayon::prelude::*;
use serde::Serialize;

use super::board::Grid;
use super::dictionary::PrefixDictionary;
use super::path::PathMask;
use super::util::Position;

/// Shortest word counted when nothing else is configured
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Minimum length for anything to be considered a word
    pub min_word_length: usize,
    /// Search start cells on the rayon pool instead of the calling thread
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            parallel: true,
        }
    }
}

/// Counters describing how much of the board a search actually walked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Cells entered, start cells included
    pub paths_explored: usize,
    /// Prefix lookups made before entering a cell, start cells included
    pub prefix_checks: usize,
    /// Prefix lookups that failed, i.e. branches never entered
    pub pruned: usize,
    /// Dictionary hits before de-duplication
    pub words_recorded: usize,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.paths_explored += rhs.paths_explored;
        self.prefix_checks += rhs.prefix_checks;
        self.pruned += rhs.pruned;
        self.words_recorded += rhs.words_recorded;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub words: BTreeSet<String>,
    pub stats: SearchStats,
}

/// Everything found from a single start cell
#[derive(Debug, Default)]
struct Discoveries {
    words: Vec<String>,
    stats: SearchStats,
}

/// Depth-first search over every simple path on a grid, pruned by dictionary prefixes
#[derive(Debug, Clone, Copy)]
pub struct BoardSearcher<'a> {
    grid: &'a Grid,
    dictionary: &'a PrefixDictionary,
    config: SearchConfig,
}

impl<'a> BoardSearcher<'a> {
    pub fn new(grid: &'a Grid, dictionary: &'a PrefixDictionary, min_word_length: usize) -> Self {
        Self::with_config(
            grid,
            dictionary,
            SearchConfig {
                min_word_length,
                ..SearchConfig::default()
            },
        )
    }

    pub fn with_config(grid: &'a Grid, dictionary: &'a PrefixDictionary, config: SearchConfig) -> Self {
        Self {
            grid,
            dictionary,
            config,
        }
    }

    /// All distinct words on the board
    pub fn find_words(&self) -> BTreeSet<String> {
        self.find_words_with_stats().words
    }

    pub fn find_words_with_stats(&self) -> SearchOutcome {
        debug!(
            "Searching {}x{} board ({} start cells, min length {})",
            self.grid.size(),
            self.grid.size(),
            self.grid.len(),
            self.config.min_word_length
        );

        // Each start cell is independent, so per-cell results are only merged at the end
        let starts = self.grid.positions().collect::<Vec<_>>();
        let per_cell: Vec<Discoveries> = if self.config.parallel {
            starts.into_par_iter().map(|p| self.search_from(p)).collect()
        } else {
            starts.into_iter().map(|p| self.search_from(p)).collect()
        };

        let mut outcome = SearchOutcome::default();
        for found in per_cell {
            outcome.stats += found.stats;
            outcome.words.extend(found.words);
        }

        debug!(
            "Found {} words ({} hits, {} cells entered, {} of {} prefix checks pruned)",
            outcome.words.len(),
            outcome.stats.words_recorded,
            outcome.stats.paths_explored,
            outcome.stats.pruned,
            outcome.stats.prefix_checks
        );
        outcome
    }

    fn search_from(&self, start: Position) -> Discoveries {
        let mut found = Discoveries::default();

        // A letter that starts no word is dropped before the cell is entered
        let first = self.grid[start].to_string();
        found.stats.prefix_checks += 1;
        if !self.dictionary.is_prefix(&first) {
            found.stats.pruned += 1;
            return found;
        }

        let visited = PathMask::empty(self.grid.len());
        self.explore(start, "", &visited, &mut found);
        trace!(
            "Start ({}, {}): {} hits, {} cells entered",
            start.row,
            start.col,
            found.stats.words_recorded,
            found.stats.paths_explored
        );
        found
    }

    /// Enters `pos`, extending `prefix` by its letter. `visited` is the caller's path and is
    /// never modified; this call works on its own copy.
    fn explore(&self, pos: Position, prefix: &str, visited: &PathMask, found: &mut Discoveries) {
        found.stats.paths_explored += 1;
        let size = self.grid.size();
        let visited = visited.with(pos.as_index(size));

        let mut word = String::with_capacity(prefix.len() + 4);
        word.push_str(prefix);
        word.push(self.grid[pos]);

        // One cell per letter, so the path length is the word length
        if visited.count() >= self.config.min_word_length {
            if let Some(canonical) = self.dictionary.lookup(&word) {
                found.stats.words_recorded += 1;
                found.words.push(canonical);
            }
        }

        let mut candidate = String::with_capacity(word.len() + 4);
        for next in pos.adjacent(size) {
            if visited.contains(next.as_index(size)) {
                continue;
            }
            candidate.clear();
            candidate.push_str(&word);
            candidate.push(self.grid[next]);

            found.stats.prefix_checks += 1;
            if self.dictionary.is_prefix(&candidate) {
                self.explore(next, &word, &visited, found);
            } else {
                found.stats.pruned += 1;
            }
        }
    }
}

/// Convenience wrapper around [`BoardSearcher::find_words`]
pub fn find_words(grid: &Grid, dictionary: &PrefixDictionary, min_word_length: usize) -> BTreeSet<String> {
    BoardSearcher::new(grid, dictionary, min_word_length).find_words()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::boggle::util::Position;

    fn dict(words: &[&str]) -> PrefixDictionary {
        words.iter().collect()
    }

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    /// Checks that `word` can be spelled by a simple path of adjacent cells
    fn traces(grid: &Grid, word: &str) -> bool {
        fn walk(grid: &Grid, pos: Position, rest: &[char], path: &mut Vec<Position>) -> bool {
            if path.contains(&pos) || grid[pos].to_ascii_lowercase() != rest[0] {
                return false;
            }
            if rest.len() == 1 {
                return true;
            }
            path.push(pos);
            let ok = pos
                .adjacent(grid.size())
                .any(|next| walk(grid, next, &rest[1..], path));
            path.pop();
            ok
        }

        let chars = word.chars().collect::<Vec<_>>();
        !chars.is_empty() && grid.positions().any(|p| walk(grid, p, &chars, &mut Vec::new()))
    }

    #[test]
    fn test_cat_board() {
        let grid = Grid::from_letters(2, "cats").unwrap();
        let words = find_words(&grid, &dict(&["cat"]), 3);
        assert_eq!(words, set(&["cat"]));
    }

    #[test]
    fn test_repeated_cells_collapse() {
        let grid = Grid::from_letters(3, "aaaaaaaaa").unwrap();
        let outcome = BoardSearcher::new(&grid, &dict(&["aa"]), 2).find_words_with_stats();
        assert_eq!(outcome.words, set(&["aa"]));
        // One hit per ordered pair of adjacent cells
        assert_eq!(outcome.stats.words_recorded, 40);
    }

    #[test]
    fn test_pruning_short_circuits() {
        let grid = Grid::from_letters(3, "abcefghij").unwrap();
        let outcome = BoardSearcher::new(&grid, &dict(&["dog"]), 3).find_words_with_stats();

        assert!(outcome.words.is_empty());
        assert_eq!(
            outcome.stats,
            SearchStats {
                // No letter starts "dog", so no cell is ever entered
                paths_explored: 0,
                prefix_checks: 9,
                pruned: 9,
                words_recorded: 0,
            }
        );
    }

    #[test]
    fn test_pruning_stops_after_first_letter() {
        let grid = Grid::from_letters(3, "xxxxdxxxx").unwrap();
        let outcome = BoardSearcher::new(&grid, &dict(&["dog"]), 3).find_words_with_stats();

        assert!(outcome.words.is_empty());
        assert_eq!(
            outcome.stats,
            SearchStats {
                // Only the centre 'd' is entered
                paths_explored: 1,
                // One check per start cell, then "dx" for each of the 8 neighbours
                prefix_checks: 17,
                pruned: 16,
                words_recorded: 0,
            }
        );
    }

    #[test]
    fn test_same_letter_different_cells() {
        let grid = Grid::from_letters(2, "abab").unwrap();
        let words = find_words(&grid, &dict(&["abab", "abba", "aaa", "bab"]), 3);
        // Only two 'a' cells exist, so "aaa" would need to reuse one
        assert_eq!(words, set(&["abab", "abba", "bab"]));
    }

    #[test]
    fn test_min_length_and_case() {
        let grid = Grid::from_letters(2, "CATS").unwrap();
        let d = dict(&["at", "cat", "cats", "TACS"]);
        assert_eq!(find_words(&grid, &d, 4), set(&["cats", "tacs"]));
        assert_eq!(find_words(&grid, &d, 2), set(&["at", "cat", "cats", "tacs"]));
    }

    #[test]
    fn test_tiny_grids() {
        let d = dict(&["a", "ab"]);
        let empty = Grid::from_letters(0, "").unwrap();
        assert!(find_words(&empty, &d, 1).is_empty());

        let single = Grid::from_letters(1, "a").unwrap();
        assert_eq!(find_words(&single, &d, 1), set(&["a"]));
        assert!(find_words(&single, &d, 2).is_empty());
    }

    #[test]
    fn test_random_boards() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..10 {
            let grid = Grid::random(4, &mut rng).unwrap();

            // Seed the dictionary with words spelled by random walks so there are hits
            let mut words = vec!["zzzz".to_string(), "quixotic".to_string()];
            for _ in 0..20 {
                let mut pos = Position::from_index(rng.gen_range(0..grid.len()), grid.size());
                let mut path = vec![pos];
                let steps = rng.gen_range(2..6);
                for _ in 0..steps {
                    let options = pos
                        .adjacent(grid.size())
                        .filter(|p| !path.contains(p))
                        .collect::<Vec<_>>();
                    if options.is_empty() {
                        break;
                    }
                    pos = options[rng.gen_range(0..options.len())];
                    path.push(pos);
                }
                words.push(path.iter().map(|&p| grid[p]).collect());
            }
            let d: PrefixDictionary = words.iter().collect();

            let sequential = BoardSearcher::with_config(
                &grid,
                &d,
                SearchConfig {
                    min_word_length: 3,
                    parallel: false,
                },
            );
            let parallel = BoardSearcher::new(&grid, &d, 3);

            let found = parallel.find_words();
            assert_eq!(found, sequential.find_words());
            // Idempotent
            assert_eq!(found, parallel.find_words());

            for w in &found {
                assert!(w.chars().count() >= 3);
                assert!(d.is_word(w));
                assert!(traces(&grid, w), "{} not on board\n{}", w, grid);
            }
            for w in words.iter().filter(|w| w.len() >= 3) {
                assert_eq!(found.contains(w), traces(&grid, w), "{}", w);
            }
        }
    }
}
