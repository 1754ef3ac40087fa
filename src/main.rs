use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use serde::Serialize;
#[macro_use]
extern crate text_io;

use boggle_solver::boggle::DEFAULT_MIN_WORD_LENGTH;
use boggle_solver::{BoggleSolver, Grid, SearchConfig, SearchOutcome, SearchStats};

/// Lists every dictionary word that can be traced on a boggle board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board letters in row-major order (e.g. "acdefrteiostnesn")
    letters: Option<String>,

    /// Side length of the board
    #[arg(short, long, default_value_t = 4)]
    size: usize,

    /// Word list, one or more words per line
    #[arg(short, long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Shortest word to report
    #[arg(short, long, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_length: usize,

    /// Read the board from a JSON file of rows, e.g. [["c","a"],["t","s"]]
    #[arg(long, conflicts_with_all = ["letters", "random"])]
    board_file: Option<PathBuf>,

    /// Roll a random board of the given size
    #[arg(long, conflicts_with = "letters")]
    random: bool,

    /// Keep reading boards from stdin until "quit"
    #[arg(long, conflicts_with_all = ["letters", "random", "board_file"])]
    interactive: bool,

    /// Print a JSON report instead of plain words
    #[arg(long)]
    json: bool,

    /// Search on the current thread only
    #[arg(long)]
    sequential: bool,

    /// Print search counters to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    size: usize,
    board: Vec<String>,
    words: Vec<&'a str>,
    stats: SearchStats,
}

fn main() -> ExitCode {
    let debug_enabled = std::env::var("BOGGLE_DEBUG").is_ok();
    boggle_solver::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = SearchConfig {
        min_word_length: cli.min_length,
        parallel: !cli.sequential,
    };

    // The dictionary load is the expensive part, so it happens once up front
    let t_load = Instant::now();
    let solver = BoggleSolver::from_dictionary_path(&cli.dictionary, config)?;
    log::info!(
        "Dictionary ready in {:.3}s",
        t_load.elapsed().as_secs_f64()
    );

    if cli.interactive {
        return play_interactive(&solver, &cli);
    }

    let grid = if let Some(path) = &cli.board_file {
        Grid::from_file(path)?
    } else if cli.random {
        let grid = Grid::random(cli.size, &mut rand::thread_rng())?;
        if !cli.json {
            println!("{}", grid);
        }
        grid
    } else if let Some(letters) = &cli.letters {
        Grid::from_letters(cli.size, letters)?
    } else {
        return Err("no board given: pass LETTERS, --board-file, --random or --interactive".into());
    };

    let t_solve = Instant::now();
    let outcome = solver.solve(&grid);
    print_outcome(&grid, &outcome, &cli)?;
    if cli.stats {
        eprintln!(
            "Found {} words in {:.3}s; {:?}",
            outcome.words.len(),
            t_solve.elapsed().as_secs_f64(),
            outcome.stats
        );
    }
    Ok(())
}

/// Reads one board per line from stdin and prints its words, longest first
fn play_interactive(solver: &BoggleSolver, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        println!("Enter Boggle String:");
        let input: String = match try_read!("{}\n") {
            Ok(line) => line,
            Err(_) => break,
        };
        let input = input.trim();
        if input == "quit" {
            break;
        }

        // A bad board shouldn't end the session
        match Grid::from_letters(cli.size, input) {
            Ok(grid) => {
                let outcome = solver.solve(&grid);
                print_outcome(&grid, &outcome, cli)?;
            }
            Err(e) => eprintln!("Error: {e}"),
        }
    }
    Ok(())
}

fn print_outcome(grid: &Grid, outcome: &SearchOutcome, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.json {
        println!("{}", json_report(grid, outcome)?);
    } else {
        for word in ranked_words(outcome) {
            println!("{}", word);
        }
    }
    Ok(())
}

/// Longest first, alphabetical within a length
fn ranked_words(outcome: &SearchOutcome) -> Vec<&str> {
    let mut words = outcome.words.iter().map(String::as_str).collect::<Vec<_>>();
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    words
}

fn json_report(grid: &Grid, outcome: &SearchOutcome) -> serde_json::Result<String> {
    let report = Report {
        size: grid.size(),
        board: grid.rows(),
        words: ranked_words(outcome),
        stats: outcome.stats,
    };
    serde_json::to_string_pretty(&report)
}
