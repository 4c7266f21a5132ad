//! Wordle Narrow - CLI
//!
//! Compare, filter, score and rank guesses, or let the solver play.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use wordle_narrow::{
    commands::{SolveConfig, run_assist, run_benchmark, run_rank, solve_word, write_report},
    core::{Dictionary, Pattern, Word},
    output::{
        formatters::pattern_to_emoji, print_benchmark_result, print_ranking, print_solve_result,
    },
    solver::{
        NGUESSES, PatternCache, PatternSource, PatternTable, Session, SessionConfig,
        StrategyType, Uncached, filter, score,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_narrow",
    about = "Wordle solver that narrows candidates by minimizing the expected remaining set",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list, one word per line, all the same length
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Guess selection strategy
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyKind::Minimize)]
    strategy: StrategyKind,

    /// Seed for random choices (secret selection and the random strategy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = NGUESSES)]
    max_guesses: usize,

    /// How patterns are memoized
    ///
    /// The cache holds one dictionary's worth of pairs and evicts the least
    /// recently used; the table stores every pair (4 bytes each) up front.
    #[arg(short, long, global = true, value_enum, default_value_t = Memo::Cache)]
    memo: Memo,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyKind {
    /// Uniform random choice among candidates
    Random,
    /// Candidate with the lowest expected remaining count
    Minimize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Memo {
    /// Compute every pattern from scratch
    None,
    /// Remember recent patterns, bounded by the dictionary length
    Cache,
    /// Precompute all dictionary pairs up front
    Table,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the feedback pattern for a guess against an answer
    Compare { guess: String, answer: String },

    /// List dictionary words consistent with a guess and its pattern
    Filter {
        guess: String,
        /// Feedback using '_' (miss), '*' (present), '#' (hit)
        pattern: String,
    },

    /// Expected number of candidates left after a guess
    Score {
        guess: String,

        /// Comma separated candidates (default: the dictionary)
        #[arg(short, long, value_delimiter = ',')]
        candidates: Option<Vec<String>>,
    },

    /// Rank every dictionary word as a guess
    Rank {
        /// Word list to score against (default: the dictionary)
        #[arg(short, long)]
        candidates: Option<PathBuf>,

        /// Number of entries to print
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,

        /// Write the full ranking as `word: score` lines
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Solve a specific or random secret word
    Solve {
        /// The secret word (random when omitted)
        word: Option<String>,

        /// Regex a random secret must match
        #[arg(short, long)]
        constraint: Option<String>,

        /// Show pattern and candidate counts per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve the first N dictionary words and report statistics
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Suggest guesses for a game played elsewhere
    Assist,
}

impl StrategyKind {
    fn build(self, seed: Option<u64>) -> StrategyType {
        match self {
            Self::Random => StrategyType::random(seed),
            Self::Minimize => StrategyType::minimize(),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Minimize => "minimize",
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Compare { guess, answer } => run_compare_command(guess, answer),
        Commands::Filter { guess, pattern } => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            with_source(cli.memo, &dictionary, |source| {
                run_filter_command(guess, pattern, &dictionary, source)
            })
        }
        Commands::Score { guess, candidates } => {
            run_score_command(&cli, guess, candidates.as_deref())
        }
        Commands::Rank {
            candidates,
            limit,
            output,
        } => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            let candidates = candidates
                .as_deref()
                .map(|path| load_dictionary(Some(path)))
                .transpose()?;
            with_source(cli.memo, &dictionary, |source| {
                run_rank_command(
                    &dictionary,
                    candidates.as_ref(),
                    *limit,
                    output.as_deref(),
                    source,
                )
            })
        }
        Commands::Solve {
            word,
            constraint,
            verbose,
        } => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            let config = SolveConfig {
                target: word.clone(),
                constraint: constraint.clone(),
                seed: cli.seed,
                session: SessionConfig::new(cli.max_guesses),
            };
            with_source(cli.memo, &dictionary, |source| {
                let strategy = cli.strategy.build(cli.seed);
                let result = solve_word(&config, &dictionary, strategy, source)?;
                print_solve_result(&result, *verbose);
                Ok(())
            })
        }
        Commands::Benchmark { count } => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            with_source(cli.memo, &dictionary, |source| {
                run_benchmark_command(&cli, &dictionary, *count, source)
            })
        }
        Commands::Assist => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            with_source(cli.memo, &dictionary, |source| {
                let mut session = Session::new(
                    &dictionary,
                    cli.strategy.build(cli.seed),
                    source,
                    SessionConfig::new(cli.max_guesses),
                )?;
                run_assist(&mut session, io::stdin().lock(), io::stdout().lock())?;
                Ok(())
            })
        }
    }
}

fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    let Some(path) = path else {
        bail!("a word list is required: pass --dictionary <FILE>");
    };
    let dictionary = Dictionary::load(path)
        .with_context(|| format!("failed to load word list {}", path.display()))?;
    info!(
        "loaded {} words of length {} from {}",
        dictionary.len(),
        dictionary.word_len(),
        path.display()
    );
    Ok(dictionary)
}

/// Run `f` with the pattern source selected by `memo`
fn with_source<T>(
    memo: Memo,
    dictionary: &Dictionary,
    f: impl FnOnce(&dyn PatternSource) -> Result<T>,
) -> Result<T> {
    match memo {
        Memo::None => f(&Uncached),
        Memo::Cache => {
            let cache = PatternCache::with_capacity(dictionary.len());
            let result = f(&cache);
            info!(
                "pattern cache: {} entries, {} hits, {} misses",
                cache.len(),
                cache.hits(),
                cache.misses()
            );
            result
        }
        Memo::Table => {
            let table = PatternTable::build(dictionary);
            f(&table)
        }
    }
}

fn run_compare_command(guess: &str, answer: &str) -> Result<()> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let pattern = Pattern::calculate(&guess, &answer)?;

    println!("{pattern} {}", pattern_to_emoji(pattern));
    Ok(())
}

fn run_filter_command(
    guess: &str,
    pattern: &str,
    dictionary: &Dictionary,
    source: &dyn PatternSource,
) -> Result<()> {
    let guess = Word::new(guess)?;
    let pattern = Pattern::parse(pattern, guess.len())?;

    for word in filter(&guess, pattern, &dictionary.refs(), source)? {
        println!("{word}");
    }
    Ok(())
}

fn run_score_command(cli: &Cli, guess: &str, candidates: Option<&[String]>) -> Result<()> {
    let guess = Word::new(guess)?;
    let value = score_against(cli, &guess, candidates)?;

    println!("{guess}: {value}");
    Ok(())
}

/// Score `guess` against an explicit candidate list or the dictionary,
/// through the pattern source chosen with `--memo`
fn score_against(cli: &Cli, guess: &Word, candidates: Option<&[String]>) -> Result<f64> {
    let dictionary = match candidates {
        Some(list) => {
            let words = list.iter().map(Word::new).collect::<Result<Vec<_>, _>>()?;
            Dictionary::new(words).context("invalid candidate list")?
        }
        None => load_dictionary(cli.dictionary.as_deref())?,
    };

    with_source(cli.memo, &dictionary, |source| {
        Ok(score(guess, &dictionary.refs(), source)?)
    })
}

fn run_rank_command(
    dictionary: &Dictionary,
    candidates: Option<&Dictionary>,
    limit: usize,
    output: Option<&Path>,
    source: &dyn PatternSource,
) -> Result<()> {
    let guesses = dictionary.refs();
    let candidates = candidates.unwrap_or(dictionary).refs();

    let ranked = run_rank(&guesses, &candidates, source, true)?;
    print_ranking(&ranked, candidates.len(), limit);

    if let Some(path) = output {
        write_report(path, &ranked)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        println!("\nReport written to {}", path.display());
    }
    Ok(())
}

fn run_benchmark_command(
    cli: &Cli,
    dictionary: &Dictionary,
    count: Option<usize>,
    source: &dyn PatternSource,
) -> Result<()> {
    let answers: Vec<&Word> = dictionary
        .words()
        .iter()
        .take(count.unwrap_or(dictionary.len()))
        .collect();

    println!(
        "Running benchmark on {} words with the {} strategy...",
        answers.len(),
        cli.strategy.name()
    );

    let result = run_benchmark(
        dictionary,
        &answers,
        |i| cli.strategy.build(cli.seed.map(|seed| seed.wrapping_add(i as u64))),
        source,
        SessionConfig::new(cli.max_guesses),
        true,
    )?;
    print_benchmark_result(&result, cli.max_guesses);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn score_candidates_follow_memo_choice() {
        for memo in ["none", "cache", "table"] {
            let cli = Cli::try_parse_from([
                "wordle_narrow",
                "--memo",
                memo,
                "score",
                "sleep",
                "--candidates",
                "sight,eight,light,night,might,bight",
            ])
            .unwrap();
            let Commands::Score { guess, candidates } = &cli.command else {
                panic!("parsed the wrong subcommand");
            };

            let guess = Word::new(guess.as_str()).unwrap();
            let value = score_against(&cli, &guess, candidates.as_deref()).unwrap();
            assert_eq!(value, 2.0, "--memo {memo}");
        }
    }

    #[test]
    fn score_candidates_must_share_a_length() {
        let cli = Cli::try_parse_from([
            "wordle_narrow",
            "score",
            "sleep",
            "--candidates",
            "sight,nights",
        ])
        .unwrap();
        let Commands::Score { guess, candidates } = &cli.command else {
            panic!("parsed the wrong subcommand");
        };

        let guess = Word::new(guess.as_str()).unwrap();
        assert!(score_against(&cli, &guess, candidates.as_deref()).is_err());
    }
}
