//! Rank guesses by score
//!
//! Scores a pool of guesses against a reference candidate list and can write
//! the result as a `word: score` report.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::Word;
use crate::error::WordleError;
use crate::solver::{PatternSource, ScoredWord, rank_with};

/// Rank `guesses` against `candidates`, best first
///
/// Shows a progress bar on stderr when `show_progress` is set.
///
/// # Errors
/// Propagates scoring errors
pub fn run_rank<'a, P: PatternSource + ?Sized>(
    guesses: &[&'a Word],
    candidates: &[&Word],
    source: &P,
    show_progress: bool,
) -> Result<Vec<ScoredWord<'a>>, WordleError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(guesses.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(format!("scoring against {} candidates", candidates.len()));
        pb
    } else {
        ProgressBar::hidden()
    };

    let ranked = rank_with(guesses, candidates, source, |_| pb.inc(1))?;
    pb.finish_and_clear();

    Ok(ranked)
}

/// Write one `word: score` line per entry
///
/// # Errors
/// Returns any I/O error from the writer
pub fn write_scores<W: Write>(mut writer: W, ranked: &[ScoredWord<'_>]) -> io::Result<()> {
    for entry in ranked {
        writeln!(writer, "{}: {}", entry.word, entry.score)?;
    }
    writer.flush()
}

/// [`write_scores`] to a file
///
/// # Errors
/// Returns any I/O error creating or writing the file
pub fn write_report<P: AsRef<Path>>(path: P, ranked: &[ScoredWord<'_>]) -> io::Result<()> {
    let file = File::create(path)?;
    write_scores(BufWriter::new(file), ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::solver::{PatternTable, Uncached};

    const IGHT: &str = "sight eight light night might bight mewls sleep";

    #[test]
    fn rank_puts_best_first() {
        let dictionary = Dictionary::parse(IGHT).unwrap();
        let guesses = dictionary.refs();
        let candidates: Vec<&Word> = guesses[..6].to_vec();

        let ranked = run_rank(&guesses, &candidates, &Uncached, false).unwrap();
        assert_eq!(ranked.len(), guesses.len());
        assert_eq!(ranked[0].word.text(), "mewls");
    }

    #[test]
    fn rank_with_table_matches_uncached() {
        let dictionary = Dictionary::parse(IGHT).unwrap();
        let table = PatternTable::build(&dictionary);
        let all = dictionary.refs();

        let plain = run_rank(&all, &all, &Uncached, false).unwrap();
        let fast = run_rank(&all, &all, &table, false).unwrap();
        assert_eq!(plain, fast);
    }

    #[test]
    fn report_format() {
        let sleep = Word::new("sleep").unwrap();
        let night = Word::new("night").unwrap();
        let ranked = [
            ScoredWord {
                word: &sleep,
                score: 2.0,
            },
            ScoredWord {
                word: &night,
                score: 20.0 / 6.0,
            },
        ];

        let mut out = Vec::new();
        write_scores(&mut out, &ranked).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "sleep: 2\nnight: 3.3333333333333335\n"
        );
    }
}
