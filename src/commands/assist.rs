//! Interactive assist mode
//!
//! Suggests a guess, reads the feedback the game gave for it and narrows the
//! candidates. Input is line based:
//!
//! - `_*#__` feedback for the suggested guess
//! - `crane _*#__` feedback for a guess of your own
//! - `win` all hits for the suggested guess
//! - `undo`, `new`, `quit`

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::core::{Pattern, Word};
use crate::error::WordleError;
use crate::output::formatters::{colorize_guess, pattern_to_emoji};
use crate::solver::{PatternSource, Session, Status, Strategy};

/// Candidates listed in full at or below this count
const SHOW_CANDIDATES: usize = 10;

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Undo,
    Win,
    Feedback(Pattern),
    Guess(Word, Pattern),
}

fn parse_command(line: &str, word_len: usize) -> Result<Command, WordleError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "new" | "n" => return Ok(Command::New),
        "undo" | "u" => return Ok(Command::Undo),
        "win" | "correct" | "solved" => return Ok(Command::Win),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(pattern), None, None) => Ok(Command::Feedback(Pattern::parse(pattern, word_len)?)),
        (Some(guess), Some(pattern), None) => {
            let guess = Word::new(guess)?;
            if guess.len() != word_len {
                return Err(WordleError::LengthMismatch {
                    expected: word_len,
                    actual: guess.len(),
                });
            }
            Ok(Command::Guess(guess, Pattern::parse(pattern, word_len)?))
        }
        _ => Err(WordleError::InvalidPatternEncoding {
            pattern: line.to_string(),
            reason: "expected a pattern, or a guess followed by a pattern".to_string(),
        }),
    }
}

/// Run the assist loop until `quit` or end of input
///
/// Bad input and feedback that no candidate satisfies are reported and the
/// loop continues.
///
/// # Errors
/// Returns I/O errors and unexpected session errors
pub fn run_assist<'a, S, P, R, W>(
    session: &mut Session<'a, S, P>,
    mut input: R,
    mut output: W,
) -> Result<(), WordleError>
where
    S: Strategy,
    P: PatternSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let word_len = session.candidates().first().map_or(0, |w| w.len());
    let mut suggestion: Option<&'a Word> = None;
    let mut line = String::new();

    writeln!(
        output,
        "Enter feedback as {} (hit), {} (present), {} (miss), or 'win'.",
        "#".green().bold(),
        "*".yellow().bold(),
        "_".bright_black().bold()
    )?;
    writeln!(output, "Commands: 'undo', 'new', 'quit'")?;

    loop {
        if session.status() == Status::InProgress {
            let guess = match suggestion {
                Some(guess) => guess,
                None => {
                    let guess = session.suggest()?;
                    suggestion = Some(guess);
                    print_turn(&mut output, session.candidates(), session.guesses_made(), guess)?;
                    guess
                }
            };
            write!(output, "Feedback for {}: ", guess.text().to_uppercase())?;
        } else {
            write!(output, "Type 'new' to play again or 'quit': ")?;
        }
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line, word_len) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{} {e}", "Invalid input:".red())?;
                continue;
            }
        };

        let observation = match command {
            Command::Quit => return Ok(()),
            Command::New => {
                session.reset();
                suggestion = None;
                writeln!(output, "\n{}", "New game started".bright_cyan())?;
                continue;
            }
            Command::Undo => {
                match session.undo()? {
                    Some((guess, _)) => writeln!(output, "Undid {}", guess.text().to_uppercase())?,
                    None => writeln!(output, "Nothing to undo")?,
                }
                suggestion = None;
                continue;
            }
            Command::Win => suggestion.map(|guess| (guess.clone(), Pattern::all_hit(word_len))),
            Command::Feedback(pattern) => suggestion.map(|guess| (guess.clone(), pattern)),
            Command::Guess(guess, pattern) => Some((guess, pattern)),
        };

        let Some((guess, pattern)) = observation else {
            writeln!(output, "Game is over")?;
            continue;
        };

        match session.record(&guess, pattern) {
            Ok(round) => {
                suggestion = None;
                writeln!(
                    output,
                    "{} {}",
                    colorize_guess(&round.guess, round.pattern),
                    pattern_to_emoji(round.pattern)
                )?;
                match round.status {
                    Status::Solved => print_history(&mut output, session.history(), true)?,
                    Status::Failed => print_history(&mut output, session.history(), false)?,
                    Status::InProgress => {}
                }
            }
            Err(WordleError::EmptyCandidateSet) => {
                writeln!(
                    output,
                    "{}",
                    "No candidates match that feedback. Check it and try again, or 'undo'.".red()
                )?;
            }
            Err(e @ (WordleError::SessionFinished | WordleError::LengthMismatch { .. })) => {
                writeln!(output, "{} {e}", "Invalid input:".red())?;
            }
            Err(e) => return Err(e),
        }
    }
}

fn print_turn<W: Write>(
    output: &mut W,
    candidates: &[&Word],
    guesses_made: usize,
    suggestion: &Word,
) -> Result<(), WordleError> {
    writeln!(output, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        output,
        "Turn {}: {} candidates remaining",
        guesses_made + 1,
        candidates.len()
    )?;
    if candidates.len() <= SHOW_CANDIDATES {
        let list: Vec<String> = candidates.iter().map(|w| w.text().to_uppercase()).collect();
        writeln!(output, "  {}", list.join(" "))?;
    }
    writeln!(
        output,
        "Suggested guess: {}",
        suggestion.text().to_uppercase().bright_yellow().bold()
    )?;
    Ok(())
}

fn print_history<W: Write>(
    output: &mut W,
    history: &[(Word, Pattern)],
    solved: bool,
) -> Result<(), WordleError> {
    let guesses = history.len();
    if solved {
        writeln!(
            output,
            "\n{}",
            format!(
                "Solved in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        )?;
    } else {
        writeln!(
            output,
            "\n{}",
            format!("Out of guesses after {guesses}").red().bold()
        )?;
    }

    for (i, (word, pattern)) in history.iter().enumerate() {
        writeln!(
            output,
            "  {}. {} {}",
            i + 1,
            word.text().to_uppercase(),
            pattern_to_emoji(*pattern)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::solver::{MinimizeExpectedRemainingStrategy, SessionConfig, Uncached};

    const IGHT: &str = "sight eight light night might bight";

    fn assist(
        dictionary: &Dictionary,
        config: SessionConfig,
        script: &str,
    ) -> (String, usize, Status) {
        let mut session =
            Session::new(dictionary, MinimizeExpectedRemainingStrategy, &Uncached, config).unwrap();
        let mut out = Vec::new();
        run_assist(&mut session, script.as_bytes(), &mut out).unwrap();
        (
            String::from_utf8(out).unwrap(),
            session.guesses_made(),
            session.status(),
        )
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("quit\n", 5).unwrap(), Command::Quit);
        assert_eq!(parse_command(" WIN ", 5).unwrap(), Command::Win);
        assert_eq!(parse_command("u", 5).unwrap(), Command::Undo);
        assert_eq!(
            parse_command("_*#__", 5).unwrap(),
            Command::Feedback("_*#__".parse().unwrap())
        );
        assert_eq!(
            parse_command("Crane _*#__", 5).unwrap(),
            Command::Guess(Word::new("crane").unwrap(), "_*#__".parse().unwrap())
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse_command("_*#_", 5),
            Err(WordleError::InvalidPatternEncoding { .. })
        ));
        assert!(matches!(
            parse_command("gyb__", 5),
            Err(WordleError::InvalidPatternEncoding { .. })
        ));
        assert!(matches!(
            parse_command("cranes _*#__", 5),
            Err(WordleError::LengthMismatch { .. })
        ));
        assert!(parse_command("a b c", 5).is_err());
    }

    #[test]
    fn plays_to_a_win() {
        let dictionary = Dictionary::parse(IGHT).unwrap();
        // suggestion is SIGHT; then an own guess; then EIGHT is the only one left
        let (out, guesses, status) = assist(
            &dictionary,
            SessionConfig::default(),
            "_####\nsleep __*__\nwin\n",
        );

        assert!(out.contains("SIGHT"));
        assert!(out.contains("Solved in 3 guesses!"));
        assert_eq!(guesses, 3);
        assert_eq!(status, Status::Solved);
    }

    #[test]
    fn inconsistent_feedback_is_reported() {
        let dictionary = Dictionary::parse(IGHT).unwrap();
        let (out, guesses, status) = assist(
            &dictionary,
            SessionConfig::default(),
            "sleep #*___\nnonsense!\nquit\n_####\n",
        );

        assert!(out.contains("No candidates match"));
        assert!(out.contains("Invalid input:"));
        // quit stops before the last line
        assert_eq!(guesses, 0);
        assert_eq!(status, Status::InProgress);
    }

    #[test]
    fn undo_and_new() {
        let dictionary = Dictionary::parse(IGHT).unwrap();
        let (out, guesses, _) = assist(
            &dictionary,
            SessionConfig::default(),
            "_####\nundo\nundo\n",
        );
        assert!(out.contains("Undid SIGHT"));
        assert!(out.contains("Nothing to undo"));
        assert_eq!(guesses, 0);

        let (out, guesses, status) =
            assist(&dictionary, SessionConfig::new(1), "_####\nwin\nnew\n");
        assert!(out.contains("Out of guesses after 1"));
        assert!(out.contains("Game is over"));
        assert!(out.contains("New game started"));
        assert_eq!(guesses, 0);
        assert_eq!(status, Status::InProgress);
    }
}
