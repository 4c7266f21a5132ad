//! Display functions for command results

use colored::Colorize;

use super::formatters::{colorize_guess, create_progress_bar, pattern_to_emoji};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::{Round, ScoredWord};

/// Print one round of a session
pub fn print_round(round: &Round, verbose: bool) {
    println!(
        "\nTurn {}: {} {}",
        round.number,
        colorize_guess(&round.guess, round.pattern),
        pattern_to_emoji(round.pattern)
    );

    if verbose {
        println!("  Pattern:    {}", round.pattern);
        println!(
            "  Candidates: {} → {}",
            round.candidates_before, round.candidates_after
        );
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} strategy)",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for round in &result.outcome.rounds {
        print_round(round, verbose);
    }

    println!();
    if result.outcome.solved() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.outcome.guesses())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.outcome.guesses())
                .red()
                .bold()
        );
    }
}

/// Print the best `limit` entries of a ranking
pub fn print_ranking(ranked: &[ScoredWord<'_>], candidates: usize, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} against {} candidates",
        "RANKING".bright_cyan().bold(),
        candidates
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, entry) in ranked.iter().take(limit).enumerate() {
        println!(
            "{:>4}. {}  {}",
            i + 1,
            entry.word.text().to_uppercase().bright_white().bold(),
            format!("{:.4}", entry.score).bright_yellow()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_guesses: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!("   Failed:           {}", format!("{}", result.failed).red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Not solved:".red().bold());
        for chunk in result.failures.chunks(10) {
            println!("   {}", chunk.join(" "));
        }
    }
}
