//! Display functions for command results

use super::formatters::{create_progress_bar, green_mask, green_squares, letters_string, word_columns};
use crate::commands::FilterResult;
use crate::core::Conflict;
use crate::parser::ParseError;
use colored::Colorize;

const COLUMNS: usize = 8;

/// Print the candidates found for one round of feedback
pub fn print_filter_result(result: &FilterResult, placeholder: char, verbose: bool) {
    let constraints = &result.constraints;
    let generation = &result.generation;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Pattern: {} {}",
        green_mask(&constraints.greens, placeholder).bright_green().bold(),
        green_squares(&constraints.greens)
    );
    println!("{}", "─".repeat(60).cyan());

    print_conflicts(&result.conflicts);

    if verbose {
        println!("  Yellows:    {}", constraints.yellows.to_string().yellow());
        println!("  Grays:      {}", constraints.grays);
        println!("  Pool:       {}", letters_string(generation.pool.letters()));
        for (position, set) in generation.position_sets.iter() {
            println!("  Position {position}: {}", letters_string(set));
        }

        let stats = generation.stats;
        let bar = create_progress_bar(stats.examined as f64, stats.search_space as f64, 30);
        println!(
            "  Examined:   {bar} {} / {}",
            stats.examined, stats.search_space
        );
        println!("  Time:       {:.4}s", result.duration.as_secs_f64());
    }

    println!();
    if generation.candidates.is_empty() {
        println!("{}", "❌ No words match this feedback".red().bold());
        return;
    }

    for row in word_columns(generation.candidates.as_slice(), COLUMNS) {
        println!("  {}", row.bright_white());
    }
    println!(
        "\n{}",
        format!("✅ {} possible words", generation.candidates.len())
            .green()
            .bold()
    );
}

/// Print overlapping-feedback warnings
pub fn print_conflicts(conflicts: &[Conflict]) {
    for conflict in conflicts {
        println!("{} {conflict}", "⚠".bright_yellow().bold());
    }
}

/// Print a parse error with a hint to try again
pub fn print_parse_error(err: &ParseError) {
    println!("\n{} {err}", "❌ Invalid input:".red().bold());
    println!("{}", "Let's try that again.".bright_black());
}
