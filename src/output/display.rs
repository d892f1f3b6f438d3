//! Display functions for command results

use super::formatters::{create_progress_bar, guess_row};
use crate::commands::AuditResult;
use crate::core::{Feedback, LetterFeedback, Word};
use crate::game::Statistics;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of scoring one guess
pub fn print_evaluation(secret: &Word, guess: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Secret: {}", secret.text().bright_yellow().bold());
    println!("Guess:  {}", guess.text().bright_white().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", guess_row(guess, feedback));
    println!("  {}", feedback.to_emoji());
    println!(
        "\n  {} correct, {} present, {} absent",
        feedback.count(LetterFeedback::Correct).to_string().green(),
        feedback.count(LetterFeedback::Present).to_string().yellow(),
        feedback.count(LetterFeedback::Absent)
    );
    if feedback.is_win() {
        println!("{}", "\n✅ Winning guess!".green().bold());
    }
}

/// Write win/loss totals and the guess distribution
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(
        out,
        "   Played: {}  Win %: {:.0}  Streak: {}  Max streak: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "   {}: {} {count}", i + 1, bar.green())?;
    }
    Ok(())
}

/// Print the result of an evaluator audit
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EVALUATOR AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Guesses checked:  {}", result.guesses);
    println!("   Secrets checked:  {}", result.secrets);
    println!("   Pairs evaluated:  {}", result.pairs);
    println!("   Winning pairs:    {}", result.wins);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.0}", result.pairs_per_second);

    println!("\n📈 {}", "Correct letters per guess:".bright_cyan().bold());
    for (correct, &count) in result.correct_distribution.iter().enumerate() {
        let pct = if result.pairs == 0 {
            0.0
        } else {
            count as f64 / result.pairs as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {correct}: {} {count:8} ({pct:5.1}%)", bar.green());
    }

    println!();
    if result.violations.is_empty() {
        println!("{}", "✅ All evaluator invariants held".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} invariant violations", result.violations.len())
                .red()
                .bold()
        );
        for violation in result.violations.iter().take(10) {
            println!("   {violation}");
        }
    }
}
