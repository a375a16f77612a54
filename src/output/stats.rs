//! Statistics reporting.

use console::style;

use crate::cli::ParseOutcome;

/// Counts of a `parse` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub parsed: usize,
    pub failed: usize,
}

impl ParseStats {
    pub fn from_outcomes(outcomes: &[ParseOutcome]) -> Self {
        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        Self {
            parsed: outcomes.len() - failed,
            failed,
        }
    }

    pub fn total(&self) -> usize {
        self.parsed + self.failed
    }
}

/// Print a summary line after parsing several files.
pub fn print_parse_stats(stats: &ParseStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    print!("Parsed: {} of {}", style(stats.parsed).green(), stats.total());
    if stats.failed > 0 {
        print!(" ({} failed)", style(stats.failed).red());
    }
    println!();
}
