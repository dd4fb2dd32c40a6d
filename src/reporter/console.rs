//! Console reporter with colored output

use crate::{BreakResult, DecodeReport, Shift, ShiftCandidate};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Print both strategy results and whether they agree
    pub fn report(&self, report: &DecodeReport) {
        print!("{}", self.render(report));
    }

    /// Print a single strategy result
    pub fn report_result(&self, result: &BreakResult) {
        print!("{}", self.render_result(result));
    }

    /// Print the best candidates
    pub fn report_candidates(&self, candidates: &[ShiftCandidate]) {
        print!("{}", self.render_candidates(candidates));
    }

    /// Report in quiet mode (shift and plaintext only)
    pub fn report_quiet(&self, result: &BreakResult) {
        println!("{}", self.render_quiet(result));
    }

    pub fn render(&self, report: &DecodeReport) -> String {
        let mut out = String::new();
        out.push_str(&self.render_header(&report.ciphertext));
        out.push_str(&self.render_section(&report.brute_force));
        out.push_str(&self.render_section(&report.frequency));

        let note = if report.agree() {
            format!(
                "   {} Both methods found the same shift value, which increases confidence in the result.",
                self.paint("✓".green())
            )
        } else {
            format!(
                "   {} The methods found different shift values. Review both results to determine which is correct.",
                self.paint("⚠".yellow())
            )
        };
        let _ = writeln!(out, "{}", note);
        out
    }

    pub fn render_result(&self, result: &BreakResult) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str(&self.render_section(result));
        out
    }

    pub fn render_quiet(&self, result: &BreakResult) -> String {
        format!(
            "{}: {}",
            self.paint(result.shift.to_string().bold()),
            result.plaintext
        )
    }

    pub fn render_candidates(&self, candidates: &[ShiftCandidate]) -> String {
        let mut out = String::new();
        if candidates.is_empty() {
            return out;
        }
        let _ = writeln!(out, "   {}", self.paint("Top candidates:".bold()));

        let best = candidates
            .iter()
            .map(|c| c.score)
            .fold(0.0_f64, f64::max);
        for candidate in candidates {
            let _ = writeln!(
                out,
                "   {} {:>2} {:>6.2}  {}",
                self.create_score_bar(candidate.score, best),
                candidate.shift,
                candidate.score,
                candidate.plaintext
            );
        }
        out.push('\n');
        out
    }

    fn render_header(&self, ciphertext: &str) -> String {
        let mut out = String::new();
        out.push('\n');
        let _ = writeln!(out, "{}", self.paint("Caesar cipher analysis".bold()));
        let _ = writeln!(out, "   Ciphertext: {}", ciphertext);
        out.push('\n');
        out
    }

    fn render_section(&self, result: &BreakResult) -> String {
        let mut out = String::new();
        let title = format!("Results from {} method:", result.strategy);
        let _ = writeln!(out, "   {}", self.paint(title.bold()));
        if result.fell_back {
            let _ = writeln!(
                out,
                "   {}",
                self.paint("Too few letters for frequency analysis; used brute force".dimmed())
            );
        }
        let _ = writeln!(out, "   Shift used: {}", self.colorize_shift(result.shift));
        let _ = writeln!(out, "   Plaintext:  {}", result.plaintext);
        if self.verbose {
            let score = format!("{:.2}", result.score);
            let _ = writeln!(out, "   Score:      {}", self.paint(score.dimmed()));
        }
        out.push('\n');
        out
    }

    fn colorize_shift(&self, shift: Shift) -> String {
        let s = shift.to_string();
        if shift.value() == 0 {
            self.paint(s.yellow())
        } else {
            self.paint(s.green().bold())
        }
    }

    fn create_score_bar(&self, score: f64, best: f64) -> String {
        let filled = if best > 0.0 {
            ((score / best) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        }
        .min(BAR_WIDTH);
        let empty = BAR_WIDTH - filled;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));
        if filled * 4 >= BAR_WIDTH * 3 {
            self.paint(bar.green())
        } else if filled * 2 >= BAR_WIDTH {
            self.paint(bar.yellow())
        } else {
            self.paint(bar.dimmed())
        }
    }

    fn paint(&self, s: ColoredString) -> String {
        if self.use_colors {
            s.to_string()
        } else {
            s.clear().to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
