//! Terminal output for podstatic
//!
//! All user-facing messages go through the [`Reporter`] trait, allowing
//! different implementations based on command-line flags:
//! - [`ConsoleReporter`]: styled output, details only with `--verbose`
//! - [`QuietReporter`]: warnings only, used when stdout carries data

use console::Style;

/// Reporter trait for user-facing messages
pub trait Reporter {
    /// Plain progress information
    fn info(&self, message: &str);

    /// A completed change
    fn success(&self, message: &str);

    /// Something was skipped or looks wrong, but the run continues
    fn warn(&self, message: &str);

    /// Extra information shown with `--verbose`
    fn detail(&self, message: &str);
}

/// Styled reporter writing to stdout, warnings to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn success(&self, message: &str) {
        println!("{} {}", Style::new().green().bold().apply_to("✓"), message);
    }

    fn warn(&self, message: &str) {
        print_warning(message);
    }

    fn detail(&self, message: &str) {
        if self.verbose {
            println!("  {}", Style::new().dim().apply_to(message));
        }
    }
}

/// Reporter that only emits warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct QuietReporter;

impl Reporter for QuietReporter {
    fn info(&self, _message: &str) {}

    fn success(&self, _message: &str) {}

    fn warn(&self, message: &str) {
        print_warning(message);
    }

    fn detail(&self, _message: &str) {}
}

fn print_warning(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("Warning:"),
        message
    );
}
