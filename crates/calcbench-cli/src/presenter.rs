//! CLI result presenter.

use calcbench_core::operation::Operation;
use calcbench_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_execution_time, format_outcome, render_result, speedup_summary};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, operation: Operation, result: &CalculationResult) {
        if self.quiet {
            println!("{}", format_outcome(result));
            return;
        }

        if self.verbose {
            println!("[{operation}]");
        }
        print!("{}", render_result(result, self.details));
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() {
                "NO RESULT"
            } else {
                "OK"
            };
            println!(
                "  {:<20} {:>14} [{}]",
                result.backend,
                format_execution_time(result.duration),
                status,
            );
        }
        if let Some(summary) = speedup_summary(results) {
            println!("  {summary}");
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
