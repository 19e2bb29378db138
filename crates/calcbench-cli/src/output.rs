//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

use calcbench_core::constants::TIME_PRECISION;
use calcbench_core::metrics::PerformanceMetrics;
use calcbench_orchestration::interfaces::CalculationResult;

/// Format an execution time as fractional milliseconds, e.g. `0.0123ms`.
#[must_use]
pub fn format_execution_time(d: Duration) -> String {
    format!("{:.prec$}ms", d.as_secs_f64() * 1000.0, prec = TIME_PRECISION)
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.000_001 {
        format!("{}ns", d.as_nanos())
    } else if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let tenths = (secs * 10.0).round() as u64;
        let (mins, remaining) = (tenths / 600, tenths % 600);
        format!("{mins}m{}.{}s", remaining / 10, remaining % 10)
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// The value line of a result: the number, or `no result (<reason>)`.
#[must_use]
pub fn format_outcome(result: &CalculationResult) -> String {
    match &result.outcome {
        Ok(value) => value.to_string(),
        Err(e) => format!("no result ({e})"),
    }
}

/// Render one backend's result as an indented block.
#[must_use]
pub fn render_result(result: &CalculationResult, details: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.backend);
    let _ = writeln!(out, "  Result: {}", format_outcome(result));
    let _ = writeln!(out, "  Time: {}", format_execution_time(result.duration));
    if let Some(metrics) = &result.metrics {
        out.push_str(&render_metrics(metrics, details));
    }
    out
}

/// Render the Ackermann instrumentation block.
#[must_use]
pub fn render_metrics(metrics: &PerformanceMetrics, details: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Calls: {}", format_number(metrics.total_calls));
    let _ = writeln!(out, "  Max depth: {}", format_number(metrics.max_depth));
    if details {
        let stats = [
            ("Mean step", metrics.mean_step_time()),
            ("Slowest step", metrics.slowest_step()),
            ("Fastest step", metrics.fastest_step()),
        ];
        for (label, value) in stats {
            if let Some(d) = value {
                let _ = writeln!(out, "  {label}: {}", format_duration(d));
            }
        }
    }
    out
}

/// One line comparing the fastest successful backend with the slowest.
#[must_use]
pub fn speedup_summary(results: &[CalculationResult]) -> Option<String> {
    let timed: Vec<&CalculationResult> = results
        .iter()
        .filter(|r| r.outcome.is_ok() && !r.duration.is_zero())
        .collect();
    if timed.len() < 2 {
        return None;
    }
    let fastest = timed.iter().min_by_key(|r| r.duration)?;
    let slowest = timed.iter().max_by_key(|r| r.duration)?;
    if fastest.backend == slowest.backend {
        return None;
    }
    let ratio = slowest.duration.as_secs_f64() / fastest.duration.as_secs_f64();
    Some(format!(
        "{} was {ratio:.2}x faster than {}",
        fastest.backend, slowest.backend
    ))
}

/// Write text to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
