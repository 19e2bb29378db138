//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use calcbench_core::backend::CalcError;
use calcbench_core::operation::Operation;
use calcbench_core::options::Options;
use calcbench_orchestration::interfaces::CalculationRequest;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable blocks, one per backend.
    #[default]
    Text,
    /// A single pretty-printed JSON report.
    Json,
}

/// calcbench: compare the result and execution time of two interchangeable
/// calculation backends.
#[derive(Parser, Debug)]
#[command(name = "calcbench", version, about)]
pub struct AppConfig {
    /// First operand (m for ackermann).
    #[arg(
        short = 'a',
        long = "first",
        env = "CALCBENCH_A",
        allow_hyphen_values = true,
        required_unless_present = "completion"
    )]
    pub first: Option<String>,

    /// Second operand (n for ackermann).
    #[arg(
        short = 'b',
        long = "second",
        env = "CALCBENCH_B",
        allow_hyphen_values = true,
        required_unless_present = "completion"
    )]
    pub second: Option<String>,

    /// Operation: add, subtract, multiply, divide, or ackermann.
    #[arg(long, default_value = "add", env = "CALCBENCH_OP")]
    pub op: String,

    /// Backend to use: accelerated, scripted, or all.
    #[arg(long, default_value = "all")]
    pub backend: String,

    /// Run the selected backends concurrently.
    #[arg(long)]
    pub parallel: bool,

    /// Largest accepted ackermann m (0 = default).
    #[arg(long, default_value = "0")]
    pub max_m: u64,

    /// Largest accepted ackermann n (0 = default).
    #[arg(long, default_value = "0")]
    pub max_n: u64,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show step-time statistics for ackermann.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build normalized calculation options.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            max_m: self.max_m,
            max_n: self.max_n,
            parallel: self.parallel,
        }
        .normalize()
    }

    /// Build the request described by the operand and operation flags.
    pub fn request(&self) -> Result<CalculationRequest, CalcError> {
        let operation: Operation = self.op.parse()?;
        let (Some(a), Some(b)) = (&self.first, &self.second) else {
            return Err(CalcError::Config("two operands are required".into()));
        };
        Ok(CalculationRequest::new(operation, a.as_str(), b.as_str()))
    }
}
