//! # calcbench-orchestration
//!
//! Backend execution, backend selection, and result analysis.

pub mod backend_selection;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{CalculationRequest, CalculationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_request};
