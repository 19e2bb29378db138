//! # calcbench-cli
//!
//! Text and JSON rendering of comparison results, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod report;

pub use presenter::CLIResultPresenter;
pub use report::ComparisonReport;
