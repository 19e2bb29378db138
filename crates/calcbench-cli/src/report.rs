//! Serializable comparison report for `--format json`.

use serde::Serialize;

use calcbench_core::backend::CalcValue;
use calcbench_core::metrics::PerformanceMetrics;
use calcbench_core::operation::Operation;
use calcbench_orchestration::interfaces::{CalculationRequest, CalculationResult};

/// One request and the results of every backend that ran it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport<'a> {
    pub operation: Operation,
    pub a: &'a str,
    pub b: &'a str,
    pub results: Vec<BackendReport<'a>>,
}

/// Per-backend entry. `result` is `null` when there is no result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendReport<'a> {
    pub backend: &'a str,
    pub result: Option<CalcValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub execution_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<&'a PerformanceMetrics>,
}

impl<'a> ComparisonReport<'a> {
    /// Build a report borrowing from the request and its results.
    #[must_use]
    pub fn new(request: &'a CalculationRequest, results: &'a [CalculationResult]) -> Self {
        Self {
            operation: request.operation,
            a: &request.a,
            b: &request.b,
            results: results.iter().map(BackendReport::from).collect(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> From<&'a CalculationResult> for BackendReport<'a> {
    fn from(result: &'a CalculationResult) -> Self {
        Self {
            backend: &result.backend,
            result: result.value(),
            error: result.outcome.as_ref().err().map(ToString::to_string),
            execution_time_ms: result.execution_time_ms(),
            metrics: result.metrics.as_ref(),
        }
    }
}
