//! Application entry point and dispatch.

use anyhow::Result;
use tracing::{debug, warn};

use calcbench_cli::output::write_to_file;
use calcbench_cli::presenter::CLIResultPresenter;
use calcbench_cli::report::ComparisonReport;
use calcbench_core::backend::CalcError;
use calcbench_core::constants::exit_codes;
use calcbench_core::registry::DefaultFactory;
use calcbench_orchestration::backend_selection::get_backends_to_run;
use calcbench_orchestration::interfaces::{CalculationRequest, CalculationResult, ResultPresenter};
use calcbench_orchestration::orchestrator::{analyze_comparison_results, execute_request};

use crate::config::{AppConfig, OutputFormat};
use crate::errors::{handle_error, outcome_exit_code};
use crate::version;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        calcbench_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<i32> {
    debug!(version = %version::full_version(), "starting");

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.details);
    let opts = config.options();
    let factory = DefaultFactory::new();

    let prepared = config.request().and_then(|request| {
        get_backends_to_run(&config.backend, &factory).map(|backends| (request, backends))
    });
    let (request, backends) = match prepared {
        Ok(prepared) => prepared,
        Err(e) => {
            presenter.present_error(&e.to_string());
            return Ok(handle_error(&e));
        }
    };

    let results = execute_request(&backends, &request, &opts);

    // Analyze results
    let mut mismatch = false;
    if results.len() > 1 {
        if let Err(CalcError::Mismatch) = analyze_comparison_results(&results) {
            warn!("backends disagree on {}", request.operation);
            mismatch = true;
        }
    }

    match config.format {
        OutputFormat::Text => present_text(&presenter, config, &request, &results),
        OutputFormat::Json => println!("{}", ComparisonReport::new(&request, &results).to_json()?),
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        let contents = match config.format {
            OutputFormat::Json => ComparisonReport::new(&request, &results).to_json()?,
            OutputFormat::Text => results
                .iter()
                .find_map(CalculationResult::value)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        };
        write_to_file(path, &contents)?;
    }

    if mismatch {
        return Ok(exit_codes::ERROR_MISMATCH);
    }
    Ok(outcome_exit_code(&results))
}

fn present_text(
    presenter: &CLIResultPresenter,
    config: &AppConfig,
    request: &CalculationRequest,
    results: &[CalculationResult],
) {
    if config.verbose {
        println!("{}", version::full_version());
    }
    if !config.quiet {
        let (a, b) = (request.a.trim(), request.b.trim());
        if request.operation.is_recursive() {
            println!("A({a}, {b})\n");
        } else {
            println!("{a} {} {b}\n", request.operation.symbol());
        }
    }

    for result in results {
        presenter.present_result(request.operation, result);
    }

    // Present comparison if multiple
    if results.len() > 1 {
        presenter.present_comparison(results);
    }

    if !results.iter().any(|r| r.outcome.is_ok()) {
        if let Some(Err(e)) = results.first().map(|r| &r.outcome) {
            presenter.present_error(&e.to_string());
        }
    }
}
