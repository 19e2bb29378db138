//! calcbench: compare two calculation backends side by side.

use calcbench_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing; logs go to stderr so JSON on stdout stays clean
    let default_level = if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    let code = match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            errors::exit_code(&e)
        }
    };
    std::process::exit(code);
}
