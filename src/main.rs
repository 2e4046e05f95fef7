use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Clean a customer CSV export: impute missing values, drop sentinel rows,
/// extract date features, and write the result.
#[derive(Parser)]
#[command(name = "tablewash", version, about)]
struct Cli {
    /// Source CSV file (first row = column names).
    input: PathBuf,
    /// Destination CSV file; parent directories are created as needed.
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Friendly report instead of an error dump when the source is missing.
    if !cli.input.exists() {
        eprintln!("Error: the file {} does not exist.", cli.input.display());
        return ExitCode::FAILURE;
    }

    match tablewash::preprocess(&cli.input, &cli.output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
