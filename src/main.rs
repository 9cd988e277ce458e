use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use fstree::cli::Cli;
use fstree::fs::RealFileSystem;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    fstree::logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fstree: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    cli.validate()?;

    let root = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let options = cli.report_options();

    // The report is complete before the output file is created.
    let mut report = Vec::new();
    fstree::write_report(&RealFileSystem, &root, &options, &mut report).await?;

    match cli.output {
        Some(path) => {
            tracing::info!(output = %path.display(), "writing report");
            std::fs::write(&path, &report).with_context(|| path.display().to_string())?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&report)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
