use crate::cli::ExtractArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use protfeat::engine::progress::ProgressReporter;
use protfeat::workflows::extract::{self, ExtractionSummary};
use tracing::info;

pub fn run(args: ExtractArgs) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let config = config::build_config(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Extracting features from {}...", config.input_path.display());
    info!("Invoking the core extraction workflow...");
    let summary = extract::run(&config, &reporter)?;

    print_summary(&summary, &config.output_path.display().to_string());
    Ok(())
}

fn print_summary(summary: &ExtractionSummary, output: &str) {
    println!(
        "✓ {} row(s) with {} column(s) written to: {}",
        summary.rows, summary.columns, output
    );
    if summary.missing_pi > 0 {
        println!(
            "  Isoelectric point missing for {} row(s).",
            summary.missing_pi
        );
    }
    if summary.failed_embeddings > 0 {
        println!(
            "  Embedding failed for {} row(s); written as empty cells.",
            summary.failed_embeddings
        );
    }
}
