use crate::cli::RunArgs;
use anyhow::Context;
use intentscout_core::{CorpusSchema, PipelineConfig};
use intentscout_pipeline::RunRequest;
use std::path::PathBuf;
use std::time::Duration;

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let (request, config) = build_request(&args)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let output = runtime.block_on(intentscout_pipeline::execute(&request, config))?;

    println!(
        "Pipeline finished: {} of {} clusters analyzed, report written to {}",
        output.report.len(),
        output.summary.clusters,
        request.output.display()
    );
    if !output.summary.skipped_malformed.is_empty() {
        println!(
            "{} cluster(s) skipped after malformed or failed responses",
            output.summary.skipped_malformed.len()
        );
    }
    Ok(())
}

fn build_request(args: &RunArgs) -> anyhow::Result<(RunRequest, PipelineConfig)> {
    let mut config = PipelineConfig {
        num_clusters: args.clusters,
        sample_size: args.sample_size,
        call_interval: Duration::from_millis(args.interval_ms),
        seed: args.seed,
        schema: CorpusSchema {
            records_key: args.records_key.clone(),
            text_field: args.text_field.clone(),
        },
        ..PipelineConfig::default()
    };
    if let Some(path) = &args.taxonomy {
        config.taxonomy = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read taxonomy file {}", path))?;
    }

    let request = RunRequest {
        input: PathBuf::from(&args.input),
        output: PathBuf::from(&args.output),
        provider: args.provider.into(),
        model: args.model.clone(),
        encoder: args.encoder.into(),
    };
    Ok((request, config))
}
