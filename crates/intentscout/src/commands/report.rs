use anyhow::Context;
use intentscout_report::read_report;
use std::path::Path;

pub fn run(path: &str) -> anyhow::Result<()> {
    let report =
        read_report(Path::new(path)).with_context(|| format!("failed to load report {}", path))?;
    println!("{}", report.stats());
    Ok(())
}
