pub fn run() -> anyhow::Result<()> {
    println!("intentscout {}", env!("CARGO_PKG_VERSION"));
    println!("Intent taxonomy gap discovery: cluster customer messages, judge each cluster");
    Ok(())
}
