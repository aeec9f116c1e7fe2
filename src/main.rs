use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minifig_report::{Session, extract, load_yaml_config, report};

/// Print a BrickLink minifig's catalog metadata, current prices, and
/// set/book appearances.
#[derive(Parser, Debug)]
#[command(name = "minifig-report", version, about)]
struct Args {
    /// BrickLink minifig catalog identifier (e.g. njo0047)
    identifier: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_yaml_config()?;

    let session = Session::launch(&config).await?;

    // Shut the browser down whichever way extraction went, then propagate
    // the extraction failure first: it is the more interesting error.
    let extracted = extract::extract_record(&session, &args.identifier).await;
    let shutdown = session.shutdown().await;
    let record = extracted?;
    shutdown?;

    println!("{}", report::render(&record));
    Ok(())
}
