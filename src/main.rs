//! s3cost - Estimate S3 storage costs from object inventory exports

use clap::Parser;
use s3cost::{
    aggregation::Aggregator,
    cli::{Cli, parse_date},
    cost_calculator::CostCalculator,
    data_loader::InventoryLoader,
    error::{Result, S3costError},
    filters::DateRange,
    output::{ReportWriter, render_cost_table, render_usage_table},
    pricing::PricingTable,
    report::ReportBuilder,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The --quiet flag should override RUST_LOG.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("warn")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("s3cost=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Malformed dates fail fast before any I/O happens
    let since = parse_date(&cli.since)?;
    let until = parse_date(&cli.until)?;
    if since > until {
        return Err(S3costError::InvalidArgument(format!(
            "Start date {since} is after end date {until}"
        )));
    }
    let range = DateRange::new(since, until);

    let pricing = match &cli.pricing {
        Some(path) => PricingTable::from_file(path)?,
        None => PricingTable::default(),
    };
    let calculator = CostCalculator::new(pricing);

    info!("Listing objects modified between {since} and {until}");
    let loader = InventoryLoader::new(&cli.data_dir)?;
    let observations = loader.load_observations(&range)?;

    let rows = Aggregator::aggregate(observations);
    if rows.is_empty() {
        // Not an error: report it and terminate without writing files
        println!("No data found in the specified date range.");
        return Ok(());
    }

    let (usage, cost) = ReportBuilder::build(&rows, &calculator);

    if is_terminal::is_terminal(std::io::stdout()) {
        println!("Usage by month:\n{}", render_usage_table(&usage));
        println!("Cost by month:\n{}", render_cost_table(&cost));
    }

    let writer = ReportWriter::new(&cli.output_dir);
    let (usage_path, cost_path) = writer.write(&usage, &cost, &cli.output)?;

    println!("Usage output written to {}", usage_path.display());
    println!("Cost output written to {}", cost_path.display());

    Ok(())
}
