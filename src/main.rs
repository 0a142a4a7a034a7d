use clap::Parser;
use schoolscope::prelude::*;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Explore and compare generated school records from the command line
#[derive(Parser, Debug)]
#[command(name = "schoolscope")]
#[command(about = "School comparison analytics demo", long_about = None)]
struct Args {
    /// Number of schools to generate
    #[arg(short, long, default_value_t = 50)]
    schools: usize,

    /// Seed for the sample-data generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// How many top-ranked schools to compare side by side
    #[arg(short, long, default_value_t = 4)]
    compare: usize,

    /// Write the comparison CSV here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting schoolscope v{}", env!("CARGO_PKG_VERSION"));
    info!("Generating {} schools (seed {})", args.schools, args.seed);

    let data = sample::generate(&sample::SampleConfig {
        seed: args.seed,
        schools: args.schools,
    });
    let store = Store::load(data.schools, data.demographics, data.programs, data.reviews)?;

    let overview = district_overview(&store);
    info!(
        "District: {} schools, mean rating {:.2}, mean enrollment {:.0}",
        overview.schools,
        overview.mean_overall_rating.unwrap_or(0.0),
        overview.mean_enrollment.unwrap_or(0.0),
    );

    let schools: Vec<&School> = store.schools().iter().collect();
    let ranked = rank(&schools, Metric::OverallRating);
    for (position, school) in ranked.iter().take(5) {
        info!(
            "#{} {} ({}) - {:.1}/5",
            position, school.name, school.category, school.overall_rating
        );
    }

    match metric_correlation(&store, Metric::FreeLunchPercent, Metric::MathProficiency) {
        Ok(r) => info!("Poverty vs math proficiency correlation: {r:.3}"),
        Err(e) => warn!("Poverty-achievement correlation unavailable: {e}"),
    }

    if let Some(school) = most_diverse(&store) {
        info!("Most diverse school: {}", school.name);
    }

    let ids: Vec<u32> = ranked
        .iter()
        .take(args.compare)
        .map(|(_, school)| school.id)
        .collect();
    let table = build_metrics_table(&store, &ids, &default_comparison_specs())?;
    let csv = table.to_csv();

    match &args.out {
        Some(path) => {
            std::fs::write(path, &csv)?;
            info!("Comparison CSV written to {}", path.display());
        }
        None => print!("{csv}"),
    }

    Ok(())
}
