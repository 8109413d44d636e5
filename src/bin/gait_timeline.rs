// ABOUTME: Command-line demo that charts synthetic walking-speed data
// ABOUTME: Generates seeded samples and prints daily, weekly and monthly series as JSON or text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Walking-speed timeline demo.
//!
//! Usage:
//! ```bash
//! # 90 days of data, all three timelines as JSON
//! cargo run --bin gait-timeline
//!
//! # Weekly series only, weeks starting on Monday, as a table
//! cargo run --bin gait-timeline -- --timeline weekly --week-start monday --format text
//!
//! # Duplicate roughly a third of the days and average them
//! cargo run --bin gait-timeline -- --duplicates 0.33 --merge-policy mean
//! ```

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use gait_timeline::calendar::parse_day;
use gait_timeline::config::AggregationConfig;
use gait_timeline::loader::ChartLoader;
use gait_timeline::logging::LoggingConfig;
use gait_timeline::models::{MergePolicy, Timeline, WeekStart};
use gait_timeline::sources::{QueryWindow, SyntheticConfig, SyntheticSource};
use gait_timeline::TimelineSeries;
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Parser)]
#[command(
    name = "gait-timeline",
    about = "Walking-speed timeline demo",
    long_about = "Aggregate seeded synthetic walking-speed samples into daily, weekly and monthly chart series"
)]
struct Args {
    /// Days of history to generate
    #[arg(long, default_value = "90")]
    days: u32,

    /// Random seed for the synthetic source
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Last generated day, YYYY-MM-DD (defaults to today, UTC)
    #[arg(long, value_parser = parse_day)]
    end_date: Option<NaiveDate>,

    /// Chance that a day gets a second sample
    #[arg(long, default_value = "0.0")]
    duplicates: f64,

    /// Chance that a day has no sample
    #[arg(long, default_value = "0.0")]
    gaps: f64,

    /// How same-day samples are combined (sum, mean)
    #[arg(long)]
    merge_policy: Option<MergePolicy>,

    /// First day of the week (sunday, monday)
    #[arg(long)]
    week_start: Option<WeekStart>,

    /// Print a single timeline (daily, weekly, monthly)
    #[arg(long)]
    timeline: Option<Timeline>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Environment configuration with command-line overrides applied
    fn aggregation_config(&self) -> Result<AggregationConfig> {
        let mut config = AggregationConfig::from_env()?;
        if let Some(policy) = self.merge_policy {
            config = config.with_merge_policy(policy);
        }
        if let Some(week_start) = self.week_start {
            config = config.with_week_start(week_start);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let end_date = args.end_date.unwrap_or_else(|| Utc::now().date_naive());
    let synthetic = SyntheticConfig::new(args.seed, end_date, args.days)
        .with_duplicates(args.duplicates)
        .with_gaps(args.gaps);
    let source = SyntheticSource::new(synthetic)?;
    let loader = ChartLoader::new(args.aggregation_config()?)?;

    info!(
        seed = args.seed,
        days = args.days,
        end_date = %end_date,
        merge_policy = %loader.config().merge_policy.as_str(),
        week_start = %loader.config().week_start.as_str(),
        "Generating walking-speed charts"
    );

    let charts = loader.load(&source, &QueryWindow::all()).await?;

    match (args.format, args.timeline) {
        (OutputFormat::Json, Some(timeline)) => {
            println!("{}", serde_json::to_string_pretty(charts.series(timeline))?);
        }
        (OutputFormat::Json, None) => {
            println!("{}", serde_json::to_string_pretty(&charts)?);
        }
        (OutputFormat::Text, selected) => {
            if let Some(label) = charts.last_updated_label() {
                println!("{label}");
            }
            let timelines = selected.map_or_else(|| Timeline::ALL.to_vec(), |t| vec![t]);
            for timeline in timelines {
                print_series(charts.series(timeline));
            }
        }
    }

    Ok(())
}

fn print_series(series: &TimelineSeries) {
    println!();
    println!(
        "{} ({})",
        series.timeline,
        series.range_label.as_deref().unwrap_or("no data")
    );
    println!("  y-axis max: {:.2}", series.y_maximum);
    for (bucket, label) in series.buckets.iter().zip(&series.labels) {
        if bucket.is_placeholder() {
            println!("  {label:>11}  -");
        } else {
            println!(
                "  {label:>11}  {:.2} m/s  ({} samples)",
                bucket.value, bucket.sample_count
            );
        }
    }
}
