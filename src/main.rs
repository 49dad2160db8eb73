//! CLI entry point for the bike-share insights tool.
//!
//! Provides subcommands for building the full dashboard report from the two
//! cleaned CSV datasets, either written as artifacts to a directory or
//! printed as JSON.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use bikeshare_insights::loader::{load_daily_records, load_hourly_records};
use bikeshare_insights::output::{print_report_json, write_report_json, write_table_csv};
use bikeshare_insights::report::{DashboardReport, build_report};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_insights")]
#[command(about = "A tool to summarize bike-share rental datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full report and write CSV tables plus JSON to a directory
    Report {
        /// Path to the cleaned hourly dataset CSV
        #[arg(long, value_name = "CSV")]
        hourly: PathBuf,

        /// Path to the cleaned daily dataset CSV
        #[arg(long, value_name = "CSV")]
        daily: PathBuf,

        /// Directory to write the summary artifacts to
        #[arg(short, long, default_value = "out")]
        output_dir: PathBuf,
    },
    /// Build the full report and print it as JSON to stdout
    Show {
        /// Path to the cleaned hourly dataset CSV
        #[arg(long, value_name = "CSV")]
        hourly: PathBuf,

        /// Path to the cleaned daily dataset CSV
        #[arg(long, value_name = "CSV")]
        daily: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_insights.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_insights.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            hourly,
            daily,
            output_dir,
        } => {
            let report = build(&hourly, &daily)?;

            std::fs::create_dir_all(&output_dir)?;
            write_table_csv(
                &output_dir.join("hourly_user_averages.csv"),
                &report.hourly_user_averages,
            )?;
            write_table_csv(&output_dir.join("weather_totals.csv"), &report.weather_totals)?;
            write_table_csv(&output_dir.join("season_stats.csv"), &report.season_stats)?;
            write_table_csv(
                &output_dir.join("working_day_stats.csv"),
                &report.working_day_stats,
            )?;
            write_report_json(&output_dir.join("report.json"), &report)?;

            info!(output_dir = %output_dir.display(), "Report artifacts written");
            for line in &report.conclusions {
                info!("{line}");
            }
        }
        Commands::Show { hourly, daily } => {
            let report = build(&hourly, &daily)?;
            print_report_json(&report)?;
        }
    }

    Ok(())
}

/// Loads both datasets and assembles the report.
#[tracing::instrument(fields(hourly = %hourly_path.display(), daily = %daily_path.display()))]
fn build(hourly_path: &Path, daily_path: &Path) -> Result<DashboardReport> {
    let hourly = load_hourly_records(hourly_path)?;
    let daily = load_daily_records(daily_path)?;

    info!(
        hourly_rows = hourly.len(),
        daily_rows = daily.len(),
        "Datasets loaded"
    );

    build_report(&hourly, &daily)
}
