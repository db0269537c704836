//! Answers the fresh ingredient ID puzzle for a database file.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use range_coverage::{Database, Interval};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
  #[value(name = "1")]
  One,
  #[value(name = "2")]
  Two,
  All,
}

impl Part {
  fn includes_one(self) -> bool {
    matches!(self, Part::One | Part::All)
  }

  fn includes_two(self) -> bool {
    matches!(self, Part::Two | Part::All)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
  Human,
  Json,
}

#[derive(Parser, Debug)]
#[command(name = "fresh-ranges", version, about = "Count fresh ingredient IDs from a range database")]
struct Cli {
  /// Database file (`-` reads stdin)
  input: PathBuf,

  /// Which answer to print
  #[arg(long, value_enum, default_value = "all")]
  part: Part,

  /// Output format
  #[arg(long, value_enum, default_value = "human")]
  format: Format,

  /// Also list the fresh available IDs
  #[arg(long)]
  list: bool,

  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
  #[serde(skip_serializing_if = "Option::is_none")]
  count_covered: Option<usize>,
  #[serde(skip_serializing_if = "Option::is_none")]
  covered_points: Option<Vec<i64>>,
  // Strings keep sizes above 2^64 exact in JSON.
  #[serde(skip_serializing_if = "Option::is_none")]
  total_covered_size: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  merged_intervals: Option<Vec<Interval>>,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("Error: {e:#}");
      ExitCode::FAILURE
    }
  }
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    "range_coverage=debug,fresh_ranges=debug,info"
  } else {
    "range_coverage=info,warn"
  };

  tracing_subscriber::registry()
    .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();
}

fn run(cli: &Cli) -> Result<()> {
  let db = read_database(&cli.input)?;
  let coverage = db.coverage().context("Invalid fresh ID range")?;
  tracing::info!(
    ranges = coverage.len(),
    merged = coverage.merged().len(),
    points = db.points.len(),
    "loaded database"
  );

  let mut report = Report::default();
  if cli.part.includes_one() {
    report.count_covered = Some(coverage.count_covered(db.points.iter().copied()));
    if cli.list {
      report.covered_points = Some(coverage.covered_points(db.points.iter().copied()).collect());
    }
  }
  if cli.part.includes_two() {
    report.total_covered_size = Some(coverage.total_covered_size().to_string());
    if cli.format == Format::Json {
      report.merged_intervals = Some(coverage.merged().to_vec());
    }
  }

  match cli.format {
    Format::Human => print_human(&report),
    Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
  }
  Ok(())
}

fn read_database(input: &Path) -> Result<Database> {
  if input.as_os_str() == "-" {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
    Ok(Database::parse(&text)?)
  } else {
    Database::from_file(input).with_context(|| format!("Failed to load database {}", input.display()))
  }
}

fn print_human(report: &Report) {
  if let Some(count) = report.count_covered {
    println!("Part 1: {count}");
  }
  if let Some(points) = &report.covered_points {
    for point in points {
      println!("  {point}");
    }
  }
  if let Some(total) = &report.total_covered_size {
    println!("Part 2: {total}");
  }
}
