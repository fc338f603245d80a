//! Vitals CLI — the metrics screen's queries without the screen.
//!
//! Commands:
//! - `summary` — run the four metric queries and print the totals
//! - `export` — write workout or sleep records as CSV

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};

use vitals_core::domain::{MetricKind, Record, RecordKind, TimeRange, Unit};
use vitals_core::sample_data;
use vitals_core::store::{HealthStore, RecordQuery};

#[derive(Parser)]
#[command(name = "vitals", about = "Vitals CLI — health metrics without the TUI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the four metric queries and print the results.
    Summary {
        /// Demo dataset seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Export listed records as CSV.
    Export {
        /// Record category to export.
        #[arg(value_enum)]
        what: ExportKind,

        /// Demo dataset seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportKind {
    Workouts,
    Sleep,
}

impl ExportKind {
    fn record_kind(self) -> RecordKind {
        match self {
            ExportKind::Workouts => RecordKind::Workout,
            ExportKind::Sleep => RecordKind::Sleep,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { seed, json } => run_summary(seed, json),
        Commands::Export { what, seed, output } => run_export(what, seed, output),
    }
}

/// The same four queries the screen issues, run sequentially.
struct MetricSummary {
    step_count: f64,
    dietary_protein_g: f64,
    workout_count: usize,
    sleep_count: usize,
}

fn query_summary(store: &dyn HealthStore) -> Result<MetricSummary> {
    let range = TimeRange::all_until(Local::now().naive_local());

    let step_count = store
        .aggregate_sum(MetricKind::StepCount, &range)?
        .and_then(|sum| sum.value_in(Unit::Count))
        .unwrap_or(0.0);
    let dietary_protein_g = store
        .aggregate_sum(MetricKind::DietaryProtein, &range)?
        .and_then(|sum| sum.value_in(Unit::Grams))
        .unwrap_or(0.0);
    let workout_count = store
        .list_records(&RecordQuery::latest(RecordKind::Workout))?
        .len();
    let sleep_count = store
        .list_records(&RecordQuery::latest(RecordKind::Sleep))?
        .len();

    Ok(MetricSummary {
        step_count,
        dietary_protein_g,
        workout_count,
        sleep_count,
    })
}

fn run_summary(seed: u64, json: bool) -> Result<()> {
    let store = sample_data::demo_store(seed);
    let summary = query_summary(&store)?;

    if json {
        let value = serde_json::json!({
            "step_count": summary.step_count,
            "dietary_protein_g": summary.dietary_protein_g,
            "workouts": summary.workout_count,
            "sleep_samples": summary.sleep_count,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render_summary(&summary));
    }
    Ok(())
}

fn render_summary(summary: &MetricSummary) -> String {
    format!(
        "Step Count:      {:>10.0} steps\n\
         Dietary Protein: {:>10.1} g\n\
         Workouts:        {:>10} records\n\
         Sleep:           {:>10} samples\n",
        summary.step_count, summary.dietary_protein_g, summary.workout_count, summary.sleep_count,
    )
}

fn run_export(what: ExportKind, seed: u64, output: Option<PathBuf>) -> Result<()> {
    let store = sample_data::demo_store(seed);
    let records = store.list_records(&RecordQuery::latest(what.record_kind()))?;

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    export_records(what, &records, writer)
}

fn export_records(what: ExportKind, records: &[Record], writer: impl Write) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);

    match what {
        ExportKind::Workouts => {
            w.write_record(["id", "activity", "started_at", "duration_secs"])?;
            for record in records {
                if let Record::Workout(workout) = record {
                    w.write_record([
                        workout.id.to_string(),
                        workout.activity.label().to_string(),
                        workout.started_at.to_string(),
                        format!("{:.0}", workout.duration_secs),
                    ])?;
                }
            }
        }
        ExportKind::Sleep => {
            w.write_record(["id", "stage", "start", "end"])?;
            for record in records {
                if let Record::Sleep(sample) = record {
                    w.write_record([
                        sample.id.to_string(),
                        sample.stage.label().to_string(),
                        sample.start.to_string(),
                        sample.end.to_string(),
                    ])?;
                }
            }
        }
    }

    w.flush()?;
    Ok(())
}
