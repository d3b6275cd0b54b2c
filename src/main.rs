use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use course_extract::parser::{normalize, section_report};
use course_extract::sources::{JsonPrimary, PlainTextSource};
use course_extract::{CourseExtractor, ExtractionResult, Settings};

#[derive(Parser)]
#[command(name = "course-extract", about = "Course table extraction from planning sheets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract courses from a converted sheet and print JSON
    Extract {
        file: PathBuf,
        /// Primary extraction result (JSON) to reconcile against
        #[arg(short, long)]
        primary: Option<PathBuf>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print the normalized text the matchers see
    Clean { file: PathBuf },
    /// Show section headings found and courses per section
    Sections { file: PathBuf },
    /// Extract many sheets in parallel and print a summary table
    Batch {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load().context("loading settings")?;

    let result = match cli.command {
        Commands::Extract { file, primary, compact } => {
            let mut extractor = CourseExtractor::new(settings);
            if let Some(path) = primary {
                extractor = extractor.with_primary(JsonPrimary::new(path));
            }
            let result = extractor
                .extract_file(&PlainTextSource, &file)
                .with_context(|| format!("extracting {}", file.display()))?;
            let json = if compact {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };
            println!("{}", json);
            Ok(())
        }
        Commands::Clean { file } => {
            let raw = read(&file)?;
            println!("{}", normalize::normalize(&raw));
            Ok(())
        }
        Commands::Sections { file } => {
            let raw = read(&file)?;
            let (boundaries, counts) = section_report(&raw, &settings);
            if boundaries.is_empty() {
                println!("No section headings found.");
            }
            for b in &boundaries {
                println!("{:<14} @ {}", b.kind.as_str(), b.offset);
            }
            println!("{}", "-".repeat(24));
            for (kind, n) in counts {
                println!("{:<14} {:>3} courses", kind.as_str(), n);
            }
            Ok(())
        }
        Commands::Batch { files } => {
            let extractor = CourseExtractor::new(settings);
            let rows = extract_batch(&extractor, &files);
            print_summary(&rows);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

struct BatchRow {
    file: String,
    outcome: Result<ExtractionResult, String>,
}

fn extract_batch(extractor: &CourseExtractor, files: &[PathBuf]) -> Vec<BatchRow> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(files.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let rows = files
        .par_iter()
        .map(|path| {
            let outcome = extractor
                .extract_file(&PlainTextSource, path)
                .map_err(|e| e.to_string());
            pb.inc(1);
            BatchRow {
                file: path.display().to_string(),
                outcome,
            }
        })
        .collect();

    pb.finish_and_clear();
    rows
}

fn print_summary(rows: &[BatchRow]) {
    println!(
        "{:>3} | {:<32} | {:>4} | {:>4} | {:>4} | {:>5} | {:>4}",
        "#", "File", "Core", "Conc", "Elec", "Total", "Done"
    );
    println!("{}", "-".repeat(74));

    let mut failed = 0;
    for (i, row) in rows.iter().enumerate() {
        let file = truncate(&row.file, 32);
        match &row.outcome {
            Ok(r) => println!(
                "{:>3} | {:<32} | {:>4} | {:>4} | {:>4} | {:>5} | {:>4}",
                i + 1,
                file,
                r.core_courses.len(),
                r.concentration_courses.len(),
                r.elective_courses.len(),
                r.total(),
                r.all_courses().filter(|c| c.completed).count(),
            ),
            Err(e) => {
                failed += 1;
                println!("{:>3} | {:<32} | error: {}", i + 1, file, e);
            }
        }
    }

    println!("\n{} files | {} failed", rows.len(), failed);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
