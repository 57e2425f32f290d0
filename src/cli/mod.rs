//! # CLI Module
//!
//! Command-line interface for the loading screenshot finder.
//!
//! ## Usage
//! ```bash
//! # Report loading screenshots (exit status 1 if any are found)
//! find-loading check --source fridge-poem
//!
//! # Report and delete them
//! find-loading delete --source fridge-poem
//!
//! # JSON output for CI
//! find-loading check --output json
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use loading_screenshot_finder::core::cleanup::{delete_loading, CleanupReport};
use loading_screenshot_finder::core::pipeline::{BatchReport, BatchScan, JsonOutput};
use loading_screenshot_finder::error::Result;
use loading_screenshot_finder::events::{BatchEvent, ClassifyEvent, Event, EventChannel, ScanEvent};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

/// Find screenshots that captured the page's loading state
#[derive(Parser, Debug)]
#[command(name = "find-loading")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report loading screenshots; exits non-zero if any are found
    Check(ScanArgs),
    /// Report loading screenshots and delete them
    Delete(ScanArgs),
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Source directory to check
    #[arg(short, long, default_value = "fridge-poem")]
    source: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    output: OutputFormat,

    /// Image extensions to scan (comma separated)
    #[arg(long, value_delimiter = ',')]
    extensions: Option<Vec<String>>,

    /// Skip hidden files (dotfiles are scanned by default)
    #[arg(long)]
    skip_hidden: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (loading paths only)
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let (args, deleting) = match cli.command {
        Commands::Check(args) => (args, false),
        Commands::Delete(args) => (args, true),
    };

    let report = run_scan(&args)?;

    let cleanup = if deleting && report.has_loading() {
        Some(delete_loading(&report.loading))
    } else {
        None
    };

    match args.output {
        OutputFormat::Pretty => {
            let term = Term::stderr();
            print_pretty_report(&term, &report, deleting, args.verbose);
            if let Some(ref cleanup) = cleanup {
                print_pretty_cleanup(&term, cleanup);
            }
        }
        OutputFormat::Json => print_json_report(&report, cleanup.as_ref())?,
        OutputFormat::Minimal => print_minimal_report(&report),
    }

    Ok(ExitCode::from(report.exit_code(deleting)))
}

fn run_scan(args: &ScanArgs) -> Result<BatchReport> {
    let mut builder = BatchScan::builder()
        .source(args.source.clone())
        .include_hidden(!args.skip_hidden);

    if let Some(ref extensions) = args.extensions {
        builder = builder.extensions(extensions.clone());
    }

    let batch = builder.build();

    if !matches!(args.output, OutputFormat::Pretty) {
        return batch.run();
    }

    let term = Term::stderr();
    term.write_line(&format!(
        "{} {}",
        style("Loading Screenshot Finder").bold().cyan(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim()
    ))
    .ok();

    let (sender, receiver) = EventChannel::new();

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );

    let progress = pb.clone();
    let verbose = args.verbose;

    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Scan(ScanEvent::Completed { total_files }) => {
                    progress.set_length(total_files as u64);
                }
                Event::Classify(ClassifyEvent::Progress(p)) => {
                    progress.set_position(p.completed as u64);
                    if verbose {
                        progress.set_message(
                            p.current_path
                                .file_name()
                                .unwrap_or_default()
                                .to_string_lossy()
                                .to_string(),
                        );
                    }
                }
                Event::Classify(ClassifyEvent::LoadingFound { path, detail }) if verbose => {
                    progress.println(format!(
                        "  {} {} ({})",
                        style("✗").red(),
                        path.display(),
                        detail
                    ));
                }
                Event::Batch(BatchEvent::Completed { .. }) => {
                    progress.finish_and_clear();
                }
                _ => {}
            }
        }
    });

    let result = batch.run_with_events(&sender);

    // Drop sender so the event thread's iterator ends
    drop(sender);
    event_thread.join().ok();
    pb.finish_and_clear();

    result
}

fn print_pretty_report(term: &Term, report: &BatchReport, deleting: bool, verbose: bool) {
    for warning in &report.warnings {
        term.write_line(&format!("  {} {}", style("⚠").yellow(), warning))
            .ok();
    }

    term.write_line("").ok();
    term.write_line(&format!(
        "{} {}",
        style("Summary for").bold(),
        style(report.source.display()).bold()
    ))
    .ok();
    term.write_line(&format!(
        "  {} valid screenshots",
        style(report.valid.len()).green()
    ))
    .ok();
    term.write_line(&format!(
        "  {} loading screenshots",
        style(report.loading.len()).red()
    ))
    .ok();

    if !report.errors.is_empty() {
        term.write_line(&format!(
            "  {} unreadable files",
            style(report.errors.len()).yellow()
        ))
        .ok();
        if verbose {
            for error in &report.errors {
                term.write_line(&format!("     {}", style(&error.message).dim()))
                    .ok();
            }
        }
    }

    if verbose {
        term.write_line(&format!(
            "  {}",
            style(format!("{} files in {:.1}s", report.total_files, report.duration_ms as f64 / 1000.0)).dim()
        ))
        .ok();
    }

    if report.has_loading() {
        term.write_line("").ok();
        term.write_line(&format!(
            "{}",
            style(format!(
                "Found {} screenshot(s) with loading state:",
                report.loading.len()
            ))
            .bold()
        ))
        .ok();
        for item in &report.loading {
            term.write_line(&format!("  • {} ({})", item.filename, style(&item.detail).dim()))
                .ok();
        }

        if !deleting {
            term.write_line("").ok();
            term.write_line(&format!(
                "{}",
                style("Run `find-loading delete` to remove them.").dim()
            ))
            .ok();
        }
    }
}

fn print_pretty_cleanup(term: &Term, cleanup: &CleanupReport) {
    term.write_line("").ok();
    for path in &cleanup.deleted {
        term.write_line(&format!("  Deleted: {}", path.display())).ok();
    }
    for failure in &cleanup.failed {
        term.write_line(&format!("  {} {}", style("⚠").yellow(), failure.message))
            .ok();
    }

    let status = if cleanup.is_complete() {
        style("Cleanup complete!").green().bold()
    } else {
        style("Cleanup finished with errors").yellow().bold()
    };
    term.write_line(&format!("{}", status)).ok();
}

fn print_json_report(report: &BatchReport, cleanup: Option<&CleanupReport>) -> Result<()> {
    println!("{}", JsonOutput::new(report, cleanup).to_json_pretty()?);
    Ok(())
}

fn print_minimal_report(report: &BatchReport) {
    for item in &report.loading {
        println!("{}", item.path.display());
    }
}
