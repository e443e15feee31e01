//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use taskload_core::{
    build_layout, count_tasks_by_employee, rank_report, ExtractOptions, Language, RankedReport,
    RecordExtractor,
};
use taskload_data::{read_workload_sheets, WorkbookSource};
use taskload_ooxml::{
    save_with_retry, DocxWriter, FileSink, NeverRetry, OoxmlArchive, ReportText, RetryPolicy,
    SaveOutcome,
};

use crate::config::Settings;
use crate::prompt::{prompt_input_path, prompt_output_dir, ConsoleRetryPrompt};

#[derive(Parser)]
#[command(name = "taskload")]
#[command(author, version, about = "Ranked workload reports from Excel to Word", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a workbook and save the workload report as DOCX
    Generate {
        /// Input workbook (xlsx, xlsb, xls, ods); prompted for if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory; prompted for if omitted
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Configuration file path (default: taskload.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report language (en or ru)
        #[arg(short, long)]
        lang: Option<Language>,

        /// Open the saved report in the system viewer
        #[arg(long)]
        open: bool,

        /// Maximum save attempts, 0 for unbounded
        #[arg(long)]
        max_save_attempts: Option<u32>,

        /// Never ask before retrying a failed save
        #[arg(long)]
        no_prompt: bool,
    },

    /// Print the title and table of a generated report
    Inspect {
        /// Report DOCX file
        input: PathBuf,
    },
}

/// Options of the generate command; unset fields fall back to the config
/// file or an interactive prompt
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub language: Option<Language>,
    pub open: bool,
    pub max_save_attempts: Option<u32>,
    pub no_prompt: bool,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            input,
            output_dir,
            config,
            lang,
            open,
            max_save_attempts,
            no_prompt,
        } => {
            let options = GenerateOptions {
                input,
                output_dir,
                config,
                language: lang,
                open,
                max_save_attempts,
                no_prompt,
            };
            generate_command(&options)?;
        }
        Commands::Inspect { input } => {
            inspect_command(&input)?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise each `-v` raises the level one step from warn
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Execute the generate command
///
/// Returns the save outcome. A declined retry is not an error.
pub fn generate_command(options: &GenerateOptions) -> Result<SaveOutcome> {
    println!("taskload v{}", taskload_core::VERSION);

    let settings = Settings::load(options.config.as_deref())?;
    let language = options.language.unwrap_or(settings.language);
    let labels = language.labels();
    let sheet_names = settings.sheet_names(language);

    let input = match &options.input {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            path.clone()
        }
        None => prompt_input_path(&mut io::stdin().lock(), &mut io::stdout())
            .context("Failed to read the workbook path")?,
    };
    let output_dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => prompt_output_dir(&mut io::stdin().lock(), &mut io::stdout())
            .context("Failed to read the output directory")?,
    };

    // Step 1: Read the three sheets; the workbook is released afterwards
    println!("  Reading: {}", input.display());
    let sheets = {
        let mut source = WorkbookSource::open(&input)
            .with_context(|| format!("Failed to open workbook: {}", input.display()))?;
        read_workload_sheets(&mut source, &sheet_names)
            .with_context(|| format!("Failed to read sheets from: {}", input.display()))?
    };

    // Step 2: Typed records
    let extractor = RecordExtractor::new(ExtractOptions {
        date_format: settings.date_format.clone(),
    });
    let employees = extractor.extract_employees(&sheets.employees);
    let departments = extractor.extract_departments(&sheets.departments);
    let counts = count_tasks_by_employee(
        extractor.extract_task_employee_ids(&sheets.tasks, &employees),
    );
    println!(
        "    {} employees, {} departments, {} assigned tasks",
        employees.len(),
        departments.len(),
        counts.total()
    );

    let orphaned = RankedReport::orphaned(&employees, &departments);
    if !orphaned.is_empty() {
        warn!(
            count = orphaned.len(),
            "employees reference unknown departments and are left out of the report"
        );
    }

    // Step 3: Rank and lay out
    let report = rank_report(&departments, &employees, &counts);
    debug!(
        naive = RankedReport::naive_row_count(&departments, &employees),
        exact = report.row_count(),
        "table rows"
    );
    let layout = build_layout(&report, &labels, &settings.style);

    // Step 4: Render and save
    let bytes = DocxWriter::generate(&layout).context("Failed to generate DOCX")?;
    let path = output_dir.join(settings.file_name(&labels));
    let policy = RetryPolicy::bounded(
        options
            .max_save_attempts
            .unwrap_or(settings.save.max_attempts),
    );
    info!(path = %path.display(), bytes = bytes.len(), "saving report");

    let outcome = if options.no_prompt {
        save_with_retry(&bytes, &path, &mut FileSink, policy, &mut NeverRetry)
    } else {
        let mut prompt = ConsoleRetryPrompt::new(io::stdin().lock(), io::stdout());
        save_with_retry(&bytes, &path, &mut FileSink, policy, &mut prompt)
    };

    match &outcome {
        SaveOutcome::Saved { path, .. } => {
            println!("File saved to: {}", path.display());
            if options.open || settings.output.open_viewer {
                open_viewer(path);
            }
        }
        SaveOutcome::Abandoned {
            attempts,
            last_error,
        } => {
            info!(attempts, "save abandoned");
            println!(
                "Report not saved after {} attempt(s): {}",
                attempts, last_error
            );
        }
    }

    Ok(outcome)
}

fn open_viewer(path: &Path) {
    match open::that(path) {
        Ok(()) => debug!(path = %path.display(), "viewer launched"),
        Err(err) => warn!(path = %path.display(), error = %err, "failed to launch viewer"),
    }
}

/// Execute the inspect command
pub fn inspect_command(input: &Path) -> Result<ReportText> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let archive = OoxmlArchive::open(input)
        .with_context(|| format!("Failed to open DOCX file: {}", input.display()))?;
    let text = ReportText::from_archive(&archive)
        .with_context(|| format!("Failed to read report: {}", input.display()))?;

    if let Some(title) = &text.title {
        println!("{}", title);
        println!();
    }
    for row in &text.rows {
        println!("{}", row.join("\t"));
    }

    Ok(text)
}
