//! taskload CLI - Command-line interface library
//!
//! This library provides the CLI functionality for taskload:
//! - Generate: read a workbook and save the ranked workload report as DOCX
//! - Inspect: print the table of a generated report
//!
//! # Library Usage
//!
//! ```ignore
//! use taskload_cli::{generate_command, GenerateOptions};
//!
//! let outcome = generate_command(&GenerateOptions {
//!     input: Some("Data.xlsx".into()),
//!     output_dir: Some("out".into()),
//!     no_prompt: true,
//!     ..Default::default()
//! })?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Interactive run, prompts for the workbook and output directory
//! taskload generate
//!
//! # Non-interactive, Russian labels, open the result
//! taskload generate --input Data.xlsx --output-dir out --lang ru --open
//!
//! # Print a generated report
//! taskload inspect out/Report.docx
//! ```

pub mod app;
pub mod config;
pub mod prompt;

pub use app::{generate_command, inspect_command, run_cli, GenerateOptions};
pub use config::Settings;
