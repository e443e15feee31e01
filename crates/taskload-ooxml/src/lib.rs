//! # taskload-ooxml
//!
//! DOCX output for taskload reports.
//!
//! This crate provides functionality to:
//! - Render a [`taskload_core::ReportLayout`] into a self-contained DOCX
//!   package (no template needed)
//! - Save it with a user-driven retry loop
//! - Read a generated report back into plain text
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use taskload_core::{build_layout, Language, RankedReport, ReportStyle};
//! use taskload_ooxml::{save_with_retry, DocxWriter, FileSink, NeverRetry, RetryPolicy};
//!
//! let layout = build_layout(&RankedReport::default(), &Language::En.labels(), &ReportStyle::default());
//! let bytes = DocxWriter::generate(&layout)?;
//! let outcome = save_with_retry(
//!     &bytes,
//!     Path::new("Report.docx"),
//!     &mut FileSink,
//!     RetryPolicy::unbounded(),
//!     &mut NeverRetry,
//! );
//! assert!(outcome.is_saved());
//! # Ok::<(), taskload_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod error;
pub mod inspect;
pub mod package;
pub mod persist;
pub mod writer;
mod xml;

pub use archive::OoxmlArchive;
pub use error::{OoxmlError, Result};
pub use inspect::ReportText;
pub use persist::{
    save_with_retry, DocumentSink, FileSink, NeverRetry, RetryPolicy, RetryPrompt, SaveOutcome,
};
pub use writer::DocxWriter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
