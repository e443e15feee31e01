//! Saving documents with user-recoverable retries.
//!
//! A failed save is the one failure the user can recover from. What to do
//! after a failure is split in two: [`RetryPolicy`] caps the number of
//! attempts, and a [`RetryPrompt`] makes the yes/no decision, so the loop
//! itself never touches a terminal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Destination for document bytes
pub trait DocumentSink {
    /// Persist `bytes` at `path`
    fn persist(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Writes documents to the filesystem, creating missing parent directories
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl DocumentSink for FileSink {
    fn persist(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)
    }
}

/// Decides whether to try again after a failed save
pub trait RetryPrompt {
    /// Called after failed attempt number `attempt` (1-based)
    fn should_retry(&mut self, error: &io::Error, attempt: u32) -> bool;
}

impl<F> RetryPrompt for F
where
    F: FnMut(&io::Error, u32) -> bool,
{
    fn should_retry(&mut self, error: &io::Error, attempt: u32) -> bool {
        self(error, attempt)
    }
}

/// A prompt that always declines
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverRetry;

impl RetryPrompt for NeverRetry {
    fn should_retry(&mut self, _error: &io::Error, _attempt: u32) -> bool {
        false
    }
}

/// Upper bound on save attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryPolicy {
    /// Maximum attempts, `None` for unbounded
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Retry for as long as the prompt agrees
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Stop after `attempts` attempts; 0 means unbounded
    pub fn bounded(attempts: u32) -> Self {
        Self {
            max_attempts: (attempts > 0).then_some(attempts),
        }
    }

    fn allows_another(&self, attempts_made: u32) -> bool {
        self.max_attempts.map_or(true, |max| attempts_made < max)
    }
}

/// Result of [`save_with_retry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The document was written
    Saved { path: PathBuf, attempts: u32 },
    /// The user declined, or the policy ran out of attempts
    Abandoned { attempts: u32, last_error: String },
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }
}

/// Save `bytes` to `path`, retrying failed attempts while `policy` and
/// `prompt` both allow it.
pub fn save_with_retry<S, P>(
    bytes: &[u8],
    path: &Path,
    sink: &mut S,
    policy: RetryPolicy,
    prompt: &mut P,
) -> SaveOutcome
where
    S: DocumentSink + ?Sized,
    P: RetryPrompt + ?Sized,
{
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match sink.persist(path, bytes) {
            Ok(()) => {
                info!(path = %path.display(), attempts, "document saved");
                return SaveOutcome::Saved {
                    path: path.to_path_buf(),
                    attempts,
                };
            }
            Err(err) => {
                warn!(path = %path.display(), attempt = attempts, error = %err, "save failed");

                if !policy.allows_another(attempts) || !prompt.should_retry(&err, attempts) {
                    return SaveOutcome::Abandoned {
                        attempts,
                        last_error: err.to_string(),
                    };
                }
            }
        }
    }
}
