//! Interactive console prompts
//!
//! All prompts are generic over `BufRead`/`Write` so they can be driven by
//! scripted input in tests.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use taskload_ooxml::RetryPrompt;

/// Print `message` and read one trimmed line. EOF is an error.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    writeln!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        ));
    }
    Ok(line.trim().trim_matches('"').to_string())
}

/// Ask for the workbook path until an existing file is named
pub fn prompt_input_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PathBuf> {
    loop {
        let answer = ask(input, output, "Enter the path to the Excel workbook (e.g. Data.xlsb):")?;
        let path = PathBuf::from(&answer);
        if !answer.is_empty() && path.is_file() {
            return Ok(path);
        }
        writeln!(output, "Error: no file found at '{}'.", answer)?;
    }
}

/// Ask for the output directory; an empty answer means the current directory
pub fn prompt_output_dir<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PathBuf> {
    let answer = ask(
        input,
        output,
        "Enter the directory to save the Word report in (empty for current):",
    )?;
    Ok(if answer.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(answer)
    })
}

/// Y/N retry question on the console
pub struct ConsoleRetryPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleRetryPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> RetryPrompt for ConsoleRetryPrompt<R, W> {
    fn should_retry(&mut self, error: &io::Error, _attempt: u32) -> bool {
        if writeln!(self.output, "Error while saving the file: {}", error).is_err() {
            return false;
        }
        // Unreadable input counts as "no"
        ask(
            &mut self.input,
            &mut self.output,
            "Try saving again? (Y/N):",
        )
        .map(|answer| answer.eq_ignore_ascii_case("y"))
        .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn locked() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "file is locked")
    }

    #[test]
    fn test_input_path_reprompts_until_file_exists() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("Data.xlsx");
        std::fs::write(&file, b"x").unwrap();

        let script = format!("\nmissing.xlsx\n{}\n", file.display());
        let mut input = Cursor::new(script.into_bytes());
        let mut output = Vec::new();

        let path = prompt_input_path(&mut input, &mut output).unwrap();
        assert_eq!(path, file);

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Enter the path").count(), 3);
        assert_eq!(printed.matches("Error: no file found").count(), 2);
    }

    #[test]
    fn test_input_path_eof_is_error() {
        let mut input = Cursor::new(b"missing.xlsx\n".to_vec());
        let err = prompt_input_path(&mut input, &mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_quoted_input_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("Data.xlsb");
        std::fs::write(&file, b"x").unwrap();

        let script = format!("  \"{}\"  \n", file.display());
        let mut input = Cursor::new(script.into_bytes());
        assert_eq!(prompt_input_path(&mut input, &mut Vec::new()).unwrap(), file);
    }

    #[test]
    fn test_output_dir_empty_means_current() {
        let mut input = Cursor::new(b"\n".to_vec());
        assert_eq!(
            prompt_output_dir(&mut input, &mut Vec::new()).unwrap(),
            PathBuf::from(".")
        );

        let mut input = Cursor::new(b"reports/2024\n".to_vec());
        assert_eq!(
            prompt_output_dir(&mut input, &mut Vec::new()).unwrap(),
            PathBuf::from("reports/2024")
        );
    }

    #[test]
    fn test_retry_prompt_answers() {
        let mut prompt = ConsoleRetryPrompt::new(Cursor::new(b"y\nN\n".to_vec()), Vec::new());
        assert!(prompt.should_retry(&locked(), 1));
        assert!(!prompt.should_retry(&locked(), 2));
        // Input exhausted
        assert!(!prompt.should_retry(&locked(), 3));

        let printed = String::from_utf8(prompt.output).unwrap();
        assert!(printed.contains("Error while saving the file: file is locked"));
    }
}
