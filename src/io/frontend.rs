//! Collaborator traits for the presentation layer.
//!
//! The store never touches the screen or the filesystem directly. Downloads,
//! file pickers, confirmation prompts, and notifications are all host
//! concerns: a GUI wires these traits to browser or desktop facilities, the
//! CLI wires them to the terminal, and tests wire them to in-memory doubles.

use std::fs;
use std::path::PathBuf;

/// Receives an exported workflow document, e.g. as a file download.
pub trait ExportSink {
    fn write_document(&mut self, file_name: &str, contents: &str) -> Result<(), String>;
}

/// Yields the text contents of a user-picked file.
pub trait FileSource {
    fn read_to_string(&mut self) -> Result<String, String>;
}

/// Asks the user to confirm an irreversible action.
pub trait Prompter {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Shows the user a short message.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Receives diagnostic output, line by line. The browser original dumped to
/// the developer console; hosts decide where these lines land.
pub trait DiagnosticSink {
    fn emit(&mut self, line: &str);
}

/// Writes exported documents into a directory on disk.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for DirectorySink {
    fn write_document(&mut self, file_name: &str, contents: &str) -> Result<(), String> {
        fs::write(self.dir.join(file_name), contents).map_err(|e| e.to_string())
    }
}

/// Collects exported documents in memory. Useful for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub documents: Vec<(String, String)>,
}

impl ExportSink for MemorySink {
    fn write_document(&mut self, file_name: &str, contents: &str) -> Result<(), String> {
        self.documents
            .push((file_name.to_string(), contents.to_string()));
        Ok(())
    }
}

/// A file source backed by an in-memory string.
#[derive(Debug)]
pub struct MemorySource {
    contents: String,
}

impl MemorySource {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }
}

impl FileSource for MemorySource {
    fn read_to_string(&mut self) -> Result<String, String> {
        Ok(self.contents.clone())
    }
}

/// A prompter that always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct PresetPrompter {
    pub answer: bool,
}

impl Prompter for PresetPrompter {
    fn confirm(&mut self, _message: &str) -> bool {
        self.answer
    }
}

/// Records every notification for later inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Prints diagnostic lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleDiagnostics;

impl DiagnosticSink for ConsoleDiagnostics {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}
