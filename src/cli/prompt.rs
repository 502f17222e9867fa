use crate::save::{ConflictPrompt, OverwriteChoice};
use std::io::{BufRead, Write};
use std::path::Path;

/// Asks "overwrite? [y/N]" on a terminal-like reader/writer pair.
/// Anything but an explicit yes cancels, including EOF and read errors.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConflictPrompt for LinePrompt<R, W> {
    fn on_conflict(&mut self, existing: &Path) -> OverwriteChoice {
        let _ = write!(
            self.output,
            "File {} already exists. Overwrite? [y/N] ",
            existing.display()
        );
        let _ = self.output.flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") => {
                OverwriteChoice::Overwrite
            }
            Ok(_) => OverwriteChoice::Cancel,
            Err(e) => {
                tracing::warn!("Failed to read overwrite answer: {}", e);
                OverwriteChoice::Cancel
            }
        }
    }
}
