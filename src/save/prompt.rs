use std::path::Path;

/// Answer to "file already exists, overwrite?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteChoice {
    Overwrite,
    Cancel,
}

/// Decision source consulted when a save would overwrite an existing file.
pub trait ConflictPrompt {
    fn on_conflict(&mut self, existing: &Path) -> OverwriteChoice;
}

/// Overwrites without asking
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysOverwrite;

impl ConflictPrompt for AlwaysOverwrite {
    fn on_conflict(&mut self, existing: &Path) -> OverwriteChoice {
        tracing::debug!("Overwriting {:?} without prompt", existing);
        OverwriteChoice::Overwrite
    }
}

/// Never clobbers an existing file
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverOverwrite;

impl ConflictPrompt for NeverOverwrite {
    fn on_conflict(&mut self, existing: &Path) -> OverwriteChoice {
        tracing::debug!("Refusing to overwrite {:?}", existing);
        OverwriteChoice::Cancel
    }
}

impl<F> ConflictPrompt for F
where
    F: FnMut(&Path) -> OverwriteChoice,
{
    fn on_conflict(&mut self, existing: &Path) -> OverwriteChoice {
        self(existing)
    }
}
