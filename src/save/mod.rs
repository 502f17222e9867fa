//! Save conflict resolver
//!
//! [`begin_save`] normalizes the requested name and checks the target path.
//! A free target gives a handle that has already proceeded. An existing file
//! gives a pending handle that stays pending until the caller answers exactly
//! once with [`SaveHandle::confirm_overwrite`] or [`SaveHandle::cancel`].

pub mod error;
pub mod prompt;
pub mod writer;

pub use error::{ResolveError, SaveError};
pub use prompt::{AlwaysOverwrite, ConflictPrompt, NeverOverwrite, OverwriteChoice};

use crate::chooser;
use crate::file::naming;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of one save attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaveDecision {
    Proceed { path: PathBuf },
    Cancelled,
}

impl SaveDecision {
    pub fn resolved_path(&self) -> Option<&Path> {
        match self {
            SaveDecision::Proceed { path } => Some(path),
            SaveDecision::Cancelled => None,
        }
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, SaveDecision::Proceed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    /// Target exists, waiting for overwrite/cancel
    Pending,
    Proceeded,
    Cancelled,
}

/// One in-flight save
#[derive(Debug)]
pub struct SaveHandle {
    target: PathBuf,
    state: HandleState,
}

/// Start a save of `desired_name` into `directory`.
///
/// `extensions` is ordered; the first entry is appended when the name carries
/// none of them. Every entry must be a single segment such as `"mfd"` or
/// `".mfd"`, otherwise nothing is looked up on disk.
pub fn begin_save(
    directory: impl AsRef<Path>,
    desired_name: &str,
    extensions: &[String],
) -> Result<SaveHandle, SaveError> {
    let directory = directory.as_ref();
    if extensions.is_empty() {
        return Err(SaveError::NoExtensions);
    }
    for ext in extensions {
        naming::validate_extension(ext).map_err(|problem| SaveError::InvalidExtension {
            extension: ext.clone(),
            problem,
        })?;
    }
    naming::validate_name(desired_name)
        .map_err(|problem| SaveError::invalid_name(desired_name, problem))?;
    let filename = naming::normalize_filename(desired_name, extensions)
        .ok_or_else(|| SaveError::invalid_name(desired_name, naming::NameProblem::Empty))?;

    chooser::check_directory(directory)?;

    let target = directory.join(&filename);
    let state = if target.exists() {
        tracing::info!("Save target {:?} already exists, waiting for decision", target);
        HandleState::Pending
    } else {
        tracing::debug!("Save target {:?} is free", target);
        HandleState::Proceeded
    };

    Ok(SaveHandle { target, state })
}

impl SaveHandle {
    pub fn state(&self) -> HandleState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == HandleState::Pending
    }

    /// Normalized full path this save writes to
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// The colliding path while the handle is pending
    pub fn conflict(&self) -> Option<&Path> {
        self.is_pending().then_some(self.target.as_path())
    }

    /// The decision, once one has been made
    pub fn decision(&self) -> Option<SaveDecision> {
        match self.state {
            HandleState::Pending => None,
            HandleState::Proceeded => Some(SaveDecision::Proceed {
                path: self.target.clone(),
            }),
            HandleState::Cancelled => Some(SaveDecision::Cancelled),
        }
    }

    pub fn confirm_overwrite(&mut self) -> Result<SaveDecision, ResolveError> {
        self.finish(HandleState::Proceeded)
    }

    pub fn cancel(&mut self) -> Result<SaveDecision, ResolveError> {
        self.finish(HandleState::Cancelled)
    }

    /// Ask `prompt` about a pending conflict. A handle that has already been
    /// decided returns its decision without consulting the prompt.
    pub fn resolve_with<P>(&mut self, prompt: &mut P) -> SaveDecision
    where
        P: ConflictPrompt + ?Sized,
    {
        if let Some(decision) = self.decision() {
            return decision;
        }
        let next = match prompt.on_conflict(&self.target) {
            OverwriteChoice::Overwrite => HandleState::Proceeded,
            OverwriteChoice::Cancel => HandleState::Cancelled,
        };
        self.transition(next)
    }

    /// Consume a decided handle
    pub fn into_decision(self) -> Result<SaveDecision, ResolveError> {
        self.decision().ok_or(ResolveError::StillPending)
    }

    fn finish(&mut self, next: HandleState) -> Result<SaveDecision, ResolveError> {
        if !self.is_pending() {
            return Err(ResolveError::AlreadyResolved);
        }
        Ok(self.transition(next))
    }

    fn transition(&mut self, next: HandleState) -> SaveDecision {
        self.state = next;
        tracing::info!("Save of {:?} resolved: {:?}", self.target, next);
        match next {
            HandleState::Cancelled => SaveDecision::Cancelled,
            _ => SaveDecision::Proceed {
                path: self.target.clone(),
            },
        }
    }
}

impl Drop for SaveHandle {
    fn drop(&mut self) {
        if self.is_pending() {
            tracing::warn!(
                "Save handle for {:?} dropped without a decision; treating as cancelled",
                self.target
            );
        }
    }
}
