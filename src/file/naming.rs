const SEPARATORS: &[char] = &['/', '\\'];

/// Reasons a user-supplied filename is rejected before any disk access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameProblem {
    Empty,
    Reserved,
    Separator,
    ControlChar,
}

impl std::fmt::Display for NameProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameProblem::Empty => write!(f, "name is empty"),
            NameProblem::Reserved => write!(f, "'.' and '..' are not file names"),
            NameProblem::Separator => write!(f, "name contains a path separator"),
            NameProblem::ControlChar => write!(f, "name contains a control character"),
        }
    }
}

/// Checks that `name` is a bare file name that stays inside its directory.
pub fn validate_name(name: &str) -> Result<(), NameProblem> {
    if name.trim().is_empty() {
        return Err(NameProblem::Empty);
    }
    if name == "." || name == ".." {
        return Err(NameProblem::Reserved);
    }
    if name.contains(SEPARATORS) {
        return Err(NameProblem::Separator);
    }
    if name.chars().any(|c| c.is_control()) {
        return Err(NameProblem::ControlChar);
    }
    Ok(())
}

/// Reasons an extension from the allowed list is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionProblem {
    /// Nothing left once the leading dot is removed
    Empty,
    /// Contains a dot or a path separator after the leading dot
    Malformed,
}

impl std::fmt::Display for ExtensionProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtensionProblem::Empty => write!(f, "extension is empty"),
            ExtensionProblem::Malformed => {
                write!(f, "extension must not contain dots or path separators")
            }
        }
    }
}

/// Checks that `ext` is a single extension segment, with or without a
/// leading dot, so appending it keeps the name inside its directory.
pub fn validate_extension(ext: &str) -> Result<(), ExtensionProblem> {
    let cleaned = clean_extension(ext);
    if cleaned.is_empty() {
        return Err(ExtensionProblem::Empty);
    }
    if cleaned.contains('.') || cleaned.contains(SEPARATORS) {
        return Err(ExtensionProblem::Malformed);
    }
    Ok(())
}

/// Strips a leading dot so `".mfd"` and `"mfd"` mean the same extension.
pub fn clean_extension(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

/// Returns true if `name` ends with `.<ext>` for one of `extensions`
/// (case-insensitive) and has a non-empty stem in front of it.
pub fn has_allowed_extension(name: &str, extensions: &[String]) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| {
        let ext = clean_extension(ext);
        if ext.is_empty() {
            return false;
        }
        let suffix = format!(".{}", ext.to_lowercase());
        lower.len() > suffix.len() && lower.ends_with(&suffix)
    })
}

/// Maps a desired name onto the canonical filename for a save.
///
/// Trailing dots are stripped first, so `"report."` never turns into
/// `"report..mfd"`. A name already carrying one of `extensions` is kept as-is,
/// otherwise the first extension is appended.
///
/// Returns `None` if `extensions` is empty or the name is nothing but dots.
/// The extensions themselves are expected to pass [`validate_extension`].
///
/// # Examples
///
/// ```
/// use dumpchooser::file::naming::normalize_filename;
///
/// let exts = vec!["mfd".to_string(), "dump".to_string()];
/// assert_eq!(normalize_filename("report", &exts).as_deref(), Some("report.mfd"));
/// assert_eq!(normalize_filename("report.dump", &exts).as_deref(), Some("report.dump"));
/// assert_eq!(normalize_filename("report.", &exts).as_deref(), Some("report.mfd"));
/// ```
pub fn normalize_filename(desired: &str, extensions: &[String]) -> Option<String> {
    let default_ext = clean_extension(extensions.first()?);
    let stem = desired.trim_end_matches('.');
    if stem.is_empty() {
        return None;
    }

    if has_allowed_extension(stem, extensions) {
        return Some(stem.to_string());
    }
    Some(format!("{}.{}", stem, default_ext))
}
