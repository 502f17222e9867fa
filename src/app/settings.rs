use super::config::Config;
use crate::file::naming::{ExtensionProblem, validate_extension};
use std::path::PathBuf;

/// Directories a command works on after applying the fallback chain:
/// command line > section default > other section's default
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDirectories {
    pub chooser: Option<PathBuf>,
    pub save: Option<PathBuf>,
}

impl ResolvedDirectories {
    pub fn resolve(config: &Config, explicit: Option<PathBuf>) -> Self {
        let chooser = explicit
            .clone()
            .or_else(|| config.chooser.default_directory.clone())
            .or_else(|| config.save.default_directory.clone());
        let save = explicit
            .or_else(|| config.save.default_directory.clone())
            .or_else(|| config.chooser.default_directory.clone());
        Self { chooser, save }
    }
}

/// Validation errors for configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `save.extensions` is empty
    NoExtensions,
    /// Extension is empty once the leading dot is removed
    EmptyExtension(usize),
    /// Extension contains a dot or a path separator
    MalformedExtension(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NoExtensions => {
                write!(f, "save.extensions must list at least one extension")
            }
            ValidationError::EmptyExtension(index) => {
                write!(f, "save.extensions[{}] is empty", index)
            }
            ValidationError::MalformedExtension(ext) => {
                write!(
                    f,
                    "Extension '{}' must not contain dots or path separators",
                    ext
                )
            }
        }
    }
}

/// Validate configuration, collecting every problem
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.save.extensions.is_empty() {
        errors.push(ValidationError::NoExtensions);
    }

    for (index, ext) in config.save.extensions.iter().enumerate() {
        match validate_extension(ext) {
            Ok(()) => {}
            Err(ExtensionProblem::Empty) => errors.push(ValidationError::EmptyExtension(index)),
            Err(ExtensionProblem::Malformed) => {
                errors.push(ValidationError::MalformedExtension(ext.clone()))
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&Config::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = Config::default();
        config.save.extensions = vec![".".to_string(), "tar.gz".to_string(), ".mfd".to_string()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyExtension(0),
                ValidationError::MalformedExtension("tar.gz".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_extensions() {
        let mut config = Config::default();
        config.save.extensions.clear();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NoExtensions]);
        assert_eq!(
            errors[0].to_string(),
            "save.extensions must list at least one extension"
        );
    }

    #[test]
    fn test_resolve_directories() {
        let mut config = Config::default();
        config.chooser.default_directory = Some(PathBuf::from("/open"));

        let dirs = ResolvedDirectories::resolve(&config, None);
        assert_eq!(dirs.chooser, Some(PathBuf::from("/open")));
        assert_eq!(dirs.save, Some(PathBuf::from("/open")));

        config.save.default_directory = Some(PathBuf::from("/save"));
        let dirs = ResolvedDirectories::resolve(&config, None);
        assert_eq!(dirs.save, Some(PathBuf::from("/save")));

        let dirs = ResolvedDirectories::resolve(&config, Some(PathBuf::from("/cli")));
        assert_eq!(dirs.chooser, Some(PathBuf::from("/cli")));
        assert_eq!(dirs.save, Some(PathBuf::from("/cli")));

        assert_eq!(
            ResolvedDirectories::resolve(&Config::default(), None),
            ResolvedDirectories {
                chooser: None,
                save: None
            }
        );
    }
}
