use super::error;
use super::output;
use super::prompt::LinePrompt;
use super::{Commands, ConfigAction};
use crate::app::config::Config;
use crate::app::settings::ResolvedDirectories;
use crate::chooser::{self, DirectoryView};
use crate::save::{self, AlwaysOverwrite, ConflictPrompt, NeverOverwrite, SaveDecision};
use anyhow::{Context, Result};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

/// Handle a CLI command and return exit code
pub fn handle_command(command: Commands, config: &Config) -> i32 {
    let result = match command {
        Commands::List { dir, json } => handle_list(config, dir, json),
        Commands::Choose { dir, index, json } => handle_choose(config, dir, index, json),
        Commands::Delete {
            dir,
            index,
            allow_delete,
        } => handle_delete(config, dir, index, allow_delete),
        Commands::Save {
            name,
            dir,
            extensions,
            input,
            overwrite,
            no_clobber,
        } => {
            let interactive = input.is_some() && std::io::stdin().is_terminal();
            let mut prompt: Box<dyn ConflictPrompt> = if overwrite {
                Box::new(AlwaysOverwrite)
            } else if no_clobber {
                Box::new(NeverOverwrite)
            } else if interactive {
                Box::new(LinePrompt::new(std::io::stdin().lock(), std::io::stderr()))
            } else {
                // stdin carries the payload, so nobody can answer a prompt
                tracing::debug!("Non-interactive save, existing files are kept");
                Box::new(NeverOverwrite)
            };
            let request = SaveRequest {
                name,
                dir,
                extensions,
                input,
            };
            handle_save(config, request, prompt.as_mut(), std::io::stdin())
        }
        Commands::Config { action } => handle_config(config, action),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            error::exit_code_for(&e)
        }
    }
}

/// Open the directory a chooser command works on
fn open_view(config: &Config, dir: Option<PathBuf>) -> Result<Option<DirectoryView>> {
    let Some(directory) = ResolvedDirectories::resolve(config, dir).chooser else {
        eprintln!("No directory specified");
        return Ok(None);
    };
    let view = DirectoryView::open(&directory)?;
    Ok(Some(view))
}

/// List files
fn handle_list(config: &Config, dir: Option<PathBuf>, json: bool) -> Result<i32> {
    let Some(view) = open_view(config, dir)? else {
        return Ok(error::NO_DIRECTORY);
    };
    println!("{}", output::format_listing(&view, &config.chooser, json));
    Ok(error::SUCCESS)
}

/// Choose a file and print its path and name
fn handle_choose(
    config: &Config,
    dir: Option<PathBuf>,
    index: Option<usize>,
    json: bool,
) -> Result<i32> {
    let Some(mut view) = open_view(config, dir)? else {
        return Ok(error::NO_DIRECTORY);
    };
    if let Some(index) = index {
        view.select(index)?;
    }
    let chosen = view.chosen()?;
    tracing::info!("Chosen file: {:?}", chosen.path);
    println!("{}", output::format_chosen(&chosen, json));
    Ok(error::SUCCESS)
}

/// Delete a file, then show what is left
fn handle_delete(
    config: &Config,
    dir: Option<PathBuf>,
    index: usize,
    allow_delete: bool,
) -> Result<i32> {
    if !config.chooser.enable_delete && !allow_delete {
        eprintln!("File deletion is disabled (set chooser.enable_delete or pass --allow-delete)");
        return Ok(error::INVALID_INPUT);
    }

    let Some(mut view) = open_view(config, dir)? else {
        return Ok(error::NO_DIRECTORY);
    };
    if config.save.require_writable {
        view.ensure_writable()?;
    }
    view.select(index)?;
    let deleted = view.delete_selected()?;

    println!("Deleted: {}", deleted);
    println!("{}", output::format_listing(&view, &config.chooser, false));
    Ok(error::SUCCESS)
}

/// Arguments of the save command
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub name: String,
    pub dir: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub input: Option<PathBuf>,
}

/// Resolve a save against existing files and write the payload
pub fn handle_save<R: Read>(
    config: &Config,
    request: SaveRequest,
    prompt: &mut dyn ConflictPrompt,
    stdin: R,
) -> Result<i32> {
    let Some(directory) = ResolvedDirectories::resolve(config, request.dir).save else {
        eprintln!("No directory specified");
        return Ok(error::NO_DIRECTORY);
    };
    let extensions = if request.extensions.is_empty() {
        config.save.extensions.clone()
    } else {
        request.extensions
    };

    if config.save.require_writable {
        chooser::ensure_writable(&directory)?;
    }
    let mut handle = save::begin_save(&directory, &request.name, &extensions)?;

    let decision = handle.resolve_with(prompt);
    let SaveDecision::Proceed { path } = &decision else {
        eprintln!("Save cancelled: {} already exists", handle.target().display());
        return Ok(error::CANCELLED);
    };

    let contents = read_payload(request.input.as_ref(), stdin)?;
    save::writer::commit(&decision, &contents)?;
    println!("Saved: {}", path.display());
    Ok(error::SUCCESS)
}

fn read_payload<R: Read>(input: Option<&PathBuf>, mut stdin: R) -> Result<Vec<u8>> {
    match input {
        Some(path) => std::fs::read(path).context(format!("Failed to read {:?}", path)),
        None => {
            let mut buffer = Vec::new();
            stdin
                .read_to_end(&mut buffer)
                .context("Failed to read data from stdin")?;
            Ok(buffer)
        }
    }
}

/// Handle config commands
fn handle_config(config: &Config, action: ConfigAction) -> Result<i32> {
    match action {
        ConfigAction::Show { json } => {
            let rendered = if json {
                serde_json::to_string_pretty(config)?
            } else {
                toml::to_string_pretty(config)?
            };
            println!("{}", rendered);
        }
        ConfigAction::Path => {
            println!("{}", crate::util::paths::get_app_config_path()?.display());
        }
        ConfigAction::Init { force } => {
            let path = crate::util::paths::get_app_config_path()?;
            if path.exists() && !force {
                eprintln!("{} already exists (pass --force to replace it)", path.display());
                return Ok(error::INVALID_INPUT);
            }
            Config::default().save()?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(error::SUCCESS)
}
