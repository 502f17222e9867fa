use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod error;
pub mod handler;
pub mod output;
pub mod prompt;

/// dumpchooser - pick, delete and safely save dump files
#[derive(Parser, Debug)]
#[command(name = "dumpchooser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Override config directory path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (TRACE level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the files in a directory
    List {
        /// Directory to list (default: chooser.default_directory)
        dir: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Choose a file and print its full path and filename
    Choose {
        /// Directory to choose from (default: chooser.default_directory)
        dir: Option<PathBuf>,

        /// Index of the file in the listing (default: first file)
        #[arg(long, short)]
        index: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a file from a directory
    Delete {
        /// Directory to delete from (default: chooser.default_directory)
        dir: Option<PathBuf>,

        /// Index of the file in the listing
        #[arg(long, short)]
        index: usize,

        /// Allow deletion even if chooser.enable_delete is off
        #[arg(long)]
        allow_delete: bool,
    },

    /// Save data under a name, asking before overwriting an existing file
    Save {
        /// Desired filename; the default extension is appended if missing
        name: String,

        /// Target directory (default: save.default_directory)
        #[arg(long, short)]
        dir: Option<PathBuf>,

        /// Allowed extension, first is the default (repeatable; default: save.extensions)
        #[arg(long = "ext", value_name = "EXT")]
        extensions: Vec<String>,

        /// Read data from this file instead of stdin
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Overwrite an existing file without asking
        #[arg(long, conflicts_with = "no_clobber")]
        overwrite: bool,

        /// Never overwrite an existing file
        #[arg(long)]
        no_clobber: bool,
    },

    /// Manage configuration
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the path of settings.toml
    Path,

    /// Write a settings.toml with the default values
    Init {
        /// Replace an existing settings.toml
        #[arg(long)]
        force: bool,
    },
}
