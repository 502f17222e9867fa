pub mod app;
pub mod chooser;
pub mod cli;
pub mod file;
pub mod save;
pub mod util;

pub use app::config::Config;
pub use chooser::{ChosenFile, DirectoryView};
pub use save::{SaveDecision, SaveHandle, begin_save};
