use crate::app::config::ChooserConfig;
use crate::chooser::{ChosenFile, DirectoryView};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct EntryInfo {
    pub index: usize,
    pub name: String,
    pub size: Option<u64>,
    pub modified: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListingInfo {
    pub directory: PathBuf,
    pub selected: Option<usize>,
    pub entries: Vec<EntryInfo>,
}

/// Format bytes into human-readable string (KB, MB)
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

fn entry_info(view: &DirectoryView, index: usize, name: &str) -> EntryInfo {
    let metadata = std::fs::metadata(view.directory().join(name)).ok();
    let modified = metadata
        .as_ref()
        .and_then(|m| m.modified().ok())
        .map(|t| {
            DateTime::<Local>::from(t)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        });

    EntryInfo {
        index,
        name: name.to_string(),
        size: metadata.map(|m| m.len()),
        modified,
    }
}

pub fn listing_info(view: &DirectoryView) -> ListingInfo {
    ListingInfo {
        directory: view.directory().to_path_buf(),
        selected: view.selected_index(),
        entries: view
            .entries()
            .iter()
            .enumerate()
            .map(|(index, name)| entry_info(view, index, name))
            .collect(),
    }
}

/// Format a directory listing for display (human or JSON)
pub fn format_listing(view: &DirectoryView, chooser: &ChooserConfig, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(&listing_info(view)).unwrap_or_else(|_| "{}".to_string());
    }

    let mut output = String::new();
    if let Some(title) = &chooser.title {
        output.push_str(title);
        output.push('\n');
    }
    output.push_str(&chooser.chooser_text);

    if view.is_empty() {
        output.push_str(&format!("\n   --- {} ---", chooser.empty_text));
        return output;
    }

    for entry in listing_info(view).entries {
        let marker = if Some(entry.index) == view.selected_index() {
            "(*)"
        } else {
            "( )"
        };
        let size = entry.size.map(format_bytes).unwrap_or_default();
        let modified = entry.modified.unwrap_or_default();
        output.push_str(&format!(
            "\n{} {:>3}  {:<40} {:>10}  {}",
            marker, entry.index, entry.name, size, modified
        ));
    }
    output.push_str(&format!("\n[{}]", chooser.button_text));
    output
}

/// Format the chosen file: full path, then bare filename
pub fn format_chosen(chosen: &ChosenFile, json: bool) -> String {
    if json {
        serde_json::to_string_pretty(chosen).unwrap_or_else(|_| "{}".to_string())
    } else {
        format!("{}\n{}", chosen.path.display(), chosen.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_empty_listing_appends_marker() {
        let temp_dir = TempDir::new().unwrap();
        let view = DirectoryView::open(temp_dir.path()).unwrap();
        let chooser = ChooserConfig {
            title: Some("Open Dump File".to_string()),
            ..ChooserConfig::default()
        };

        assert_eq!(
            format_listing(&view, &chooser, false),
            "Open Dump File\nPlease choose a file:\n   --- No files in this directory ---"
        );
    }

    #[test]
    fn test_listing_marks_selection() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.mfd"), b"1").unwrap();
        std::fs::write(temp_dir.path().join("b.mfd"), b"2").unwrap();
        let mut view = DirectoryView::open(temp_dir.path()).unwrap();
        view.select(1).unwrap();

        let text = format_listing(&view, &ChooserConfig::default(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("( )   0  a.mfd"));
        assert!(lines[2].starts_with("(*)   1  b.mfd"));
        assert_eq!(lines[3], "[Open File]");
    }

    #[test]
    fn test_listing_json() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.mfd"), b"1234").unwrap();
        let view = DirectoryView::open(temp_dir.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&format_listing(&view, &ChooserConfig::default(), true)).unwrap();
        assert_eq!(value["selected"], 0);
        assert_eq!(value["entries"][0]["name"], "a.mfd");
        assert_eq!(value["entries"][0]["size"], 4);
    }

    #[test]
    fn test_format_chosen() {
        let chosen = ChosenFile {
            path: PathBuf::from("/dumps/card.mfd"),
            filename: "card.mfd".to_string(),
        };
        assert_eq!(format_chosen(&chosen, false), "/dumps/card.mfd\ncard.mfd");
    }
}
