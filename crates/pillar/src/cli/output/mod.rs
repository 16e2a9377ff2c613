//! Terminal styling, tables and JSON serialization for CLI output.

use std::{path::Path, process::ExitCode};

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use pillar_core::CategoryHistogram;
use serde::Serialize;

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Returns a dimmed horizontal rule.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Indents every non-empty line by two spaces.
pub fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shows `path` relative to `base` when it lies below it, else with `~` for the home directory.
pub fn format_path_for_display(path: &Path, base: Option<&Path>, home: Option<&Path>) -> String {
    if let Some(rel) = base.and_then(|b| path.strip_prefix(b).ok())
        && !rel.as_os_str().is_empty()
    {
        return rel.display().to_string();
    }
    if let Some(rel) = home.and_then(|h| path.strip_prefix(h).ok()) {
        return Path::new("~").join(rel).display().to_string();
    }
    path.display().to_string()
}

/// Creates a table with the shared preset and the given header.
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header);
    table
}

/// Renders a category histogram, largest first.
pub fn histogram_table(histogram: &CategoryHistogram) -> Table {
    let mut table = new_table(vec!["Category", "Posts"]);
    for (category, count) in histogram.sorted() {
        let label = if category.is_empty() {
            "(none)"
        } else {
            category
        };
        table.add_row(vec![label.to_string(), count.to_string()]);
    }
    table
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// JSON envelope for the passes that rewrite the posts file.
#[derive(Serialize)]
pub struct JsonPassOutput<'a, R: Serialize> {
    /// Posts file the pass ran on.
    pub posts_file: String,
    /// Whether the pass ran with `--dry-run`.
    pub dry_run: bool,
    /// Whether the posts file was rewritten.
    pub written: bool,
    /// The pass report.
    pub report: &'a R,
}

/// Prints the closing line of a pass: where the result went.
pub fn print_write_outcome(path: &Path, dry_run: bool, written: bool) {
    if dry_run {
        println!("{}", dim("Dry run: posts file not written."));
    } else if written {
        println!("Wrote {}", path.display());
    } else {
        println!("{}", dim("No changes; posts file not written."));
    }
}
