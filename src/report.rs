use crate::types::Failure;
use colored::Colorize;

/// The stdout contract: a pretty-printed JSON array with 2-space
/// indentation, `[]` when nothing failed.
pub fn render_json(failures: &[Failure]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(failures)
}

pub fn render_human(failures: &[Failure]) -> String {
    let mut out = String::new();
    let count = if failures.is_empty() {
        failures.len().to_string().green().to_string()
    } else {
        failures.len().to_string().red().bold().to_string()
    };
    out.push_str(&format!("Failed: {count}\n"));
    for f in failures {
        let title = f.title.as_deref().unwrap_or("(untitled)");
        out.push_str(&format!("{} {}\n", "[FAIL]".red().bold(), title.red()));
        out.push_str(&format!("  {} {}\n", "file :".bold(), f.file));
        out.push_str(&format!("  {} {}\n", "error:".bold(), f.error.red()));
    }
    out
}

pub fn print_human(failures: &[Failure]) {
    eprint!("{}", render_human(failures));
}
