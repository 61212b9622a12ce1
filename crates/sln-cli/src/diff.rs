//! Unified diff rendering for `--check`.

use colored::Colorize;
use similar::TextDiff;

/// Unified diff from `old` to `new`, added/removed lines colored.
pub fn unified(old: &str, new: &str, label: &str) -> String {
    let text_diff = TextDiff::from_lines(old, new);
    let plain = text_diff
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{label}"), &format!("b/{label}"))
        .to_string();

    let mut out = String::with_capacity(plain.len());
    for line in plain.split_inclusive('\n') {
        let colored = if line.starts_with("+++") || line.starts_with("---") {
            line.bold().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else if line.starts_with("@@") {
            line.cyan().to_string()
        } else {
            line.to_string()
        };
        out.push_str(&colored);
    }
    out
}
