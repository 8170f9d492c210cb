use anyhow::Context;
use std::path::Path;

/// Parses a label list of `"<index> <label>"` lines.
///
/// The label is everything after the first space. Blank lines are skipped and
/// a line with no space is used as-is.
pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(' ') {
            Some((_, label)) => label.trim().to_string(),
            None => line.to_string(),
        })
        .collect()
}

pub fn load_labels(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading labels from {}", path.display()))?;
    let labels = parse_labels(&text);
    anyhow::ensure!(!labels.is_empty(), "{} has no labels", path.display());
    Ok(labels)
}
