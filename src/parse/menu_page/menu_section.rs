use std::collections::HashSet;

/// One named daily menu and its lines, or a single placeholder line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    name: String,
    lines: Vec<String>,
}

impl MenuSection {
    /// Dedups `lines` and substitutes `placeholder` if nothing is left.
    pub fn new(name: &str, lines: Vec<String>, placeholder: &str) -> Self {
        let mut lines = dedup_case_insensitive(lines);
        if lines.is_empty() {
            lines.push(placeholder.to_owned());
        }
        Self {
            name: name.to_owned(),
            lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Keeps the first spelling of every line, compared case-insensitively.
pub fn dedup_case_insensitive(lines: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(lines.len());
    lines
        .into_iter()
        .filter(|line| seen.insert(line.to_lowercase()))
        .collect()
}
