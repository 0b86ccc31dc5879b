use std::sync::OnceLock;

use regex::Regex;

/// Collapses every whitespace run (tabs, newlines, nbsp included) into a single
/// space and trims both ends.
pub fn normalize(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s, " ").trim().to_owned()
}
