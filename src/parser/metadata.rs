use regex::Regex;
use tracing::debug;

use super::capitalize_first;

/// Best-effort project name, tried in order: a manifest `"name"` field, the
/// first short H1 heading, the leading token of the filename.
pub fn extract_project_name(text: &str, filename: &str) -> String {
    let manifest_re =
        Regex::new(r#"(?i)"name"\s*:\s*["']([^"']+)["']"#).expect("valid regex");
    if let Some(caps) = manifest_re.captures(text) {
        return capitalize_first(caps[1].trim());
    }

    let h1_re = Regex::new(r"(?m)^#[ \t]+(.+)$").expect("valid regex");
    if let Some(caps) = h1_re.captures(text) {
        let name = caps[1].trim();
        if name.chars().count() < 50 {
            return name.to_string();
        }
    }

    // e.g. "campor-backend.txt" -> "Campor"
    let token = filename.split('-').next().unwrap_or("");
    if !token.is_empty() {
        debug!(filename, "no name in dump contents, using filename");
        return capitalize_first(token);
    }

    "Untitled Project".to_string()
}

/// Find a GitHub repository reference anywhere in the text and normalize it
/// to an https URL. Returns an empty string when none is present.
pub fn extract_github_url(text: &str) -> String {
    let github_re = Regex::new(r"(?i)github\.com[/:]([^\s)]+)").expect("valid regex");
    match github_re.captures(text) {
        Some(caps) => {
            let path = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let path = path.strip_suffix(".git").unwrap_or(path);
            format!("https://github.com/{}", path)
        }
        None => String::new(),
    }
}
