use regex::Regex;

/// Upper bound on features kept from a dump.
pub const MAX_FEATURES: usize = 20;

/// Longest description kept, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 300;

/// Collect bullet lines from a `## Features` section, then a `## Core
/// Features` section. A section runs from its heading to the next `##`
/// heading or the end of the text. Bullets shorter than 10 or longer than
/// 200 characters are noise (badges, walls of text) and dropped.
pub fn extract_features(text: &str) -> Vec<String> {
    let mut features: Vec<String> = Vec::new();

    let features_re = Regex::new(r"(?i)##?\s*features?").expect("valid regex");
    let core_features_re = Regex::new(r"(?i)##?\s*core\s+features?").expect("valid regex");
    let bullet_re = Regex::new(r"(?m)^\s*[-*]\s*(.+)$").expect("valid regex");

    for heading_re in [&features_re, &core_features_re] {
        let Some(body) = section(text, heading_re) else {
            continue;
        };
        for caps in bullet_re.captures_iter(body) {
            let feature = caps[1].trim();
            let len = feature.chars().count();
            if len > 10 && len < 200 && !features.iter().any(|f| f == feature) {
                features.push(feature.to_string());
            }
        }
    }

    features.truncate(MAX_FEATURES);
    features
}

/// Best-effort one-paragraph description, tried in order: the first line of
/// an `## Overview` section, the line right after the first H1 heading, the
/// first paragraph after the H1. Candidates of 20 characters or fewer are
/// rejected; the winner is cut to [`MAX_DESCRIPTION_CHARS`].
pub fn extract_description(text: &str) -> String {
    let overview_re = Regex::new(r"(?i)##?\s*overview").expect("valid regex");
    if let Some(desc) = first_plain_line_after(text, &overview_re) {
        if desc.chars().count() > 20 {
            return truncate_chars(&desc, MAX_DESCRIPTION_CHARS);
        }
    }

    let h1_re = Regex::new(r"(?m)^#[ \t]+.+$").expect("valid regex");
    if let Some(desc) = first_plain_line_after(text, &h1_re) {
        if desc.chars().count() > 20 {
            return truncate_chars(&desc, MAX_DESCRIPTION_CHARS);
        }
    }

    // Fallback: first paragraph after the title, even if it starts with
    // Markdown markers.
    if let Some(m) = h1_re.find(text) {
        let rest = &text[m.end()..];
        let mut seen_blank = false;
        for line in rest.lines() {
            let line = line.trim();
            if line.is_empty() {
                seen_blank = true;
                continue;
            }
            if seen_blank {
                if line.chars().count() > 20 {
                    return truncate_chars(line, MAX_DESCRIPTION_CHARS);
                }
                break;
            }
        }
    }

    String::new()
}

/// Slice from the heading match to the next `##` heading or end of text.
fn section<'a>(text: &'a str, heading_re: &Regex) -> Option<&'a str> {
    let m = heading_re.find(text)?;
    let end = text[m.end()..]
        .find("##")
        .map(|i| m.end() + i)
        .unwrap_or(text.len());
    Some(&text[m.start()..end])
}

/// First non-blank line after the heading match that is not itself a heading.
fn first_plain_line_after(text: &str, heading_re: &Regex) -> Option<String> {
    let m = heading_re.find(text)?;
    let rest = &text[m.end()..];
    let mut lines = rest.lines();
    lines.next(); // remainder of the heading line itself
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        return Some(line.to_string());
    }
    None
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
