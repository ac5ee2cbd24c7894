use regex::Regex;
use tracing::debug;

use super::capitalize_first;

/// Upper bound on technology names reported per dump.
pub const MAX_TECHNOLOGIES: usize = 30;

/// Collect technology names from a source dump: keys of any embedded
/// `"dependencies"` / `"devDependencies"` manifest blocks, plus a free-text
/// "built with"-style line. Names are reported in discovery order without
/// duplicates, capped at [`MAX_TECHNOLOGIES`].
pub fn extract_technologies(text: &str) -> Vec<String> {
    let mut techs: Vec<String> = Vec::new();

    let deps_re = Regex::new(r#""dependencies"\s*:\s*\{([^}]+)\}"#).expect("valid regex");
    let dev_deps_re = Regex::new(r#""devDependencies"\s*:\s*\{([^}]+)\}"#).expect("valid regex");

    if let Some(caps) = deps_re.captures(text) {
        collect_from_manifest_block(&caps[1], &mut techs);
    }
    if let Some(caps) = dev_deps_re.captures(text) {
        collect_from_manifest_block(&caps[1], &mut techs);
    }

    // READMEs often list the stack on a single line, e.g.
    // "Built with: React, Node & Postgres".
    let stack_line_re =
        Regex::new(r"(?i)(?:tech|stack|built with|technologies?)[\s:]+([^\n]+)")
            .expect("valid regex");
    if let Some(caps) = stack_line_re.captures(text) {
        for part in caps[1].split(|c| c == ',' || c == '&' || c == '|') {
            let name = part.trim();
            let len = name.chars().count();
            if len > 0 && len < 30 {
                push_unique(&mut techs, name.to_string());
            }
        }
    }

    debug!(count = techs.len(), "technologies extracted");
    techs.truncate(MAX_TECHNOLOGIES);
    techs
}

/// Pull package names out of the inside of a manifest dependencies object.
fn collect_from_manifest_block(block: &str, techs: &mut Vec<String>) {
    let pair_re = Regex::new(r#""([^"]+)":\s*"[^"]+""#).expect("valid regex");
    for caps in pair_re.captures_iter(block) {
        let formatted = format_package_name(&caps[1]);
        let len = formatted.chars().count();
        if len > 0 && len < 30 {
            push_unique(techs, formatted);
        }
    }
}

/// "@supabase/supabase-js" -> "Supabase Js": drop the scope, split on
/// hyphen/underscore, capitalize each word.
fn format_package_name(package: &str) -> String {
    let scope_re = Regex::new(r"^@[^/]+/").expect("valid regex");
    let bare = scope_re.replace(package, "");
    bare.split(['-', '_'])
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_unique(techs: &mut Vec<String>, name: String) {
    if !techs.contains(&name) {
        techs.push(name);
    }
}
