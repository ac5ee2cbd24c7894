use serde::Serialize;

use crate::input::SourceDump;

mod design;
mod metadata;
mod sections;
mod technologies;

#[cfg(test)]
mod tests;

pub use design::generate_system_design;
pub use metadata::{extract_github_url, extract_project_name};
pub use sections::{extract_description, extract_features};
pub use technologies::extract_technologies;

/// Upper bound on tags stored in a parsed record.
pub const MAX_TAGS: usize = 20;

/// Canned challenges for every generated record. The real ones are written by
/// hand in the dashboard before publishing.
const DEFAULT_CHALLENGES: [&str; 5] = [
    "Integrating multiple third-party services and APIs",
    "Ensuring data consistency across distributed systems",
    "Optimizing performance for real-time features",
    "Implementing secure authentication and authorization",
    "Managing complex state across frontend and backend",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedProjectData {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub tags: Vec<String>,
    pub github: String,
    pub demo: String,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub overview: String,
    pub system_design: String,
    pub additional_details: String,
    #[serde(rename = "techStack")]
    pub tech_stack: TechStack,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechStack {
    pub frontend: String,
    pub backend: String,
    pub deployment: String,
    pub other: String,
}

/// Parse a backend and a frontend source dump into a draft project record.
///
/// Every extraction step is best-effort: a signal that is missing from the
/// dumps degrades to an empty or templated value, never to an error. Calling
/// this twice with the same dumps produces identical output.
pub fn parse_project_files(backend: &SourceDump, frontend: &SourceDump) -> ParsedProjectData {
    let combined = format!("{}\n\n{}", backend.content, frontend.content);
    let title = extract_project_name(&combined, &backend.filename);

    let backend_techs = extract_technologies(&backend.content);
    let frontend_techs = extract_technologies(&frontend.content);

    // Tags come from each dump separately so backend-only and frontend-only
    // manifests both contribute, deduplicated in discovery order.
    let mut tags: Vec<String> = Vec::new();
    for tech in backend_techs.iter().chain(frontend_techs.iter()) {
        if !tags.contains(tech) {
            tags.push(tech.clone());
        }
    }

    let github = extract_github_url(&combined);
    let description = extract_description(&combined);
    let features = extract_features(&combined);

    let long_description = format!(
        "{} is a full-stack application that combines modern frontend and backend technologies to deliver a comprehensive solution. {}",
        title, description
    );
    let overview = format!(
        "{} leverages cutting-edge technologies to provide a robust and scalable solution.",
        title
    );
    let additional_details = format!(
        "This project demonstrates proficiency in full-stack development, combining {} and other modern technologies to create a production-ready application.",
        join_first(&tags, 5)
    );
    let system_design = generate_system_design(&backend.content, &frontend.content);

    let description = if description.is_empty() {
        format!("{} - A modern full-stack application", title)
    } else {
        description
    };
    let features = if features.is_empty() {
        vec![format!("Built with {}", join_first(&tags, 3))]
    } else {
        features
    };

    let tech_stack = TechStack {
        frontend: join_first(&frontend_techs, 10),
        backend: join_first(&backend_techs, 10),
        deployment: "Vercel (Frontend), Cloud Platform (Backend)".to_string(),
        other: "Various third-party integrations".to_string(),
    };

    let mut tags = tags;
    tags.truncate(MAX_TAGS);

    ParsedProjectData {
        title,
        description,
        long_description,
        tags,
        github,
        demo: String::new(),
        features,
        challenges: DEFAULT_CHALLENGES.iter().map(|c| c.to_string()).collect(),
        overview,
        system_design,
        additional_details,
        tech_stack,
    }
}

pub(crate) fn join_first(items: &[String], n: usize) -> String {
    items[..n.min(items.len())].join(", ")
}

pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
