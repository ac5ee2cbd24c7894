use serde::Serialize;

use crate::parser::ParsedProjectData;

/// Row shape of the content store's `projects` table. Optional fields
/// serialize as JSON null so the record can be inserted as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub category: String,
    pub position: Option<String>,
    pub github: String,
    pub demo: Option<String>,
    pub overview: String,
    pub system_design: String,
    pub database_design: Option<String>,
    pub system_design_image: Option<String>,
    pub database_design_image: Option<String>,
    pub additional_details: String,
    pub project_date: Option<String>,
    pub team_size: Option<u32>,
    pub duration: Option<String>,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub team_members: Vec<String>,
    pub is_published: bool,
}

/// Caller-supplied replacements applied before persistence. An override that
/// is absent or empty falls through to the parsed value.
#[derive(Debug, Clone, Default)]
pub struct ProjectOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub position: Option<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub overview: Option<String>,
    pub system_design: Option<String>,
    pub additional_details: Option<String>,
    pub is_published: Option<bool>,
}

/// Map a parsed record to the `projects` row shape, applying overrides.
/// Rows always land unpublished; `overrides.is_published` is ignored and
/// publishing happens through the dashboard.
pub fn convert_to_database_format(
    parsed: &ParsedProjectData,
    overrides: &ProjectOverrides,
) -> ProjectRecord {
    ProjectRecord {
        title: pick(&overrides.title, &parsed.title),
        description: pick(&overrides.description, &parsed.description),
        long_description: pick(&overrides.long_description, &parsed.long_description),
        image: pick(&overrides.image, ""),
        category: pick(&overrides.category, "personal"),
        position: non_empty(&overrides.position),
        github: pick(&overrides.github, &parsed.github),
        demo: pick_optional(&overrides.demo, &parsed.demo),
        overview: pick(&overrides.overview, &parsed.overview),
        system_design: pick(&overrides.system_design, &parsed.system_design),
        database_design: None,
        system_design_image: None,
        database_design_image: None,
        additional_details: pick(&overrides.additional_details, &parsed.additional_details),
        project_date: None,
        team_size: None,
        duration: None,
        tags: parsed.tags.clone(),
        features: parsed.features.clone(),
        challenges: parsed.challenges.clone(),
        team_members: Vec::new(),
        is_published: false,
    }
}

fn pick(override_value: &Option<String>, fallback: &str) -> String {
    match override_value.as_deref() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

fn pick_optional(override_value: &Option<String>, fallback: &str) -> Option<String> {
    let value = pick(override_value, fallback);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(String::from)
}
