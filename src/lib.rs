pub mod config;
pub mod input;
pub mod parser;
pub mod record;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use config::Config;
pub use input::SourceDump;
pub use parser::{parse_project_files, ParsedProjectData, TechStack};
pub use record::{convert_to_database_format, ProjectOverrides, ProjectRecord};
