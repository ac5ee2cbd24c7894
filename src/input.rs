use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// File extensions accepted as source dumps.
const ALLOWED_EXTENSIONS: [&str; 5] = ["txt", "md", "markdown", "json", "log"];

/// One uploaded source dump: the text of a backend or frontend export plus
/// the name it was uploaded under. The filename feeds project-name fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDump {
    pub filename: String,
    pub content: String,
}

impl SourceDump {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Read a dump from disk, rejecting files the parser cannot do anything
    /// useful with (binary-looking extensions, empty exports).
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            bail!(
                "{} is not a text dump (expected one of: {})",
                path.display(),
                ALLOWED_EXTENSIONS.join(", ")
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if content.trim().is_empty() {
            bail!("{} is empty", path.display());
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("backend.txt")
            .to_string();

        Ok(Self { filename, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_a_text_dump() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("campor-backend.txt");
        fs::write(&path, "# Campor\n\nA campus portal.")?;

        let dump = SourceDump::load(&path)?;
        assert_eq!(dump.filename, "campor-backend.txt");
        assert!(dump.content.contains("campus portal"));
        Ok(())
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dump.bin");
        fs::write(&path, "data").unwrap();

        let err = SourceDump::load(&path).unwrap_err();
        assert!(err.to_string().contains("not a text dump"));
    }

    #[test]
    fn rejects_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("frontend.txt");
        fs::write(&path, "   \n").unwrap();

        let err = SourceDump::load(&path).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SourceDump::load(Path::new("/nonexistent/backend.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/backend.txt"));
    }
}
