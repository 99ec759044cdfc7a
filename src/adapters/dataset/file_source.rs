//! Filesystem dataset source

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::quiz::RawDataset;
use crate::ports::{DatasetSource, SourceError};

/// Serialization format of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    /// Infer the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(DatasetFormat::Json),
            Some("yaml") | Some("yml") => Ok(DatasetFormat::Yaml),
            _ => Err(SourceError::UnsupportedFormat(format!(
                "{} (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }

    /// Deserialize a document in this format
    pub fn parse(&self, content: &str) -> Result<RawDataset, SourceError> {
        match self {
            DatasetFormat::Json => serde_json::from_str(content)
                .map_err(|e| SourceError::Parse(format!("invalid JSON: {}", e))),
            DatasetFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| SourceError::Parse(format!("invalid YAML: {}", e))),
        }
    }
}

/// Reads the dataset document from a single file
///
/// The format is taken from the file extension.
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch(&self) -> Result<RawDataset, SourceError> {
        let format = DatasetFormat::from_path(&self.path)?;

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound(self.path.display().to_string())
            } else {
                SourceError::Io(format!("Failed to read {}: {}", self.path.display(), e))
            }
        })?;

        format.parse(&content)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const GARDEN_JSON: &str = r#"{
        "questions": [{"id": 1, "question": "Where are you?", "validation": ["courtyard", "hall"]}],
        "steps": [
            {"id": 1, "question_id": 1, "answers": {"courtyard": 2}},
            {"id": 2, "result_id": 1}
        ],
        "results": [{"id": 1, "name": "Garden", "description": "You are outside."}]
    }"#;

    const GARDEN_YAML: &str = r#"
entry_step: 1
questions:
  - id: 1
    question: Where are you?
    validation: [courtyard, hall]
steps:
  - id: 1
    question_id: 1
    answers:
      courtyard: 2
  - id: 2
    result_id: 1
results:
  - id: 1
    name: Garden
    description: You are outside.
"#;

    #[tokio::test]
    async fn test_reads_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("questions.json");
        std::fs::write(&path, GARDEN_JSON).unwrap();

        let raw = FileDatasetSource::new(&path).fetch().await.unwrap();
        assert_eq!(raw.questions.len(), 1);
        assert_eq!(raw.steps.len(), 2);
        assert_eq!(raw.results[0].name.as_deref(), Some("Garden"));
    }

    #[tokio::test]
    async fn test_reads_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("questions.yml");
        std::fs::write(&path, GARDEN_YAML).unwrap();

        let raw = FileDatasetSource::new(&path).fetch().await.unwrap();
        assert_eq!(raw.entry_step, Some(1));
        assert_eq!(raw.steps[0].answers.as_ref().unwrap()["courtyard"], 2);
        assert_eq!(raw.steps[1].result_id, Some(1));
    }

    #[tokio::test]
    async fn test_json_and_yaml_agree() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("a.json");
        let yaml_path = temp_dir.path().join("a.yaml");
        std::fs::write(&json_path, GARDEN_JSON).unwrap();
        std::fs::write(&yaml_path, GARDEN_YAML).unwrap();

        let from_json = FileDatasetSource::new(&json_path).fetch().await.unwrap();
        let from_yaml = FileDatasetSource::new(&yaml_path).fetch().await.unwrap();
        assert_eq!(from_json.with_entry_step(1), from_yaml);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileDatasetSource::new(temp_dir.path().join("missing.json"));

        let result = source.fetch().await;
        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ \"questions\": [").unwrap();

        let result = FileDatasetSource::new(&path).fetch().await;
        assert!(matches!(result, Err(SourceError::Parse(_))));
    }

    #[tokio::test]
    async fn test_unknown_extension_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("questions.toml");
        std::fs::write(&path, "").unwrap();

        let result = FileDatasetSource::new(&path).fetch().await;
        assert!(matches!(result, Err(SourceError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_format_from_path_ignores_case() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("QUIZ.JSON")).unwrap(),
            DatasetFormat::Json
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("quiz.Yml")).unwrap(),
            DatasetFormat::Yaml
        );
    }

    #[test]
    fn test_describe_names_path() {
        let source = FileDatasetSource::new("data/questions.json");
        assert_eq!(source.describe(), "file data/questions.json");
    }
}
