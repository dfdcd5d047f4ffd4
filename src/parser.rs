use crate::error::{HelperError, HelperResult};
use crate::types::DocTypeOption;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A YAML batch file: form submissions applied in order
#[derive(Debug, Clone, Deserialize)]
pub struct BatchFile {
    pub submissions: Vec<Submission>,
}

/// One filled-in form: document, doc type, date and model codes
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    /// Path of the document; only its base name is staged
    pub file: PathBuf,
    /// Doc-type index, 0..=22
    pub doc_type: u8,
    #[serde(default)]
    pub date: String,
    /// Raw model-code text, any mix of lines and spaces
    #[serde(default)]
    pub model_codes: String,
}

impl Submission {
    /// Base name of `file`
    pub fn file_name(&self) -> String {
        base_name(&self.file)
    }

    pub fn doc_type_option(&self) -> HelperResult<DocTypeOption> {
        DocTypeOption::from_index(self.doc_type)
    }
}

/// Parse a batch file from disk
pub fn parse_batch_file(path: &Path) -> HelperResult<BatchFile> {
    let content = std::fs::read_to_string(path)?;
    parse_batch(&content)
}

/// Parse batch YAML, rejecting doc-type indices outside the catalogue
pub fn parse_batch(content: &str) -> HelperResult<BatchFile> {
    let batch: BatchFile = serde_yaml::from_str(content)?;
    for (idx, submission) in batch.submissions.iter().enumerate() {
        submission.doc_type_option().map_err(|e| {
            HelperError::Parse(format!("Submission {}: {}", idx + 1, e))
        })?;
    }
    Ok(batch)
}

/// File name component of a path, or the path itself when it has none
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
