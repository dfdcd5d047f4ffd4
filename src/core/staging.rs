//! Staging grid: the model table of expanded codes and the primary table of
//! upload entries waiting to be exported.

use tracing::debug;

use crate::core::expander;
use crate::error::{HelperError, HelperResult, ValidationError};
use crate::types::{DocTypeOption, ExpandedRow, UploadEntry, MODEL_COLUMNS};

/// Document metadata entered on the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Base name of the selected document
    pub file_name: String,
    pub doc_type: DocTypeOption,
    /// Free text, conventionally MM/YYYY
    pub date: String,
}

impl FormFields {
    pub fn new(file_name: impl Into<String>, doc_type: DocTypeOption, date: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            doc_type,
            date: date.into(),
        }
    }

    /// Apply the reset handed back by [`StagingGrid::clean_all`]
    pub fn reset(&mut self, _signal: FormReset) {
        *self = Self::default();
    }
}

/// Returned by [`StagingGrid::clean_all`]; the form must clear its fields too
#[must_use = "the form fields must be reset together with the grid"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormReset;

/// The secondary table holding one expanded row per model-code token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelTable {
    rows: Vec<ExpandedRow>,
}

impl ModelTable {
    pub fn from_rows(rows: Vec<ExpandedRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ExpandedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Non-blank codes, row-major, left to right
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flat_map(ExpandedRow::codes)
    }

    pub fn has_codes(&self) -> bool {
        self.codes().next().is_some()
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> HelperResult<()> {
        let rows = self.rows.len();
        let out_of_range = move || HelperError::OutOfRange {
            row,
            column,
            rows,
            columns: MODEL_COLUMNS,
        };
        let target = self.rows.get_mut(row).ok_or_else(out_of_range)?;
        if target.set_cell(column, value) {
            Ok(())
        } else {
            Err(out_of_range())
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

/// All live state of the form: primary entries plus the model table
#[derive(Debug, Clone, Default)]
pub struct StagingGrid {
    entries: Vec<UploadEntry>,
    model: ModelTable,
}

impl StagingGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary table, most recently added first
    pub fn entries(&self) -> &[UploadEntry] {
        &self.entries
    }

    pub fn model(&self) -> &ModelTable {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut ModelTable {
        &mut self.model
    }

    /// Replace the model table with the expansion of `text`
    pub fn expand(&mut self, text: &str) -> &ModelTable {
        self.model = ModelTable::from_rows(expander::expand_text(text));
        &self.model
    }

    /// Check the Add preconditions in order without touching any state
    pub fn validate(&self, form: &FormFields) -> Result<(), ValidationError> {
        if form.file_name.trim().is_empty() {
            return Err(ValidationError::MissingFileName);
        }
        if form.doc_type.is_placeholder() {
            return Err(ValidationError::MissingDocType);
        }
        if form.date.trim().is_empty() {
            return Err(ValidationError::MissingDate);
        }
        if !self.model.has_codes() {
            return Err(ValidationError::EmptyModelTable);
        }
        Ok(())
    }

    /// Fold every code of the model table into the primary table.
    ///
    /// Each entry is inserted at the head in scan order, so one call's entries
    /// end up in reverse scan order above everything added before.
    pub fn add(&mut self, form: &FormFields) -> Result<usize, ValidationError> {
        self.validate(form)?;

        let file_name = form.file_name.trim();
        let date = form.date.trim();
        let new_entries: Vec<UploadEntry> = self
            .model
            .codes()
            .map(|code| UploadEntry::new(code, &form.doc_type, file_name, date))
            .collect();

        let added = new_entries.len();
        // each entry goes on top of the previous one, so the batch lands reversed
        self.entries.splice(0..0, new_entries.into_iter().rev());
        debug!(added, total = self.entries.len(), file_name, "staged entries");
        Ok(added)
    }

    /// Remove the head row, if any
    pub fn clean(&mut self) -> Option<UploadEntry> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Clear both tables; the caller resets its form with the returned signal
    pub fn clean_all(&mut self) -> FormReset {
        self.entries.clear();
        self.model.clear();
        FormReset
    }
}
