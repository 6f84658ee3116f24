//! CSV export of form submissions.
//!
//! Forms evolve over time, so every submission carries its own ordered
//! field set. The encoder discovers the unified column schema from the
//! records themselves (union of field names in first-seen order), pads
//! missing values with empty cells, and applies CSV quoting rules. The
//! encoding is a pure function of its input: the same records in the same
//! order always yield byte-identical output.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::info;

use crate::error::Error;

/// Maximum rows fetched for a single export. A resource-protection
/// invariant, not a tunable: callers needing more add pagination.
pub const EXPORT_ROW_LIMIT: usize = 1000;

/// One form response with its per-record field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// (field name, value) pairs in the order the form presented them.
    pub fields: Vec<(String, String)>,
}

/// Bounded submission fetch, implemented by the storage collaborator.
pub trait SubmissionSource {
    /// Fetch at most `limit` submissions for the given form, oldest first.
    fn submissions_for_form(
        &self,
        form_id: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<SubmissionRecord>>;
}

/// Export all submissions for a form as a CSV string.
///
/// Returns an empty string when the form has no submissions. A failing
/// fetch is a hard error — no partial or garbled CSV is ever returned.
pub fn export_form_submissions(
    source: &dyn SubmissionSource,
    form_id: &str,
) -> Result<String, Error> {
    info!(form_id = %form_id, "exporting form submissions");

    let records = source
        .submissions_for_form(form_id, EXPORT_ROW_LIMIT)
        .map_err(Error::ExportSourceUnavailable)?;

    if records.is_empty() {
        info!(form_id = %form_id, "no submissions found for form");
        return Ok(String::new());
    }

    info!(form_id = %form_id, count = records.len(), "encoding submissions");
    Ok(encode_submissions(&records))
}

/// Encode submission records as CSV.
///
/// The header row is `submissionId`, `createdAt`, then the union of all
/// field names across all records in first-seen order. Rows follow in
/// input order, with an empty cell where a record lacks a field. Rows are
/// joined by a single `\n` with no trailing newline; an empty record set
/// encodes to the empty string, not a header-only string.
pub fn encode_submissions(records: &[SubmissionRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    // Unified column schema: first-seen order across all records.
    let mut headers: Vec<&str> = Vec::new();
    let mut seen = HashSet::new();
    for record in records {
        for (name, _) in &record.fields {
            if seen.insert(name.as_str()) {
                headers.push(name.as_str());
            }
        }
    }

    let mut lines = Vec::with_capacity(records.len() + 1);

    let header_cells: Vec<String> = ["submissionId", "createdAt"]
        .into_iter()
        .chain(headers.iter().copied())
        .map(escape_csv_value)
        .collect();
    lines.push(header_cells.join(","));

    for record in records {
        let created_at = record.created_at.to_rfc3339();
        let mut cells = vec![
            escape_csv_value(&record.id),
            escape_csv_value(&created_at),
        ];
        for header in &headers {
            let value = record
                .fields
                .iter()
                .find(|(name, _)| name.as_str() == *header)
                .map(|(_, value)| value.as_str())
                .unwrap_or_default();
            cells.push(escape_csv_value(value));
        }
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// Escape a single cell for CSV output.
///
/// Cells containing a comma, double quote, or line break are wrapped in
/// double quotes, with interior quotes doubled. All other cells are
/// emitted bare.
fn escape_csv_value(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
