//! Input rows and the preparation step that precedes enumeration.
//!
//! A [`Row`] is one labeled sequence of replicate readings exactly as
//! entered. Preparation strips zero entries (a literal `0.0` means "sample
//! not present", never a valid measurement) and derives the common
//! arrangement length `k`, the minimum non-zero count across all rows.

use crate::error_codes;
use crate::search::SearchError;
use thiserror::Error;

/// Maximum number of rows accepted by [`parse_rows`].
pub const MAX_ROWS: usize = 10;
/// Maximum number of values per row accepted by [`parse_rows`].
pub const MAX_VALUES_PER_ROW: usize = 10;

/// One labeled sequence of replicate readings, in entry order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub label: String,
    pub values: Vec<f64>,
}

impl Row {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Row {
        Row {
            label: label.into(),
            values,
        }
    }

    /// The row's values with zero entries removed, relative order preserved.
    pub fn nonzero_values(&self) -> Vec<f64> {
        self.values.iter().copied().filter(|&v| v != 0.0).collect()
    }
}

/// An ordered collection of rows. Row order is significant: it defines the
/// column layout of every combination the engine produces.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RowSet {
    rows: Vec<Row>,
}

impl RowSet {
    pub fn new() -> RowSet {
        RowSet::default()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.label.clone()).collect()
    }

    /// Strips zeros from every row and computes `k`.
    ///
    /// Fails with [`SearchError::EmptyRow`] when a row has no non-zero
    /// values (`k` would be 0 and the search space empty) and with
    /// [`SearchError::NoRows`] on an empty set.
    pub(crate) fn prepare(&self) -> Result<PreparedRows, SearchError> {
        if self.rows.is_empty() {
            return Err(SearchError::NoRows);
        }

        let mut prepared = Vec::with_capacity(self.rows.len());
        let mut k = usize::MAX;
        for row in &self.rows {
            let values = row.nonzero_values();
            if values.is_empty() {
                return Err(SearchError::EmptyRow {
                    label: row.label.clone(),
                });
            }
            k = k.min(values.len());
            prepared.push(PreparedRow {
                label: row.label.clone(),
                values,
            });
        }

        Ok(PreparedRows { rows: prepared, k })
    }
}

impl FromIterator<Row> for RowSet {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> RowSet {
        RowSet {
            rows: iter.into_iter().collect(),
        }
    }
}

/// A row after zero-stripping. Rows keep their [`RowSet`] order, which
/// fixes each row's slot within every column.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PreparedRow {
    pub label: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PreparedRows {
    pub rows: Vec<PreparedRow>,
    pub k: usize,
}

/// Errors produced while parsing textual row input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RowParseError {
    #[error(
        "[BLOTOPT_PARSE_001] row '{label}': value {position} ('{text}') is not numeric. Suggestion: check the row for typos or stray separators."
    )]
    InvalidValue {
        label: String,
        position: usize,
        text: String,
    },

    #[error("[BLOTOPT_PARSE_002] line {line}: missing row label before the first comma")]
    MissingLabel { line: usize },

    #[error("[BLOTOPT_PARSE_003] row '{label}' has no values")]
    MissingValues { label: String },

    #[error("[BLOTOPT_PARSE_004] duplicate row label '{label}'")]
    DuplicateLabel { label: String },

    #[error("[BLOTOPT_PARSE_005] too many rows: {count} (limit {limit})")]
    TooManyRows { count: usize, limit: usize },

    #[error("[BLOTOPT_PARSE_006] row '{label}' has too many values: {count} (limit {limit})")]
    TooManyValues {
        label: String,
        count: usize,
        limit: usize,
    },
}

impl RowParseError {
    pub fn code(&self) -> &'static str {
        match self {
            RowParseError::InvalidValue { .. } => error_codes::PARSE_INVALID_VALUE,
            RowParseError::MissingLabel { .. } => error_codes::PARSE_MISSING_LABEL,
            RowParseError::MissingValues { .. } => error_codes::PARSE_MISSING_VALUES,
            RowParseError::DuplicateLabel { .. } => error_codes::PARSE_DUPLICATE_LABEL,
            RowParseError::TooManyRows { .. } => error_codes::PARSE_TOO_MANY_ROWS,
            RowParseError::TooManyValues { .. } => error_codes::PARSE_TOO_MANY_VALUES,
        }
    }
}

/// Parses textual row input, one row per line: `LABEL, v1, v2, ...`.
///
/// Blank lines and lines starting with `#` are skipped. Parsing fails fast
/// on the first non-numeric value, before any enumeration work starts.
pub fn parse_rows(input: &str) -> Result<RowSet, RowParseError> {
    let mut rows = RowSet::new();

    for (line_no, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split(',');
        let label = fields.next().unwrap_or("").trim();
        if label.is_empty() {
            return Err(RowParseError::MissingLabel { line: line_no + 1 });
        }
        if rows.iter().any(|r| r.label == label) {
            return Err(RowParseError::DuplicateLabel {
                label: label.to_string(),
            });
        }

        let mut values = Vec::new();
        for (position, field) in fields.enumerate() {
            let text = field.trim();
            let value: f64 = text.parse().map_err(|_| RowParseError::InvalidValue {
                label: label.to_string(),
                position: position + 1,
                text: text.to_string(),
            })?;
            values.push(value);
        }
        if values.is_empty() {
            return Err(RowParseError::MissingValues {
                label: label.to_string(),
            });
        }
        if values.len() > MAX_VALUES_PER_ROW {
            return Err(RowParseError::TooManyValues {
                label: label.to_string(),
                count: values.len(),
                limit: MAX_VALUES_PER_ROW,
            });
        }

        rows.push(Row::new(label, values));
    }

    if rows.len() > MAX_ROWS {
        return Err(RowParseError::TooManyRows {
            count: rows.len(),
            limit: MAX_ROWS,
        });
    }

    Ok(rows)
}
