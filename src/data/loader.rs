use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde_json::Value as JsonValue;

use super::error::DataSourceError;
use super::model::{Record, RecordSet};

// ---------------------------------------------------------------------------
// Loader configuration
// ---------------------------------------------------------------------------

/// How delimited files are parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoaderConfig {
    /// Field delimiter (default: comma). Ignored for `.tsv`, which is always tab.
    pub delimiter: u8,
    /// Trim surrounding whitespace from headers and values.
    pub trim: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a record set from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / no extension – header row, then one listing per row
/// * `.tsv`                – same, tab separated
/// * `.json`               – `[{ "industry": "...", "max_salary": 90000, ... }, ...]`
pub fn load_file(path: &Path, config: &LoaderConfig) -> Result<RecordSet, DataSourceError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let set = match ext.as_str() {
        "csv" | "" => load_delimited(path, config.delimiter, config.trim)?,
        "tsv" => load_delimited(path, b'\t', config.trim)?,
        "json" => load_json(path)?,
        other => {
            return Err(DataSourceError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            })
        }
    };

    log::info!(
        "Loaded {} records from {} with columns {:?}",
        set.len(),
        path.display(),
        set.column_names
    );
    Ok(set)
}

// ---------------------------------------------------------------------------
// Delimited loader
// ---------------------------------------------------------------------------

/// Header row gives the field names.  Rows shorter than the header simply
/// lack the trailing fields; extra trailing values are dropped.
fn load_delimited(path: &Path, delimiter: u8, trim: bool) -> Result<RecordSet, DataSourceError> {
    let file = File::open(path).map_err(|e| DataSourceError::from_io(path, e))?;
    let csv_err = |source| DataSourceError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(if trim { Trim::All } else { Trim::None })
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(csv_err)?;
        records.push(Record::from_pairs(headers.iter().cloned().zip(row.iter())));
    }

    Ok(RecordSet::with_columns(headers, records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented array.  Scalars are stringified so the query layer sees
/// the same shape as a CSV load; `null` becomes the empty string.
fn load_json(path: &Path) -> Result<RecordSet, DataSourceError> {
    let text = std::fs::read_to_string(path).map_err(|e| DataSourceError::from_io(path, e))?;
    let root: JsonValue = serde_json::from_str(&text).map_err(|source| DataSourceError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let invalid = |row: usize, reason: String| DataSourceError::InvalidJsonRecord {
        path: path.to_path_buf(),
        row,
        reason,
    };

    let rows = root
        .as_array()
        .ok_or_else(|| invalid(0, "expected top-level JSON array".to_string()))?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| invalid(i, "not a JSON object".to_string()))?;

        let mut record = Record::new();
        for (key, val) in obj {
            let text = json_scalar_to_string(val)
                .ok_or_else(|| invalid(i, format!("field '{key}' is not a scalar")))?;
            record.insert(key.clone(), text);
        }
        records.push(record);
    }

    Ok(RecordSet::from_records(records))
}

fn json_scalar_to_string(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => Some(String::new()),
        JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}
