use std::path::Path;

use crate::data::error::DataSourceError;

/// Case-insensitive count of non-overlapping `word` occurrences in `text`.
pub fn count_in_text(text: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    text.to_lowercase().matches(&word.to_lowercase()).count()
}

/// Count `word` across the raw contents of the file at `path`.
///
/// Works on the text as a whole, headers and every column included, without
/// going through the record cache.
pub fn count_occurrences(path: &Path, word: &str) -> Result<usize, DataSourceError> {
    let text = std::fs::read_to_string(path).map_err(|e| DataSourceError::from_io(path, e))?;
    Ok(count_in_text(&text, word))
}
