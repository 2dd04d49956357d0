use thiserror::Error;

use crate::data::model::{Record, RecordSet};

/// Why a salary query could not be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SalaryError {
    /// A record's bounds or the query salary failed validation: a missing
    /// field, a non-integer value, or `min_salary > max_salary`. The causes are
    /// deliberately not told apart.
    #[error("invalid salary data")]
    InvalidSalaryData,
    /// An aggregate had no usable salary to work from.
    #[error("no valid salary values in dataset")]
    EmptyDataset,
}

/// Inclusive salary range of one listing, parsed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBounds {
    pub min: i64,
    pub max: i64,
}

impl SalaryBounds {
    pub fn contains(&self, salary: i64) -> bool {
        self.min <= salary && salary <= self.max
    }
}

// ---------------------------------------------------------------------------
// Parsing disciplines
// ---------------------------------------------------------------------------

/// Strict parse for range checks: surrounding whitespace and a sign are
/// accepted, anything else is an error.
fn parse_strict(raw: &str) -> Result<i64, SalaryError> {
    raw.trim_matches(|c: char| c.is_ascii_whitespace())
        .parse::<i64>()
        .map_err(|_| SalaryError::InvalidSalaryData)
}

/// Permissive parse for aggregates: only a bare run of ASCII digits counts.
fn parse_digits(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i64>().ok()
}

/// A query salary given either as a number or as text.
pub trait SalaryInput {
    fn to_salary(&self) -> Result<i64, SalaryError>;
}

impl SalaryInput for i64 {
    fn to_salary(&self) -> Result<i64, SalaryError> {
        Ok(*self)
    }
}

impl SalaryInput for i32 {
    fn to_salary(&self) -> Result<i64, SalaryError> {
        Ok(i64::from(*self))
    }
}

impl SalaryInput for u32 {
    fn to_salary(&self) -> Result<i64, SalaryError> {
        Ok(i64::from(*self))
    }
}

impl SalaryInput for str {
    fn to_salary(&self) -> Result<i64, SalaryError> {
        parse_strict(self)
    }
}

impl SalaryInput for String {
    fn to_salary(&self) -> Result<i64, SalaryError> {
        parse_strict(self)
    }
}

impl<T: SalaryInput + ?Sized> SalaryInput for &T {
    fn to_salary(&self) -> Result<i64, SalaryError> {
        (**self).to_salary()
    }
}

// ---------------------------------------------------------------------------
// Range queries
// ---------------------------------------------------------------------------

/// Read `min_salary` / `max_salary` from a record.
pub fn parse_bounds(record: &Record) -> Result<SalaryBounds, SalaryError> {
    let min = parse_strict(record.get("min_salary").ok_or(SalaryError::InvalidSalaryData)?)?;
    let max = parse_strict(record.get("max_salary").ok_or(SalaryError::InvalidSalaryData)?)?;
    if min > max {
        return Err(SalaryError::InvalidSalaryData);
    }
    Ok(SalaryBounds { min, max })
}

/// Whether `salary` lies within the record's range, both ends inclusive.
///
/// The query salary is validated before the record, with the same error kind.
pub fn matches<S: SalaryInput>(record: &Record, salary: S) -> Result<bool, SalaryError> {
    let salary = salary.to_salary()?;
    Ok(parse_bounds(record)?.contains(salary))
}

/// Records whose salary range contains `salary`, in input order.
///
/// Records with invalid salary data are silently left out rather than failing
/// the whole batch. An invalid `salary` therefore yields an empty set.
pub fn filter_by_salary_range<S: SalaryInput>(records: &RecordSet, salary: S) -> RecordSet {
    let mut dropped = 0usize;
    let matching: Vec<Record> = records
        .iter()
        .filter(|rec| match matches(*rec, &salary) {
            Ok(hit) => hit,
            Err(_) => {
                dropped += 1;
                false
            }
        })
        .cloned()
        .collect();

    if dropped > 0 {
        log::debug!(
            "salary filter skipped {dropped} of {} records with invalid data",
            records.len()
        );
    }
    RecordSet::with_columns(records.column_names.clone(), matching)
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

fn digit_values<'a>(records: &'a RecordSet, field: &'a str) -> impl Iterator<Item = i64> + 'a {
    records
        .iter()
        .filter_map(move |rec| rec.get(field).and_then(parse_digits))
}

/// Largest `max_salary` among records where it is a plain digit string.
pub fn get_max_salary(records: &RecordSet) -> Result<i64, SalaryError> {
    digit_values(records, "max_salary")
        .max()
        .ok_or(SalaryError::EmptyDataset)
}

/// Smallest `min_salary` among records where it is a plain digit string.
pub fn get_min_salary(records: &RecordSet) -> Result<i64, SalaryError> {
    digit_values(records, "min_salary")
        .min()
        .ok_or(SalaryError::EmptyDataset)
}

/// `(get_min_salary, get_max_salary)` in one call.
pub fn salary_span(records: &RecordSet) -> Result<(i64, i64), SalaryError> {
    Ok((get_min_salary(records)?, get_max_salary(records)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(min: &str, max: &str) -> Record {
        Record::from_pairs([("min_salary", min), ("max_salary", max)])
    }

    #[test]
    fn range_is_inclusive_at_both_ends() {
        let rec = job("50000", "80000");
        assert_eq!(matches(&rec, 50000), Ok(true));
        assert_eq!(matches(&rec, 80000), Ok(true));
        assert_eq!(matches(&rec, 49999), Ok(false));
        assert_eq!(matches(&rec, 80001), Ok(false));
    }

    #[test]
    fn inverted_range_is_invalid() {
        let rec = job("90000", "80000");
        assert_eq!(parse_bounds(&rec), Err(SalaryError::InvalidSalaryData));
        assert_eq!(matches(&rec, 85000), Err(SalaryError::InvalidSalaryData));
    }

    #[test]
    fn missing_or_non_numeric_bounds_are_invalid() {
        let only_min = Record::from_pairs([("min_salary", "10")]);
        assert_eq!(parse_bounds(&only_min), Err(SalaryError::InvalidSalaryData));
        assert_eq!(parse_bounds(&job("10", "")), Err(SalaryError::InvalidSalaryData));
        assert_eq!(parse_bounds(&job("ten", "20")), Err(SalaryError::InvalidSalaryData));
        assert_eq!(parse_bounds(&job("1.5", "20")), Err(SalaryError::InvalidSalaryData));
    }

    #[test]
    fn strict_parse_accepts_sign_and_whitespace() {
        assert_eq!(
            parse_bounds(&job("-100", " +200 ")),
            Ok(SalaryBounds { min: -100, max: 200 })
        );
        assert_eq!(matches(&job("-100", "200"), "-50"), Ok(true));
    }

    #[test]
    fn query_salary_accepts_text() {
        let rec = job("100", "200");
        assert_eq!(matches(&rec, "150"), Ok(true));
        assert_eq!(matches(&rec, String::from("250")), Ok(false));
        assert_eq!(matches(&rec, "abc"), Err(SalaryError::InvalidSalaryData));
        assert_eq!(matches(&rec, ""), Err(SalaryError::InvalidSalaryData));
    }

    #[test]
    fn invalid_query_salary_filters_everything_out() {
        let records = RecordSet::from_records(vec![job("0", "100"), job("50", "150")]);
        assert!(filter_by_salary_range(&records, "lots").is_empty());
    }

    #[test]
    fn aggregates_skip_values_that_are_not_plain_digits() {
        let records = RecordSet::from_records(vec![
            job("-5", "-1"),
            job(" 7", "+900"),
            job("30", "40"),
            job("20", "n/a"),
        ]);
        assert_eq!(get_max_salary(&records), Ok(40));
        assert_eq!(get_min_salary(&records), Ok(20));
        assert_eq!(salary_span(&records), Ok((20, 40)));
    }

    #[test]
    fn aggregates_on_nothing_usable_fail() {
        assert_eq!(get_max_salary(&RecordSet::default()), Err(SalaryError::EmptyDataset));
        let records = RecordSet::from_records(vec![Record::from_pairs([("max_salary", "n/a")])]);
        assert_eq!(get_max_salary(&records), Err(SalaryError::EmptyDataset));
        assert_eq!(get_min_salary(&records), Err(SalaryError::EmptyDataset));
    }

    #[test]
    fn oversized_digit_strings_are_skipped() {
        let records =
            RecordSet::from_records(vec![job("1", "99999999999999999999999"), job("1", "5")]);
        assert_eq!(get_max_salary(&records), Ok(5));
    }
}
