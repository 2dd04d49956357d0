use std::collections::BTreeSet;

use crate::data::model::RecordSet;

/// Distinct non-empty values of `field` across `records`, sorted.
///
/// Records without the field contribute nothing.
pub fn get_unique_values(records: &RecordSet, field: &str) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|rec| rec.get(field))
        .filter(|val| !val.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn unique_industries(records: &RecordSet) -> BTreeSet<String> {
    get_unique_values(records, "industry")
}

pub fn unique_job_types(records: &RecordSet) -> BTreeSet<String> {
    get_unique_values(records, "job_type")
}
