use crate::data::model::RecordSet;

/// Records whose `field` equals `value` exactly, in input order.
///
/// A record without `field` never matches. No match yields an empty set that
/// keeps the input's column names.
pub fn filter_by(records: &RecordSet, field: &str, value: &str) -> RecordSet {
    let matching = records
        .iter()
        .filter(|rec| rec.get(field) == Some(value))
        .cloned()
        .collect();
    RecordSet::with_columns(records.column_names.clone(), matching)
}

pub fn filter_by_industry(records: &RecordSet, industry: &str) -> RecordSet {
    filter_by(records, "industry", industry)
}

pub fn filter_by_job_type(records: &RecordSet, job_type: &str) -> RecordSet {
    filter_by(records, "job_type", job_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn listing(id: &str, industry: &str, job_type: &str) -> Record {
        Record::from_pairs([("id", id), ("industry", industry), ("job_type", job_type)])
    }

    fn sample() -> RecordSet {
        RecordSet::from_records(vec![
            listing("1", "Finance", "FULL_TIME"),
            listing("2", "Software", "INTERN"),
            listing("3", "Finance", "PART_TIME"),
            listing("4", "Finance", "FULL_TIME"),
        ])
    }

    fn ids(set: &RecordSet) -> Vec<&str> {
        set.iter().filter_map(|r| r.get("id")).collect()
    }

    #[test]
    fn keeps_matching_records_in_order() {
        let records = sample();
        assert_eq!(ids(&filter_by_industry(&records, "Finance")), vec!["1", "3", "4"]);
        assert_eq!(ids(&filter_by_job_type(&records, "FULL_TIME")), vec!["1", "4"]);
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let records = sample();
        let once = filter_by(&records, "industry", "Finance");
        let twice = filter_by(&once, "industry", "Finance");
        assert_eq!(once, twice);
    }

    #[test]
    fn match_is_exact() {
        let records = sample();
        assert!(filter_by_industry(&records, "finance").is_empty());
        assert!(filter_by_industry(&records, "Finance ").is_empty());
    }

    #[test]
    fn missing_field_or_empty_input_yields_empty() {
        assert!(filter_by(&sample(), "company", "Acme").is_empty());
        assert!(filter_by(&RecordSet::default(), "industry", "Finance").is_empty());
    }
}
