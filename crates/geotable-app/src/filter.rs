// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::Record;

/// User-supplied filter inputs. Empty strings behave like unset selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Option<String>,
    pub theme: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && selector(self.category.as_deref()).is_none()
            && selector(self.theme.as_deref()).is_none()
    }

    pub fn matcher(&self) -> RecordMatcher<'_> {
        RecordMatcher {
            needle: self.query.trim().to_lowercase(),
            category: selector(self.category.as_deref()),
            theme: selector(self.theme.as_deref()),
        }
    }
}

/// Criteria prepared once per recomputation so the query is folded a single
/// time rather than per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMatcher<'a> {
    needle: String,
    category: Option<&'a str>,
    theme: Option<&'a str>,
}

impl RecordMatcher<'_> {
    pub fn matches(&self, record: &Record) -> bool {
        self.text_matches(record)
            && exact_matches(self.category, record.category.as_deref())
            && exact_matches(self.theme, record.theme.as_deref())
    }

    fn text_matches(&self, record: &Record) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        let text_fields = [
            record.name.as_deref(),
            record.category.as_deref(),
            record.project.as_deref(),
            record.theme.as_deref(),
        ];
        if text_fields
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(&self.needle))
        {
            return true;
        }

        // Numeric fields are matched on their decimal form, unfolded.
        let id_match = record
            .id
            .as_ref()
            .is_some_and(|id| id.to_string().contains(&self.needle));
        let parent_match = record
            .parent_id
            .is_some_and(|parent| parent.to_string().contains(&self.needle));
        id_match || parent_match
    }
}

pub fn record_matches(record: &Record, criteria: &FilterCriteria) -> bool {
    criteria.matcher().matches(record)
}

pub fn filter_records(records: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    let matcher = criteria.matcher();
    records
        .iter()
        .filter(|record| matcher.matches(record))
        .cloned()
        .collect()
}

fn selector(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn exact_matches(selector: Option<&str>, value: Option<&str>) -> bool {
    match selector {
        None => true,
        Some(expected) => value == Some(expected),
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterCriteria, filter_records, record_matches};
    use crate::{Record, RecordId};

    fn record(id: i64, name: &str, category: Option<&str>, theme: Option<&str>) -> Record {
        Record {
            id: Some(RecordId::new(id)),
            name: Some(name.to_owned()),
            category: category.map(str::to_owned),
            theme: theme.map(str::to_owned),
            ..Record::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record(1, "River Basin", Some("Hydrology"), Some("Water")),
            record(2, "Lake", Some("Hydrology"), Some("Water")),
            record(3, "Forest Cover", Some("Land Use"), Some("Vegetation")),
            record(4, "Watershed", None, Some("Water")),
            Record {
                id: Some(RecordId::new(15)),
                name: None,
                category: Some("Hydrology".to_owned()),
                parent_id: Some(207),
                project: Some("Bhuvan".to_owned()),
                theme: None,
                ..Record::default()
            },
        ]
    }

    fn ids(records: &[Record]) -> Vec<String> {
        records
            .iter()
            .map(|record| record.id.as_ref().map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn empty_criteria_keeps_every_record_in_order() {
        let records = sample();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(filter_records(&records, &criteria), records);
    }

    #[test]
    fn whitespace_query_counts_as_empty() {
        let records = sample();
        let criteria = FilterCriteria {
            query: "   ".to_owned(),
            ..FilterCriteria::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(filter_records(&records, &criteria).len(), records.len());
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let criteria = FilterCriteria {
            query: " riv ".to_owned(),
            ..FilterCriteria::default()
        };
        let river = record(1, "River Basin", None, None);
        let lake = record(2, "Lake", None, None);
        assert!(record_matches(&river, &criteria));
        assert!(!record_matches(&lake, &criteria));
    }

    #[test]
    fn query_searches_category_project_and_theme() {
        let records = sample();
        let by_project = FilterCriteria {
            query: "BHUVAN".to_owned(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &by_project)), vec!["15"]);

        let by_theme = FilterCriteria {
            query: "veget".to_owned(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &by_theme)), vec!["3"]);
    }

    #[test]
    fn query_matches_id_and_parent_digits() {
        let records = sample();
        let by_parent = FilterCriteria {
            query: "207".to_owned(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &by_parent)), vec!["15"]);

        let by_id = FilterCriteria {
            query: "5".to_owned(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &by_id)), vec!["15"]);
    }

    #[test]
    fn zero_id_is_searchable() {
        let zero = record(0, "Root", None, None);
        let criteria = FilterCriteria {
            query: "0".to_owned(),
            ..FilterCriteria::default()
        };
        assert!(record_matches(&zero, &criteria));
    }

    #[test]
    fn category_filter_is_exact_and_excludes_missing_categories() {
        let records = sample();
        let criteria = FilterCriteria {
            category: Some("Hydrology".to_owned()),
            ..FilterCriteria::default()
        };
        let filtered = filter_records(&records, &criteria);
        assert_eq!(ids(&filtered), vec!["1", "2", "15"]);
        assert!(
            filtered
                .iter()
                .all(|record| record.category.as_deref() == Some("Hydrology"))
        );

        let lowercase = FilterCriteria {
            category: Some("hydrology".to_owned()),
            ..FilterCriteria::default()
        };
        assert!(filter_records(&records, &lowercase).is_empty());
    }

    #[test]
    fn selectors_and_query_combine_with_and() {
        let records = sample();
        let criteria = FilterCriteria {
            query: "a".to_owned(),
            category: Some("Hydrology".to_owned()),
            theme: Some("Water".to_owned()),
        };
        assert_eq!(ids(&filter_records(&records, &criteria)), vec!["1", "2"]);
    }

    #[test]
    fn empty_selector_string_is_ignored() {
        let records = sample();
        let criteria = FilterCriteria {
            category: Some(String::new()),
            theme: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(filter_records(&records, &criteria).len(), records.len());
    }

    #[test]
    fn every_match_contains_the_query() {
        let records = sample();
        for query in ["a", "wat", "1", "LAND", "zzz"] {
            let criteria = FilterCriteria {
                query: query.to_owned(),
                ..FilterCriteria::default()
            };
            let needle = query.to_lowercase();
            for record in filter_records(&records, &criteria) {
                let haystack = [
                    record.name.clone(),
                    record.category.clone(),
                    record.project.clone(),
                    record.theme.clone(),
                    record.id.as_ref().map(ToString::to_string),
                    record.parent_id.map(|parent| parent.to_string()),
                ];
                assert!(
                    haystack
                        .iter()
                        .flatten()
                        .any(|value| value.to_lowercase().contains(&needle)),
                    "query {query:?} leaked {record:?}"
                );
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        let criteria = FilterCriteria {
            query: "a".to_owned(),
            theme: Some("Water".to_owned()),
            ..FilterCriteria::default()
        };
        let once = filter_records(&records, &criteria);
        let twice = filter_records(&once, &criteria);
        assert_eq!(once, twice);
    }
}
