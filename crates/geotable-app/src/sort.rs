// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::{FieldValue, Record, SortDirection, SortKey};

pub fn compare_field_values(left: FieldValue<'_>, right: FieldValue<'_>) -> Ordering {
    match (left, right) {
        (FieldValue::Number(left), FieldValue::Number(right)) => left.cmp(&right),
        (left, right) => locale_compare(&left.to_string_form(), &right.to_string_form()),
    }
}

/// Stable in-place sort of `records` by a single column.
///
/// A column holding both numbers and text is ordered by string form only, so
/// the comparator stays a total order over the whole slice.
pub fn sort_records(records: &mut [Record], key: SortKey, direction: SortDirection) {
    let mode = ColumnMode::scan(records, key);
    records.sort_by(|left, right| {
        let ordering = mode.compare(left.field(key), right.field(key));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnMode {
    Typed,
    TextOnly,
}

impl ColumnMode {
    fn scan(records: &[Record], key: SortKey) -> Self {
        let mut has_number = false;
        let mut has_text = false;
        for record in records {
            match record.field(key) {
                FieldValue::Number(_) => has_number = true,
                FieldValue::Text(_) => has_text = true,
                FieldValue::Empty => {}
            }
            if has_number && has_text {
                return Self::TextOnly;
            }
        }
        Self::Typed
    }

    fn compare(self, left: FieldValue<'_>, right: FieldValue<'_>) -> Ordering {
        match self {
            Self::Typed => compare_field_values(left, right),
            Self::TextOnly => locale_compare(&left.to_string_form(), &right.to_string_form()),
        }
    }
}

/// Root-collation style ordering. Strings are compared first on base letters
/// (accents stripped, case folded, punctuation before digits before letters),
/// then on accents, then on case with lowercase first.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    primary_key(left)
        .cmp(primary_key(right))
        .then_with(|| folded(left).cmp(folded(right)))
        .then_with(|| right.cmp(left))
}

fn primary_key(value: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    value
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .map(|ch| (char_class(ch), ch))
}

fn folded(value: &str) -> impl Iterator<Item = char> + '_ {
    value.nfd().flat_map(char::to_lowercase)
}

fn char_class(ch: char) -> u8 {
    if ch.is_alphabetic() {
        2
    } else if ch.is_numeric() {
        1
    } else {
        0
    }
}
