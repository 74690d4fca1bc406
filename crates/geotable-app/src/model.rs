// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::RecordId;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to load data";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn field(&self, key: SortKey) -> FieldValue<'_> {
        match key {
            SortKey::Id => match &self.id {
                Some(RecordId::Number(value)) => FieldValue::Number(*value),
                Some(RecordId::Text(value)) => FieldValue::Text(value),
                None => FieldValue::Empty,
            },
            SortKey::Name => FieldValue::from_text(self.name.as_deref()),
            SortKey::Category => FieldValue::from_text(self.category.as_deref()),
            SortKey::ParentId => self
                .parent_id
                .map_or(FieldValue::Empty, FieldValue::Number),
            SortKey::Project => FieldValue::from_text(self.project.as_deref()),
            SortKey::Theme => FieldValue::from_text(self.theme.as_deref()),
        }
    }

    pub fn display_field(&self, key: SortKey) -> String {
        self.field(key).to_string_form()
    }
}

/// Response body of the geo-entity sources endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordEnvelope {
    pub data: Vec<Record>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Empty,
    Number(i64),
    Text(&'a str),
}

impl<'a> FieldValue<'a> {
    fn from_text(value: Option<&'a str>) -> Self {
        value.map_or(Self::Empty, Self::Text)
    }

    pub fn to_string_form(self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Id,
    Name,
    Category,
    ParentId,
    Project,
    Theme,
}

impl SortKey {
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::Category,
        Self::ParentId,
        Self::Project,
        Self::Theme,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Category => "category",
            Self::ParentId => "parent_id",
            Self::Project => "project",
            Self::Theme => "theme",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Category => "Category",
            Self::ParentId => "Parent ID",
            Self::Project => "Project",
            Self::Theme => "Theme",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "category" => Some(Self::Category),
            "parent_id" => Some(Self::ParentId),
            "project" => Some(Self::Project),
            "theme" => Some(Self::Theme),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|key| *key == self)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldValue, Record, RecordEnvelope, SortDirection, SortKey};
    use crate::RecordId;
    use anyhow::Result;

    #[test]
    fn envelope_decodes_optional_and_extra_fields() -> Result<()> {
        let raw = r#"{"data":[
            {"id":1,"name":"River Basin","category":"Hydrology","parent_id":null,"project":"WRIS","theme":"Water","level":3},
            {"id":"2"}
        ]}"#;
        let envelope: RecordEnvelope = serde_json::from_str(raw)?;
        assert_eq!(envelope.data.len(), 2);

        let first = &envelope.data[0];
        assert_eq!(first.id, Some(RecordId::Number(1)));
        assert_eq!(first.parent_id, None);
        assert_eq!(first.extra.get("level"), Some(&serde_json::json!(3)));

        let second = &envelope.data[1];
        assert_eq!(second.id, Some(RecordId::Text("2".to_owned())));
        assert_eq!(second.name, None);
        assert!(second.extra.is_empty());
        Ok(())
    }

    #[test]
    fn field_maps_each_sort_key() {
        let record = Record {
            id: Some(RecordId::new(9)),
            name: Some("Lake".to_owned()),
            parent_id: Some(4),
            ..Record::default()
        };
        assert_eq!(record.field(SortKey::Id), FieldValue::Number(9));
        assert_eq!(record.field(SortKey::Name), FieldValue::Text("Lake"));
        assert_eq!(record.field(SortKey::ParentId), FieldValue::Number(4));
        assert_eq!(record.field(SortKey::Theme), FieldValue::Empty);
        assert_eq!(record.display_field(SortKey::Category), "");
        assert_eq!(record.display_field(SortKey::ParentId), "4");
    }

    #[test]
    fn sort_keys_round_trip_through_field_names() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("Parent ID"), None);
        assert_eq!(SortKey::ParentId.label(), "Parent ID");
        assert_eq!(SortKey::Theme.index(), 5);
    }

    #[test]
    fn direction_flips() {
        assert_eq!(SortDirection::default(), SortDirection::Asc);
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert!(!SortDirection::Desc.is_ascending());
    }
}
