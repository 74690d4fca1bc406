// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use geotable_app::{Record, RecordEnvelope, RecordId};
use serde_json::{Map, Value};
use std::path::PathBuf;

const CATEGORIES: [&str; 8] = [
    "Hydrology",
    "Land Use",
    "Administrative",
    "Agriculture",
    "Forestry",
    "Urban",
    "Coastal",
    "Cryosphere",
];

const THEMES: [&str; 7] = [
    "Water",
    "Vegetation",
    "Boundaries",
    "Soil",
    "Climate",
    "Infrastructure",
    "Snow and Glacier",
];

const PROJECTS: [&str; 6] = ["VEDAS", "Bhuvan", "WRIS", "NRSC-LULC", "Agromet", "Coastal Zone"];

const PLACES: [&str; 16] = [
    "Narmada",
    "Kaveri",
    "Godavari",
    "Sabarmati",
    "Mahi",
    "Tapi",
    "Krishna",
    "Brahmaputra",
    "Chambal",
    "Luni",
    "Banas",
    "Betwa",
    "Sutlej",
    "Ganga",
    "Yamuna",
    "Indus",
];

const FEATURES: [&str; 10] = [
    "River Basin",
    "Sub Basin",
    "Watershed",
    "District",
    "Taluka",
    "Reservoir",
    "Command Area",
    "Forest Division",
    "Glacier",
    "Coastal Stretch",
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    /// True roughly once every `n` draws.
    fn one_in(&mut self, n: usize) -> bool {
        self.int_n(n) == 0
    }
}

/// Seeded generator of geo-entity records shaped like the sources API.
#[derive(Debug, Clone)]
pub struct RecordFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl RecordFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One record with the given id. Optional fields are occasionally left
    /// empty so tests exercise the null paths.
    pub fn record(&mut self, id: i64) -> Record {
        let name = format!("{} {}", self.pick(&PLACES), self.pick(&FEATURES));
        let parent_id = if id > 1 && !self.rng.one_in(3) {
            Some(1 + self.rng.int_n(id as usize - 1) as i64)
        } else {
            None
        };

        let mut extra = Map::new();
        extra.insert(
            "level".to_owned(),
            Value::from(self.rng.int_n(5) as i64 + 1),
        );

        Record {
            id: Some(RecordId::new(id)),
            name: (!self.rng.one_in(12)).then_some(name),
            category: (!self.rng.one_in(8)).then(|| self.pick(&CATEGORIES).to_owned()),
            parent_id,
            project: (!self.rng.one_in(6)).then(|| self.pick(&PROJECTS).to_owned()),
            theme: (!self.rng.one_in(8)).then(|| self.pick(&THEMES).to_owned()),
            extra,
        }
    }

    /// `count` records with ids `1..=count`.
    pub fn records(&mut self, count: usize) -> Vec<Record> {
        (1..=count as i64).map(|id| self.record(id)).collect()
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }
}

pub fn demo_records() -> Vec<Record> {
    RecordFaker::new(2026).records(60)
}

/// A small hand-written response body covering every field shape the API
/// is known to send.
pub fn fixture_envelope_json() -> &'static str {
    r#"{
  "data": [
    {"id": 12, "name": "Narmada River Basin", "category": "Hydrology", "parent_id": null, "project": "WRIS", "theme": "Water"},
    {"id": 3, "name": "Lake", "category": "Hydrology", "parent_id": 12, "project": "VEDAS", "theme": "Water"},
    {"id": "41", "name": "Ahmedabad District", "category": "Administrative", "parent_id": 7, "project": "Bhuvan", "theme": "Boundaries", "geometry_type": "polygon"},
    {"id": 0, "name": "India", "category": null, "parent_id": null, "project": null, "theme": null},
    {"id": 27, "category": "Land Use", "parent_id": 3, "theme": "Vegetation"}
  ]
}"#
}

pub fn fixture_records() -> Result<Vec<Record>> {
    let envelope: RecordEnvelope =
        serde_json::from_str(fixture_envelope_json()).context("decode fixture envelope")?;
    Ok(envelope.data)
}

pub fn temp_config_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("config.toml");
    Ok((dir, path))
}

pub fn categories() -> &'static [&'static str] {
    &CATEGORIES
}

pub fn themes() -> &'static [&'static str] {
    &THEMES
}

#[cfg(test)]
mod tests {
    use super::{DeterministicRng, RecordFaker, categories, demo_records, fixture_records, themes};
    use anyhow::Result;
    use geotable_app::{RecordId, SortKey};
    use std::collections::BTreeSet;

    #[test]
    fn new_deterministic_seed() {
        let mut left = RecordFaker::new(42);
        let mut right = RecordFaker::new(42);
        assert_eq!(left.records(10), right.records(10));
    }

    #[test]
    fn zero_seed_is_normalized() {
        assert_eq!(RecordFaker::new(0).seed(), 1);
    }

    #[test]
    fn records_have_sequential_ids_and_earlier_parents() {
        let mut faker = RecordFaker::new(3);
        let records = faker.records(40);
        for (index, record) in records.iter().enumerate() {
            let id = index as i64 + 1;
            assert_eq!(record.id, Some(RecordId::new(id)));
            if let Some(parent) = record.parent_id {
                assert!(parent >= 1 && parent < id, "record {id} parent {parent}");
            }
        }
    }

    #[test]
    fn generated_values_come_from_known_vocabularies() {
        let mut faker = RecordFaker::new(4);
        for record in faker.records(50) {
            if let Some(category) = &record.category {
                assert!(categories().contains(&category.as_str()));
            }
            if let Some(theme) = &record.theme {
                assert!(themes().contains(&theme.as_str()));
            }
        }
    }

    #[test]
    fn demo_set_mixes_present_and_missing_fields() {
        let records = demo_records();
        assert_eq!(records.len(), 60);
        assert!(records.iter().any(|record| record.parent_id.is_none()));
        assert!(records.iter().any(|record| record.parent_id.is_some()));
        assert!(records.iter().any(|record| record.category.is_some()));
    }

    #[test]
    fn variety_across_seeds() {
        let mut names = BTreeSet::new();
        for seed in 0_u64..20_u64 {
            let mut faker = RecordFaker::new(seed);
            names.insert(faker.record(1).display_field(SortKey::Name));
        }
        assert!(names.len() >= 5, "got {}", names.len());
    }

    #[test]
    fn fixture_decodes() -> Result<()> {
        let records = fixture_records()?;
        assert_eq!(records.len(), 5);
        assert_eq!(records[2].id, Some(RecordId::from("41")));
        assert!(records[2].extra.contains_key("geometry_type"));
        assert_eq!(records[4].name, None);
        Ok(())
    }

    #[test]
    fn int_n() {
        let mut rng = DeterministicRng::new(42);
        for _ in 0..100 {
            assert!(rng.int_n(5) < 5);
        }
        assert_eq!(rng.int_n(1), 0);
    }
}
