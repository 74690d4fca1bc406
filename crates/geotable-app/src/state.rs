// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use std::collections::BTreeSet;

use crate::filter::{FilterCriteria, filter_records};
use crate::model::{FETCH_FAILED_MESSAGE, LoadState, Record, SortDirection, SortKey};
use crate::sort::{locale_compare, sort_records};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    all_records: Vec<Record>,
    visible_records: Vec<Record>,
    filters: FilterCriteria,
    sort_key: Option<SortKey>,
    sort_direction: SortDirection,
    load: LoadState,
    selected_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    SetQuery(String),
    SetCategory(Option<String>),
    SetTheme(Option<String>),
    ClearFilters,
    /// Column-header click: same key flips direction, new key starts ascending.
    SortBy(SortKey),
    /// Sort selector change: keeps the current direction.
    SetSortKey(SortKey),
    ToggleSortDirection,
    ClearSort,
    SetDate(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    LoadStateChanged(LoadState),
    FiltersChanged(FilterCriteria),
    SortChanged {
        key: Option<SortKey>,
        direction: SortDirection,
    },
    RecordsChanged {
        visible: usize,
        total: usize,
    },
    DateSelected(Option<String>),
}

impl ViewState {
    pub fn all_records(&self) -> &[Record] {
        &self.all_records
    }

    pub fn visible_records(&self) -> &[Record] {
        &self.visible_records
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn sortable_keys() -> &'static [SortKey] {
        &SortKey::ALL
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    pub fn category_options(&self) -> Vec<String> {
        self.distinct_values(|record| record.category.as_deref())
    }

    pub fn theme_options(&self) -> Vec<String> {
        self.distinct_values(|record| record.theme.as_deref())
    }

    pub fn begin_load(&mut self) -> Result<Vec<ViewEvent>> {
        match self.load {
            LoadState::Loading => bail!("a record fetch is already in flight"),
            LoadState::Failed(_) => {
                bail!("record fetch already failed; restart geotable to try again")
            }
            LoadState::Idle | LoadState::Loaded => {}
        }
        self.load = LoadState::Loading;
        Ok(vec![ViewEvent::LoadStateChanged(self.load.clone())])
    }

    /// Settles a load started with [`ViewState::begin_load`]. Records are
    /// applied all-or-nothing; settling without a load in flight is refused.
    pub fn finish_load(&mut self, outcome: Result<Vec<Record>>) -> Result<Vec<ViewEvent>> {
        if self.load != LoadState::Loading {
            bail!(
                "no record fetch in flight (state is {}); call begin_load first",
                self.load.label()
            );
        }
        let events = match outcome {
            Ok(records) => {
                tracing::info!(count = records.len(), "records loaded");
                self.visible_records = records.clone();
                self.all_records = records;
                self.load = LoadState::Loaded;
                let changed = self.apply_filters_and_sort();
                vec![ViewEvent::LoadStateChanged(self.load.clone()), changed]
            }
            Err(error) => {
                tracing::warn!(error = %format!("{error:#}"), "record fetch failed");
                self.all_records.clear();
                self.visible_records.clear();
                self.load = LoadState::Failed(FETCH_FAILED_MESSAGE.to_owned());
                vec![
                    ViewEvent::LoadStateChanged(self.load.clone()),
                    ViewEvent::RecordsChanged {
                        visible: 0,
                        total: 0,
                    },
                ]
            }
        };
        Ok(events)
    }

    pub fn dispatch(&mut self, command: ViewCommand) -> Vec<ViewEvent> {
        match command {
            ViewCommand::SetQuery(query) => {
                self.filters.query = query;
                self.filters_changed()
            }
            ViewCommand::SetCategory(category) => {
                self.filters.category = category;
                self.filters_changed()
            }
            ViewCommand::SetTheme(theme) => {
                self.filters.theme = theme;
                self.filters_changed()
            }
            ViewCommand::ClearFilters => {
                self.filters = FilterCriteria::default();
                self.filters_changed()
            }
            ViewCommand::SortBy(key) => {
                if self.sort_key == Some(key) {
                    self.sort_direction = self.sort_direction.flipped();
                } else {
                    self.sort_key = Some(key);
                    self.sort_direction = SortDirection::Asc;
                }
                self.sort_changed()
            }
            ViewCommand::SetSortKey(key) => {
                self.sort_key = Some(key);
                self.sort_changed()
            }
            ViewCommand::ToggleSortDirection => {
                self.sort_direction = self.sort_direction.flipped();
                self.sort_changed()
            }
            ViewCommand::ClearSort => {
                self.sort_key = None;
                self.sort_changed()
            }
            ViewCommand::SetDate(date) => {
                self.selected_date = date;
                vec![ViewEvent::DateSelected(self.selected_date.clone())]
            }
        }
    }

    /// Rebuilds `visible_records` from scratch: filter over `all_records`,
    /// then sort by the current key when one is selected.
    pub fn apply_filters_and_sort(&mut self) -> ViewEvent {
        let mut visible = if self.filters.is_empty() {
            self.all_records.clone()
        } else {
            filter_records(&self.all_records, &self.filters)
        };
        if let Some(key) = self.sort_key {
            sort_records(&mut visible, key, self.sort_direction);
        }
        self.visible_records = visible;

        tracing::debug!(
            visible = self.visible_records.len(),
            total = self.all_records.len(),
            "view recomputed"
        );
        ViewEvent::RecordsChanged {
            visible: self.visible_records.len(),
            total: self.all_records.len(),
        }
    }

    fn filters_changed(&mut self) -> Vec<ViewEvent> {
        vec![
            ViewEvent::FiltersChanged(self.filters.clone()),
            self.apply_filters_and_sort(),
        ]
    }

    fn sort_changed(&mut self) -> Vec<ViewEvent> {
        vec![
            ViewEvent::SortChanged {
                key: self.sort_key,
                direction: self.sort_direction,
            },
            self.apply_filters_and_sort(),
        ]
    }

    fn distinct_values(&self, field: impl Fn(&Record) -> Option<&str>) -> Vec<String> {
        let unique = self
            .all_records
            .iter()
            .filter_map(field)
            .filter(|value| !value.is_empty())
            .collect::<BTreeSet<&str>>();
        let mut values = unique.into_iter().map(str::to_owned).collect::<Vec<_>>();
        values.sort_by(|left, right| locale_compare(left, right));
        values
    }
}
