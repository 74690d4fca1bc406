// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use geotable_app::{Record, RecordSource, SortKey, ViewCommand, ViewEvent, ViewState};
use geotable_client::Client;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

const LOG_ENV: &str = "GEOTABLE_LOG";

/// Where the one record fetch goes: the configured HTTP endpoint, or the
/// seeded faker when running with `--demo`.
pub enum DataSource {
    Http(Client),
    Demo(Vec<Record>),
}

impl DataSource {
    pub fn from_config(config: &Config, demo: bool) -> Result<Self> {
        if demo {
            return Ok(Self::Demo(geotable_testkit::demo_records()));
        }
        let client = Client::new(config.endpoint(), config.timeout()?)?;
        Ok(Self::Http(client))
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Http(client) => client.endpoint().to_owned(),
            Self::Demo(records) => format!("demo data ({} records)", records.len()),
        }
    }
}

impl RecordSource for DataSource {
    fn fetch_records(&mut self) -> Result<Vec<Record>> {
        match self {
            Self::Http(client) => client.fetch_records(),
            Self::Demo(records) => records.fetch_records(),
        }
    }
}

/// Initial filters and sort requested on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub query: Option<String>,
    pub category: Option<String>,
    pub theme: Option<String>,
    pub sort: Option<SortKey>,
    pub descending: bool,
}

/// Command-line values win over `[ui]` defaults. Direction is set before the
/// key so `SetSortKey` keeps it.
pub fn startup_commands(config: &Config, view: &ViewOptions) -> Vec<ViewCommand> {
    let mut commands = Vec::new();
    if let Some(query) = &view.query {
        commands.push(ViewCommand::SetQuery(query.clone()));
    }
    if let Some(category) = &view.category {
        commands.push(ViewCommand::SetCategory(Some(category.clone())));
    }
    if let Some(theme) = &view.theme {
        commands.push(ViewCommand::SetTheme(Some(theme.clone())));
    }
    if view.descending || config.descending() {
        commands.push(ViewCommand::ToggleSortDirection);
    }
    if let Some(key) = view.sort.or_else(|| config.default_sort()) {
        commands.push(ViewCommand::SetSortKey(key));
    }
    commands
}

pub fn log_view_event(state: &ViewState, event: &ViewEvent) {
    match event {
        ViewEvent::LoadStateChanged(load) => {
            tracing::debug!(load = load.label(), "load state changed");
        }
        ViewEvent::FiltersChanged(filters) => {
            tracing::debug!(
                query = %filters.query,
                category = filters.category.as_deref().unwrap_or(""),
                theme = filters.theme.as_deref().unwrap_or(""),
                "filters changed"
            );
        }
        ViewEvent::SortChanged { key, direction } => {
            tracing::debug!(
                key = key.map_or("", SortKey::as_str),
                direction = direction.as_str(),
                "sort changed"
            );
        }
        ViewEvent::RecordsChanged { visible, total } => {
            tracing::trace!(visible, total, loading = state.is_loading(), "records changed");
        }
        ViewEvent::DateSelected(date) => {
            tracing::debug!(date = date.as_deref().unwrap_or(""), "date selected");
        }
    }
}

/// Tab-separated table of the visible records, header first.
pub fn render_dump(state: &ViewState) -> String {
    let keys = ViewState::sortable_keys();
    let mut out = keys
        .iter()
        .map(|key| key.label())
        .collect::<Vec<_>>()
        .join("\t");
    out.push('\n');

    for record in state.visible_records() {
        let row = keys
            .iter()
            .map(|key| record.display_field(*key).replace(['\t', '\n', '\r'], " "))
            .collect::<Vec<_>>()
            .join("\t");
        out.push_str(&row);
        out.push('\n');
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

impl LogTarget {
    /// The TUI owns the terminal, so it only logs to a file.
    pub fn for_mode(config: &Config, headless: bool) -> Self {
        if headless {
            return Self::Stderr;
        }
        config.log_file().map_or(Self::Off, Self::File)
    }
}

pub fn init_logging(target: &LogTarget) -> Result<()> {
    let filter = || EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|error| anyhow!("install log subscriber: {error}")),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| {
                    format!(
                        "open log file {} -- fix [log].file or unset it",
                        path.display()
                    )
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|error| anyhow!("install log subscriber: {error}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSource, LogTarget, ViewOptions, log_view_event, render_dump, startup_commands};
    use crate::config::Config;
    use anyhow::Result;
    use geotable_app::{SortDirection, SortKey, ViewCommand, ViewController};
    use std::path::PathBuf;

    fn loaded(commands: Vec<ViewCommand>) -> Result<ViewController> {
        let mut controller = ViewController::new();
        controller.subscribe(log_view_event);
        for command in commands {
            controller.dispatch(command);
        }
        let mut source = geotable_testkit::fixture_records()?;
        controller.load(&mut source)?;
        Ok(controller)
    }

    #[test]
    fn dump_prints_header_and_visible_rows() -> Result<()> {
        let controller = loaded(vec![ViewCommand::SetCategory(Some("Hydrology".to_owned()))])?;
        assert_eq!(
            render_dump(controller.state()),
            "ID\tName\tCategory\tParent ID\tProject\tTheme\n\
             12\tNarmada River Basin\tHydrology\t\tWRIS\tWater\n\
             3\tLake\tHydrology\t12\tVEDAS\tWater\n"
        );
        Ok(())
    }

    #[test]
    fn dump_of_empty_view_is_header_only() {
        let controller = ViewController::new();
        assert_eq!(
            render_dump(controller.state()),
            "ID\tName\tCategory\tParent ID\tProject\tTheme\n"
        );
    }

    #[test]
    fn cli_sort_overrides_config_default() -> Result<()> {
        let mut config = Config::default();
        config.ui.default_sort = Some("name".to_owned());

        let view = ViewOptions {
            sort: Some(SortKey::Id),
            descending: true,
            ..ViewOptions::default()
        };
        let commands = startup_commands(&config, &view);
        assert_eq!(
            commands,
            vec![
                ViewCommand::ToggleSortDirection,
                ViewCommand::SetSortKey(SortKey::Id)
            ]
        );

        let controller = loaded(commands)?;
        let state = controller.state();
        assert_eq!(state.sort_key(), Some(SortKey::Id));
        assert_eq!(state.sort_direction(), SortDirection::Desc);
        let ids = state
            .visible_records()
            .iter()
            .map(|record| record.display_field(SortKey::Id))
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["41", "3", "27", "12", "0"]);
        Ok(())
    }

    #[test]
    fn config_default_sort_applies_without_flags() {
        let mut config = Config::default();
        config.ui.default_sort = Some("theme".to_owned());
        assert_eq!(
            startup_commands(&config, &ViewOptions::default()),
            vec![ViewCommand::SetSortKey(SortKey::Theme)]
        );
        assert!(startup_commands(&Config::default(), &ViewOptions::default()).is_empty());
    }

    #[test]
    fn filter_flags_become_commands() -> Result<()> {
        let view = ViewOptions {
            query: Some("riv".to_owned()),
            theme: Some("Water".to_owned()),
            ..ViewOptions::default()
        };
        let controller = loaded(startup_commands(&Config::default(), &view))?;
        assert_eq!(controller.state().visible_records().len(), 1);
        assert_eq!(controller.state().filters().query, "riv");
        Ok(())
    }

    #[test]
    fn demo_source_skips_network() -> Result<()> {
        let mut source = DataSource::from_config(&Config::default(), true)?;
        assert_eq!(source.describe(), "demo data (60 records)");

        let mut controller = ViewController::new();
        controller.load(&mut source)?;
        assert_eq!(controller.state().all_records().len(), 60);
        assert_eq!(controller.state().last_error(), None);
        Ok(())
    }

    #[test]
    fn http_source_describes_endpoint() -> Result<()> {
        let source = DataSource::from_config(&Config::default(), false)?;
        assert_eq!(source.describe(), geotable_client::DEFAULT_ENDPOINT);
        Ok(())
    }

    #[test]
    fn log_target_depends_on_mode() {
        let mut config = Config::default();
        assert_eq!(LogTarget::for_mode(&config, true), LogTarget::Stderr);
        assert_eq!(LogTarget::for_mode(&config, false), LogTarget::Off);

        config.log.file = Some("/tmp/geotable.log".to_owned());
        assert_eq!(
            LogTarget::for_mode(&config, false),
            LogTarget::File(PathBuf::from("/tmp/geotable.log"))
        );
    }
}
