// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use geotable_app::{
    LoadState, RecordSource, SortDirection, SortKey, ViewCommand, ViewController, ViewState,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

const HALF_PAGE_ROWS: isize = 10;
const ALL_LABEL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    pub date_picker: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum InputMode {
    #[default]
    Nav,
    Search {
        previous: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavCommand {
    Quit,
    OpenSearch,
    CycleCategory(isize),
    CycleTheme(isize),
    SortSelectedColumn,
    ToggleDirection,
    ClearSort,
    ClearFilters,
    OpenDatePicker,
    Reload,
    ToggleHelp,
    MoveRow(isize),
    MoveColumn(isize),
    JumpFirstRow,
    JumpLastRow,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct DatePickerUiState {
    visible: bool,
    original: Option<Date>,
    selected: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    options: UiOptions,
    input: InputMode,
    selected_row: usize,
    selected_col: usize,
    date_picker: DatePickerUiState,
    help_visible: bool,
    status_line: Option<String>,
    status_token: u64,
}

/// Runs the interactive table until the user quits. The one fetch happens
/// after a first "loading" frame so the terminal is never blank while the
/// request is in flight.
pub fn run_app(
    controller: &mut ViewController,
    source: &mut dyn RecordSource,
    options: UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData {
        options,
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();

    let result = event_loop(
        &mut terminal,
        controller,
        source,
        &mut view_data,
        &internal_tx,
        &internal_rx,
    );

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut ViewController,
    source: &mut dyn RecordSource,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    internal_rx: &Receiver<InternalEvent>,
) -> Result<()> {
    terminal
        .draw(render_loading)
        .context("draw frame")?;
    if controller.state().load_state() == &LoadState::Idle {
        reload(controller, source, view_data, internal_tx);
    }

    loop {
        process_internal_events(view_data, internal_rx);

        terminal
            .draw(|frame| render(frame, controller.state(), view_data))
            .context("draw frame")?;

        if !event::poll(Duration::from_millis(120)).context("poll event")? {
            continue;
        }
        if let Event::Key(key) = event::read().context("read event")?
            && handle_key_event(controller, source, view_data, internal_tx, key)
        {
            return Ok(());
        }
    }
}

fn process_internal_events(view_data: &mut ViewData, rx: &Receiver<InternalEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                view_data.status_line = None;
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    view_data.status_line = Some(message.into());
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn reload(
    controller: &mut ViewController,
    source: &mut dyn RecordSource,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    match controller.load(source) {
        Ok(_) => {
            clamp_cursor(controller.state(), view_data);
            let state = controller.state();
            if let Some(error) = state.last_error() {
                emit_status(view_data, internal_tx, error.to_owned());
            } else {
                emit_status(
                    view_data,
                    internal_tx,
                    format!("loaded {} records", state.all_records().len()),
                );
            }
        }
        Err(error) => emit_status(view_data, internal_tx, format!("reload unavailable: {error}")),
    }
}

fn handle_key_event(
    controller: &mut ViewController,
    source: &mut dyn RecordSource,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.date_picker.visible {
        handle_date_picker_key(controller, view_data, internal_tx, key);
        return false;
    }

    if matches!(view_data.input, InputMode::Search { .. }) {
        handle_search_key(controller, view_data, key);
        return false;
    }

    let Some(command) = nav_command_for_key(key) else {
        return false;
    };
    apply_nav_command(controller, source, view_data, internal_tx, command)
}

fn nav_command_for_key(key: KeyEvent) -> Option<NavCommand> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => Some(NavCommand::Quit),
        (KeyCode::Char('/'), _) => Some(NavCommand::OpenSearch),
        (KeyCode::Char('c'), KeyModifiers::NONE) => Some(NavCommand::CycleCategory(1)),
        (KeyCode::Char('C'), _) => Some(NavCommand::CycleCategory(-1)),
        (KeyCode::Char('t'), KeyModifiers::NONE) => Some(NavCommand::CycleTheme(1)),
        (KeyCode::Char('T'), _) => Some(NavCommand::CycleTheme(-1)),
        (KeyCode::Char('s'), KeyModifiers::NONE) | (KeyCode::Enter, _) => {
            Some(NavCommand::SortSelectedColumn)
        }
        (KeyCode::Char('o'), KeyModifiers::NONE) => Some(NavCommand::ToggleDirection),
        (KeyCode::Char('S'), _) => Some(NavCommand::ClearSort),
        (KeyCode::Char('x'), KeyModifiers::NONE) => Some(NavCommand::ClearFilters),
        (KeyCode::Char('d'), KeyModifiers::NONE) => Some(NavCommand::OpenDatePicker),
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(NavCommand::Reload),
        (KeyCode::Char('?'), _) => Some(NavCommand::ToggleHelp),
        (KeyCode::Char('d'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(NavCommand::MoveRow(HALF_PAGE_ROWS))
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(NavCommand::MoveRow(-HALF_PAGE_ROWS))
        }
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Some(NavCommand::MoveRow(1)),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Some(NavCommand::MoveRow(-1)),
        (KeyCode::Char('h'), _) | (KeyCode::Left, _) => Some(NavCommand::MoveColumn(-1)),
        (KeyCode::Char('l'), _) | (KeyCode::Right, _) => Some(NavCommand::MoveColumn(1)),
        (KeyCode::Char('g'), _) | (KeyCode::Home, _) => Some(NavCommand::JumpFirstRow),
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Some(NavCommand::JumpLastRow),
        _ => None,
    }
}

fn apply_nav_command(
    controller: &mut ViewController,
    source: &mut dyn RecordSource,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: NavCommand,
) -> bool {
    tracing::debug!(?command, "nav command");
    match command {
        NavCommand::Quit => return true,
        NavCommand::OpenSearch => {
            view_data.input = InputMode::Search {
                previous: controller.state().filters().query.clone(),
            };
        }
        NavCommand::CycleCategory(delta) => {
            let state = controller.state();
            let next = cycle_option(
                &state.category_options(),
                state.filters().category.as_deref(),
                delta,
            );
            let label = next.clone().unwrap_or_else(|| ALL_LABEL.to_owned());
            controller.dispatch(ViewCommand::SetCategory(next));
            emit_status(view_data, internal_tx, format!("category: {label}"));
        }
        NavCommand::CycleTheme(delta) => {
            let state = controller.state();
            let next = cycle_option(
                &state.theme_options(),
                state.filters().theme.as_deref(),
                delta,
            );
            let label = next.clone().unwrap_or_else(|| ALL_LABEL.to_owned());
            controller.dispatch(ViewCommand::SetTheme(next));
            emit_status(view_data, internal_tx, format!("theme: {label}"));
        }
        NavCommand::SortSelectedColumn => {
            let key = selected_sort_key(view_data);
            controller.dispatch(ViewCommand::SortBy(key));
            emit_status(view_data, internal_tx, sort_status(controller.state()));
        }
        NavCommand::ToggleDirection => {
            controller.dispatch(ViewCommand::ToggleSortDirection);
            emit_status(view_data, internal_tx, sort_status(controller.state()));
        }
        NavCommand::ClearSort => {
            controller.dispatch(ViewCommand::ClearSort);
            emit_status(view_data, internal_tx, "sort cleared");
        }
        NavCommand::ClearFilters => {
            controller.dispatch(ViewCommand::ClearFilters);
            emit_status(view_data, internal_tx, "filters cleared");
        }
        NavCommand::OpenDatePicker => {
            if view_data.options.date_picker {
                open_date_picker(controller.state(), view_data);
                emit_status(view_data, internal_tx, "date picker open");
            } else {
                emit_status(view_data, internal_tx, "date picker disabled in config");
            }
        }
        NavCommand::Reload => reload(controller, source, view_data, internal_tx),
        NavCommand::ToggleHelp => view_data.help_visible = !view_data.help_visible,
        NavCommand::MoveRow(delta) => move_row(controller.state(), view_data, delta),
        NavCommand::MoveColumn(delta) => move_col(view_data, delta),
        NavCommand::JumpFirstRow => view_data.selected_row = 0,
        NavCommand::JumpLastRow => {
            view_data.selected_row = controller.state().visible_records().len().saturating_sub(1);
        }
    }
    clamp_cursor(controller.state(), view_data);
    false
}

fn handle_search_key(controller: &mut ViewController, view_data: &mut ViewData, key: KeyEvent) {
    let mut query = controller.state().filters().query.clone();
    match key.code {
        KeyCode::Enter => {
            view_data.input = InputMode::Nav;
            return;
        }
        KeyCode::Esc => {
            if let InputMode::Search { previous } = std::mem::take(&mut view_data.input) {
                query = previous;
            }
        }
        KeyCode::Backspace => {
            query.pop();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => query.push(ch),
        _ => return,
    }
    controller.dispatch(ViewCommand::SetQuery(query));
    clamp_cursor(controller.state(), view_data);
}

/// Steps through `[all, options...]`, wrapping at both ends.
fn cycle_option(options: &[String], current: Option<&str>, delta: isize) -> Option<String> {
    let slots = options.len() as isize + 1;
    let position = current
        .and_then(|value| options.iter().position(|option| option == value))
        .map_or(0, |index| index as isize + 1);
    let next = (position + delta).rem_euclid(slots);
    if next == 0 {
        None
    } else {
        options.get(next as usize - 1).cloned()
    }
}

fn selected_sort_key(view_data: &ViewData) -> SortKey {
    SortKey::ALL
        .get(view_data.selected_col)
        .copied()
        .unwrap_or(SortKey::Id)
}

fn sort_status(state: &ViewState) -> String {
    match state.sort_key() {
        Some(key) => format!("sort {} {}", key.label(), state.sort_direction().as_str()),
        None => format!("direction {} (no sort column)", state.sort_direction().as_str()),
    }
}

fn move_row(state: &ViewState, view_data: &mut ViewData, delta: isize) {
    let row_count = state.visible_records().len();
    if row_count == 0 {
        view_data.selected_row = 0;
        return;
    }

    let current = view_data.selected_row;
    let next = if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as usize)
    };
    view_data.selected_row = next.min(row_count.saturating_sub(1));
}

fn move_col(view_data: &mut ViewData, delta: isize) {
    let current = view_data.selected_col;
    let next = if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as usize)
    };
    view_data.selected_col = next.min(SortKey::ALL.len() - 1);
}

fn clamp_cursor(state: &ViewState, view_data: &mut ViewData) {
    let rows = state.visible_records().len();
    view_data.selected_row = view_data.selected_row.min(rows.saturating_sub(1));
    view_data.selected_col = view_data.selected_col.min(SortKey::ALL.len() - 1);
}

fn open_date_picker(state: &ViewState, view_data: &mut ViewData) {
    let original = state
        .selected_date()
        .and_then(|raw| Date::parse(raw, &format_description!("[year]-[month]-[day]")).ok());
    view_data.date_picker = DatePickerUiState {
        visible: true,
        original,
        selected: Some(original.unwrap_or_else(|| OffsetDateTime::now_utc().date())),
    };
}

fn handle_date_picker_key(
    controller: &mut ViewController,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Some(current) = view_data.date_picker.selected else {
        view_data.date_picker = DatePickerUiState::default();
        return;
    };

    let next = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            view_data.date_picker = DatePickerUiState::default();
            emit_status(view_data, internal_tx, "date pick canceled");
            return;
        }
        (KeyCode::Enter, _) => {
            let picked = format_date(current);
            view_data.date_picker = DatePickerUiState::default();
            controller.dispatch(ViewCommand::SetDate(Some(picked.clone())));
            emit_status(view_data, internal_tx, format!("date picked {picked}"));
            return;
        }
        (KeyCode::Backspace, _) | (KeyCode::Delete, _) => {
            view_data.date_picker = DatePickerUiState::default();
            controller.dispatch(ViewCommand::SetDate(None));
            emit_status(view_data, internal_tx, "date cleared");
            return;
        }
        (KeyCode::Char('h'), _) | (KeyCode::Left, _) => shift_date_by_days(current, -1),
        (KeyCode::Char('l'), _) | (KeyCode::Right, _) => shift_date_by_days(current, 1),
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => shift_date_by_days(current, 7),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => shift_date_by_days(current, -7),
        (KeyCode::Char('H'), _) => shift_date_by_months(current, -1),
        (KeyCode::Char('L'), _) => shift_date_by_months(current, 1),
        (KeyCode::Char('['), _) => shift_date_by_years(current, -1),
        (KeyCode::Char(']'), _) => shift_date_by_years(current, 1),
        _ => None,
    };

    if let Some(date) = next {
        view_data.date_picker.selected = Some(date);
    }
}

fn format_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

fn shift_date_by_days(date: Date, days: i64) -> Option<Date> {
    date.checked_add(time::Duration::days(days))
}

fn shift_date_by_years(date: Date, years: i32) -> Option<Date> {
    shift_date_by_months(date, years.saturating_mul(12))
}

fn shift_date_by_months(date: Date, months: i32) -> Option<Date> {
    let base_month = i32::from(date.month() as u8);
    let total_month = base_month - 1 + months;
    let year = date.year() + total_month.div_euclid(12);
    let month = Month::try_from((total_month.rem_euclid(12) + 1) as u8).ok()?;
    let day = date.day().min(time::util::days_in_year_month(year, month));
    Date::from_calendar_date(year, month, day).ok()
}

fn render_loading(frame: &mut ratatui::Frame<'_>) {
    let body = Paragraph::new("loading records...")
        .block(Block::default().title("geotable").borders(Borders::ALL));
    frame.render_widget(body, frame.area());
}

fn render(frame: &mut ratatui::Frame<'_>, state: &ViewState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let filters = Paragraph::new(filter_bar_text(state, view_data))
        .block(Block::default().title("geotable").borders(Borders::ALL));
    frame.render_widget(filters, layout[0]);

    match state.load_state() {
        LoadState::Loaded => render_table(frame, layout[1], state, view_data),
        LoadState::Failed(message) => {
            let body = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .block(Block::default().title("error").borders(Borders::ALL));
            frame.render_widget(body, layout[1]);
        }
        LoadState::Idle | LoadState::Loading => {
            let body = Paragraph::new("loading records...")
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(body, layout[1]);
        }
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if view_data.date_picker.visible {
        let area = centered_rect(48, 30, frame.area());
        frame.render_widget(Clear, area);
        let picker = Paragraph::new(render_date_picker_overlay_text(&view_data.date_picker))
            .block(Block::default().title("date").borders(Borders::ALL));
        frame.render_widget(picker, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 50, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text(view_data.options))
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &ViewState,
    view_data: &ViewData,
) {
    let header = Row::new(ViewState::sortable_keys().iter().enumerate().map(|(index, key)| {
        let mut style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        if index == view_data.selected_col {
            style = style.fg(Color::Cyan);
        }
        Cell::from(header_label(*key, state)).style(style)
    }));

    let rows = state
        .visible_records()
        .iter()
        .enumerate()
        .map(|(row_index, record)| {
            let selected_row = row_index == view_data.selected_row;
            let cells = ViewState::sortable_keys()
                .iter()
                .enumerate()
                .map(|(column_index, key)| {
                    let mut style = Style::default();
                    if selected_row {
                        style = style.bg(Color::DarkGray);
                    }
                    if selected_row && column_index == view_data.selected_col {
                        style = Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD);
                    }
                    Cell::from(record.display_field(*key)).style(style)
                })
                .collect::<Vec<_>>();
            Row::new(cells)
        });

    let widths = [
        Constraint::Length(8),
        Constraint::Min(20),
        Constraint::Min(12),
        Constraint::Length(10),
        Constraint::Min(10),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(table_title(state))
                .borders(Borders::ALL),
        );

    let mut table_state = TableState::default().with_selected(Some(view_data.selected_row));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn header_label(key: SortKey, state: &ViewState) -> String {
    let mut label = key.label().to_owned();
    if state.sort_key() == Some(key) {
        label.push_str(match state.sort_direction() {
            SortDirection::Asc => " ↑",
            SortDirection::Desc => " ↓",
        });
    }
    label
}

fn table_title(state: &ViewState) -> String {
    let counts = format!(
        "{}/{} records",
        state.visible_records().len(),
        state.all_records().len()
    );
    match state.sort_key() {
        Some(key) => format!(
            "{counts} | sort {} {}",
            key.label(),
            state.sort_direction().as_str()
        ),
        None => counts,
    }
}

fn filter_bar_text(state: &ViewState, view_data: &ViewData) -> String {
    let filters = state.filters();
    let search = match view_data.input {
        InputMode::Search { .. } => format!("{}_", filters.query),
        InputMode::Nav if filters.query.is_empty() => "-".to_owned(),
        InputMode::Nav => filters.query.clone(),
    };
    let mut parts = vec![
        format!("search: {search}"),
        format!(
            "category: {}",
            filters.category.as_deref().unwrap_or(ALL_LABEL)
        ),
        format!("theme: {}", filters.theme.as_deref().unwrap_or(ALL_LABEL)),
    ];
    if view_data.options.date_picker {
        parts.push(format!("date: {}", state.selected_date().unwrap_or("-")));
    }
    parts.join(" | ")
}

fn status_text(state: &ViewState, view_data: &ViewData) -> String {
    if view_data.help_visible || view_data.date_picker.visible {
        return String::new();
    }

    let (mode, hints) = match view_data.input {
        InputMode::Nav => (
            "NAV",
            "j/k/h/l g/G | / search | c/C category | t/T theme | s sort o order S unsort | x clear | ? help | q quit",
        ),
        InputMode::Search { .. } => ("SEARCH", "type to filter | enter keep | esc revert"),
    };
    let load = state.load_state().label();
    match &view_data.status_line {
        Some(status) => format!("{mode} | {load} | {status} | {hints}"),
        None => format!("{mode} | {load} | {hints}"),
    }
}

fn render_date_picker_overlay_text(date_picker: &DatePickerUiState) -> String {
    let selected = date_picker
        .selected
        .map(format_date)
        .unwrap_or_else(|| "-".to_owned());
    let original = date_picker
        .original
        .map(format_date)
        .unwrap_or_else(|| "(empty)".to_owned());

    [
        format!("orig: {original}"),
        format!("pick: {selected}"),
        String::new(),
        "h/l day | j/k week | H/L month | [/] year".to_owned(),
        "enter pick | backspace clear | esc cancel".to_owned(),
    ]
    .join("\n")
}

fn help_overlay_text(options: UiOptions) -> String {
    let mut lines = vec![
        "global: ctrl+c quit | q quit | ? help",
        "nav: j/k rows | h/l columns | g/G first/last | ctrl+d/u half page",
        "search: / type query | enter keep | esc revert",
        "filters: c/C category | t/T theme | x clear all",
        "sort: s or enter sort selected column (again flips) | o flip order | S clear",
        "data: r reload",
    ];
    if options.date_picker {
        lines.push("date: d open picker | h/l day j/k week H/L month [/] year | enter pick");
    }
    lines.join("\n")
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
