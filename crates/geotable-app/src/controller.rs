// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use std::fmt;

use crate::model::Record;
use crate::state::{ViewCommand, ViewEvent, ViewState};

/// Where the record set comes from. The HTTP client implements this; tests
/// and demo mode substitute in-memory sources.
pub trait RecordSource {
    fn fetch_records(&mut self) -> Result<Vec<Record>>;
}

impl RecordSource for Vec<Record> {
    fn fetch_records(&mut self) -> Result<Vec<Record>> {
        Ok(self.clone())
    }
}

pub trait ViewObserver {
    fn on_event(&mut self, state: &ViewState, event: &ViewEvent);
}

impl<F> ViewObserver for F
where
    F: FnMut(&ViewState, &ViewEvent),
{
    fn on_event(&mut self, state: &ViewState, event: &ViewEvent) {
        self(state, event);
    }
}

/// Owns the view state and fans every state change out to subscribers.
#[derive(Default)]
pub struct ViewController {
    state: ViewState,
    observers: Vec<Box<dyn ViewObserver>>,
}

impl fmt::Debug for ViewController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewController")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn subscribe(&mut self, observer: impl ViewObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Runs one fetch through `source`. A fetch failure is recorded in the
    /// state rather than returned; the error path is reserved for loads the
    /// state machine refuses to start.
    pub fn load(&mut self, source: &mut dyn RecordSource) -> Result<Vec<ViewEvent>> {
        let mut events = self.state.begin_load()?;
        self.notify(&events);

        let outcome = source.fetch_records();
        let settled = self.state.finish_load(outcome)?;
        self.notify(&settled);
        events.extend(settled);
        Ok(events)
    }

    pub fn dispatch(&mut self, command: ViewCommand) -> Vec<ViewEvent> {
        let events = self.state.dispatch(command);
        self.notify(&events);
        events
    }

    fn notify(&mut self, events: &[ViewEvent]) {
        for event in events {
            for observer in &mut self.observers {
                observer.on_event(&self.state, event);
            }
        }
    }
}
