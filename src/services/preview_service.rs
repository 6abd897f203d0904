use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::bindings::read_as_data_url;
use crate::config::PickerConfig;
use crate::error::ReadError;
use crate::preview::{EntryId, PreviewBoard, ReadOutcome, ReadRequest};
use crate::widget::PickerWidget;

/// Reactive wrapper around the picker: the board lives in a signal so the
/// preview grid re-renders as selections arrive and reads complete.
#[derive(Clone, Copy)]
pub struct PreviewState {
    pub board: RwSignal<PreviewBoard>,
    widget: StoredValue<PickerWidget>,
}

impl PreviewState {
    pub fn new(widget: PickerWidget) -> Self {
        Self {
            board: RwSignal::new(PreviewBoard::new()),
            widget: StoredValue::new(widget),
        }
    }

    pub fn config(&self) -> PickerConfig {
        self.widget.with_value(|w| w.config().clone())
    }

    /// Handle a change event: rebuild the board and start one read per image.
    pub fn select_files(&self, files: Vec<File>) {
        let names: Vec<String> = files.iter().map(|f| f.name()).collect();
        let reads = self.begin_selection(&names);

        for read in reads {
            let Some(file) = files.get(read.index).cloned() else {
                continue;
            };
            let state = *self;
            spawn_local(async move {
                let result = read_as_data_url(&file, &read.extension).await;
                state.finish_read(read.entry, result);
            });
        }
    }

    /// Synchronous part of a selection. Entries are on the board before any read starts.
    pub fn begin_selection(&self, names: &[String]) -> Vec<ReadRequest> {
        let widget = self.widget.get_value();
        let result = self
            .board
            .try_update(|board| widget.handle_selection(board, names));

        match result {
            Some(Ok(reads)) => reads,
            Some(Err(e)) => {
                // The board is released and already cleared when the alert blocks
                widget.notify_rejection(&e);
                Vec::new()
            }
            None => {
                log::debug!("Ignoring selection: board disposed");
                Vec::new()
            }
        }
    }

    pub fn finish_read(&self, id: EntryId, result: Result<String, ReadError>) -> ReadOutcome {
        let widget = self.widget.get_value();
        match self.board.try_update(|board| widget.complete_read(board, id, result)) {
            Some(outcome) => outcome,
            None => {
                // Picker was unmounted while the read was in flight
                log::debug!("Dropping read for entry {}: board disposed", id.value());
                ReadOutcome::Stale
            }
        }
    }

    pub fn go_back(&self) {
        self.widget.with_value(|w| w.continue_back());
    }
}

pub fn provide_preview_state(widget: PickerWidget) -> PreviewState {
    let state = PreviewState::new(widget);
    provide_context(state);
    state
}

pub fn use_preview_state() -> PreviewState {
    expect_context::<PreviewState>()
}
