use std::sync::Arc;

use crate::bindings::{Navigator, Notifier};
use crate::config::PickerConfig;
use crate::error::{ReadError, SelectionError};
use crate::preview::{EntryId, PreviewBoard, ReadOutcome, ReadRequest};

/// The picker's behavior, with its browser dependencies passed in.
#[derive(Clone)]
pub struct PickerWidget {
    config: PickerConfig,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

// Implement Debug manually since the injected trait objects don't implement it
impl std::fmt::Debug for PickerWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerWidget")
            .field("config", &self.config)
            .finish()
    }
}

impl PickerWidget {
    pub fn new(
        config: PickerConfig,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            notifier,
            navigator,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Replace the board with a new selection.
    ///
    /// A rejected selection still leaves the board cleared. The caller shows
    /// the rejection with `notify_rejection` once it no longer holds the board.
    pub fn handle_selection<S: AsRef<str>>(
        &self,
        board: &mut PreviewBoard,
        names: &[S],
    ) -> Result<Vec<ReadRequest>, SelectionError> {
        match board.begin_selection(names, &self.config) {
            Ok(reads) => {
                log::debug!(
                    "Selection {}: {} file(s), {} to read",
                    board.generation(),
                    names.len(),
                    reads.len()
                );
                Ok(reads)
            }
            Err(e) => {
                log::debug!("Selection {} rejected: {:?}", board.generation(), e);
                Err(e)
            }
        }
    }

    pub fn notify_rejection(&self, error: &SelectionError) {
        self.notifier.alert(&error.to_string());
    }

    /// `handle_selection` followed by the alert, for callers that own the board directly.
    pub fn select<S: AsRef<str>>(&self, board: &mut PreviewBoard, names: &[S]) -> Vec<ReadRequest> {
        self.handle_selection(board, names).unwrap_or_else(|e| {
            self.notify_rejection(&e);
            Vec::new()
        })
    }

    pub fn complete_read(
        &self,
        board: &mut PreviewBoard,
        id: EntryId,
        result: Result<String, ReadError>,
    ) -> ReadOutcome {
        if let Err(e) = &result {
            log::warn!("Preview read for entry {} failed: {e}", id.value());
        }
        let outcome = board.complete_read(id, result, &self.config);
        if outcome == ReadOutcome::Stale {
            log::debug!("Discarding stale preview for entry {}", id.value());
        }
        outcome
    }

    pub fn continue_back(&self) {
        self.navigator.back();
    }
}
