//! Preview Board
//!
//! The rendered state of one selection: one entry per selected file, each
//! either waiting for its read, showing file content, or showing the
//! placeholder. Reads complete in any order and address their entry by id.

use crate::config::{PickerConfig, ReadFailurePolicy};
use crate::error::{ReadError, SelectionError};

/// Identifies one preview entry. Never reused, even across selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The image source of a preview entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSource {
    /// Read in flight; the image has no source yet.
    Pending,
    DataUrl(String),
    Placeholder(String),
    /// The read failed and the entry was left without an image.
    Blank,
}

impl PreviewSource {
    /// Value for the `src` attribute, if the image has one.
    pub fn src(&self) -> Option<&str> {
        match self {
            PreviewSource::DataUrl(url) | PreviewSource::Placeholder(url) => Some(url),
            PreviewSource::Pending | PreviewSource::Blank => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PreviewSource::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    pub id: EntryId,
    pub file_name: String,
    pub extension: String,
    pub source: PreviewSource,
}

/// How a file is previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Read the file and show its content.
    Image,
    Placeholder,
}

/// Last `.`-separated segment of a file name.
///
/// A name without a dot is its own extension (`readme` -> `readme`), and a
/// trailing dot yields an empty extension.
pub fn extension_of(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

pub fn classify(name: &str, config: &PickerConfig) -> PreviewKind {
    if config.is_image_extension(extension_of(name)) {
        PreviewKind::Image
    } else {
        PreviewKind::Placeholder
    }
}

/// A file the board is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    pub entry: EntryId,
    /// Position of the file in the selection.
    pub index: usize,
    pub extension: String,
}

/// Result of feeding a finished read back into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    Applied,
    /// The read failed; the entry now follows the configured failure policy.
    Failed,
    /// The entry belongs to a replaced selection.
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewBoard {
    entries: Vec<PreviewEntry>,
    next_id: u64,
    generation: u64,
}

impl PreviewBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PreviewEntry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&PreviewEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of selections handled so far, rejected ones included.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|e| e.source.is_pending()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the board with a new selection.
    ///
    /// The previous entries are dropped first, even when the selection is
    /// then rejected for being too large. Returns the reads to start, in
    /// selection order.
    pub fn begin_selection<S: AsRef<str>>(
        &mut self,
        names: &[S],
        config: &PickerConfig,
    ) -> Result<Vec<ReadRequest>, SelectionError> {
        self.entries.clear();
        self.generation += 1;

        if names.len() > config.max_files {
            return Err(SelectionError::TooManyFiles {
                max: config.max_files,
                selected: names.len(),
            });
        }

        let mut reads = Vec::new();
        for (index, name) in names.iter().enumerate() {
            let name = name.as_ref();
            let id = self.allocate_id();
            let extension = extension_of(name).to_string();

            let source = match classify(name, config) {
                PreviewKind::Image => {
                    reads.push(ReadRequest {
                        entry: id,
                        index,
                        extension: extension.clone(),
                    });
                    PreviewSource::Pending
                }
                PreviewKind::Placeholder => PreviewSource::Placeholder(config.placeholder_url.clone()),
            };

            self.entries.push(PreviewEntry {
                id,
                file_name: name.to_string(),
                extension,
                source,
            });
        }

        Ok(reads)
    }

    /// Store the result of a read on the entry it was started for.
    pub fn complete_read(
        &mut self,
        id: EntryId,
        result: Result<String, ReadError>,
        config: &PickerConfig,
    ) -> ReadOutcome {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return ReadOutcome::Stale;
        };

        match result {
            Ok(data_url) => {
                entry.source = PreviewSource::DataUrl(data_url);
                ReadOutcome::Applied
            }
            Err(_) => {
                entry.source = match config.read_failure {
                    ReadFailurePolicy::Placeholder => {
                        PreviewSource::Placeholder(config.placeholder_url.clone())
                    }
                    ReadFailurePolicy::LeaveBlank => PreviewSource::Blank,
                };
                ReadOutcome::Failed
            }
        }
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }
}
