pub mod file_picker;
pub mod preview_grid;

pub use file_picker::FilePicker;
pub use preview_grid::{PreviewGrid, PreviewTile};
