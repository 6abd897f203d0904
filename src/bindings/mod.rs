pub mod browser;
pub mod file_reader;

// Re-export everything so callers can use `crate::bindings::*`
pub use browser::*;
pub use file_reader::*;
