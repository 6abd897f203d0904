//! Service tests module
//!
//! Preview service and file reading tests using wasm-bindgen-test.

pub mod config_tests;
pub mod file_reader_tests;
