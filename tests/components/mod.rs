//! Component tests module
