//! ArbitraX Strategy Engine
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod bootstrap;
pub mod config;
pub mod env_file;
pub mod types;
