//! CLI command implementations for the `glet` binary.

pub mod commands;
