//! Command implementations for the galley CLI
//!
//! Each command lives in its own module and exposes an `execute` function,
//! plus a clap `Args` struct where the command takes arguments.

pub mod config;
pub mod modes;
pub mod run;
pub mod version;
