//! Generator for libcli command tables and help text.
//!
//! Scans a project for `CLI_COMMAND(...)` declarations and renders the
//! `cmdTable.cpp` dispatch table and the `help.cpp` help constants consumed
//! by the libcli runtime.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod scan;
