//! Command implementations for whittle.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command lives in its own submodule.

mod generate;
mod preview;
mod status;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Preview(args) => preview::cmd_preview(args),
        Command::Status(args) => status::cmd_status(args),
    }
}
