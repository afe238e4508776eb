//! External process execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{execute, execute_check, render_command, CommandOptions, CommandResult};
pub use platform::is_ci;
