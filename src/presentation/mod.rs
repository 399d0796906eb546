//! Presentation Layer
//!
//! - `cli` - argument parsing (clap)
//! - `console` - prompt/response seam over the terminal
//! - `context` - color and interactivity decisions
//! - `views` - pure text rendering of stubs and totals

pub mod cli;
pub mod console;
pub mod context;
pub mod text;
pub mod views;

pub use cli::{Cli, ColorWhen, Commands};
pub use console::{console_for, Console, LineConsole, TerminalConsole};
pub use context::UiContext;
