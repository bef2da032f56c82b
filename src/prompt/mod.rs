//! Interactive operator prompts
//!
//! # Modules
//!
//! - [`keys`]: key event to prompt action mapping (vim-style bindings included)
//! - [`multi_select`]: selection state with min/max gating on confirmation
//! - [`terminal`]: crossterm-backed implementation of [`Prompt`]

pub mod keys;
pub mod multi_select;
pub mod terminal;

use thiserror::Error;

pub use multi_select::MultiSelect;
pub use terminal::TerminalPrompt;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Cancelled by user")]
    Cancelled,

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt returned {count} selection(s) where {expected} were required")]
    InvalidSelection { count: usize, expected: usize },
}

/// Questions the session asks the operator
pub trait Prompt {
    /// Asks for a line of free text
    fn ask(&mut self, message: &str) -> Result<String, PromptError>;

    /// Asks to pick one entry, returning its index
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, PromptError>;

    /// Drives `list` until the operator confirms an accepted selection,
    /// returning the selected indices in ascending order
    fn multi_select(&mut self, message: &str, list: MultiSelect) -> Result<Vec<usize>, PromptError>;

    /// Asks a yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;
}
