//! Operator console: coloured output and interactive prompts.

mod console_helper;
mod resolver;

pub use console_helper::ConsoleHelper;
pub use resolver::ConsoleResolver;
