//! Command parsing and item name resolution.

mod command;
mod resolver;

pub use command::{Command, normalize_direction, parse_command};
pub use resolver::{resolve_item, suggest_verb};
