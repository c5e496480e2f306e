//! Interactive front-end for the HR roster: configuration, prompting and the
//! menu loop. The `roster` binary wires these to stdin/stdout.

pub mod config;
pub mod prompt;
pub mod shell;

pub use config::{DisplayFormat, RosterConfig};
pub use prompt::Prompter;
pub use shell::{Shell, format_row};
