//! Configuration for the Gherkin lexer
//!
//! Fixed limits live in [`constants::compile_time`]; user preferences that may
//! come from the environment or a TOML file live in [`runtime`].

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    ConfigError, FileProcessorPreferences, LexicalPreferences, LoggingPreferences, RuntimeConfig,
};
