//! Settings come from a TOML file, `settings/dev.toml` or `settings/release.toml`
//! unless `--settings` names another one.

mod cli;
pub use clap::{Parser, Subcommand, ValueEnum};
pub use cli::*;

mod settings;
pub use settings::*;
