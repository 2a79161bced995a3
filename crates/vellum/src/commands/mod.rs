//! Subcommands of the `vellum` binary.

pub mod lint;
pub mod schema;
