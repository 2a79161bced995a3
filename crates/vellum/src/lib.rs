//! # vellum
//!
//! Vellum - Member order linter for Stencil components.
//!
//! ## Name Origin
//!
//! **Vellum** is the fine parchment scribes prepared before writing, ruled
//! so that every line lands where it belongs. This crate is the gateway to
//! the Vellum crates and the home of the `vellum` command-line tool.
//!
//! ## Crates
//!
//! - [`carton`] - shared utilities (line index, hash maps, small strings)
//! - [`patina`] - the linter and the `stencil/component-member-order` rule

pub use vellum_carton as carton;
pub use vellum_patina as patina;
