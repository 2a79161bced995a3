//! Lint rules for Stencil component classes.

pub mod stencil;
