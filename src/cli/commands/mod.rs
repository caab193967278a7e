//! CLI command implementations.

pub mod check;
pub mod flag;
pub mod show;
