//! CLI command handlers

pub mod convert;
pub mod validate;
