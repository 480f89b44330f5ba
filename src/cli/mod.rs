//! CLI support module

pub mod commands;
pub mod error;
