//! Parklot CLI - argument parsing, command dispatch and output rendering

pub mod cli;
pub mod commands;
pub mod output;
