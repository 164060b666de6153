//! CLI subcommand implementations.

pub mod check;
pub mod login;
pub mod register;
pub mod verify;
