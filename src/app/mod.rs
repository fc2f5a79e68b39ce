// Application layer: maps CLI commands onto catalog operations.

pub mod commands;
