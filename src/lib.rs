pub mod build;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod framework;
pub mod measure;
pub mod output;
pub mod ranking;

pub use error::{BenchError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
