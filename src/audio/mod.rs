pub mod commands;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod progress;
pub mod state;
pub mod system;
#[cfg(test)]
pub(crate) mod testing;
pub mod traits;
pub mod util;
