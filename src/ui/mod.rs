pub mod app;
pub mod components;
pub mod handler;
pub mod input;
pub mod layout;
pub mod message;
pub mod prompt;
pub mod tui;
