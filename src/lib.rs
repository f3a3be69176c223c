//! Clock Deck - analog clock, digital clock, stopwatch and countdown panels
//!
//! This crate provides the core types and logic for the clock deck, following
//! the Elm Architecture pattern. The winit runtime lives in the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod draw;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod panels;
pub mod tick;
pub mod timekeeping;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::AppModel;
