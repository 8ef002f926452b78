//! Storage Layer
//!
//! Handles settings persistence as a JSON file.

pub mod config;

pub use config::*;
