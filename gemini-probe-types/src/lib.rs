//! Shared types for the Gemini model listing and prompt tools.

pub mod config;
pub mod content;
pub mod enums;
pub mod models;
pub mod response;
