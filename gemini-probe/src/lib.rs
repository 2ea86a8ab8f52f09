//! Core client crate for listing Gemini models and sending test prompts.

pub mod cli;
pub mod client;
pub mod error;
pub mod models;
pub mod probe;

#[cfg(test)]
mod test_support;

pub use gemini_probe_types as types;

pub use client::{Client, ClientBuilder, ClientConfig, HttpOptions};
pub use error::{Error, Result};
