//! # LLM Module
//!
//! Client for the local Ollama server used by the security review tool.

pub mod client;

pub use client::OllamaClient;
