//! # MCP Module
//!
//! Model Context Protocol server.
//! Includes the rmcp handler and the typed tool parameters.

pub mod server;
pub mod tools;

pub use server::McpServer;
