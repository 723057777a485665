//! # Application Layer
//!
//! The tool bodies behind every MCP operation, plus logging setup.

pub mod logging;
pub mod terraform;
pub mod tools;
