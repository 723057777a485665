//! # Domain Layer
//!
//! Core definitions, types, and traits that define the business domain of the server.
//! Independent of transport and database drivers, serving as the contract for other layers.

pub mod config;
pub mod statements;
pub mod traits;
pub mod types;
