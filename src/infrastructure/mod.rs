//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration
//! - Persistence: the in-memory character store and its JSON loader
//! - Console gateway: line-based chat gateway adapter
//! - Runtime: the interaction loop
//! - State: Shared application state

pub mod config;
pub mod console_gateway;
pub mod persistence;
pub mod runtime;
pub mod state;
