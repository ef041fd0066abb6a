//! Application layer - Use cases on top of the domain
//!
//! This layer contains:
//! - DTOs: the on-disk character data shape
//! - Ports: the chat gateway interface
//! - Services: command handlers and the shutdown signal

pub mod dto;
pub mod ports;
pub mod services;
