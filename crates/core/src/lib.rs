//! ShopLink Core - Shared types library.
//!
//! This crate provides common types used across all ShopLink components:
//! - `client` - Typed API client for the ShopLink backend
//! - `cli` - Command-line client for browsing, cart, and checkout
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and shared enums
//! - [`models`] - Backend-owned entity shapes as consumed over the wire

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
