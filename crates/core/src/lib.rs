//! Nautic Core - Shared types library.
//!
//! This crate provides the domain types used across the Nautic Service
//! components:
//! - `storefront` - Public-facing catalog and cart site
//! - `integration-tests` - HTTP-level test harness
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no framework code. Everything here is deterministic and testable
//! without a running server.
//!
//! # Modules
//!
//! - [`types`] - Catalog items, the cart store, news articles, and price
//!   formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
