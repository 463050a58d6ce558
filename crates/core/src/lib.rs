//! Franemm Core - Shared types library.
//!
//! This crate provides the common types used by the Franemm storefront.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and slugs, plus
//!   the order-quantity clamp shared by the product screens

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
