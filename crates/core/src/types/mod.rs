//! Core types for the Franemm storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod quantity;
pub mod slug;

pub use id::*;
pub use price::{Price, PriceError};
pub use quantity::{MAX_ORDER_QUANTITY, clamp_order_quantity, max_order_quantity};
pub use slug::{Slug, SlugError};
