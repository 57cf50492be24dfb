//! Core identifier types for idkit.
//!
//! This crate defines the value types shared by everything built on idkit:
//! - Marker-typed scalar wrappers (`GuidKey`, `StringKey`, `ShortKey`,
//!   `IntKey`, `LongKey`, `BoolValue`)
//! - The `Bit` flag type
//! - Fixed-arity composite keys (`Key2` through `Key5`)
//!
//! The marker parameter only exists at compile time. Two wrappers over the
//! same primitive but with different markers are different types:
//!
//! ```compile_fail
//! use idkit_types::IntKey;
//!
//! struct Order;
//! struct Customer;
//!
//! let order: IntKey<Order> = IntKey::new(7);
//! let customer: IntKey<Customer> = order;
//! ```
//!
//! ```compile_fail
//! use idkit_types::GuidKey;
//!
//! struct Order;
//! struct Customer;
//!
//! let order = GuidKey::<Order>::not_set();
//! let customer = GuidKey::<Customer>::not_set();
//! assert!(order == customer);
//! ```
//!
//! Wire encodings live in `idkit-codec`.

mod bit;
mod composite;
mod scalar;
mod traits;

pub use bit::Bit;
pub use composite::{Key2, Key3, Key4, Key5};
pub use scalar::{BoolValue, GuidKey, IntKey, LongKey, ShortKey, StringKey};
pub use traits::{KeyValue, ValueOf, nullable_eq};

use std::num::ParseIntError;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when parsing identifier text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),
}

/// Name used by callers that think of this as the parse failure type.
pub type ParseError = Error;
