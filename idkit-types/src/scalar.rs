//! Marker-typed scalar identifier wrappers.
//!
//! Each wrapper holds exactly one primitive. The marker `M` is never stored;
//! it only makes `IntKey<Order>` and `IntKey<Customer>` distinct types. All
//! trait impls are written by hand so that `M` needs no bounds at all.

use crate::{KeyValue, Result, ValueOf};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// Impls shared by every wrapper regardless of primitive.
macro_rules! scalar_key {
    ($(#[$meta:meta])* $name:ident, $prim:ty) => {
        $(#[$meta])*
        pub struct $name<M> {
            value: $prim,
            marker: PhantomData<fn() -> M>,
        }

        impl<M> $name<M> {
            fn from_inner(value: $prim) -> Self {
                Self {
                    value,
                    marker: PhantomData,
                }
            }

            /// Alias for construction, for call sites that read better as a factory.
            #[must_use]
            pub fn value_of(value: $prim) -> Self {
                Self::from_inner(value)
            }

            /// Returns the marker's type name.
            #[must_use]
            pub fn marker_name() -> &'static str {
                std::any::type_name::<M>()
            }
        }

        impl<M> Default for $name<M> {
            fn default() -> Self {
                Self::from_inner(<$prim>::default())
            }
        }

        impl<M> PartialEq for $name<M> {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl<M> Eq for $name<M> {}

        impl<M> PartialOrd for $name<M> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<M> Ord for $name<M> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.value.cmp(&other.value)
            }
        }

        impl<M> Hash for $name<M> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.value.hash(state);
            }
        }

        impl<M> fmt::Debug for $name<M> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.value).finish()
            }
        }

        impl<M> fmt::Display for $name<M> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.value, f)
            }
        }

        impl<M> From<$prim> for $name<M> {
            fn from(value: $prim) -> Self {
                Self::from_inner(value)
            }
        }

        impl<M> From<$name<M>> for $prim {
            fn from(key: $name<M>) -> Self {
                key.value
            }
        }

        impl<M> ValueOf<$prim> for $name<M> {
            fn value_of(value: $prim) -> Self {
                Self::from_inner(value)
            }
        }

        impl<M> KeyValue for $name<M> {
            type Value = $prim;

            fn value_ref(&self) -> &$prim {
                &self.value
            }

            fn is_valid(&self) -> bool {
                $name::<M>::is_valid(self)
            }
        }

        impl<M> Serialize for $name<M> {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                self.value.serialize(serializer)
            }
        }

        impl<'de, M> Deserialize<'de> for $name<M> {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                <$prim>::deserialize(deserializer).map(Self::from_inner)
            }
        }
    };
}

/// `Clone` and `Copy` for wrappers over `Copy` primitives.
macro_rules! impl_copy {
    ($($name:ident),* $(,)?) => {
        $(
            impl<M> Clone for $name<M> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<M> Copy for $name<M> {}
        )*
    };
}

/// Inherent API of the signed integer wrappers.
macro_rules! integer_key {
    ($name:ident, $prim:ty, $to:ident) => {
        impl<M> $name<M> {
            /// Wraps a raw value. Zero and negative values are representable but not valid.
            #[must_use]
            pub const fn new(value: $prim) -> Self {
                Self {
                    value,
                    marker: PhantomData,
                }
            }

            /// The "not set" sentinel (zero).
            #[must_use]
            pub const fn not_set() -> Self {
                Self::new(0)
            }

            /// Returns the raw value.
            #[must_use]
            pub const fn value(&self) -> $prim {
                self.value
            }

            /// Only strictly positive values identify something.
            #[must_use]
            pub const fn is_valid(&self) -> bool {
                self.value > 0
            }

            /// Parses a base-10, optionally signed integer.
            pub fn parse(text: &str) -> Result<Self> {
                Ok(Self::new(text.parse::<$prim>()?))
            }

            /// Lifts an optional key to an optional raw value.
            #[must_use]
            pub fn $to(key: Option<&Self>) -> Option<$prim> {
                key.map(Self::value)
            }
        }

        impl<M> FromStr for $name<M> {
            type Err = crate::Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }
    };
}

scalar_key!(
    /// Identifier backed by a UUID. The nil UUID is the "not set" value.
    GuidKey,
    Uuid
);

scalar_key!(
    /// Identifier backed by a string. The empty string is the "not set" value.
    StringKey,
    String
);

scalar_key!(
    /// Identifier backed by an `i16`.
    ShortKey,
    i16
);

scalar_key!(
    /// Identifier backed by an `i32`.
    IntKey,
    i32
);

scalar_key!(
    /// Identifier backed by an `i64`.
    LongKey,
    i64
);

scalar_key!(
    /// Boolean value tagged with a marker. Always valid.
    BoolValue,
    bool
);

impl_copy!(GuidKey, ShortKey, IntKey, LongKey, BoolValue);

integer_key!(ShortKey, i16, to_short);
integer_key!(IntKey, i32, to_int);
integer_key!(LongKey, i64, to_long);

impl<M> GuidKey<M> {
    /// Wraps an existing UUID.
    #[must_use]
    pub const fn new(value: Uuid) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    /// Creates a key from a fresh time-ordered UUID (v7).
    #[must_use]
    pub fn generate() -> Self {
        Self::new(Uuid::now_v7())
    }

    /// The "not set" sentinel (nil UUID).
    #[must_use]
    pub const fn not_set() -> Self {
        Self::new(Uuid::nil())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn value(&self) -> Uuid {
        self.value
    }

    /// The nil UUID marks an absent key.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.value.is_nil()
    }

    /// Parses any textual form accepted by `Uuid::parse_str`.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self::new(Uuid::parse_str(text)?))
    }

    /// Lifts an optional key to an optional UUID.
    #[must_use]
    pub fn to_guid(key: Option<&Self>) -> Option<Uuid> {
        key.map(Self::value)
    }
}

impl<M> FromStr for GuidKey<M> {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<M> StringKey<M> {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::from_inner(value.into())
    }

    /// The "not set" sentinel (empty string).
    #[must_use]
    pub const fn not_set() -> Self {
        Self {
            value: String::new(),
            marker: PhantomData,
        }
    }

    /// Returns the underlying text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the key, returning the owned text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.value.is_empty()
    }
}

impl<M> Clone for StringKey<M> {
    fn clone(&self) -> Self {
        Self::from_inner(self.value.clone())
    }
}

impl<M> From<&str> for StringKey<M> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<M> BoolValue<M> {
    #[must_use]
    pub const fn new(value: bool) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn value(&self) -> bool {
        self.value
    }

    /// Booleans have no "not set" state, so every value is valid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        true
    }

    /// Lifts an optional value to an optional `bool`.
    #[must_use]
    pub fn to_bool(value: Option<&Self>) -> Option<bool> {
        value.map(Self::value)
    }
}
