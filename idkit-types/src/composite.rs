//! Fixed-arity composite keys.
//!
//! A composite key bundles several comparable values into one map key.
//! Equality compares components left to right and stops at the first
//! difference. Hashing feeds the components into the hasher in declaration
//! order, so the result depends on field order: callers must build keys
//! with a consistent field order.
//!
//! `Eq`, `Hash` and `Ord` exist whenever every component provides them. A key
//! with a float component is still comparable with `==`, it just can't be
//! used in a `HashMap`.

macro_rules! composite_key {
    ($(#[$meta:meta])* $name:ident { $($field:ident: $ty:ident),+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name<$($ty),+> {
            $($field: $ty),+
        }

        impl<$($ty),+> $name<$($ty),+> {
            /// Builds the key; components are stored in argument order.
            #[must_use]
            pub const fn new($($field: $ty),+) -> Self {
                Self { $($field),+ }
            }

            $(
                #[must_use]
                pub const fn $field(&self) -> &$ty {
                    &self.$field
                }
            )+

            /// Splits the key back into its components.
            #[must_use]
            pub fn into_parts(self) -> ($($ty),+) {
                ($(self.$field),+)
            }
        }

        impl<$($ty),+> From<($($ty),+)> for $name<$($ty),+> {
            fn from(($($field),+): ($($ty),+)) -> Self {
                Self::new($($field),+)
            }
        }
    };
}

composite_key!(
    /// Two-component key.
    Key2 { key1: K1, key2: K2 }
);

composite_key!(
    /// Three-component key.
    Key3 { key1: K1, key2: K2, key3: K3 }
);

composite_key!(
    /// Four-component key.
    Key4 { key1: K1, key2: K2, key3: K3, key4: K4 }
);

composite_key!(
    /// Five-component key.
    Key5 { key1: K1, key2: K2, key3: K3, key4: K4, key5: K5 }
);
