//! Two-valued flag type with a `"1"`/`"0"` text form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bit, as stored in `BIT` columns.
///
/// Unlike `BoolValue` this carries no marker; use [`Bit::TRUE`] and
/// [`Bit::FALSE`] rather than building new instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bit(bool);

impl Bit {
    pub const TRUE: Bit = Bit(true);
    pub const FALSE: Bit = Bit(false);

    /// Returns one of the two shared constants.
    #[must_use]
    pub const fn value_of(value: bool) -> Self {
        if value { Self::TRUE } else { Self::FALSE }
    }

    #[must_use]
    pub const fn value(&self) -> bool {
        self.0
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Self::value_of(value)
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.0
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "1" } else { "0" })
    }
}
