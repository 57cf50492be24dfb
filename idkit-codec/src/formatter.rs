//! The `Formatter` trait and its impls for optional values and composite keys.

use crate::{Error, Reader, Result};
use idkit_types::{Key2, Key3, Key4, Key5};
use std::io::Write;

/// Encode/decode pair for one concrete type.
///
/// Implementations are picked at compile time, one per type; there is no
/// runtime lookup.
pub trait Formatter: Sized {
    /// Writes the encoded value.
    fn serialize<W: Write>(&self, wr: &mut W) -> Result<()>;

    /// Reads one value. A nil marker decodes to the type's default rather
    /// than failing.
    fn deserialize(rd: &mut Reader<'_>) -> Result<Self>;

    /// True if the next value in `rd` stands for "no value".
    fn is_nil(rd: &Reader<'_>) -> bool {
        rd.is_nil()
    }

    /// Writes the value as one component of a composite key.
    ///
    /// Inside an array every component must be self-delimiting and must not
    /// begin with the nil marker unless it is nil. Only types whose bare
    /// form breaks that rule override this.
    fn serialize_element<W: Write>(&self, wr: &mut W) -> Result<()> {
        self.serialize(wr)
    }

    /// Reads a value written by [`Formatter::serialize_element`].
    fn deserialize_element(rd: &mut Reader<'_>) -> Result<Self> {
        Self::deserialize(rd)
    }
}

impl<T: Formatter> Formatter for Option<T> {
    fn serialize<W: Write>(&self, wr: &mut W) -> Result<()> {
        match self {
            Some(value) => value.serialize(wr),
            None => write_nil(wr),
        }
    }

    fn deserialize(rd: &mut Reader<'_>) -> Result<Self> {
        if T::is_nil(rd) {
            rd.try_read_nil();
            return Ok(None);
        }
        T::deserialize(rd).map(Some)
    }

    fn is_nil(rd: &Reader<'_>) -> bool {
        T::is_nil(rd)
    }

    fn serialize_element<W: Write>(&self, wr: &mut W) -> Result<()> {
        match self {
            Some(value) => value.serialize_element(wr),
            None => write_nil(wr),
        }
    }

    fn deserialize_element(rd: &mut Reader<'_>) -> Result<Self> {
        // Element forms never start with the nil marker, so no length check.
        if rd.try_read_nil() {
            return Ok(None);
        }
        T::deserialize_element(rd).map(Some)
    }
}

fn write_nil<W: Write>(wr: &mut W) -> Result<()> {
    rmp::encode::write_nil(wr)?;
    Ok(())
}

/// Composite keys encode as a fixed-length array of their components, each
/// in its element form.
macro_rules! composite_formatter {
    ($name:ident, $arity:literal, $($ty:ident => $field:ident),+) => {
        impl<$($ty: Formatter),+> Formatter for $name<$($ty),+> {
            fn serialize<W: Write>(&self, wr: &mut W) -> Result<()> {
                rmp::encode::write_array_len(wr, $arity)?;
                $(self.$field().serialize_element(wr)?;)+
                Ok(())
            }

            fn deserialize(rd: &mut Reader<'_>) -> Result<Self> {
                let mut rd = rd.enter()?;
                let found = rd.decode_with("array", 1, |buf| rmp::decode::read_array_len(buf))?;
                if found != $arity {
                    return Err(Error::ArityMismatch {
                        expected: $arity,
                        found,
                    });
                }
                $(let $field = <$ty>::deserialize_element(&mut rd)?;)+
                Ok($name::new($($field),+))
            }
        }
    };
}

composite_formatter!(Key2, 2, K1 => key1, K2 => key2);
composite_formatter!(Key3, 3, K1 => key1, K2 => key2, K3 => key3);
composite_formatter!(Key4, 4, K1 => key1, K2 => key2, K3 => key3, K4 => key4);
composite_formatter!(Key5, 5, K1 => key1, K2 => key2, K3 => key3, K4 => key4, K5 => key5);
