//! Formatters for the scalar identifier wrappers and `Bit`.
//!
//! Integers always use the fixed-width `int16`/`int32`/`int64` forms. The
//! compact encoding most MessagePack writers pick by default changes width
//! with magnitude and switches to unsigned markers for positive values; the
//! fixed forms keep every key of a type the same size and carry the sign.

use crate::{Error, Formatter, Reader, Result};
use idkit_types::{Bit, BoolValue, GuidKey, IntKey, LongKey, ShortKey, StringKey};
use std::io::Write;
use tracing::trace;
use uuid::Uuid;

/// Encoded size of a present `GuidKey`.
pub const GUID_LEN: usize = 16;

/// Consumes a nil marker standing in for a non-optional value.
fn take_nil(rd: &mut Reader<'_>, type_name: &'static str) -> bool {
    let nil = rd.try_read_nil();
    if nil {
        trace!(value_type = type_name, offset = rd.position() - 1, "nil decoded as default");
    }
    nil
}

impl<M> Formatter for GuidKey<M> {
    /// Raw 16 bytes, no marker and no length.
    fn serialize<W: Write>(&self, wr: &mut W) -> Result<()> {
        wr.write_all(self.value().as_bytes())?;
        Ok(())
    }

    fn deserialize(rd: &mut Reader<'_>) -> Result<Self> {
        if Self::is_nil(rd) && take_nil(rd, "GuidKey") {
            return Ok(Self::not_set());
        }
        let mut rd = rd.enter()?;
        let bytes = rd.read_array::<GUID_LEN>()?;
        Ok(Self::new(Uuid::from_bytes(bytes)))
    }

    /// A raw UUID may itself start with `0xc0`, so the marker only means
    /// nil when there isn't room for a whole UUID.
    fn is_nil(rd: &Reader<'_>) -> bool {
        rd.is_nil() && rd.remaining() < GUID_LEN
    }

    /// Inside a composite key the UUID is framed as `bin 8` of length 16, so
    /// a nil component is never mistaken for the first byte of a UUID.
    fn serialize_element<W: Write>(&self, wr: &mut W) -> Result<()> {
        rmp::encode::write_bin_len(wr, GUID_LEN as u32)?;
        self.serialize(wr)
    }

    fn deserialize_element(rd: &mut Reader<'_>) -> Result<Self> {
        if take_nil(rd, "GuidKey") {
            return Ok(Self::not_set());
        }
        let mut rd = rd.enter()?;
        let len = rd.decode_with("bin", 2, |buf| rmp::decode::read_bin_len(buf))?;
        if len as usize != GUID_LEN {
            return Err(Error::LengthMismatch {
                expected: GUID_LEN as u32,
                found: len,
            });
        }
        let bytes = rd.read_array::<GUID_LEN>()?;
        Ok(Self::new(Uuid::from_bytes(bytes)))
    }
}

impl<M> Formatter for StringKey<M> {
    fn serialize<W: Write>(&self, wr: &mut W) -> Result<()> {
        rmp::encode::write_str(wr, self.value())?;
        Ok(())
    }

    fn deserialize(rd: &mut Reader<'_>) -> Result<Self> {
        if take_nil(rd, "StringKey") {
            return Ok(Self::not_set());
        }
        let mut rd = rd.enter()?;
        let len = rd.decode_with("str", 1, |buf| rmp::decode::read_str_len(buf))?;
        let bytes = rd.read_bytes(len as usize)?;
        Ok(Self::new(std::str::from_utf8(bytes)?))
    }
}

macro_rules! fixed_int_formatter {
    ($name:ident, $write:path, $read:path, $wire:literal, $width:literal) => {
        impl<M> Formatter for $name<M> {
            fn serialize<W: Write>(&self, wr: &mut W) -> Result<()> {
                $write(wr, self.value())?;
                Ok(())
            }

            fn deserialize(rd: &mut Reader<'_>) -> Result<Self> {
                if take_nil(rd, stringify!($name)) {
                    return Ok(Self::not_set());
                }
                let mut rd = rd.enter()?;
                let value = rd.decode_with($wire, 1 + $width, |buf| $read(buf))?;
                Ok(Self::new(value))
            }
        }
    };
}

fixed_int_formatter!(ShortKey, rmp::encode::write_i16, rmp::decode::read_i16, "int16", 2);
fixed_int_formatter!(IntKey, rmp::encode::write_i32, rmp::decode::read_i32, "int32", 4);
fixed_int_formatter!(LongKey, rmp::encode::write_i64, rmp::decode::read_i64, "int64", 8);

impl<M> Formatter for BoolValue<M> {
    fn serialize<W: Write>(&self, wr: &mut W) -> Result<()> {
        rmp::encode::write_bool(wr, self.value())?;
        Ok(())
    }

    fn deserialize(rd: &mut Reader<'_>) -> Result<Self> {
        if take_nil(rd, "BoolValue") {
            return Ok(Self::default());
        }
        let mut rd = rd.enter()?;
        let value = rd.decode_with("bool", 1, |buf| rmp::decode::read_bool(buf))?;
        Ok(Self::new(value))
    }
}

impl Formatter for Bit {
    fn serialize<W: Write>(&self, wr: &mut W) -> Result<()> {
        rmp::encode::write_bool(wr, self.value())?;
        Ok(())
    }

    fn deserialize(rd: &mut Reader<'_>) -> Result<Self> {
        if take_nil(rd, "Bit") {
            return Ok(Bit::FALSE);
        }
        let mut rd = rd.enter()?;
        let value = rd.decode_with("bool", 1, |buf| rmp::decode::read_bool(buf))?;
        Ok(Bit::value_of(value))
    }
}
