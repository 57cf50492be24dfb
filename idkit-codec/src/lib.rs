//! Compact binary encoding for idkit identifier types.
//!
//! The format is MessagePack-compatible except for `GuidKey`, which is
//! written as 16 raw bytes:
//!
//! | Type | Present | Absent |
//! |---|---|---|
//! | `GuidKey` | 16 raw bytes | `0xc0` |
//! | `StringKey` | msgpack str | `0xc0` |
//! | `ShortKey` / `IntKey` / `LongKey` | `int16` / `int32` / `int64` | `0xc0` |
//! | `BoolValue` / `Bit` | msgpack bool | `0xc0` |
//! | `Key2`..`Key5` | fixed-length array of components | `0xc0` |
//!
//! Inside a composite key a present `GuidKey` component is framed as
//! `bin 8` of length 16 (`0xc4 0x10` + 16 bytes), so an absent component is
//! always unambiguous. A bare top-level `GuidKey` has no such framing: its
//! `0xc0` reads as nil only when fewer than 16 bytes follow.
//!
//! `None` always encodes as the nil marker. Decoding a nil marker where a
//! non-optional value is expected yields that type's default ("not set")
//! value instead of an error.
//!
//! ```
//! use idkit_codec::{from_slice, to_vec};
//! use idkit_types::IntKey;
//!
//! struct Order;
//!
//! let bytes = to_vec(&IntKey::<Order>::new(-3)).unwrap();
//! assert_eq!(bytes.len(), 5);
//! let key: IntKey<Order> = from_slice(&bytes).unwrap();
//! assert_eq!(key.value(), -3);
//! ```

mod error;
mod formatter;
mod options;
mod reader;
mod scalar;

pub use error::{DecodeError, Error, Result};
pub use formatter::Formatter;
pub use options::{DEFAULT_MAX_DEPTH, DecodeOptions};
pub use reader::{DepthGuard, NIL, Reader};
pub use scalar::GUID_LEN;

use std::io::Write;
use tracing::debug;

/// Encodes a value into a new buffer.
pub fn to_vec<T: Formatter>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    value.serialize(&mut buf)?;
    Ok(buf)
}

/// Encodes a value into a writer.
pub fn to_writer<W: Write, T: Formatter>(wr: &mut W, value: &T) -> Result<()> {
    value.serialize(wr)
}

/// Decodes a value with default options. The whole input must be consumed.
pub fn from_slice<T: Formatter>(bytes: &[u8]) -> Result<T> {
    from_slice_with(bytes, &DecodeOptions::default())
}

/// Decodes a value with explicit options. The whole input must be consumed.
pub fn from_slice_with<T: Formatter>(bytes: &[u8], options: &DecodeOptions) -> Result<T> {
    let mut rd = Reader::with_options(bytes, options);
    let result = T::deserialize(&mut rd).and_then(|value| match rd.remaining() {
        0 => Ok(value),
        n => Err(Error::TrailingBytes(n)),
    });
    if let Err(e) = &result {
        debug!(
            value_type = std::any::type_name::<T>(),
            offset = rd.position(),
            len = bytes.len(),
            error = %e,
            "decode failed"
        );
    }
    result
}
