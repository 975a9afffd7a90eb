//! # Interchange values
//!
//! An interchange value is one member of a closed, build-time-fixed set of
//! named variants, exchanged across an IPC or persistence boundary. The
//! [`Interchange`] trait is the whole mechanism: an implementor declares its
//! variant table and the stable wire name of each variant, and the provided
//! methods handle encoding into and decoding out of a transport container.
//!
//! Encoding is name-based on purpose. A token is the variant's declared name,
//! never its position, so reordering or extending the enumeration in a later
//! revision leaves every previously persisted or in-flight container
//! decodable. Decoding an out-of-set token fails with
//! [`Error::UnrecognizedVariant`] rather than substituting a default, since a
//! silent default would mask version skew between the two sides.

use crate::error::Error;
use crate::transport::{TokenSink, TokenSource};

/// A closed set of symbolic variants that can cross a process boundary.
///
/// Implementors are plain payload-free enums. `VARIANTS` must list every
/// variant and `wire_name` must be distinct per variant; together they make
/// encoding injective and `decode(encode(v)) == v` hold for all `v`.
pub trait Interchange: Copy + Eq + Sized + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The stable token written to the wire for this variant.
    fn wire_name(&self) -> &'static str;

    /// Resolve a wire token back to a variant.
    fn from_wire_name(token: &str) -> Result<Self, Error> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.wire_name() == token)
            .ok_or_else(|| Error::UnrecognizedVariant(token.to_string()))
    }

    /// Append this value's token to a transport container.
    ///
    /// Mutates only the sink; the value itself is never consumed.
    fn encode<S: TokenSink>(&self, sink: &mut S) -> Result<(), Error> {
        sink.append_token(self.wire_name())
    }

    /// Read one token from a transport container and resolve it.
    ///
    /// The only fallible-by-design operation: fails with
    /// [`Error::UnrecognizedVariant`] when the container was produced by a
    /// revision with a different variant set.
    fn decode<S: TokenSource>(source: &mut S) -> Result<Self, Error> {
        let token = source.read_token()?;
        let value = Self::from_wire_name(&token)?;
        tracing::trace!(?token, "decoded interchange value");
        Ok(value)
    }

    /// Decode `count` values in sequence, for bulk transfers that ship
    /// several values in one container.
    fn decode_many<S: TokenSource>(source: &mut S, count: usize) -> Result<Vec<Self>, Error> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(Self::decode(source)?);
        }
        Ok(values)
    }
}
