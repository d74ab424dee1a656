//! The send contract for outgoing values.

use std::io::{self, Write};

/// The capability of a value to transmit itself to an output channel.
///
/// The dispatch layer invokes [`send`](Communicable::send) on a handler's
/// return value when it exposes this capability; anything else is discarded.
pub trait Communicable {
    /// Writes the value, in wire form, to the given channel.
    fn send(&self, channel: &mut dyn Write) -> io::Result<()>;
}
