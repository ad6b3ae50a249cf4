//! Least-significant-bit steganography over plain byte buffers.
//!
//! Every carrier byte holds exactly one payload bit in its lowest bit; the
//! other seven bits are left alone. Values are laid out least significant
//! bit first.

mod codec;
mod error;
mod value;


pub use codec::{capacity_bits, BitCursor, LENGTH_PREFIX_BITS};
pub use error::{Result, StegoError};
pub use value::LsbValue;
