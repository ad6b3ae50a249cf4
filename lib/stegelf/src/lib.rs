//! Carry relocatable objects inside images and run the code they contain.
//!
//! An object is hidden one bit per pixel byte behind a 32-bit length:
//!
//! ```text
//! [length: u32, LSB first][length x u8, LSB first]
//! ```
//!
//! Extracting it back gives an [`ObjectFile`] whose `.text` has been copied
//! into executable memory. Functions are found by name with
//! [`ObjectFile::lookup_function`] and called through the unsafe
//! [`FunctionAddress::cast`]. Only self-contained position-independent code
//! works: relocations are never applied.

mod blob;
mod carrier;
mod error;
mod object;
mod resolve;

#[cfg(test)]
mod tests;

pub use blob::Blob;
pub use carrier::Carrier;
pub use error::{Error, Result};
pub use object::ObjectFile;
pub use resolve::FunctionAddress;

pub use elf::{ElfError, Symbol};
pub use loader::{DataRegion, ExecutableRegion, LoaderError, PageSize};
pub use stego::StegoError;
