//! Structural parsing of 64-bit ELF relocatable objects.
//!
//! Only the pieces needed to find code and name it are decoded: the file
//! header, the section table with its name pool, and the symbol table with
//! its string pool. Relocations are never read.

mod elf;
mod error;
mod file;
mod reader;
mod section;
mod strings;
mod symbol;
mod util;


pub use crate::elf::{Elf, DATA, RODATA, STRING_TABLE, SYMBOL_TABLE, TEXT};
pub use error::{ElfError, Result};
pub use file::{FileHeadIdentity, FileHeader, ObjectFileType, TargetMachineIsa};
pub use section::{SectionAttributes, SectionHeader, SectionHeaderType};
pub use symbol::{Symbol, SymbolBinding, SymbolType};
pub use util::{BitWidth, Endianness};
