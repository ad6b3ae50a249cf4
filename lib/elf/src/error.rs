use thiserror::Error;

use crate::file::{ObjectFileType, TargetMachineIsa};
use crate::util::{BitWidth, Endianness};

#[derive(Debug, Error)]
pub enum ElfError {
    /// A read ran past the end of the object.
    #[error("object is truncated: {needed} bytes needed at offset {offset:#x}")]
    Truncated { offset: u64, needed: usize },
    #[error("missing ELF magic number")]
    BadMagic,
    #[error("unsupported ELF class {0:?}, expected 64-bit")]
    UnsupportedClass(BitWidth),
    #[error("object is {0:?} endian, host is {1:?} endian")]
    EndiannessMismatch(Endianness, Endianness),
    #[error("object type {0:?} is not relocatable")]
    NotRelocatable(ObjectFileType),
    #[error("object targets {found:?}, host is {host:?}")]
    MachineMismatch {
        found: TargetMachineIsa,
        host: TargetMachineIsa,
    },
    #[error("unexpected {table} entry size {size}")]
    BadEntrySize { table: &'static str, size: u64 },
    #[error("section name table index {0} is out of range")]
    BadNameTableIndex(u16),
    /// A section header points outside the object.
    #[error("section at {offset:#x}+{size:#x} lies outside the {len} byte object")]
    SectionOutOfBounds { offset: u64, size: u64, len: usize },
    #[error("required section {0} is missing")]
    MissingSection(&'static str),
}

impl ElfError {
    pub fn is_missing_section(&self) -> bool {
        matches!(self, ElfError::MissingSection(_))
    }
}

pub type Result<T> = core::result::Result<T, ElfError>;
