use std::io;

use elf::ElfError;
use loader::LoaderError;
use stego::StegoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Opening, mapping or persisting a file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The payload is not a well-formed host relocatable object.
    #[error("malformed object: {0}")]
    Format(#[source] ElfError),
    /// The object lacks `.symtab` or `.strtab`.
    #[error("object has no {0} section")]
    MissingSection(&'static str),
    /// The image cannot hold the payload, or declares more than it holds.
    #[error(transparent)]
    Capacity(#[from] StegoError),
    /// Mapping or reprotecting a section's memory failed.
    #[error(transparent)]
    Allocation(#[from] LoaderError),
}

impl From<ElfError> for Error {
    fn from(error: ElfError) -> Self {
        match error {
            ElfError::MissingSection(name) => Error::MissingSection(name),
            error => Error::Format(error),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
