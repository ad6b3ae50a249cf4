use std::io::{Cursor, Read, Seek, SeekFrom};

use crate::error::{ElfError, Result};
use crate::file::{FileHeadIdentity, FileHeader, ObjectFileType, TargetMachineIsa};
use crate::section::{SectionHeader, SectionHeaderType};
use crate::symbol::Symbol;
use crate::util::{Endianness, FromBytes};

/// Decodes ELF structures field by field from an in-memory object.
pub(crate) struct ElfReader<'a> {
    file: Cursor<&'a [u8]>,
    endianness: Endianness,
}

impl<'a> ElfReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        ElfReader {
            file: Cursor::new(data),
            endianness: Endianness::Little,
        }
    }

    fn update_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    fn seek_to(&mut self, location: u64) -> Result<()> {
        self.file
            .seek(SeekFrom::Start(location))
            .map_err(|_| ElfError::Truncated { offset: location, needed: 0 })?;
        Ok(())
    }

    fn read_exact(&mut self, buffer: &mut [u8]) -> Result<()> {
        let offset = self.file.position();
        self.file
            .read_exact(buffer)
            .map_err(|_| ElfError::Truncated { offset, needed: buffer.len() })
    }

    pub(crate) fn read_endian<T: FromBytes<N>, const N: usize>(&mut self) -> Result<T> {
        let mut buffer = [0u8; N];
        self.read_exact(&mut buffer)?;
        match self.endianness {
            Endianness::Big => Ok(T::from_be_bytes(buffer)),
            Endianness::Little => Ok(T::from_le_bytes(buffer)),
            Endianness::Unknown => Ok(T::from_ne_bytes(buffer)),
        }
    }

    pub(crate) fn read_file_header(&mut self) -> Result<FileHeader> {
        self.seek_to(0)?;

        let mut identity = [0u8; 0x10];
        self.read_exact(&mut identity)?;
        let file_head_identity = FileHeadIdentity(identity);
        self.update_endianness(file_head_identity.endianness());

        Ok(FileHeader {
            e_ident: file_head_identity,
            e_type: ObjectFileType::from(self.read_endian::<u16, 2>()?),
            e_machine: TargetMachineIsa::from(self.read_endian::<u16, 2>()?),
            e_version: self.read_endian::<u32, 4>()?,
            e_entry: self.read_endian::<u64, 8>()?,
            e_phoff: self.read_endian::<u64, 8>()?,
            e_shoff: self.read_endian::<u64, 8>()?,
            e_flags: self.read_endian::<u32, 4>()?,
            e_ehsize: self.read_endian::<u16, 2>()?,
            e_phentsize: self.read_endian::<u16, 2>()?,
            e_phnum: self.read_endian::<u16, 2>()?,
            e_shentsize: self.read_endian::<u16, 2>()?,
            e_shnum: self.read_endian::<u16, 2>()?,
            e_shstrndx: self.read_endian::<u16, 2>()?,
        })
    }

    pub(crate) fn read_section_header(&mut self, location: u64) -> Result<SectionHeader> {
        self.seek_to(location)?;

        Ok(SectionHeader {
            sh_name: self.read_endian::<u32, 4>()?,
            sh_type: SectionHeaderType::from(self.read_endian::<u32, 4>()?),
            sh_flags: self.read_endian::<u64, 8>()?,
            sh_addr: self.read_endian::<u64, 8>()?,
            sh_offset: self.read_endian::<u64, 8>()?,
            sh_size: self.read_endian::<u64, 8>()?,
            sh_link: self.read_endian::<u32, 4>()?,
            sh_info: self.read_endian::<u32, 4>()?,
            sh_addralign: self.read_endian::<u64, 8>()?,
            sh_entsize: self.read_endian::<u64, 8>()?,
        })
    }

    pub(crate) fn read_symbol(&mut self, location: u64) -> Result<Symbol> {
        self.seek_to(location)?;

        Ok(Symbol {
            st_name: self.read_endian::<u32, 4>()?,
            st_info: self.read_endian::<u8, 1>()?,
            st_other: self.read_endian::<u8, 1>()?,
            st_shndx: self.read_endian::<u16, 2>()?,
            st_value: self.read_endian::<u64, 8>()?,
            st_size: self.read_endian::<u64, 8>()?,
        })
    }
}
