use log::trace;

use crate::error::{ElfError, Result};
use crate::util::{BitWidth, Endianness};

const VALID_HEADER: [u8; 4] = [0x7f, 0x45, 0x4c, 0x46];

pub(crate) const FILE_HEADER_SIZE: usize = 0x40;

#[derive(Debug, Clone, Copy)]
pub struct FileHeadIdentity(pub(crate) [u8; 0x10]);

impl FileHeadIdentity {
    pub fn is_valid_header(&self) -> bool {
        self.0[..4].eq(&VALID_HEADER)
    }

    pub fn bit_width(&self) -> BitWidth {
        match self.0[4] {
            1 => BitWidth::Bit32,
            2 => BitWidth::Bit64,
            _ => BitWidth::Unknown,
        }
    }

    pub fn endianness(&self) -> Endianness {
        match self.0[5] {
            1 => Endianness::Little,
            2 => Endianness::Big,
            _ => Endianness::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectFileType {
    EtNone = 0x00,
    EtRel = 0x01,
    EtExec = 0x02,
    EtDyn = 0x03,
    EtCore = 0x04,
    Unknown,
}

impl From<u16> for ObjectFileType {
    fn from(value: u16) -> Self {
        match value {
            0x00 => ObjectFileType::EtNone,
            0x01 => ObjectFileType::EtRel,
            0x02 => ObjectFileType::EtExec,
            0x03 => ObjectFileType::EtDyn,
            0x04 => ObjectFileType::EtCore,
            _ => ObjectFileType::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMachineIsa {
    X86_64 = 0x3E,
    Aarch64 = 0xB7,
    Unknown,
}

impl TargetMachineIsa {
    /// The instruction set this process is running on.
    pub const fn host() -> Self {
        if cfg!(target_arch = "x86_64") {
            TargetMachineIsa::X86_64
        } else if cfg!(target_arch = "aarch64") {
            TargetMachineIsa::Aarch64
        } else {
            TargetMachineIsa::Unknown
        }
    }
}

impl From<u16> for TargetMachineIsa {
    fn from(value: u16) -> Self {
        match value {
            0x3E => TargetMachineIsa::X86_64,
            0xB7 => TargetMachineIsa::Aarch64,
            _ => TargetMachineIsa::Unknown,
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct FileHeader {
    pub(crate) e_ident: FileHeadIdentity,
    pub(crate) e_type: ObjectFileType,
    pub(crate) e_machine: TargetMachineIsa,
    pub(crate) e_version: u32,
    pub(crate) e_entry: u64,
    pub(crate) e_phoff: u64,
    pub(crate) e_shoff: u64,
    pub(crate) e_flags: u32,
    pub(crate) e_ehsize: u16,
    pub(crate) e_phentsize: u16,
    pub(crate) e_phnum: u16,
    pub(crate) e_shentsize: u16,
    pub(crate) e_shnum: u16,
    pub(crate) e_shstrndx: u16,
}

impl FileHeader {
    /// Checks that the object can be loaded into this process: a 64-bit,
    /// host-endian, host-ISA relocatable file.
    pub fn validate(&self) -> Result<()> {
        if !self.e_ident.is_valid_header() {
            return Err(ElfError::BadMagic);
        }

        let bit_width = self.e_ident.bit_width();
        if bit_width != BitWidth::Bit64 {
            return Err(ElfError::UnsupportedClass(bit_width));
        }

        let endianness = self.e_ident.endianness();
        if endianness != Endianness::host() {
            return Err(ElfError::EndiannessMismatch(endianness, Endianness::host()));
        }

        if self.e_type != ObjectFileType::EtRel {
            return Err(ElfError::NotRelocatable(self.e_type));
        }

        let host = TargetMachineIsa::host();
        if self.e_machine != host || host == TargetMachineIsa::Unknown {
            return Err(ElfError::MachineMismatch {
                found: self.e_machine,
                host,
            });
        }

        if self.e_shentsize as usize != crate::section::SECTION_HEADER_SIZE {
            return Err(ElfError::BadEntrySize {
                table: "section header",
                size: self.e_shentsize as u64,
            });
        }

        trace!(
            "header: {} sections at {:#x}, names in section {}",
            self.e_shnum,
            self.e_shoff,
            self.e_shstrndx
        );

        Ok(())
    }

    pub fn machine(&self) -> TargetMachineIsa {
        self.e_machine
    }
}
