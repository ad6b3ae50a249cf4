pub(crate) const SECTION_HEADER_SIZE: usize = 0x40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionHeaderType {
    ShtNull = 0x0,
    ShtProgbits = 0x1,
    ShtSymtab = 0x2,
    ShtStrtab = 0x3,
    ShtRela = 0x4,
    ShtHash = 0x5,
    ShtDynamic = 0x6,
    ShtNote = 0x7,
    ShtNobits = 0x8,
    ShtRel = 0x9,
    ShtShlib = 0x0A,
    ShtDynsym = 0x0B,
    ShtInitArray = 0x0E,
    ShtFiniArray = 0x0F,
    ShtPreinitArray = 0x10,
    ShtGroup = 0x11,
    ShtSymtabShndx = 0x12,
    Unknown,
}

impl From<u32> for SectionHeaderType {
    fn from(value: u32) -> Self {
        match value {
            0x0 => SectionHeaderType::ShtNull,
            0x1 => SectionHeaderType::ShtProgbits,
            0x2 => SectionHeaderType::ShtSymtab,
            0x3 => SectionHeaderType::ShtStrtab,
            0x4 => SectionHeaderType::ShtRela,
            0x5 => SectionHeaderType::ShtHash,
            0x6 => SectionHeaderType::ShtDynamic,
            0x7 => SectionHeaderType::ShtNote,
            0x8 => SectionHeaderType::ShtNobits,
            0x9 => SectionHeaderType::ShtRel,
            0x0A => SectionHeaderType::ShtShlib,
            0x0B => SectionHeaderType::ShtDynsym,
            0x0E => SectionHeaderType::ShtInitArray,
            0x0F => SectionHeaderType::ShtFiniArray,
            0x10 => SectionHeaderType::ShtPreinitArray,
            0x11 => SectionHeaderType::ShtGroup,
            0x12 => SectionHeaderType::ShtSymtabShndx,
            _ => SectionHeaderType::Unknown,
        }
    }
}

pub struct SectionAttributes;

impl SectionAttributes {
    pub const SHF_WRITE: u64 = 0x1;
    pub const SHF_ALLOC: u64 = 0x2;
    pub const SHF_EXECINSTR: u64 = 0x4;
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct SectionHeader {
    pub(crate) sh_name: u32,
    pub(crate) sh_type: SectionHeaderType,
    pub(crate) sh_flags: u64,
    pub(crate) sh_addr: u64,
    pub(crate) sh_offset: u64,
    pub(crate) sh_size: u64,
    pub(crate) sh_link: u32,
    pub(crate) sh_info: u32,
    pub(crate) sh_addralign: u64,
    pub(crate) sh_entsize: u64,
}

impl SectionHeader {
    /// Offset of this section's name in the section-name table.
    pub fn name_offset(&self) -> u32 {
        self.sh_name
    }

    pub fn header_type(&self) -> SectionHeaderType {
        self.sh_type
    }

    pub fn flags(&self) -> u64 {
        self.sh_flags
    }

    pub fn offset(&self) -> u64 {
        self.sh_offset
    }

    pub fn size(&self) -> u64 {
        self.sh_size
    }

    pub fn entry_size(&self) -> u64 {
        self.sh_entsize
    }

    pub fn is_executable(&self) -> bool {
        self.sh_flags & SectionAttributes::SHF_EXECINSTR != 0
    }

    /// Sections of type `SHT_NOBITS` occupy no space in the file.
    pub fn occupies_file(&self) -> bool {
        self.sh_type != SectionHeaderType::ShtNobits
    }
}
