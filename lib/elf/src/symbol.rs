pub(crate) const SYMBOL_SIZE: usize = 0x18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolType {
    SttNotype = 0,
    SttObject = 1,
    SttFunc = 2,
    SttSection = 3,
    SttFile = 4,
    SttCommon = 5,
    SttTls = 6,
    Unknown,
}

impl From<u8> for SymbolType {
    fn from(value: u8) -> Self {
        match value & 0xf {
            0 => SymbolType::SttNotype,
            1 => SymbolType::SttObject,
            2 => SymbolType::SttFunc,
            3 => SymbolType::SttSection,
            4 => SymbolType::SttFile,
            5 => SymbolType::SttCommon,
            6 => SymbolType::SttTls,
            _ => SymbolType::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolBinding {
    StbLocal = 0,
    StbGlobal = 1,
    StbWeak = 2,
    Unknown,
}

impl From<u8> for SymbolBinding {
    fn from(value: u8) -> Self {
        match value >> 4 {
            0 => SymbolBinding::StbLocal,
            1 => SymbolBinding::StbGlobal,
            2 => SymbolBinding::StbWeak,
            _ => SymbolBinding::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub struct Symbol {
    pub(crate) st_name: u32,
    pub(crate) st_info: u8,
    pub(crate) st_other: u8,
    pub(crate) st_shndx: u16,
    pub(crate) st_value: u64,
    pub(crate) st_size: u64,
}

impl Symbol {
    /// Offset of this symbol's name in the string table.
    pub fn name_offset(&self) -> u32 {
        self.st_name
    }

    pub fn symbol_type(&self) -> SymbolType {
        SymbolType::from(self.st_info)
    }

    pub fn binding(&self) -> SymbolBinding {
        SymbolBinding::from(self.st_info)
    }

    pub fn section_index(&self) -> u16 {
        self.st_shndx
    }

    /// Offset of the symbol within its owning section.
    pub fn value(&self) -> u64 {
        self.st_value
    }

    pub fn size(&self) -> u64 {
        self.st_size
    }

    pub fn is_function(&self) -> bool {
        self.symbol_type() == SymbolType::SttFunc
    }
}
