use core::fmt::{Debug, Formatter};
use core::ops::Range;

use log::{debug, trace};

use crate::error::{ElfError, Result};
use crate::file::{FileHeader, FILE_HEADER_SIZE};
use crate::reader::ElfReader;
use crate::section::{SectionHeader, SECTION_HEADER_SIZE};
use crate::strings::StringTable;
use crate::symbol::{Symbol, SYMBOL_SIZE};

pub const SYMBOL_TABLE: &str = ".symtab";
pub const STRING_TABLE: &str = ".strtab";
pub const TEXT: &str = ".text";
pub const DATA: &str = ".data";
pub const RODATA: &str = ".rodata";

/// A parsed relocatable object.
///
/// `Elf` owns the bytes it was parsed from and keeps only offsets into them,
/// so section contents and names are borrowed from the object on demand.
pub struct Elf<B> {
    data: B,
    header: FileHeader,
    sections: Vec<SectionHeader>,
    section_names: StringTable,
    symbols: Vec<Symbol>,
    strings: StringTable,
}

impl<B: AsRef<[u8]>> Elf<B> {
    /// Validates the header and decodes the section, section-name, symbol
    /// and string tables.
    ///
    /// Fails with [`ElfError::MissingSection`] when the object has no
    /// `.symtab` or `.strtab`, and with a format error for anything that
    /// is not a well-formed host relocatable object.
    pub fn parse(data: B) -> Result<Self> {
        let bytes = data.as_ref();
        if bytes.len() < FILE_HEADER_SIZE {
            return Err(ElfError::Truncated {
                offset: 0,
                needed: FILE_HEADER_SIZE,
            });
        }

        let mut reader = ElfReader::new(bytes);
        let header = reader.read_file_header()?;
        header.validate()?;

        let sections = read_sections(&mut reader, &header)?;
        let names_header = sections
            .get(header.e_shstrndx as usize)
            .ok_or(ElfError::BadNameTableIndex(header.e_shstrndx))?;
        let section_names = StringTable::new(section_range(bytes.len(), names_header)?);

        let symtab = find_section(&sections, &section_names, bytes, SYMBOL_TABLE)
            .ok_or(ElfError::MissingSection(SYMBOL_TABLE))?;
        let strtab = find_section(&sections, &section_names, bytes, STRING_TABLE)
            .ok_or(ElfError::MissingSection(STRING_TABLE))?;

        let symbols = read_symbols(&mut reader, bytes.len(), symtab)?;
        let strings = StringTable::new(section_range(bytes.len(), strtab)?);

        debug!(
            "parsed object: {} bytes, {} sections, {} symbols",
            bytes.len(),
            sections.len(),
            symbols.len()
        );

        Ok(Elf {
            data,
            header,
            sections,
            section_names,
            symbols,
            strings,
        })
    }

    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    pub fn len(&self) -> usize {
        self.data().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Section headers in file order.
    pub fn sections(&self) -> &[SectionHeader] {
        &self.sections
    }

    pub fn section_name(&self, section: &SectionHeader) -> Option<&[u8]> {
        self.section_names.get(self.data(), section.sh_name)
    }

    /// First section in table order named exactly `name` with a non-zero
    /// size. Empty sections are treated as absent.
    pub fn lookup_section(&self, name: &str) -> Option<&SectionHeader> {
        self.lookup_section_index(name)
            .map(|index| &self.sections[usize::from(index)])
    }

    /// Section table index of the section [`Elf::lookup_section`] returns,
    /// comparable with [`Symbol::section_index`].
    pub fn lookup_section_index(&self, name: &str) -> Option<u16> {
        find_section_index(&self.sections, &self.section_names, self.data(), name)
    }

    /// The file bytes backing `section`; empty for `SHT_NOBITS` sections.
    pub fn section_data(&self, section: &SectionHeader) -> Result<&[u8]> {
        let range = section_range(self.len(), section)?;
        Ok(&self.data()[range])
    }

    /// Symbols in file order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn symbol_name(&self, symbol: &Symbol) -> Option<&[u8]> {
        self.strings.get(self.data(), symbol.st_name)
    }

    /// Function symbols paired with their names, in file order.
    pub fn functions(&self) -> impl Iterator<Item = (&[u8], &Symbol)> + '_ {
        self.symbols
            .iter()
            .filter(|symbol| symbol.is_function())
            .filter_map(move |symbol| Some((self.symbol_name(symbol)?, symbol)))
    }

    /// The first function symbol named exactly `name`.
    ///
    /// The scan is linear in symbol table order, so when several functions
    /// share a name the earliest one wins.
    pub fn find_function(&self, name: &str) -> Option<&Symbol> {
        self.functions()
            .find(|(symbol_name, _)| *symbol_name == name.as_bytes())
            .map(|(_, symbol)| symbol)
    }
}

impl<B> Debug for Elf<B> {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        f.debug_struct("Elf")
            .field("header", &self.header)
            .field("sections", &self.sections.len())
            .field("symbols", &self.symbols.len())
            .finish()
    }
}

fn read_sections(reader: &mut ElfReader, header: &FileHeader) -> Result<Vec<SectionHeader>> {
    let mut result: Vec<SectionHeader> = Vec::with_capacity(header.e_shnum as usize);

    for i in 0..header.e_shnum as u64 {
        let seek_location = header
            .e_shoff
            .checked_add(i * SECTION_HEADER_SIZE as u64)
            .ok_or(ElfError::Truncated {
                offset: header.e_shoff,
                needed: SECTION_HEADER_SIZE,
            })?;
        let section = reader.read_section_header(seek_location)?;
        trace!("section {}: {:?}", i, section);
        result.push(section);
    }

    Ok(result)
}

fn read_symbols(reader: &mut ElfReader, len: usize, symtab: &SectionHeader) -> Result<Vec<Symbol>> {
    if symtab.sh_entsize as usize != SYMBOL_SIZE {
        return Err(ElfError::BadEntrySize {
            table: "symbol",
            size: symtab.sh_entsize,
        });
    }

    let range = section_range(len, symtab)?;
    let count = (range.end - range.start) / SYMBOL_SIZE;
    let mut result: Vec<Symbol> = Vec::with_capacity(count);

    for i in 0..count {
        let symbol = reader.read_symbol((range.start + i * SYMBOL_SIZE) as u64)?;
        result.push(symbol);
    }

    Ok(result)
}

fn find_section<'s>(
    sections: &'s [SectionHeader],
    names: &StringTable,
    data: &[u8],
    name: &str,
) -> Option<&'s SectionHeader> {
    find_section_index(sections, names, data, name).map(|index| &sections[usize::from(index)])
}

fn find_section_index(
    sections: &[SectionHeader],
    names: &StringTable,
    data: &[u8],
    name: &str,
) -> Option<u16> {
    let index = sections.iter().position(|section| {
        section.sh_size != 0 && names.get(data, section.sh_name) == Some(name.as_bytes())
    })?;
    u16::try_from(index).ok()
}

fn section_range(len: usize, section: &SectionHeader) -> Result<Range<usize>> {
    if !section.occupies_file() {
        return Ok(0..0);
    }

    let end = section
        .sh_offset
        .checked_add(section.sh_size)
        .filter(|&end| end <= len as u64)
        .ok_or(ElfError::SectionOutOfBounds {
            offset: section.sh_offset,
            size: section.sh_size,
            len,
        })?;

    Ok(section.sh_offset as usize..end as usize)
}
