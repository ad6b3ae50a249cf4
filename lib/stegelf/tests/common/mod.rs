#![allow(dead_code)]

use std::path::PathBuf;

use image::{Rgb, RgbImage};

pub const SHT_PROGBITS: u32 = 1;
pub const SHT_SYMTAB: u32 = 2;
pub const SHT_STRTAB: u32 = 3;
pub const SHF_WRITE: u64 = 0x1;
pub const SHF_ALLOC: u64 = 0x2;
pub const SHF_EXECINSTR: u64 = 0x4;

pub const STT_OBJECT: u8 = 1;
pub const STT_FUNC: u8 = 2;
pub const STB_GLOBAL: u8 = 1 << 4;

const EM_HOST: u16 = if cfg!(target_arch = "aarch64") { 0xB7 } else { 0x3E };

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(name)
}

/// An image with noisy pixel bytes so the low bits are not all zero before
/// anything is embedded.
pub fn noisy_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let seed = x.wrapping_mul(31).wrapping_add(y.wrapping_mul(17));
        Rgb([seed as u8, (seed >> 3) as u8 ^ 0x55, (x ^ y) as u8])
    })
}

struct Section {
    name: String,
    kind: u32,
    flags: u64,
    bytes: Vec<u8>,
    entry_size: u64,
}

struct SymbolEntry {
    name: String,
    info: u8,
    section: u16,
    value: u64,
    size: u64,
}

/// Synthesizes little-endian ELF64 relocatable objects for the host machine.
///
/// Sections are laid out after the file header in the order they are
/// added, followed by `.symtab`, `.strtab`, `.shstrtab` and the section
/// header table.
#[derive(Default)]
pub struct ObjectBuilder {
    sections: Vec<Section>,
    symbols: Vec<SymbolEntry>,
    without_symtab: bool,
    without_strtab: bool,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, name: &str, kind: u32, flags: u64, bytes: &[u8]) -> Self {
        self.sections.push(Section {
            name: name.to_string(),
            kind,
            flags,
            bytes: bytes.to_vec(),
            entry_size: 0,
        });
        self
    }

    pub fn text(self, code: &[u8]) -> Self {
        self.section(".text", SHT_PROGBITS, SHF_ALLOC | SHF_EXECINSTR, code)
    }

    pub fn data(self, bytes: &[u8]) -> Self {
        self.section(".data", SHT_PROGBITS, SHF_ALLOC | SHF_WRITE, bytes)
    }

    pub fn function(self, name: &str, value: u64, size: u64) -> Self {
        self.function_in(name, 1, value, size)
    }

    /// A function owned by the section at `section` in the header table,
    /// counting the null section as 0.
    pub fn function_in(mut self, name: &str, section: u16, value: u64, size: u64) -> Self {
        self.symbols.push(SymbolEntry {
            name: name.to_string(),
            info: STB_GLOBAL | STT_FUNC,
            section,
            value,
            size,
        });
        self
    }

    pub fn object(mut self, name: &str, value: u64, size: u64) -> Self {
        self.symbols.push(SymbolEntry {
            name: name.to_string(),
            info: STB_GLOBAL | STT_OBJECT,
            section: 2,
            value,
            size,
        });
        self
    }

    pub fn without_symtab(mut self) -> Self {
        self.without_symtab = true;
        self
    }

    pub fn without_strtab(mut self) -> Self {
        self.without_strtab = true;
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        let mut strtab = vec![0u8];
        let mut symtab = vec![0u8; 24];
        for symbol in &self.symbols {
            let name = strtab.len() as u32;
            strtab.extend_from_slice(symbol.name.as_bytes());
            strtab.push(0);

            symtab.extend_from_slice(&name.to_le_bytes());
            symtab.push(symbol.info);
            symtab.push(0);
            symtab.extend_from_slice(&symbol.section.to_le_bytes());
            symtab.extend_from_slice(&symbol.value.to_le_bytes());
            symtab.extend_from_slice(&symbol.size.to_le_bytes());
        }

        if !self.without_symtab {
            self.sections.push(Section {
                name: ".symtab".to_string(),
                kind: SHT_SYMTAB,
                flags: 0,
                bytes: symtab,
                entry_size: 24,
            });
        }
        if !self.without_strtab {
            self.sections.push(Section {
                name: ".strtab".to_string(),
                kind: SHT_STRTAB,
                flags: 0,
                bytes: strtab,
                entry_size: 0,
            });
        }

        let mut shstrtab = vec![0u8];
        let mut name_offsets = Vec::new();
        for section in &self.sections {
            name_offsets.push(shstrtab.len() as u32);
            shstrtab.extend_from_slice(section.name.as_bytes());
            shstrtab.push(0);
        }
        name_offsets.push(shstrtab.len() as u32);
        shstrtab.extend_from_slice(b".shstrtab\0");
        self.sections.push(Section {
            name: ".shstrtab".to_string(),
            kind: SHT_STRTAB,
            flags: 0,
            bytes: shstrtab,
            entry_size: 0,
        });

        let mut out = vec![0u8; 64];
        let mut offsets = Vec::new();
        for section in &self.sections {
            while out.len() % 8 != 0 {
                out.push(0);
            }
            offsets.push(out.len() as u64);
            out.extend_from_slice(&section.bytes);
        }
        while out.len() % 8 != 0 {
            out.push(0);
        }

        let section_table = out.len() as u64;
        let section_count = self.sections.len() as u16 + 1;

        // Index 0 is the reserved null section.
        out.extend_from_slice(&[0u8; 64]);
        for (i, section) in self.sections.iter().enumerate() {
            out.extend_from_slice(&name_offsets[i].to_le_bytes());
            out.extend_from_slice(&section.kind.to_le_bytes());
            out.extend_from_slice(&section.flags.to_le_bytes());
            out.extend_from_slice(&0u64.to_le_bytes());
            out.extend_from_slice(&offsets[i].to_le_bytes());
            out.extend_from_slice(&(section.bytes.len() as u64).to_le_bytes());
            out.extend_from_slice(&0u32.to_le_bytes());
            out.extend_from_slice(&0u32.to_le_bytes());
            out.extend_from_slice(&1u64.to_le_bytes());
            out.extend_from_slice(&section.entry_size.to_le_bytes());
        }

        out[0..4].copy_from_slice(b"\x7fELF");
        out[4] = 2;
        out[5] = 1;
        out[6] = 1;
        out[16..18].copy_from_slice(&1u16.to_le_bytes());
        out[18..20].copy_from_slice(&EM_HOST.to_le_bytes());
        out[20..24].copy_from_slice(&1u32.to_le_bytes());
        out[40..48].copy_from_slice(&section_table.to_le_bytes());
        out[52..54].copy_from_slice(&64u16.to_le_bytes());
        out[58..60].copy_from_slice(&64u16.to_le_bytes());
        out[60..62].copy_from_slice(&section_count.to_le_bytes());
        out[62..64].copy_from_slice(&(section_count - 1).to_le_bytes());

        out
    }
}
