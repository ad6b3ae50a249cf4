use log::debug;
use memmap2::{Mmap, MmapMut, MmapOptions};

use crate::error::{LoaderError, Result};
use crate::page::PageSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Code,
    Data,
    ReadOnlyData,
}

/// A read+execute copy of a code section. Never writable once built.
#[derive(Debug)]
pub struct ExecutableRegion {
    map: Mmap,
    len: usize,
}

impl ExecutableRegion {
    pub fn as_ptr(&self) -> *const u8 {
        self.map.as_ptr()
    }

    /// Length of the copied section.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the underlying mapping, a whole number of pages.
    pub fn mapped_len(&self) -> usize {
        self.map.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.map[..self.len]
    }
}

/// A read+write copy of a data or read-only data section.
#[derive(Debug)]
pub struct DataRegion {
    map: MmapMut,
    len: usize,
    kind: RegionKind,
}

impl DataRegion {
    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.map.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.map.as_mut_ptr()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn mapped_len(&self) -> usize {
        self.map.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.map[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.map[..self.len]
    }
}

#[derive(Debug)]
pub enum Region {
    Executable(ExecutableRegion),
    Data(DataRegion),
}

/// Copies `bytes` into a fresh mapping; only [`RegionKind::Code`] is made
/// executable.
pub fn load(bytes: &[u8], page_size: PageSize, kind: RegionKind) -> Result<Region> {
    match kind {
        RegionKind::Code => load_executable(bytes, page_size).map(Region::Executable),
        RegionKind::Data | RegionKind::ReadOnlyData => {
            load_data(bytes, page_size, kind).map(Region::Data)
        }
    }
}

pub fn load_executable(bytes: &[u8], page_size: PageSize) -> Result<ExecutableRegion> {
    let map = map_copy(bytes, page_size)?;
    let mapped_len = map.len();
    let map = map.make_exec().map_err(|source| LoaderError::Protect {
        len: mapped_len,
        source,
    })?;

    debug!(
        "loaded {} bytes of code at {:p} ({} mapped)",
        bytes.len(),
        map.as_ptr(),
        mapped_len
    );

    Ok(ExecutableRegion {
        map,
        len: bytes.len(),
    })
}

pub fn load_data(bytes: &[u8], page_size: PageSize, kind: RegionKind) -> Result<DataRegion> {
    let map = map_copy(bytes, page_size)?;

    debug!(
        "loaded {} bytes of {:?} at {:p} ({} mapped)",
        bytes.len(),
        kind,
        map.as_ptr(),
        map.len()
    );

    Ok(DataRegion {
        map,
        len: bytes.len(),
        kind,
    })
}

/// Maps a private anonymous read+write region, rounded up to whole pages,
/// holding a copy of `bytes`.
fn map_copy(bytes: &[u8], page_size: PageSize) -> Result<MmapMut> {
    if bytes.is_empty() {
        return Err(LoaderError::Empty);
    }

    let len = page_size
        .align_up(bytes.len())
        .ok_or(LoaderError::TooLarge(bytes.len()))?;
    let mut map = MmapOptions::new()
        .len(len)
        .map_anon()
        .map_err(|source| LoaderError::Map { len, source })?;
    map[..bytes.len()].copy_from_slice(bytes);

    Ok(map)
}
