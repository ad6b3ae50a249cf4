use std::fs::File;
use std::path::Path;

use elf::{Elf, Symbol, DATA, RODATA, TEXT};
use loader::{load_data, load_executable, DataRegion, ExecutableRegion, PageSize, RegionKind};
use log::{debug, info, trace, warn};
use memmap2::Mmap;
use stego::BitCursor;

use crate::blob::Blob;
use crate::carrier::Carrier;
use crate::error::Result;
use crate::resolve::{self, FunctionAddress};

/// A relocatable object whose code has been copied into executable memory.
///
/// Construction parses the object and loads `.text`, `.data` and `.rodata`
/// in one go; an `ObjectFile` that exists is always ready for lookups. The
/// mappings are released when it is dropped.
#[derive(Debug)]
pub struct ObjectFile {
    elf: Elf<Blob>,
    page_size: PageSize,
    text: Option<ExecutableRegion>,
    data: Option<DataRegion>,
    rodata: Option<DataRegion>,
}

impl ObjectFile {
    /// Maps the object file at `path` read-only and loads it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        let blob = if len == 0 {
            Blob::Owned(Vec::new())
        } else {
            // SAFETY: the mapping is private and read-only; the object must not
            // be truncated by another process while the handle is alive.
            Blob::Mapped(unsafe { Mmap::map(&file)? })
        };

        info!("mapped {} ({} bytes)", path.display(), len);
        Self::from_blob(blob)
    }

    /// Extracts a length-prefixed object from the pixel bytes of `image` and
    /// loads it.
    pub fn from_image<C: Carrier + ?Sized>(image: &C) -> Result<Self> {
        let payload = BitCursor::new(image.pixel_bytes()).read_payload()?;
        info!("extracted {} byte object from image", payload.len());
        Self::from_blob(Blob::Owned(payload))
    }

    /// Loads an object already held in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_blob(Blob::Owned(bytes))
    }

    fn from_blob(blob: Blob) -> Result<Self> {
        let page_size = PageSize::host()?;
        let elf = Elf::parse(blob)?;

        let text = load_section(&elf, TEXT, |bytes| load_executable(bytes, page_size))?;
        let data = load_section(&elf, DATA, |bytes| {
            load_data(bytes, page_size, RegionKind::Data)
        })?;
        let rodata = load_section(&elf, RODATA, |bytes| {
            load_data(bytes, page_size, RegionKind::ReadOnlyData)
        })?;

        Ok(ObjectFile {
            elf,
            page_size,
            text,
            data,
            rodata,
        })
    }

    /// Hides this object in the pixel bytes of `image` and saves the result
    /// to `output`.
    ///
    /// Capacity is checked before the first byte is touched; if the image is
    /// too small it is left unmodified and nothing is written to `output`.
    /// If saving fails the pixel bytes are restored before the error is
    /// returned.
    pub fn embed_into<C, P>(&self, image: &mut C, output: P) -> Result<()>
    where
        C: Carrier + ?Sized,
        P: AsRef<Path>,
    {
        let original = image.pixel_bytes().to_vec();
        BitCursor::new(image.pixel_bytes_mut()).write_payload(self.bytes())?;

        if let Err(error) = image.persist(output.as_ref()) {
            warn!("saving {} failed, restoring carrier", output.as_ref().display());
            image.pixel_bytes_mut().copy_from_slice(&original);
            return Err(error.into());
        }

        info!(
            "embedded {} byte object into {}",
            self.len(),
            output.as_ref().display()
        );
        Ok(())
    }

    /// Resolves a function symbol to its address in the loaded code.
    ///
    /// Returns `None` when no function has that exact name, or when the
    /// object has no code. When several functions share the name the first
    /// one in the symbol table is returned.
    pub fn lookup_function(&self, name: &str) -> Option<FunctionAddress<'_>> {
        let text = self.text.as_ref()?;
        let address = resolve::lookup_function(&self.elf, text, name);
        trace!("lookup {:?} -> {:?}", name, address);
        address
    }

    /// The raw object bytes.
    pub fn bytes(&self) -> &[u8] {
        self.elf.data()
    }

    pub fn len(&self) -> usize {
        self.elf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elf.is_empty()
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn elf(&self) -> &Elf<Blob> {
        &self.elf
    }

    pub fn code(&self) -> Option<&ExecutableRegion> {
        self.text.as_ref()
    }

    pub fn data(&self) -> Option<&DataRegion> {
        self.data.as_ref()
    }

    pub fn rodata(&self) -> Option<&DataRegion> {
        self.rodata.as_ref()
    }

    /// Function symbols and their names, in symbol table order.
    pub fn functions(&self) -> impl Iterator<Item = (&[u8], &Symbol)> + '_ {
        self.elf.functions()
    }
}

fn load_section<R>(
    elf: &Elf<Blob>,
    name: &str,
    load: impl FnOnce(&[u8]) -> loader::Result<R>,
) -> Result<Option<R>> {
    let Some(section) = elf.lookup_section(name) else {
        trace!("no {} section", name);
        return Ok(None);
    };

    let bytes = elf.section_data(section)?;
    if bytes.is_empty() {
        return Ok(None);
    }

    debug!("loading {} ({} bytes)", name, bytes.len());
    Ok(Some(load(bytes)?))
}
