use std::fmt;

use memmap2::Mmap;

/// The bytes of an object file: mapped straight from storage, or owned
/// after being pulled out of an image.
pub enum Blob {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        match self {
            Blob::Mapped(map) => &map[..],
            Blob::Owned(bytes) => &bytes[..],
        }
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self {
            Blob::Mapped(_) => "Mapped",
            Blob::Owned(_) => "Owned",
        };
        f.debug_struct("Blob")
            .field("kind", &kind)
            .field("len", &self.as_ref().len())
            .finish()
    }
}
