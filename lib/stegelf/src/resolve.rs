use core::fmt;
use core::marker::PhantomData;
use core::mem;

use elf::{Elf, TEXT};
use loader::ExecutableRegion;

/// The address of a function inside a loaded code region.
///
/// The address borrows the object it came from, so it cannot outlive the
/// mapping that backs it.
#[derive(Clone, Copy)]
pub struct FunctionAddress<'a> {
    address: *const u8,
    offset: usize,
    region: PhantomData<&'a ExecutableRegion>,
}

impl FunctionAddress<'_> {
    pub fn as_ptr(self) -> *const u8 {
        self.address
    }

    /// Offset of the function from the start of the code region.
    pub fn offset(self) -> usize {
        self.offset
    }

    /// Reinterprets the address as a function pointer of type `F`, which is
    /// normally an `extern "C" fn(..) -> ..` type.
    ///
    /// # Safety
    ///
    /// `F` must be a function pointer type whose signature and calling
    /// convention match the code at this address. Nothing checks this; a
    /// mismatch is undefined behaviour. The returned pointer must not be
    /// called after the owning object is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `F` is not pointer sized.
    pub unsafe fn cast<F: Copy>(self) -> F {
        assert_eq!(
            mem::size_of::<F>(),
            mem::size_of::<*const u8>(),
            "function addresses can only be cast to pointer-sized types"
        );
        mem::transmute_copy(&self.address)
    }
}

impl fmt::Debug for FunctionAddress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FunctionAddress")
            .field("address", &self.address)
            .field("offset", &self.offset)
            .finish()
    }
}

impl PartialEq for FunctionAddress<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for FunctionAddress<'_> {}

/// Resolves `name` to an address in `text`.
///
/// The first function symbol with exactly that name wins. If that symbol
/// is owned by a section other than `.text`, or its value falls outside the
/// loaded code, it resolves to nothing.
pub(crate) fn lookup_function<'a, B: AsRef<[u8]>>(
    elf: &Elf<B>,
    text: &'a ExecutableRegion,
    name: &str,
) -> Option<FunctionAddress<'a>> {
    let text_index = elf.lookup_section_index(TEXT)?;
    let symbol = elf.find_function(name)?;
    if symbol.section_index() != text_index {
        return None;
    }
    let offset = usize::try_from(symbol.value())
        .ok()
        .filter(|&offset| offset < text.len())?;

    Some(FunctionAddress {
        address: text.as_ptr().wrapping_add(offset),
        offset,
        region: PhantomData,
    })
}
