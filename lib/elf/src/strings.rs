use core::ops::Range;

/// A pool of NUL-terminated names, addressed by byte offset.
#[derive(Debug, Clone, Default)]
pub(crate) struct StringTable {
    range: Range<usize>,
}

impl StringTable {
    pub(crate) fn new(range: Range<usize>) -> Self {
        StringTable { range }
    }

    /// Returns the name starting at `offset`, without its terminator.
    ///
    /// Offsets past the end of the pool, or names that run off the end
    /// without a NUL, are treated as absent.
    pub(crate) fn get<'a>(&self, data: &'a [u8], offset: u32) -> Option<&'a [u8]> {
        let pool = data.get(self.range.clone())?;
        let tail = pool.get(offset as usize..)?;
        let end = tail.iter().position(|&byte| byte == 0)?;
        Some(&tail[..end])
    }
}
