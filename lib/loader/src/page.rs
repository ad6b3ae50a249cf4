use crate::error::{LoaderError, Result};

/// The granularity of memory protection on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Queries the host page size.
    pub fn host() -> Result<Self> {
        // SAFETY: sysconf has no memory-safety preconditions.
        let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if size <= 0 {
            return Err(LoaderError::PageSize(size as i64));
        }
        Self::new(size as usize)
    }

    /// `size` must be a power of two.
    pub fn new(size: usize) -> Result<Self> {
        if !size.is_power_of_two() {
            return Err(LoaderError::PageSize(size as i64));
        }
        Ok(PageSize(size))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Align `size` upwards to the nearest multiple of the page size.
    ///
    /// Returns `None` if aligning up overflows.
    pub fn align_up(self, size: usize) -> Option<usize> {
        Some(size.checked_add(self.0 - 1)? & !(self.0 - 1))
    }
}
