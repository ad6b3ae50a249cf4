//! Copies object sections into private page-aligned mappings.
//!
//! Code is copied while the mapping is writable and then switched to
//! read+execute for good. Data stays read+write. Every mapping is released
//! when its region is dropped.

#[cfg(not(unix))]
compile_error!("only unix platforms supported");

mod error;
mod page;
mod region;


pub use error::{LoaderError, Result};
pub use page::PageSize;
pub use region::{load, load_data, load_executable, DataRegion, ExecutableRegion, Region, RegionKind};
