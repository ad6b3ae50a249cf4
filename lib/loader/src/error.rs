use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("invalid page size {0}")]
    PageSize(i64),
    #[error("cannot load an empty section")]
    Empty,
    #[error("section of {0} bytes cannot be page aligned")]
    TooLarge(usize),
    #[error("failed to map {len} bytes")]
    Map {
        len: usize,
        #[source]
        source: io::Error,
    },
    #[error("failed to make {len} bytes executable")]
    Protect {
        len: usize,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = core::result::Result<T, LoaderError>;
