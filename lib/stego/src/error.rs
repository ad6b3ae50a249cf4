use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StegoError {
    /// The carrier ran out of bytes.
    #[error("carrier too small: {needed} bytes needed, {available} available")]
    Capacity { needed: usize, available: usize },
    /// The payload length does not fit in the length prefix.
    #[error("payload of {0} bytes does not fit a 32-bit length prefix")]
    PayloadTooLarge(usize),
}

pub type Result<T> = core::result::Result<T, StegoError>;
