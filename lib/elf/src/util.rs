pub(crate) trait FromBytes<const N: usize> {
    fn from_be_bytes(buf: [u8; N]) -> Self;
    fn from_le_bytes(buf: [u8; N]) -> Self;
    fn from_ne_bytes(buf: [u8; N]) -> Self;
}

macro_rules! impl_from_bytes {
    ($($ty:ty => $n:literal),* $(,)?) => {
        $(
            impl FromBytes<$n> for $ty {
                fn from_be_bytes(buf: [u8; $n]) -> Self {
                    <$ty>::from_be_bytes(buf)
                }

                fn from_le_bytes(buf: [u8; $n]) -> Self {
                    <$ty>::from_le_bytes(buf)
                }

                fn from_ne_bytes(buf: [u8; $n]) -> Self {
                    <$ty>::from_ne_bytes(buf)
                }
            }
        )*
    };
}

impl_from_bytes!(u8 => 1, u16 => 2, u32 => 4, u64 => 8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitWidth {
    Bit64,
    Bit32,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
    Unknown,
}

impl Endianness {
    pub const fn host() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }
}
