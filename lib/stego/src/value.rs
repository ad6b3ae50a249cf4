/// A fixed-width integer that can be spread over carrier bytes one bit at
/// a time.
pub trait LsbValue: Copy {
    const BITS: usize;

    fn zero() -> Self;

    /// Bit `index` of `self`, as `0` or `1`.
    fn bit(self, index: usize) -> u8;

    /// `self` with bit `index` set.
    fn with_bit(self, index: usize) -> Self;
}

macro_rules! impl_lsb_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LsbValue for $ty {
                const BITS: usize = <$ty>::BITS as usize;

                fn zero() -> Self {
                    0
                }

                fn bit(self, index: usize) -> u8 {
                    ((self >> index) & 1) as u8
                }

                fn with_bit(self, index: usize) -> Self {
                    self | (1 << index)
                }
            }
        )*
    };
}

impl_lsb_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64);
