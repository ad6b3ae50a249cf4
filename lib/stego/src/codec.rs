use log::trace;

use crate::error::{Result, StegoError};
use crate::value::LsbValue;

/// Width of the length header that precedes every embedded payload.
pub const LENGTH_PREFIX_BITS: usize = u32::BITS as usize;

/// Carrier bytes needed to hold a length-prefixed payload of `len` bytes.
pub fn capacity_bits(len: usize) -> Option<usize> {
    len.checked_mul(u8::BITS as usize)?
        .checked_add(LENGTH_PREFIX_BITS)
}

/// A forward-only cursor that stores one bit in the low bit of each byte of
/// a carrier buffer.
#[derive(Debug)]
pub struct BitCursor<B> {
    carrier: B,
    position: usize,
}

impl<B: AsRef<[u8]>> BitCursor<B> {
    pub fn new(carrier: B) -> Self {
        BitCursor {
            carrier,
            position: 0,
        }
    }

    /// Index of the next carrier byte to be consumed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Carrier bytes (and therefore bits) left.
    pub fn remaining(&self) -> usize {
        self.carrier.as_ref().len() - self.position
    }

    /// Fails unless at least `bits` carrier bytes remain.
    pub fn ensure_bits(&self, bits: usize) -> Result<()> {
        let available = self.remaining();
        if bits > available {
            return Err(StegoError::Capacity {
                needed: bits,
                available,
            });
        }
        Ok(())
    }

    /// Reads a `T` from the next `T::BITS` carrier bytes, least significant
    /// bit first. Nothing is consumed on failure.
    pub fn read<T: LsbValue>(&mut self) -> Result<T> {
        self.ensure_bits(T::BITS)?;

        let bytes = &self.carrier.as_ref()[self.position..self.position + T::BITS];
        let value = bytes
            .iter()
            .enumerate()
            .filter(|&(_, &byte)| byte & 1 == 1)
            .fold(T::zero(), |value, (index, _)| value.with_bit(index));

        self.position += T::BITS;
        Ok(value)
    }

    /// Reads a payload written by [`BitCursor::write_payload`]. The declared
    /// length is checked against the remaining carrier before any payload
    /// byte is read; on failure the cursor is left where it started.
    pub fn read_payload(&mut self) -> Result<Vec<u8>> {
        let start = self.position;
        let len = self.read::<u32>()? as usize;
        if let Err(error) = self.ensure_bits(len.saturating_mul(u8::BITS as usize)) {
            self.position = start;
            return Err(error);
        }

        trace!("extracting {} payload bytes from carrier offset {}", len, start);
        let mut payload = Vec::with_capacity(len);
        for _ in 0..len {
            payload.push(self.read::<u8>()?);
        }
        Ok(payload)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> BitCursor<B> {
    /// Writes `value` into the low bits of the next `T::BITS` carrier
    /// bytes, least significant bit first. The carrier is untouched on
    /// failure.
    pub fn write<T: LsbValue>(&mut self, value: T) -> Result<()> {
        self.ensure_bits(T::BITS)?;

        let bytes = &mut self.carrier.as_mut()[self.position..self.position + T::BITS];
        for (index, byte) in bytes.iter_mut().enumerate() {
            *byte = (*byte & !1) | value.bit(index);
        }

        self.position += T::BITS;
        Ok(())
    }

    /// Writes `payload` behind a 32-bit length header after checking that
    /// the whole thing fits.
    pub fn write_payload(&mut self, payload: &[u8]) -> Result<()> {
        let len = u32::try_from(payload.len())
            .map_err(|_| StegoError::PayloadTooLarge(payload.len()))?;
        let bits = capacity_bits(payload.len()).ok_or(StegoError::PayloadTooLarge(payload.len()))?;
        self.ensure_bits(bits)?;

        trace!("embedding {} payload bytes at carrier offset {}", len, self.position);
        self.write(len)?;
        for &byte in payload {
            self.write(byte)?;
        }
        Ok(())
    }
}
