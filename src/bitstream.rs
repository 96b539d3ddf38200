//! Bit cursor over caller-owned buffers
//!
//! `BitWriter` packs MSB-first bit fields into a borrowed byte slice through
//! a 32-bit cache, flushing whole words big-endian. `BitReader` walks a
//! borrowed slice bit by bit. Neither ever reads or writes past its slice.

use crate::error::{BitstreamError, BitstreamResult};

/// MSB-first bit writer over a mutable byte slice
#[derive(Debug)]
pub struct BitWriter<'a> {
    /// Destination buffer
    data: &'a mut [u8],
    /// Bytes already committed to `data`
    data_position: usize,
    /// Pending bits, left-aligned
    cache: u32,
    /// Free bits in cache
    cache_bits: u32,
}

impl<'a> BitWriter<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Self {
            data,
            data_position: 0,
            cache: 0,
            cache_bits: 32,
        }
    }

    /// Write the low `n` bits of `val`, most significant first
    ///
    /// # Arguments
    /// * `val` - value to write; bits above `n` are ignored
    /// * `n` - number of bits of val, at most 32
    pub fn put_bits(&mut self, val: u32, n: u32) -> BitstreamResult<()> {
        if n > 32 {
            return Err(BitstreamError::InvalidBitCount(n));
        }
        if n == 0 {
            return Ok(());
        }
        let available = self.bits_left();
        if n as usize > available {
            return Err(BitstreamError::Overflow {
                requested: n as usize,
                available,
            });
        }

        let val = if n < 32 { val & ((1u32 << n) - 1) } else { val };

        if self.cache_bits > n {
            self.cache_bits -= n;
            self.cache |= val << self.cache_bits;
        } else {
            let remaining_n = n - self.cache_bits;
            self.cache |= val >> remaining_n;

            // the capacity check guarantees a whole word fits here
            self.data[self.data_position..self.data_position + 4]
                .copy_from_slice(&self.cache.to_be_bytes());
            self.data_position += 4;

            self.cache_bits = 32 - remaining_n;
            self.cache = if remaining_n != 0 {
                val << self.cache_bits
            } else {
                0
            };
        }

        Ok(())
    }

    /// Write a two's complement value in `n` bits
    pub fn put_sbits(&mut self, val: i32, n: u32) -> BitstreamResult<()> {
        self.put_bits(val as u32, n)
    }

    /// Total bits written so far, including cached bits
    pub fn bits_written(&self) -> usize {
        self.data_position * 8 + (32 - self.cache_bits) as usize
    }

    /// Bits that still fit in the destination buffer
    pub fn bits_left(&self) -> usize {
        self.data.len() * 8 - self.bits_written()
    }

    /// Commit cached bits, zero-padding to a byte boundary.
    /// Returns the number of bytes written to the buffer.
    pub fn flush(&mut self) -> usize {
        if self.cache_bits < 32 {
            let bits_in_cache = (32 - self.cache_bits) as usize;
            let bytes_to_write = (bits_in_cache + 7) / 8;
            let bytes = self.cache.to_be_bytes();
            self.data[self.data_position..self.data_position + bytes_to_write]
                .copy_from_slice(&bytes[..bytes_to_write]);
            self.data_position += bytes_to_write;
            self.cache = 0;
            self.cache_bits = 32;
        }
        self.data_position
    }
}

/// MSB-first bit reader over a byte slice
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Bit position of the next read
    position: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Read `n` bits without advancing
    pub fn peek_bits(&self, n: u32) -> BitstreamResult<u32> {
        if n > 32 {
            return Err(BitstreamError::InvalidBitCount(n));
        }
        let available = self.bits_left();
        if n as usize > available {
            return Err(BitstreamError::Exhausted {
                requested: n as usize,
                available,
            });
        }

        let mut value: u64 = 0;
        for i in 0..n as usize {
            let bit = self.position + i;
            let byte = self.data[bit >> 3];
            value = (value << 1) | ((byte >> (7 - (bit & 7))) & 1) as u64;
        }
        Ok(value as u32)
    }

    /// Read `n` bits and advance
    pub fn get_bits(&mut self, n: u32) -> BitstreamResult<u32> {
        let value = self.peek_bits(n)?;
        self.position += n as usize;
        Ok(value)
    }

    /// Read an `n`-bit two's complement value and advance
    pub fn get_sbits(&mut self, n: u32) -> BitstreamResult<i32> {
        let value = self.get_bits(n)?;
        if n == 0 || n == 32 {
            return Ok(value as i32);
        }
        let shift = 32 - n;
        Ok(((value << shift) as i32) >> shift)
    }

    pub fn bits_left(&self) -> usize {
        self.data.len() * 8 - self.position
    }

    /// Bit position of the next read
    pub fn position(&self) -> usize {
        self.position
    }
}
