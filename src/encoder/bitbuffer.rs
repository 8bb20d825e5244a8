//! Append-only bit sequence used for encoded text, codewords and the final message

use std::fmt;

/// Ordered sequence of bits with exact (non byte-aligned) length
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty buffer with room for `capacity` bits
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Append the low `n_bits` of `value`, most significant bit first
    pub fn append_msb(&mut self, value: u32, n_bits: usize) {
        debug_assert!(n_bits <= 32);
        for i in (0..n_bits).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Append the low `n_bits` of `value`, least significant bit first
    pub fn append_lsb(&mut self, value: u32, n_bits: usize) {
        debug_assert!(n_bits <= 32);
        for i in 0..n_bits {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Append a single bit
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append every bit of `other`
    pub fn append(&mut self, other: &BitBuffer) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the buffer holds no bits
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `index`
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Remove all bits
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Iterate the bits in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Read `n_bits` starting at `start` as an MSB-first integer
    pub fn read_msb(&self, start: usize, n_bits: usize) -> u32 {
        self.bits[start..start + n_bits]
            .iter()
            .fold(0u32, |acc, &bit| (acc << 1) | bit as u32)
    }

    /// Split into MSB-first words of `width` bits. Trailing bits that do not
    /// fill a whole word are dropped.
    pub fn to_words(&self, width: usize) -> Vec<u16> {
        (0..self.bits.len() / width)
            .map(|i| self.read_msb(i * width, width) as u16)
            .collect()
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for BitBuffer {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bit) in self.bits.iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                f.write_str(" ")?;
            }
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
