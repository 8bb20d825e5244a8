//! Reed-Solomon check words for Aztec codewords
//! Aztec uses RS over GF(2^w), w in {4, 6, 8, 10, 12}, with generator roots a^1..a^r

use super::tables::field_polynomial;
use crate::error::{Error, Result};
use std::sync::OnceLock;

/// GF(2^w) arithmetic using log/exp tables
#[derive(Debug)]
pub struct GaloisField {
    width: usize,
    size: usize,
    exp: Vec<u16>,
    log: Vec<u16>,
}

static FIELDS: [OnceLock<GaloisField>; 5] = [const { OnceLock::new() }; 5];

impl GaloisField {
    /// Shared field for the given codeword width, built on first use
    pub fn for_width(width: usize) -> Result<&'static GaloisField> {
        let slot = match width {
            4 => 0,
            6 => 1,
            8 => 2,
            10 => 3,
            12 => 4,
            _ => return Err(Error::UnsupportedWordWidth(width)),
        };
        let poly = field_polynomial(width).ok_or(Error::UnsupportedWordWidth(width))?;
        Ok(FIELDS[slot].get_or_init(|| GaloisField::build(width, poly)))
    }

    fn build(width: usize, poly: u32) -> Self {
        let size = 1usize << width;
        let order = size - 1;
        // exp is doubled so mul can index log_a + log_b without a modulo
        let mut exp = vec![0u16; order * 2];
        let mut log = vec![0u16; size];
        let mut x = 1u32;
        for i in 0..order {
            exp[i] = x as u16;
            exp[i + order] = x as u16;
            log[x as usize] = i as u16;
            x <<= 1;
            if x as usize & size != 0 {
                x ^= poly;
            }
        }
        Self {
            width,
            size,
            exp,
            log,
        }
    }

    /// Bits per element
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.size
    }

    /// a^power for the primitive element a
    pub fn exp(&self, power: usize) -> u16 {
        self.exp[power % (self.size - 1)]
    }

    /// Field product
    pub fn mul(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    /// Field quotient; panics on division by zero
    pub fn div(&self, a: u16, b: u16) -> u16 {
        if b == 0 {
            panic!("Division by zero");
        }
        if a == 0 {
            return 0;
        }
        let order = self.size - 1;
        let diff = self.log[a as usize] as usize + order - self.log[b as usize] as usize;
        self.exp[diff]
    }

    /// Generator polynomial (x - a^1)...(x - a^r), highest degree first
    pub fn generator(&self, degree: usize) -> Vec<u16> {
        let mut g = Vec::with_capacity(degree + 1);
        g.push(1u16);
        for i in 1..=degree {
            let root = self.exp(i);
            g.push(0);
            for j in (1..g.len()).rev() {
                g[j] ^= self.mul(g[j - 1], root);
            }
        }
        g
    }
}

/// Systematic Reed-Solomon encoder for one codeword width
pub struct ReedSolomonEncoder {
    field: &'static GaloisField,
}

impl ReedSolomonEncoder {
    /// Encoder over GF(2^width)
    pub fn new(width: usize) -> Result<Self> {
        Ok(Self {
            field: GaloisField::for_width(width)?,
        })
    }

    /// Underlying field
    pub fn field(&self) -> &GaloisField {
        self.field
    }

    /// Check words for `data`: the remainder of data(x) * x^count divided by
    /// the generator, highest degree first
    pub fn parity(&self, data: &[u16], count: usize) -> Vec<u16> {
        if count == 0 {
            return Vec::new();
        }
        let g = self.field.generator(count);
        let mut remainder = vec![0u16; count];
        for &d in data {
            debug_assert!((d as usize) < self.field.size);
            let factor = d ^ remainder[0];
            remainder.rotate_left(1);
            remainder[count - 1] = 0;
            if factor != 0 {
                for (r, &coeff) in remainder.iter_mut().zip(&g[1..]) {
                    *r ^= self.field.mul(coeff, factor);
                }
            }
        }
        remainder
    }

    /// `data` followed by `count` check words
    pub fn encode(&self, data: &[u16], count: usize) -> Vec<u16> {
        let mut codeword = Vec::with_capacity(data.len() + count);
        codeword.extend_from_slice(data);
        codeword.extend(self.parity(data, count));
        codeword
    }

    /// Syndromes of `codeword` at a^1..a^count
    pub fn syndromes(&self, codeword: &[u16], count: usize) -> Vec<u16> {
        (1..=count)
            .map(|i| {
                let root = self.field.exp(i);
                codeword
                    .iter()
                    .fold(0u16, |acc, &c| self.field.mul(acc, root) ^ c)
            })
            .collect()
    }

    /// Whether `codeword` (data then `count` check words) has all-zero syndromes
    pub fn check(&self, codeword: &[u16], count: usize) -> bool {
        self.syndromes(codeword, count).iter().all(|&s| s == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_basic() {
        for width in [4, 6, 8, 10, 12] {
            let gf = GaloisField::for_width(width).unwrap();
            let order = gf.size() - 1;
            // a^order = 1 (order of the multiplicative group)
            assert_eq!(gf.exp(order), 1);
            assert_eq!(gf.exp(order + 1), 2);
            assert_eq!(gf.mul(0, 5), 0);
            assert_eq!(gf.div(0, 5), 0);
            assert_eq!(gf.div(7, 7), 1);
        }
    }

    #[test]
    fn test_field_is_primitive() {
        for width in [4, 6, 8, 10, 12] {
            let gf = GaloisField::for_width(width).unwrap();
            let mut seen = vec![false; gf.size()];
            for i in 0..gf.size() - 1 {
                let v = gf.exp(i) as usize;
                assert!(!seen[v], "w={} repeats at {}", width, i);
                seen[v] = true;
            }
            assert!(!seen[0]);
        }
    }

    #[test]
    fn test_mul_div_inverse() {
        let gf = GaloisField::for_width(10).unwrap();
        for a in [1u16, 3, 77, 500, 1023] {
            for b in [1u16, 2, 99, 1000] {
                assert_eq!(gf.div(gf.mul(a, b), b), a);
            }
        }
    }

    #[test]
    fn test_gf16_known_products() {
        // x^4 + x + 1: a^4 = a + 1
        let gf = GaloisField::for_width(4).unwrap();
        assert_eq!(gf.exp(4), 0b0011);
        assert_eq!(gf.mul(8, 2), 3);
    }

    #[test]
    fn test_unsupported_width() {
        assert!(GaloisField::for_width(7).is_err());
        assert!(ReedSolomonEncoder::new(16).is_err());
    }

    #[test]
    fn test_generator_roots() {
        let gf = GaloisField::for_width(6).unwrap();
        let g = gf.generator(5);
        assert_eq!(g.len(), 6);
        assert_eq!(g[0], 1);
        for i in 1..=5 {
            let root = gf.exp(i);
            let value = g.iter().fold(0u16, |acc, &c| gf.mul(acc, root) ^ c);
            assert_eq!(value, 0);
        }
    }

    #[test]
    fn test_encode_check() {
        for width in [4, 6, 8, 10, 12] {
            let rs = ReedSolomonEncoder::new(width).unwrap();
            let mask = (1u16 << width) - 1;
            let data: Vec<u16> = (1..=9u16).map(|i| (i * 37) & mask).collect();
            let codeword = rs.encode(&data, 7);
            assert_eq!(codeword.len(), 16);
            assert_eq!(&codeword[..9], &data[..]);
            assert!(rs.check(&codeword, 7));
        }
    }

    #[test]
    fn test_corruption_detected() {
        let rs = ReedSolomonEncoder::new(8).unwrap();
        let data = vec![0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
        let mut codeword = rs.encode(&data, 10);
        codeword[4] ^= 0x42;
        assert!(!rs.check(&codeword, 10));
    }

    #[test]
    fn test_zero_data_gives_zero_parity() {
        let rs = ReedSolomonEncoder::new(6).unwrap();
        assert_eq!(rs.parity(&[0, 0, 0], 4), vec![0, 0, 0, 0]);
        assert!(rs.parity(&[1, 2], 0).is_empty());
    }
}
