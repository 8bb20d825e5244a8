//! Bit stuffing and padding of the raw stream into fixed-width codewords
//!
//! A codeword must never be all zeros or all ones. Whenever the first `w - 1`
//! bits of a word are equal, the complement is written as the last bit and
//! the source bit that would have gone there starts the next word instead.
//! The final word is padded with ones, and the same rule turns an all-ones
//! pad into `1..10`.

use super::bitbuffer::BitBuffer;

/// Repack `bits` into codewords of `width` bits. The result length is always
/// a non-zero multiple of `width`; an empty input yields one padded word.
pub fn stuff_and_pad(bits: &BitBuffer, width: usize) -> BitBuffer {
    debug_assert!(width >= 2);
    let n = bits.len();
    let mut out = BitBuffer::with_capacity((n / (width - 1) + 1) * width);
    let source = |i: usize| if i < n { bits.get(i) } else { true };

    let mut pos = 0;
    loop {
        let head = source(pos);
        let uniform = (1..width - 1).all(|j| source(pos + j) == head);
        for j in 0..width - 1 {
            out.push(source(pos + j));
        }
        if uniform {
            out.push(!head);
            pos += width - 1;
        } else {
            out.push(source(pos + width - 1));
            pos += width;
        }
        if pos >= n {
            break;
        }
    }
    debug_assert!(!has_degenerate_word(&out, width));
    out
}

/// Number of codewords `bits` would occupy after stuffing at `width`
pub fn stuffed_word_count(bits: &BitBuffer, width: usize) -> usize {
    stuff_and_pad(bits, width).len() / width
}

/// Whether any `width`-bit word of `bits` is all zeros or all ones
pub fn has_degenerate_word(bits: &BitBuffer, width: usize) -> bool {
    let all_ones = (1u32 << width) - 1;
    bits.to_words(width)
        .iter()
        .any(|&word| word == 0 || word as u32 == all_ones)
}
