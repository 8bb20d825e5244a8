//! Mode message: layer count and data codeword count around the bull's eye
//!
//! Compact: 2 bits (layers - 1) and 6 bits (data words - 1), then 5 check
//! words. Full: 5 bits and 11 bits, then 6 check words. All words are 4 bits
//! over GF(16) and the message is not stuffed.

use super::bitbuffer::BitBuffer;
use super::reed_solomon::ReedSolomonEncoder;
use crate::error::Result;
use crate::models::{SymbolForm, SymbolSpec};

const WORD_BITS: usize = 4;

/// Build the mode message bits for `spec` holding `data_words` codewords
pub fn mode_message(spec: SymbolSpec, data_words: usize) -> Result<BitBuffer> {
    debug_assert!(data_words >= 1 && data_words <= spec.form().max_data_codewords());
    let layers = spec.layers() as u32 - 1;
    let count = data_words as u32 - 1;

    let mut payload = BitBuffer::new();
    let check_words = match spec.form() {
        SymbolForm::Compact => {
            payload.append_msb(layers, 2);
            payload.append_msb(count, 6);
            5
        }
        SymbolForm::Full => {
            payload.append_msb(layers, 5);
            payload.append_msb(count, 11);
            6
        }
    };

    let rs = ReedSolomonEncoder::new(WORD_BITS)?;
    let words = rs.encode(&payload.to_words(WORD_BITS), check_words);

    let mut message = BitBuffer::with_capacity(spec.form().mode_message_bits());
    for word in words {
        message.append_msb(word as u32, WORD_BITS);
    }
    debug_assert_eq!(message.len(), spec.form().mode_message_bits());
    Ok(message)
}
