//! Smallest symbol able to carry a mode-encoded bit stream

use super::bitbuffer::BitBuffer;
use super::config::EncoderConfig;
use super::stuffing::stuff_and_pad;
use crate::error::{Error, Result};
use crate::models::SymbolSpec;
use tracing::{debug, warn};

/// Outcome of symbol selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSelection {
    /// Chosen form and layer count
    pub spec: SymbolSpec,
    /// Data stream after stuffing at the chosen codeword width
    pub stuffed: BitBuffer,
    /// `stuffed` split into codewords
    pub data_words: Vec<u16>,
    /// Number of check words to append
    pub ecc_words: usize,
}

/// Whether `data_words` stuffed codewords plus their check words fit `spec`
pub fn fits(spec: SymbolSpec, data_words: usize, config: &EncoderConfig) -> bool {
    let total = spec.total_codewords();
    data_words >= 1
        && data_words <= spec.form().max_data_codewords()
        && data_words + config.ecc_codewords(total) <= total
}

/// Try compact layers 1..=4, then full layers 1..=32, and keep the first
/// symbol whose capacity covers the stuffed data and its check words
pub fn select_symbol(bits: &BitBuffer, config: &EncoderConfig) -> Result<SizeSelection> {
    // Stuffing depends only on the codeword width, so reuse it across layers
    let mut cached: Option<(usize, BitBuffer)> = None;

    for spec in SymbolSpec::all() {
        if spec.is_compact() && !config.allow_compact {
            continue;
        }
        if bits.len() > spec.capacity_bits() {
            continue;
        }
        let width = spec.codeword_width();
        let stuffed = match cached.take() {
            Some((w, stuffed)) if w == width => stuffed,
            _ => stuff_and_pad(bits, width),
        };
        let data_words = stuffed.len() / width;

        if fits(spec, data_words, config) {
            let ecc_words = spec.total_codewords() - data_words;
            debug!(
                form = ?spec.form(),
                layers = spec.layers(),
                bits = bits.len(),
                data_words,
                ecc_words,
                "symbol selected"
            );
            return Ok(SizeSelection {
                spec,
                data_words: stuffed.to_words(width),
                stuffed,
                ecc_words,
            });
        }
        cached = Some((width, stuffed));
    }

    warn!(bits = bits.len(), "data does not fit the largest symbol");
    Err(Error::CapacityExceeded { bits: bits.len() })
}
