//! Aztec encoder - wires the pipeline together

use super::bitbuffer::BitBuffer;
use super::config::EncoderConfig;
use super::layout::GridLayout;
use super::mode_message::mode_message;
use super::modes;
use super::reed_solomon::ReedSolomonEncoder;
use super::size::select_symbol;
use crate::error::Result;
use crate::models::AztecCode;
use tracing::debug;

/// Encodes byte payloads into Aztec symbols
#[derive(Debug, Clone, Default)]
pub struct AztecEncoder {
    config: EncoderConfig,
}

impl AztecEncoder {
    /// Encoder using the environment-derived default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder with an explicit configuration
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode raw bytes
    pub fn encode(&self, data: &[u8]) -> Result<AztecCode> {
        let bits = modes::encode(data);
        debug!(bytes = data.len(), bits = bits.len(), "mode encoded");
        self.encode_bits(&bits)
    }

    /// Encode text: trimmed, then mapped to Latin-1 (`?` for anything above U+00FF)
    pub fn encode_text(&self, text: &str) -> Result<AztecCode> {
        self.encode(&to_latin1(text.trim()))
    }

    /// Encode an already mode-encoded bit stream
    pub fn encode_bits(&self, bits: &BitBuffer) -> Result<AztecCode> {
        let selection = select_symbol(bits, &self.config)?;
        let spec = selection.spec;
        let width = spec.codeword_width();

        // Step 1: Reed-Solomon check words over GF(2^width)
        let rs = ReedSolomonEncoder::new(width)?;
        let codewords = rs.encode(&selection.data_words, selection.ecc_words);
        debug_assert_eq!(codewords.len(), spec.total_codewords());

        // Step 2: message stream, left-padded to fill the layers exactly
        let mut message = BitBuffer::with_capacity(spec.capacity_bits());
        message.append_msb(0, spec.start_padding_bits());
        for &word in &codewords {
            message.append_msb(word as u32, width);
        }

        // Step 3: mode message and module placement
        let data_words = selection.data_words.len();
        let mode = mode_message(spec, data_words)?;
        let modules = GridLayout::new(spec).render(&message, &mode);

        debug!(
            form = ?spec.form(),
            layers = spec.layers(),
            size = modules.width(),
            data_words,
            ecc_words = selection.ecc_words,
            "symbol encoded"
        );
        Ok(AztecCode::new(spec, modules, codewords, data_words))
    }
}

/// Map text to Latin-1 bytes, replacing characters outside it with `?`
pub fn to_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
