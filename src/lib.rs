//! rust_aztec - Aztec barcode encoder (ISO/IEC 24778)
//!
//! Turns arbitrary bytes into a compact or full Aztec symbol: text compaction
//! across the five character tables with binary shift, bit stuffing,
//! Reed-Solomon check words and module placement around the bull's eye.
//! Encoding is pure and stateless, so independent inputs can be encoded in
//! parallel.
//!
//! ```no_run
//! let code = rust_aztec::encode_text("UNIT TEST").unwrap();
//! assert_eq!(code.size(), 15);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Aztec encoding modules (mode tables, stuffing, error correction, layout)
pub mod encoder;
/// Error and Result types
pub mod error;
/// Core data structures (AztecCode, BitMatrix, SymbolSpec)
pub mod models;
/// Helpers for the command-line tool (input loading, ASCII art, colours)
pub mod tools;
/// Rendering and sizing of encoded symbols
pub mod utils;

pub use encoder::{AztecEncoder, BitBuffer, EncoderConfig};
pub use error::{Error, Result};
pub use models::{AztecCode, BitMatrix, SymbolForm, SymbolSpec};

use rayon::prelude::*;

/// Encode raw bytes with the default configuration
///
/// # Returns
/// The smallest symbol that holds the data, or `Error::CapacityExceeded`
pub fn encode(data: &[u8]) -> Result<AztecCode> {
    AztecEncoder::new().encode(data)
}

/// Encode text with the default configuration
///
/// The text is trimmed and mapped to Latin-1; characters outside Latin-1
/// become `?`.
pub fn encode_text(text: &str) -> Result<AztecCode> {
    AztecEncoder::new().encode_text(text)
}

/// Encode independent payloads in parallel, preserving input order
pub fn encode_batch(inputs: &[&[u8]]) -> Vec<Result<AztecCode>> {
    let encoder = AztecEncoder::new();
    inputs.par_iter().map(|data| encoder.encode(data)).collect()
}
