//! Aztec encoding modules
//!
//! This module contains the whole path from bytes to a module matrix:
//! - High-level text compaction (mode tables, latch and shift decisions)
//! - Bit stuffing and Reed-Solomon check words
//! - Symbol size selection and the mode message
//! - Module placement (bull's eye, orientation, reference grid, data layers)

/// Main Aztec encoder that orchestrates the encoding pipeline
pub mod aztec_encoder;
/// Append-only bit sequence
pub mod bitbuffer;
/// Error correction policy with environment defaults
pub mod config;
/// Module role mask (finder/orientation/mode message/reference/data)
pub mod function_mask;
/// Module placement and the data position iterator
pub mod layout;
/// Layer count and data word count message
pub mod mode_message;
/// Text compaction into mode-tagged codes
pub mod modes;
/// Reed-Solomon check words over GF(2^w)
pub mod reed_solomon;
/// Smallest fitting symbol
pub mod size;
/// Bit stuffing and padding into codewords
pub mod stuffing;
/// Aztec tables (character sets, transitions, capacities, dimensions)
pub mod tables;

pub use aztec_encoder::AztecEncoder;
pub use bitbuffer::BitBuffer;
pub use config::EncoderConfig;
