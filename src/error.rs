//! Error types for Aztec encoding.

use crate::models::SymbolForm;
use thiserror::Error;

/// Error variants for Aztec encoding and rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// The mode-encoded payload does not fit even the largest full symbol.
    #[error("data too large for an Aztec symbol: {bits} bits after mode encoding")]
    CapacityExceeded {
        /// Length of the mode-encoded bit stream.
        bits: usize,
    },

    /// No Galois field is defined for this codeword width.
    #[error("unsupported codeword width: {0} bits")]
    UnsupportedWordWidth(usize),

    /// A form/layer combination outside the standard's range.
    #[error("invalid symbol: {form:?} with {layers} layers")]
    InvalidSymbol {
        /// Requested symbol form.
        form: SymbolForm,
        /// Requested layer count.
        layers: u8,
    },

    /// Malformed command-line input such as a bad hex string or colour.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested raster does not fit `u32` pixel dimensions.
    #[error("image too large: {modules} modules at {module_size} px per module")]
    ImageTooLarge {
        /// Side in modules, quiet zone included.
        modules: usize,
        /// Requested pixels per module.
        module_size: u32,
    },

    /// Raster encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// An I/O error occurred while reading input or writing output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Aztec operations.
pub type Result<T> = std::result::Result<T, Error>;
