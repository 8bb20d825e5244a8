use super::{BitMatrix, SymbolForm, SymbolSpec};

/// An encoded Aztec symbol
///
/// Instances are immutable once produced by the encoder. The module matrix is
/// the primary artifact; the codeword fields are kept so callers can inspect
/// or verify the error correction without re-running the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AztecCode {
    spec: SymbolSpec,
    modules: BitMatrix,
    codewords: Vec<u16>,
    data_codewords: usize,
}

impl AztecCode {
    pub(crate) fn new(
        spec: SymbolSpec,
        modules: BitMatrix,
        codewords: Vec<u16>,
        data_codewords: usize,
    ) -> Self {
        debug_assert_eq!(modules.width(), spec.size());
        debug_assert_eq!(codewords.len(), spec.total_codewords());
        Self {
            spec,
            modules,
            codewords,
            data_codewords,
        }
    }

    /// Symbol form and layer count
    pub fn spec(&self) -> SymbolSpec {
        self.spec
    }

    /// Compact or full
    pub fn form(&self) -> SymbolForm {
        self.spec.form()
    }

    /// Number of data layers
    pub fn layers(&self) -> u8 {
        self.spec.layers()
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Module matrix (true = dark)
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Whether the module at column `x`, row `y` is dark
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Data codewords followed by check codewords
    pub fn codewords(&self) -> &[u16] {
        &self.codewords
    }

    /// Count of data codewords (as written in the mode message)
    pub fn data_codewords(&self) -> usize {
        self.data_codewords
    }

    /// Count of Reed-Solomon check codewords
    pub fn parity_codewords(&self) -> usize {
        self.codewords.len() - self.data_codewords
    }

    /// Codeword width in bits
    pub fn codeword_width(&self) -> usize {
        self.spec.codeword_width()
    }
}
